//! Settings records and the projection from explicit flags to the wire payload.
//!
//! [`RequestedSettings`] holds a concrete value for every flag, while
//! [`WireSettings`] only carries the values the caller asked to change. The two
//! projections, [`apply_shared_fields`] and [`project_legacy_fields`], bridge
//! them using the provenance captured in [`ExplicitFlags`].

mod legacy;
mod provenance;
mod requested;
mod shared;
mod wire;

pub use legacy::{LEGACY_FIELDS, project_legacy_fields};
pub use provenance::{ExplicitFlags, FieldProjection, project_fields};
pub use requested::{
    AllowedImages, Application, ContainerEngine, Kubernetes, KubernetesOptions,
    PathManagementStrategy, RequestedSettings, Telemetry, Updater, VirtualMachine,
};
pub use shared::{SHARED_OPTIONS, apply_shared_fields};
pub use wire::WireSettings;

/// Long names (and clap ids) of every settings flag.
pub mod flag {
    /// `kubernetes.containerEngine` (legacy).
    pub const CONTAINER_ENGINE: &str = "container-engine";
    /// `kubernetes.enabled` (legacy).
    pub const KUBERNETES_ENABLED: &str = "kubernetes-enabled";
    /// `kubernetes.version` (legacy).
    pub const KUBERNETES_VERSION: &str = "kubernetes-version";
    /// `kubernetes.options.flannel` (legacy).
    pub const FLANNEL_ENABLED: &str = "flannel-enabled";

    /// `application.adminAccess`.
    pub const ADMIN_ACCESS: &str = "application.admin-access";
    /// `application.pathManagementStrategy`.
    pub const PATH_MANAGEMENT_STRATEGY: &str = "application.path-management-strategy";
    /// `application.telemetry.enabled`.
    pub const TELEMETRY_ENABLED: &str = "application.telemetry.enabled";
    /// `application.updater.enabled`.
    pub const UPDATER_ENABLED: &str = "application.updater.enabled";
    /// `containerEngine.allowedImages.enabled`.
    pub const ALLOWED_IMAGES_ENABLED: &str = "container-engine.allowed-images.enabled";
    /// `kubernetes.port`.
    pub const KUBERNETES_PORT: &str = "kubernetes.port";
    /// `kubernetes.options.traefik`.
    pub const TRAEFIK: &str = "kubernetes.options.traefik";
    /// `virtualMachine.memoryInGB`.
    pub const MEMORY_IN_GB: &str = "virtual-machine.memory-in-gb";
    /// `virtualMachine.numberCPUs`.
    pub const NUMBER_CPUS: &str = "virtual-machine.number-cpus";
}
