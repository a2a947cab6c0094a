//! Concrete settings record bound to the `set` flags.
//!
//! Every field carries the value clap resolved for it, either from the command
//! line or from the flag default. Whether a value was supplied explicitly is
//! tracked separately in [`ExplicitFlags`](super::ExplicitFlags).

use clap::{ArgAction, Args, ValueEnum};
use serde::Serialize;

use super::flag;

/// Full set of settings the `set` subcommand understands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Args)]
pub struct RequestedSettings {
    /// Application behaviour preferences.
    #[command(flatten)]
    pub application: Application,
    /// Container engine preferences.
    #[command(flatten)]
    pub container_engine: ContainerEngine,
    /// Kubernetes preferences, including the legacy fields.
    #[command(flatten)]
    pub kubernetes: Kubernetes,
    /// Virtual machine sizing.
    #[command(flatten)]
    pub virtual_machine: VirtualMachine,
}

/// `application.*` preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Args)]
pub struct Application {
    /// Grant the backend administrative access on the host.
    #[arg(
        long = flag::ADMIN_ACCESS,
        id = flag::ADMIN_ACCESS,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub admin_access: bool,
    /// How the backend manages PATH entries for its bundled tools.
    #[arg(
        long = flag::PATH_MANAGEMENT_STRATEGY,
        id = flag::PATH_MANAGEMENT_STRATEGY,
        value_name = "STRATEGY",
        value_enum,
        default_value_t = PathManagementStrategy::Manual
    )]
    pub path_management_strategy: PathManagementStrategy,
    /// Telemetry switches.
    #[command(flatten)]
    pub telemetry: Telemetry,
    /// Automatic update switches.
    #[command(flatten)]
    pub updater: Updater,
}

/// Values accepted by `--application.path-management-strategy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PathManagementStrategy {
    /// Leave shell configuration alone.
    #[default]
    Manual,
    /// Edit shell rc files to add the tools directory.
    Rcfiles,
}

/// `application.telemetry.*` preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Args)]
pub struct Telemetry {
    /// Allow collection of anonymous usage statistics.
    #[arg(
        long = flag::TELEMETRY_ENABLED,
        id = flag::TELEMETRY_ENABLED,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub enabled: bool,
}

/// `application.updater.*` preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Args)]
pub struct Updater {
    /// Check for and install application updates automatically.
    #[arg(
        long = flag::UPDATER_ENABLED,
        id = flag::UPDATER_ENABLED,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub enabled: bool,
}

/// `container-engine.*` preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Args)]
pub struct ContainerEngine {
    /// Image allow-list switches.
    #[command(flatten)]
    pub allowed_images: AllowedImages,
}

/// `container-engine.allowed-images.*` preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Args)]
pub struct AllowedImages {
    /// Restrict pulls to the configured image patterns.
    #[arg(
        long = flag::ALLOWED_IMAGES_ENABLED,
        id = flag::ALLOWED_IMAGES_ENABLED,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub enabled: bool,
}

/// `kubernetes.*` preferences.
///
/// The first three fields are legacy settings with their historical flag
/// names; `port` belongs to the shared option table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Args)]
pub struct Kubernetes {
    /// Set engine to containerd or moby (aka docker).
    #[arg(
        long = flag::CONTAINER_ENGINE,
        id = flag::CONTAINER_ENGINE,
        value_name = "ENGINE",
        default_value = ""
    )]
    pub container_engine: String,
    /// Control whether kubernetes runs in the backend.
    #[arg(
        long = flag::KUBERNETES_ENABLED,
        id = flag::KUBERNETES_ENABLED,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub enabled: bool,
    /// Choose which version of kubernetes to run.
    #[arg(
        long = flag::KUBERNETES_VERSION,
        id = flag::KUBERNETES_VERSION,
        value_name = "VERSION",
        default_value = ""
    )]
    pub version: String,
    /// Port the Kubernetes API server listens on.
    #[arg(
        long = flag::KUBERNETES_PORT,
        id = flag::KUBERNETES_PORT,
        value_name = "PORT",
        default_value_t = 0
    )]
    pub port: u16,
    /// Optional Kubernetes components.
    #[command(flatten)]
    pub options: KubernetesOptions,
}

/// `kubernetes.options.*` preferences.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct KubernetesOptions {
    /// Control whether flannel is enabled. Use to disable flannel so you can
    /// install your own CNI.
    #[arg(
        long = flag::FLANNEL_ENABLED,
        id = flag::FLANNEL_ENABLED,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub flannel: bool,
    /// Control whether the bundled traefik ingress is deployed.
    #[arg(
        long = flag::TRAEFIK,
        id = flag::TRAEFIK,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub traefik: bool,
}

impl Default for KubernetesOptions {
    fn default() -> Self {
        Self {
            flannel: true,
            traefik: false,
        }
    }
}

/// `virtual-machine.*` preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Args)]
pub struct VirtualMachine {
    /// Memory assigned to the virtual machine, in GiB.
    #[arg(
        long = flag::MEMORY_IN_GB,
        id = flag::MEMORY_IN_GB,
        value_name = "GB",
        default_value_t = 0
    )]
    pub memory_in_gb: u32,
    /// Number of CPUs assigned to the virtual machine.
    #[arg(
        long = flag::NUMBER_CPUS,
        id = flag::NUMBER_CPUS,
        value_name = "COUNT",
        default_value_t = 0
    )]
    pub number_cpus: u32,
}
