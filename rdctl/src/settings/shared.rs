//! Declarative table for the generic preference flags.
//!
//! Flag names are the dotted preference paths in kebab case; the wire slot is
//! the same path in camel case. Adding a preference means adding a field to
//! both records and one entry here.
//!
//! An alternative spelling of a preference flag is declared as a clap `alias`
//! on the same argument. clap records it under the canonical id, so it shares
//! that flag's single entry below and never needs its own.

use super::{ExplicitFlags, FieldProjection, RequestedSettings, WireSettings, flag, project_fields};

/// Shared preference flags and the wire slots they fill.
pub const SHARED_OPTIONS: &[FieldProjection] = &[
    FieldProjection {
        flag: flag::ADMIN_ACCESS,
        project: |requested, wire| {
            wire.application.admin_access = Some(requested.application.admin_access);
        },
    },
    FieldProjection {
        flag: flag::PATH_MANAGEMENT_STRATEGY,
        project: |requested, wire| {
            wire.application.path_management_strategy =
                Some(requested.application.path_management_strategy);
        },
    },
    FieldProjection {
        flag: flag::TELEMETRY_ENABLED,
        project: |requested, wire| {
            wire.application.telemetry.enabled = Some(requested.application.telemetry.enabled);
        },
    },
    FieldProjection {
        flag: flag::UPDATER_ENABLED,
        project: |requested, wire| {
            wire.application.updater.enabled = Some(requested.application.updater.enabled);
        },
    },
    FieldProjection {
        flag: flag::ALLOWED_IMAGES_ENABLED,
        project: |requested, wire| {
            wire.container_engine.allowed_images.enabled =
                Some(requested.container_engine.allowed_images.enabled);
        },
    },
    FieldProjection {
        flag: flag::KUBERNETES_PORT,
        project: |requested, wire| {
            wire.kubernetes.port = Some(requested.kubernetes.port);
        },
    },
    FieldProjection {
        flag: flag::TRAEFIK,
        project: |requested, wire| {
            wire.kubernetes.options.traefik = Some(requested.kubernetes.options.traefik);
        },
    },
    FieldProjection {
        flag: flag::MEMORY_IN_GB,
        project: |requested, wire| {
            wire.virtual_machine.memory_in_gb = Some(requested.virtual_machine.memory_in_gb);
        },
    },
    FieldProjection {
        flag: flag::NUMBER_CPUS,
        project: |requested, wire| {
            wire.virtual_machine.number_cpus = Some(requested.virtual_machine.number_cpus);
        },
    },
];

/// Copies explicitly supplied shared preferences into `wire`.
///
/// Returns `true` when any shared flag was given.
pub fn apply_shared_fields(
    flags: &ExplicitFlags,
    requested: &RequestedSettings,
    wire: &mut WireSettings,
) -> bool {
    project_fields(SHARED_OPTIONS, flags, requested, wire)
}
