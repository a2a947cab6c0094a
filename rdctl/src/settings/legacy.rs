//! Projection for the four legacy fields handled by `set` itself.

use super::{ExplicitFlags, FieldProjection, RequestedSettings, WireSettings, flag, project_fields};

/// Legacy flags and the wire slots they fill.
pub const LEGACY_FIELDS: &[FieldProjection] = &[
    FieldProjection {
        flag: flag::CONTAINER_ENGINE,
        project: |requested, wire| {
            wire.kubernetes.container_engine = Some(requested.kubernetes.container_engine.clone());
        },
    },
    FieldProjection {
        flag: flag::KUBERNETES_ENABLED,
        project: |requested, wire| {
            wire.kubernetes.enabled = Some(requested.kubernetes.enabled);
        },
    },
    FieldProjection {
        flag: flag::KUBERNETES_VERSION,
        project: |requested, wire| {
            wire.kubernetes.version = Some(requested.kubernetes.version.clone());
        },
    },
    FieldProjection {
        flag: flag::FLANNEL_ENABLED,
        project: |requested, wire| {
            wire.kubernetes.options.flannel = Some(requested.kubernetes.options.flannel);
        },
    },
];

/// Copies explicitly supplied legacy fields into `wire`.
///
/// Returns `true` when any legacy flag was given.
pub fn project_legacy_fields(
    flags: &ExplicitFlags,
    requested: &RequestedSettings,
    wire: &mut WireSettings,
) -> bool {
    project_fields(LEGACY_FIELDS, flags, requested, wire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn requested() -> RequestedSettings {
        let mut requested = RequestedSettings::default();
        requested.kubernetes.container_engine = String::from("containerd");
        requested.kubernetes.enabled = true;
        requested.kubernetes.version = String::from("1.25.4");
        requested
    }

    #[rstest]
    fn nothing_explicit_changes_nothing(requested: RequestedSettings) {
        let mut wire = WireSettings::default();
        let changed = project_legacy_fields(&ExplicitFlags::default(), &requested, &mut wire);
        assert!(!changed);
        assert!(wire.is_empty());
    }

    #[rstest]
    fn only_explicit_fields_are_copied(requested: RequestedSettings) {
        let flags: ExplicitFlags = [flag::KUBERNETES_VERSION].into_iter().collect();
        let mut wire = WireSettings::default();
        assert!(project_legacy_fields(&flags, &requested, &mut wire));
        assert_eq!(wire.kubernetes.version.as_deref(), Some("1.25.4"));
        assert_eq!(wire.kubernetes.enabled, None);
        assert_eq!(wire.kubernetes.container_engine, None);
        assert_eq!(wire.kubernetes.options.flannel, None);
    }

    #[rstest]
    fn explicit_default_value_still_counts(requested: RequestedSettings) {
        let flags: ExplicitFlags = [flag::FLANNEL_ENABLED].into_iter().collect();
        let mut wire = WireSettings::default();
        assert!(project_legacy_fields(&flags, &requested, &mut wire));
        assert_eq!(wire.kubernetes.options.flannel, Some(true));
    }

    #[rstest]
    fn shared_flags_are_ignored(requested: RequestedSettings) {
        let flags: ExplicitFlags = [flag::KUBERNETES_PORT].into_iter().collect();
        let mut wire = WireSettings::default();
        assert!(!project_legacy_fields(&flags, &requested, &mut wire));
        assert!(wire.is_empty());
    }
}
