//! Optional-field mirror of [`RequestedSettings`](super::RequestedSettings).
//!
//! Absent leaves are skipped during serialization, and so are nested objects
//! whose leaves are all absent, so the payload only names what the caller
//! asked to change.

use serde::Serialize;

use super::PathManagementStrategy;

/// Partial settings document sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSettings {
    /// `application` subtree.
    #[serde(skip_serializing_if = "Application::is_empty")]
    pub application: Application,
    /// `containerEngine` subtree.
    #[serde(skip_serializing_if = "ContainerEngine::is_empty")]
    pub container_engine: ContainerEngine,
    /// `kubernetes` subtree.
    #[serde(skip_serializing_if = "Kubernetes::is_empty")]
    pub kubernetes: Kubernetes,
    /// `virtualMachine` subtree.
    #[serde(skip_serializing_if = "VirtualMachine::is_empty")]
    pub virtual_machine: VirtualMachine,
}

/// Implements `is_empty` as "equal to the all-absent default".
macro_rules! empty_when_default {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Returns `true` when no leaf below this node is present.
                #[must_use]
                pub fn is_empty(&self) -> bool {
                    *self == Self::default()
                }
            }
        )+
    };
}

empty_when_default!(
    WireSettings,
    Application,
    Telemetry,
    Updater,
    ContainerEngine,
    AllowedImages,
    Kubernetes,
    KubernetesOptions,
    VirtualMachine,
);

/// `application` subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// `application.adminAccess`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_access: Option<bool>,
    /// `application.pathManagementStrategy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_management_strategy: Option<PathManagementStrategy>,
    /// `application.telemetry`.
    #[serde(skip_serializing_if = "Telemetry::is_empty")]
    pub telemetry: Telemetry,
    /// `application.updater`.
    #[serde(skip_serializing_if = "Updater::is_empty")]
    pub updater: Updater,
}

/// `application.telemetry` subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Telemetry {
    /// `application.telemetry.enabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// `application.updater` subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Updater {
    /// `application.updater.enabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// `containerEngine` subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerEngine {
    /// `containerEngine.allowedImages`.
    #[serde(skip_serializing_if = "AllowedImages::is_empty")]
    pub allowed_images: AllowedImages,
}

/// `containerEngine.allowedImages` subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllowedImages {
    /// `containerEngine.allowedImages.enabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// `kubernetes` subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kubernetes {
    /// `kubernetes.containerEngine`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_engine: Option<String>,
    /// `kubernetes.enabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// `kubernetes.version`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// `kubernetes.port`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// `kubernetes.options`.
    #[serde(skip_serializing_if = "KubernetesOptions::is_empty")]
    pub options: KubernetesOptions,
}

/// `kubernetes.options` subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KubernetesOptions {
    /// `kubernetes.options.flannel`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flannel: Option<bool>,
    /// `kubernetes.options.traefik`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traefik: Option<bool>,
}

/// `virtualMachine` subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VirtualMachine {
    /// `virtualMachine.memoryInGB`.
    #[serde(rename = "memoryInGB", skip_serializing_if = "Option::is_none")]
    pub memory_in_gb: Option<u32>,
    /// `virtualMachine.numberCPUs`.
    #[serde(rename = "numberCPUs", skip_serializing_if = "Option::is_none")]
    pub number_cpus: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn empty_record_serializes_to_empty_object() -> Result<()> {
        let value = serde_json::to_value(WireSettings::default())?;
        assert_eq!(value, json!({}));
        Ok(())
    }

    #[rstest]
    fn only_present_leaves_are_emitted() -> Result<()> {
        let mut wire = WireSettings::default();
        wire.kubernetes.options.flannel = Some(false);
        wire.virtual_machine.memory_in_gb = Some(8);
        let value = serde_json::to_value(&wire)?;
        assert_eq!(
            value,
            json!({
                "kubernetes": { "options": { "flannel": false } },
                "virtualMachine": { "memoryInGB": 8 }
            })
        );
        Ok(())
    }

    #[rstest]
    fn empty_strings_are_still_present_values() -> Result<()> {
        let mut wire = WireSettings::default();
        wire.kubernetes.version = Some(String::new());
        let value = serde_json::to_value(&wire)?;
        assert_eq!(value, json!({ "kubernetes": { "version": "" } }));
        Ok(())
    }

    #[rstest]
    fn camel_case_keys_match_the_backend_schema() -> Result<()> {
        let mut wire = WireSettings::default();
        wire.application.admin_access = Some(true);
        wire.application.path_management_strategy = Some(PathManagementStrategy::Rcfiles);
        wire.container_engine.allowed_images.enabled = Some(true);
        wire.kubernetes.container_engine = Some(String::from("moby"));
        wire.virtual_machine.number_cpus = Some(4);
        let value = serde_json::to_value(&wire)?;
        assert_eq!(
            value,
            json!({
                "application": {
                    "adminAccess": true,
                    "pathManagementStrategy": "rcfiles"
                },
                "containerEngine": { "allowedImages": { "enabled": true } },
                "kubernetes": { "containerEngine": "moby" },
                "virtualMachine": { "numberCPUs": 4 }
            })
        );
        Ok(())
    }
}
