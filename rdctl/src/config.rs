//! Backend connection settings.
//!
//! Layers, lowest precedence first: struct defaults, the backend's connection
//! file, `RDCTL_*` environment variables, then `--host`/`--port`. The
//! connection file is JSON unless its extension is `.toml`; keys this tool
//! does not use (such as credentials) are ignored.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cli::ConnectionArgs;
use crate::error::{RdctlError, Result};

/// Environment prefix for connection overrides.
pub const ENV_PREFIX: &str = "RDCTL_";
/// Environment variable naming an explicit connection file.
pub const CONFIG_PATH_ENV: &str = "RDCTL_CONFIG_PATH";
/// Versioned path prefix of the backend API.
pub const API_VERSION: &str = "v0";

const APP_DIR: &str = "rancher-desktop";
const CONNECTION_FILE: &str = "rd-engine.json";

/// Where the backend is listening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Host name or address of the backend.
    pub host: String,
    /// TCP port of the backend API.
    pub port: u16,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 6107,
        }
    }
}

impl BackendConfig {
    /// Builds the URL of a versioned API command, e.g. `settings`.
    #[must_use]
    pub fn command_url(&self, command: &str) -> String {
        format!(
            "http://{}:{}/{API_VERSION}/{command}",
            self.host, self.port
        )
    }
}

#[derive(Serialize)]
struct CliOverrides<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
}

/// Resolves the backend connection settings from every layer.
///
/// # Errors
///
/// Returns [`RdctlError::ConfigFileMissing`] when an explicitly named
/// connection file does not exist, or [`RdctlError::Configuration`] when a
/// layer cannot be parsed.
pub fn load_backend_config(args: &ConnectionArgs) -> Result<BackendConfig> {
    let mut figment = Figment::from(Serialized::defaults(BackendConfig::default()));
    if let Some(path) = resolve_connection_file(args.config_path.as_deref())? {
        info!(path = %path.display(), "loading connection file");
        figment = merge_file(figment, &path);
    }
    let overrides = CliOverrides {
        host: args.host.as_deref(),
        port: args.port,
    };
    let config: BackendConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).only(&["host", "port"]))
        .merge(Serialized::defaults(overrides))
        .extract()?;
    debug!(host = %config.host, port = config.port, "resolved backend connection");
    Ok(config)
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    if path.extension().is_some_and(|ext| ext == "toml") {
        figment.merge(Toml::file(path))
    } else {
        figment.merge(Json::file(path))
    }
}

/// Picks the connection file: CLI path, then `RDCTL_CONFIG_PATH`, then the
/// platform data directory.
///
/// Explicit paths must exist; the platform default is skipped when absent.
fn resolve_connection_file(cli_path: Option<&Path>) -> Result<Option<PathBuf>> {
    let explicit = cli_path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));
    if let Some(path) = explicit {
        return if path.is_file() {
            Ok(Some(path))
        } else {
            Err(RdctlError::ConfigFileMissing(path))
        };
    }
    Ok(default_connection_file().filter(|path| path.is_file()))
}

/// Default location of the connection file written by the backend.
#[must_use]
pub fn default_connection_file() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(CONNECTION_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use rstest::rstest;

    fn args(host: Option<&str>, port: Option<u16>, config_path: Option<&str>) -> ConnectionArgs {
        ConnectionArgs {
            host: host.map(String::from),
            port,
            config_path: config_path.map(PathBuf::from),
        }
    }

    fn isolate_data_dir(jail: &mut Jail) {
        let home = jail.directory().to_path_buf();
        jail.set_env("HOME", home.display());
        jail.set_env("XDG_DATA_HOME", home.join("data").display());
    }

    fn load(args: &ConnectionArgs) -> figment::error::Result<BackendConfig> {
        load_backend_config(args).map_err(|err| figment::Error::from(err.to_string()))
    }

    #[rstest]
    fn command_url_includes_api_version() {
        let config = BackendConfig {
            host: String::from("localhost"),
            port: 1234,
        };
        assert_eq!(
            config.command_url("settings"),
            "http://localhost:1234/v0/settings"
        );
    }

    #[rstest]
    fn defaults_apply_without_other_layers() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            isolate_data_dir(jail);
            let config = load(&args(None, None, None))?;
            assert_eq!(config, BackendConfig::default());
            Ok(())
        });
    }

    #[rstest]
    fn connection_file_overrides_defaults_and_ignores_credentials() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "rd-engine.json",
                r#"{"user":"user","password":"secret","port":7000}"#,
            )?;
            let config = load(&args(None, None, Some("rd-engine.json")))?;
            assert_eq!(config.port, 7000);
            assert_eq!(config.host, "127.0.0.1");
            Ok(())
        });
    }

    #[rstest]
    fn toml_connection_file_is_supported() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("backend.toml", "host = \"10.0.0.5\"\nport = 7100\n")?;
            jail.set_env(CONFIG_PATH_ENV, "backend.toml");
            let config = load(&args(None, None, None))?;
            assert_eq!(config.host, "10.0.0.5");
            assert_eq!(config.port, 7100);
            Ok(())
        });
    }

    #[rstest]
    fn environment_overrides_file_and_cli_overrides_environment() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("rd-engine.json", r#"{"port":7000}"#)?;
            jail.set_env("RDCTL_PORT", "7001");
            jail.set_env("RDCTL_HOST", "backend.local");

            let from_env = load(&args(None, None, Some("rd-engine.json")))?;
            assert_eq!(from_env.port, 7001);
            assert_eq!(from_env.host, "backend.local");

            let from_cli = load(&args(Some("cli.local"), Some(7002), Some("rd-engine.json")))?;
            assert_eq!(from_cli.port, 7002);
            assert_eq!(from_cli.host, "cli.local");
            Ok(())
        });
    }

    #[rstest]
    fn missing_explicit_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let err = load_backend_config(&args(None, None, Some("absent.json")))
                .err()
                .ok_or_else(|| figment::Error::from(String::from("expected an error")))?;
            assert!(matches!(err, RdctlError::ConfigFileMissing(_)));
            Ok(())
        });
    }

    #[rstest]
    fn malformed_port_is_a_configuration_error() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("RDCTL_PORT", "not-a-port");
            isolate_data_dir(jail);
            let err = load_backend_config(&args(None, None, None))
                .err()
                .ok_or_else(|| figment::Error::from(String::from("expected an error")))?;
            assert!(matches!(err, RdctlError::Configuration(_)));
            Ok(())
        });
    }
}
