//! HTTP transport to the backend settings endpoint.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use crate::config::BackendConfig;
use crate::error::TransportError;

/// Something that can deliver an encoded settings document.
pub trait SettingsTransport {
    /// Sends `body` as a single `PUT` and returns the response text.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the request cannot be completed or
    /// the backend answers with a non-success status.
    fn put_settings(&self, body: Vec<u8>) -> Result<String, TransportError>;
}

/// Blocking client bound to one backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    settings_url: String,
}

impl BackendClient {
    /// Builds a client for the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] when the HTTP client cannot be
    /// initialised.
    pub fn new(config: &BackendConfig) -> Result<Self, TransportError> {
        // The backend is always local; proxy settings from the environment
        // must not reroute it.
        let http = Client::builder().no_proxy().build()?;
        Ok(Self {
            http,
            settings_url: config.command_url("settings"),
        })
    }

    /// URL the settings document is sent to.
    #[must_use]
    pub fn settings_url(&self) -> &str {
        &self.settings_url
    }
}

impl SettingsTransport for BackendClient {
    fn put_settings(&self, body: Vec<u8>) -> Result<String, TransportError> {
        info!(url = %self.settings_url, "PUT settings");
        let response = self
            .http
            .put(&self.settings_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;
        let status = response.status();
        let text = response.text()?;
        debug!(%status, bytes = text.len(), "backend responded");
        if status.is_success() {
            Ok(text)
        } else {
            Err(TransportError::Status { status, body: text })
        }
    }
}
