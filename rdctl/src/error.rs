//! Error types for `rdctl`.
//!
//! Every failure propagates to `main` unchanged. The only check performed
//! locally is the empty-update guard; transport and server failures surface
//! verbatim with no retry.
use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for fallible `rdctl` operations.
pub type Result<T, E = RdctlError> = std::result::Result<T, E>;

/// Errors raised while resolving configuration or submitting settings.
#[derive(Debug, Error)]
pub enum RdctlError {
    /// The caller supplied no settings flags at all.
    #[error("{command} command: no settings to change were given")]
    NoChangesSpecified {
        /// Name of the subcommand that was invoked.
        command: String,
    },
    /// The wire record could not be encoded as JSON.
    #[error("failed to encode settings payload: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The request failed in transit or the backend rejected it.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Connection settings could not be merged from their layers.
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Box<figment::Error>),
    /// An explicitly named connection file does not exist.
    #[error("connection file {} does not exist", .0.display())]
    ConfigFileMissing(PathBuf),
    /// Parsed arguments lacked the matches of the selected subcommand.
    #[error("missing argument matches for the {0} subcommand")]
    MissingSubcommandMatches(&'static str),
    /// Writing the command report failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RdctlError {
    /// Builds the empty-update error for the named command.
    #[must_use]
    pub fn no_changes(command: impl Into<String>) -> Self {
        Self::NoChangesSpecified {
            command: command.into(),
        }
    }
}

impl From<figment::Error> for RdctlError {
    fn from(err: figment::Error) -> Self {
        Self::Configuration(Box::new(err))
    }
}

/// Failures talking to the backend.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not complete the exchange.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("{status}: {body}")]
    Status {
        /// Status line returned by the backend.
        status: reqwest::StatusCode,
        /// Response body, reported as text.
        body: String,
    },
}
