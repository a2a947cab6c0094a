//! Gate, encode, transmit and report a settings update.
//!
//! [`SettingsUpdate::prepare`] is the validating phase: it projects the
//! explicit flags and refuses an empty update. The returned value can only be
//! consumed by [`SettingsUpdate::submit`], which is the submitted phase. Any
//! error raised after that point belongs to a real attempt rather than to a
//! malformed invocation.

use std::io::{self, Write};

use tracing::debug;

use crate::client::SettingsTransport;
use crate::error::{RdctlError, Result};
use crate::settings::{
    ExplicitFlags, RequestedSettings, WireSettings, apply_shared_fields, project_legacy_fields,
};

/// Printed when the backend accepts the update without a response body.
pub const NO_OUTPUT_MESSAGE: &str = "Operation successfully returned with no output.";

/// A validated, non-empty settings update.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a prepared update does nothing until it is submitted"]
pub struct SettingsUpdate {
    payload: WireSettings,
}

impl SettingsUpdate {
    /// Projects the explicit flags of `command` into a wire record.
    ///
    /// Shared options are applied first, then the legacy fields.
    ///
    /// # Errors
    ///
    /// Returns [`RdctlError::NoChangesSpecified`] when neither projection
    /// copied a field.
    pub fn prepare(
        command: &str,
        requested: &RequestedSettings,
        flags: &ExplicitFlags,
    ) -> Result<Self> {
        let mut payload = WireSettings::default();
        let changed_shared = apply_shared_fields(flags, requested, &mut payload);
        let changed_legacy = project_legacy_fields(flags, requested, &mut payload);
        if !changed_shared && !changed_legacy {
            return Err(RdctlError::no_changes(command));
        }
        debug!(
            flags = ?flags.iter().collect::<Vec<_>>(),
            "prepared settings update"
        );
        Ok(Self { payload })
    }

    /// Fields that will be sent.
    #[must_use]
    pub const fn payload(&self) -> &WireSettings {
        &self.payload
    }

    /// Encodes the payload, sends it once and reports the outcome to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`RdctlError::Serialization`] if encoding fails,
    /// [`RdctlError::Transport`] if the request fails, and
    /// [`RdctlError::Output`] if the report cannot be written.
    pub fn submit<T, W>(self, transport: &T, out: &mut W) -> Result<()>
    where
        T: SettingsTransport + ?Sized,
        W: Write,
    {
        let body = serde_json::to_vec(&self.payload)?;
        debug!(payload = %String::from_utf8_lossy(&body), "submitting settings");
        let response = transport.put_settings(body)?;
        write_report(out, &response)?;
        Ok(())
    }
}

/// Writes the user-facing outcome of a successful update.
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn write_report<W: Write>(out: &mut W, response: &str) -> io::Result<()> {
    if response.is_empty() {
        writeln!(out, "{NO_OUTPUT_MESSAGE}")
    } else {
        writeln!(out, "Status: {response}.")
    }
}
