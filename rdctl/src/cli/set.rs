//! The `set` subcommand.

use clap::{ArgMatches, Args};

use crate::error::Result;
use crate::settings::{ExplicitFlags, RequestedSettings};
use crate::update::SettingsUpdate;

/// Name under which the subcommand is registered.
pub const SET_COMMAND: &str = "set";

/// Flags accepted by `set`. Positional arguments are rejected by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct SetCommand {
    /// Requested values, one per settings flag.
    #[command(flatten)]
    pub settings: RequestedSettings,
}

impl SetCommand {
    /// Validates the invocation and builds the update to submit.
    ///
    /// `matches` must be the subcommand's own matches; they supply the
    /// provenance of every flag.
    ///
    /// # Errors
    ///
    /// Returns [`RdctlError::NoChangesSpecified`](crate::error::RdctlError::NoChangesSpecified)
    /// when no settings flag was given.
    pub fn prepare(&self, matches: &ArgMatches) -> Result<SettingsUpdate> {
        let flags = ExplicitFlags::from_matches(matches);
        SettingsUpdate::prepare(SET_COMMAND, &self.settings, &flags)
    }
}
