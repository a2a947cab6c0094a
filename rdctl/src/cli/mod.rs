//! Command-line surface of `rdctl`.
//!
//! The parser keeps the raw [`ArgMatches`] next to the typed structure because
//! the `set` projection needs to know which flags were typed by the caller,
//! which the typed values alone cannot tell.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::StyledStr;
use clap::{ArgAction, ArgMatches, Args, CommandFactory, FromArgMatches, Parser, Subcommand};

mod set;

pub use set::{SET_COMMAND, SetCommand};

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(
    name = "rdctl",
    bin_name = "rdctl",
    about = "Control a running desktop container backend",
    version
)]
pub struct CommandLine {
    /// How to reach the backend.
    #[command(flatten)]
    pub connection: ConnectionArgs,
    /// Raise log verbosity; repeat for more detail.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Selected subcommand.
    #[command(subcommand)]
    pub command: Commands,
}

/// Connection overrides shared by every subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ConnectionArgs {
    /// Host the backend listens on.
    #[arg(long = "host", value_name = "HOST", global = true)]
    pub host: Option<String>,
    /// Port the backend API listens on.
    #[arg(long = "port", value_name = "PORT", global = true)]
    pub port: Option<u16>,
    /// Path to the backend connection file.
    #[arg(long = "config-path", value_name = "FILE", global = true)]
    pub config_path: Option<PathBuf>,
}

/// Subcommands implemented by `rdctl`.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Update selected fields in the Rancher Desktop UI and restart the backend.
    ///
    /// A repeated flag keeps its last value.
    #[command(name = SET_COMMAND, args_override_self = true)]
    Set(SetCommand),
}

/// Result of parsing, including the raw matches.
#[derive(Debug)]
pub struct ParsedCommandLine {
    /// Typed view of the arguments.
    pub cli: CommandLine,
    /// Raw matches, used for provenance checks.
    pub matches: ArgMatches,
}

impl CommandLine {
    /// Parses `iter`, returning both the typed structure and the raw matches.
    ///
    /// # Errors
    ///
    /// Returns a [`clap::Error`] for unknown flags, malformed values, or
    /// unexpected positional arguments.
    pub fn try_parse_with_matches<I, T>(iter: I) -> Result<ParsedCommandLine, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = Self::command();
        let matches = command.try_get_matches_from_mut(iter)?;
        let cli = Self::from_arg_matches(&matches).map_err(|err| err.with_cmd(&command))?;
        Ok(ParsedCommandLine { cli, matches })
    }

    /// Renders the usage line of the named subcommand.
    #[must_use]
    pub fn subcommand_usage(name: &str) -> Option<StyledStr> {
        let mut command = Self::command();
        command.build();
        command
            .find_subcommand_mut(name)
            .map(clap::Command::render_usage)
    }
}
