//! `rdctl` entry point: parse, validate, resolve the backend, submit.

use std::io;

use color_eyre::eyre::Report;
use color_eyre::Section;
use rdctl::cli::{CommandLine, Commands, ParsedCommandLine, SET_COMMAND};
use rdctl::client::BackendClient;
use rdctl::config::load_backend_config;
use rdctl::error::RdctlError;
use rdctl::logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run()
}

fn run() -> color_eyre::Result<()> {
    let ParsedCommandLine { cli, matches } =
        CommandLine::try_parse_with_matches(std::env::args_os()).unwrap_or_else(|err| err.exit());
    logging::init(cli.verbose);

    match cli.command {
        Commands::Set(command) => {
            let set_matches = matches
                .subcommand_matches(SET_COMMAND)
                .ok_or(RdctlError::MissingSubcommandMatches(SET_COMMAND))?;
            // Usage accompanies validation failures only; once the update is
            // prepared, errors belong to a real attempt.
            let update = command
                .prepare(set_matches)
                .map_err(|err| with_usage(Report::from(err), SET_COMMAND))?;
            let config = load_backend_config(&cli.connection)?;
            let client = BackendClient::new(&config)?;
            update.submit(&client, &mut io::stdout().lock())?;
        }
    }
    Ok(())
}

/// Appends the subcommand usage after the error report.
fn with_usage(report: Report, command: &str) -> Report {
    let Some(usage) = CommandLine::subcommand_usage(command) else {
        return report;
    };
    report.section(usage.to_string())
}
