//! Diagnostic logging to standard error.
//!
//! `RDCTL_LOG` takes an [`EnvFilter`] directive string and wins over the
//! verbosity flag. Standard output carries only the command report.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "RDCTL_LOG";

/// Maps the number of `-v` flags to a default level.
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber.
///
/// Subsequent calls are ignored, so tests may call this freely.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbosity).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();
    let installed = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
    if let Err(err) = installed {
        tracing::debug!(%err, "log subscriber already installed");
    }
}
