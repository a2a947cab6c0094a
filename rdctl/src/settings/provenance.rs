//! Provenance tracking for settings flags.
//!
//! clap resolves every flag to a value, defaults included. The projections
//! need to know which of those values the caller actually typed, so the
//! provenance is captured once from the [`ArgMatches`] and kept apart from the
//! values themselves.

use std::collections::BTreeSet;

use clap::ArgMatches;
use clap::parser::ValueSource;
use tracing::debug;

use super::{RequestedSettings, WireSettings};

/// Flag ids whose value came from the command line rather than a default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitFlags {
    ids: BTreeSet<String>,
}

impl ExplicitFlags {
    /// Collects every argument in `matches` that the caller supplied.
    ///
    /// Only [`ValueSource::CommandLine`] counts; values taken from defaults
    /// or the environment are treated as absent.
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        matches
            .ids()
            .map(clap::Id::as_str)
            .filter(|id| matches.value_source(id) == Some(ValueSource::CommandLine))
            .collect()
    }

    /// Reports whether `flag` was supplied explicitly.
    #[must_use]
    pub fn contains(&self, flag: &str) -> bool {
        self.ids.contains(flag)
    }

    /// Returns `true` when no flag was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over the explicit flag ids in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExplicitFlags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Copies one concrete field into its optional wire slot.
#[derive(Debug, Clone, Copy)]
pub struct FieldProjection {
    /// Flag id gating the copy.
    pub flag: &'static str,
    /// Copies the field from the requested record into the wire record.
    pub project: fn(&RequestedSettings, &mut WireSettings),
}

/// Applies every entry of `table` whose flag was supplied explicitly.
///
/// Returns `true` when at least one field was copied. The value itself is
/// never compared with the default: an explicit flag always counts.
pub fn project_fields(
    table: &[FieldProjection],
    flags: &ExplicitFlags,
    requested: &RequestedSettings,
    wire: &mut WireSettings,
) -> bool {
    let mut changed = false;
    for entry in table.iter().filter(|entry| flags.contains(entry.flag)) {
        (entry.project)(requested, wire);
        debug!(flag = entry.flag, "projected explicit flag");
        changed = true;
    }
    changed
}
