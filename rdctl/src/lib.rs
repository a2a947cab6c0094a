//! `rdctl`: command-line control of a running desktop container backend.
//!
//! The `set` subcommand turns the settings flags a caller typed into a
//! partial JSON settings document and sends it to the backend in one `PUT`.
//! Flags left untyped never appear in the document, even when their value
//! equals the default.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod settings;
pub mod update;
