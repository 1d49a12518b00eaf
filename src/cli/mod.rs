//! Command-line interface for catalog-search.
//!
//! Runs the HTTP API or a single search from the terminal.

mod commands;

pub use commands::{Cli, Commands, run_command};
