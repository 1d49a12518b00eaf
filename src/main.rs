//! Catalog Search - an Apple-Music-style catalog search API.
//!
//! Takes one free-text query plus the categories wanted (songs, albums,
//! artists), runs it against Last.fm, and answers with a category-partitioned,
//! paginated envelope. Runs as an HTTP server or as a one-shot CLI search.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("catalog_search=info".parse()?))
        .init();

    cli::run_command(&args)?;
    Ok(())
}
