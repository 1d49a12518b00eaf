//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `serve`: Run the HTTP search API
//! - `search`: Run a single search and print the JSON envelope

mod search;
mod serve;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::catalog::lastfm::LastFmClient;
use crate::config::{self, Config, Overrides};
use crate::error::{Result, ResultExt};
use crate::search::SearchService;

pub use search::cmd_search;
pub use serve::cmd_serve;

/// Catalog Search CLI
///
/// Without a subcommand the server starts, taking the same flags as `serve`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub serve: ServeArgs,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP search API (the default when no command is given)
    Serve(ServeArgs),
    /// Run one search and print the response JSON
    Search {
        /// Search term
        term: String,
        /// Comma-separated categories: artists, songs, albums
        #[arg(short, long)]
        types: Option<String>,
        /// Results per category (1-25)
        #[arg(short, long)]
        limit: Option<String>,
        /// Offset into each category's results
        #[arg(short, long)]
        offset: Option<String>,
        #[command(flatten)]
        provider: ProviderArgs,
    },
}

/// Server options
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to listen on (default from config: 0.0.0.0:8080)
    #[arg(short, long, env = "CATALOG_SEARCH_BIND")]
    pub bind: Option<String>,
    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Provider credentials and config location, shared by all commands
#[derive(Args, Debug, Default)]
pub struct ProviderArgs {
    /// Last.fm API key (or set LASTFM_API_KEY env var)
    #[arg(long, env = "LASTFM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Last.fm API secret (or set LASTFM_API_SECRET env var)
    #[arg(long, env = "LASTFM_API_SECRET", hide_env_values = true)]
    pub api_secret: Option<String>,
    /// Config file (default: OS config dir/catalog-search/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> Result<()> {
    let rt = Runtime::new()?;

    match &cli.command {
        Some(Commands::Serve(args)) => cmd_serve(&rt, args),
        Some(Commands::Search {
            term,
            types,
            limit,
            offset,
            provider,
        }) => cmd_search(
            &rt,
            term,
            types.as_deref(),
            limit.as_deref(),
            offset.as_deref(),
            provider,
        ),
        None => cmd_serve(&rt, &cli.serve),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Load the config file (explicit or default) and apply command-line values.
pub(crate) fn resolve_config(args: &ProviderArgs, bind: Option<&str>) -> Result<Config> {
    let file = match &args.config {
        Some(path) => config::load_from(path).with_context("loading --config file")?,
        None => config::load().with_context("loading default config")?,
    };

    Ok(file.with_overrides(Overrides {
        api_key: args.api_key.clone(),
        api_secret: args.api_secret.clone(),
        bind: bind.map(str::to_string),
    }))
}

/// Build the search service backed by Last.fm.
///
/// Fails when either credential is missing.
pub(crate) fn build_service(config: &Config) -> Result<Arc<SearchService>> {
    let credentials = config.lastfm_credentials()?;
    let client = LastFmClient::new(
        credentials,
        config.provider.base_url.clone(),
        config.provider_timeout(),
    );
    Ok(Arc::new(SearchService::new(Arc::new(client))))
}
