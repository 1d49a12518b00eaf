//! Configuration system using TOML files.
//!
//! Config is read from the OS-standard config directory unless a path is
//! given explicitly:
//! - Windows: %APPDATA%\catalog-search\config.toml
//! - macOS: ~/Library/Application Support/catalog-search/config.toml
//! - Linux: ~/.config/catalog-search/config.toml
//!
//! The file is optional. Command-line flags (and the environment variables
//! behind them) take precedence over it. The Last.fm credentials must come
//! from one or the other; without them the server refuses to start.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::lastfm::{DEFAULT_BASE_URL, LastFmCredentials};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials
    pub credentials: Credentials,

    /// HTTP server settings
    pub server: ServerConfig,

    /// Upstream provider settings
    pub provider: ProviderConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub lastfm_api_key: Option<String>,
    pub lastfm_api_secret: Option<String>,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Last.fm API endpoint
    pub base_url: String,

    /// Per-request deadline for provider calls, in seconds
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Values given on the command line, overriding the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub bind: Option<String>,
}

impl Config {
    /// Apply command-line overrides on top of the loaded file.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(key) = overrides.api_key {
            self.credentials.lastfm_api_key = Some(key);
        }
        if let Some(secret) = overrides.api_secret {
            self.credentials.lastfm_api_secret = Some(secret);
        }
        if let Some(bind) = overrides.bind {
            self.server.bind = bind;
        }
        self
    }

    /// Both Last.fm credentials, or an error naming what's missing.
    pub fn lastfm_credentials(&self) -> Result<LastFmCredentials, ConfigError> {
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_string);

        match (
            present(&self.credentials.lastfm_api_key),
            present(&self.credentials.lastfm_api_secret),
        ) {
            (Some(api_key), Some(api_secret)) => Ok(LastFmCredentials {
                api_key,
                api_secret,
            }),
            (key, secret) => {
                let mut missing = Vec::new();
                if key.is_none() {
                    missing.push("LASTFM_API_KEY");
                }
                if secret.is_none() {
                    missing.push("LASTFM_API_SECRET");
                }
                Err(ConfigError::MissingCredentials(missing.join(" and ")))
            }
        }
    }

    /// Parsed listen address
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(self.server.bind.clone()))
    }

    /// Provider request deadline
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider.timeout_secs.max(1))
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("catalog-search"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if the file doesn't exist.
pub fn load() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_from(&path),
        Some(path) => {
            tracing::debug!("No config file found at {:?}, using defaults", path);
            Ok(Config::default())
        }
        None => {
            tracing::warn!("Could not determine config directory, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from an explicit path
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    let config =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    tracing::info!("Loaded config from {:?}", path);
    Ok(config)
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing credentials: set {0} (flag, environment or config file)")]
    MissingCredentials(String),

    #[error("Invalid bind address: {0}")]
    InvalidBind(String),

    #[error("Failed to read config {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config {0}: {1}")]
    Parse(PathBuf, toml::de::Error),
}

// ============================================================================
// Tests
// ============================================================================
