//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`ValidationError`], [`SearchError`], [`ConfigError`]), while `main`
//! uses `anyhow` at the very edge.
//!
//! # Example
//!
//! ```ignore
//! use catalog_search::error::{Result, ResultExt};
//!
//! fn start() -> Result<()> {
//!     let config = config::load()?;             // Config errors auto-convert
//!     let addr = config.bind_addr()?;
//!     runtime.block_on(api::serve(addr, service)).with_context("serving")?;
//!     Ok(())
//! }
//! ```

use crate::config::ConfigError;
use crate::search::{SearchError, ValidationError};

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error (socket bind, runtime startup, stdout)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid search parameters
    #[error("Invalid search: {0}")]
    Validation(#[from] ValidationError),

    /// Search failed upstream
    #[error("Search failed: {0}")]
    Search(#[from] SearchError),

    /// Response could not be encoded
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ConfigError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Config(e).context(ctx))
    }
}
