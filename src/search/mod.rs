//! Search core - request normalization, fan-out and response assembly.
//!
//! Control flow for one request:
//! 1. [`query::normalize`] validates and clamps the raw parameters
//! 2. [`SearchService::search`] calls the provider once per category
//! 3. [`envelope::assemble`] builds the ordered, paginated envelope
//!
//! Nothing here outlives a request; there is no cache and no retry.

pub mod envelope;
pub mod query;
pub mod service;

pub use envelope::{CategoryResultSet, SearchEnvelope};
pub use query::{SearchQuery, ValidationError, normalize};
pub use service::{SearchError, SearchService};
