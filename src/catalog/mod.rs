//! Catalog module - talks to the upstream metadata provider.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - The entities we return to clients
//! - **API DTOs** (`lastfm/dto.rs`) - Exact upstream response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for external APIs
//! - **Traits** (`traits.rs`) - The provider interface the search core depends on
//!
//! Ids (`identifier.rs`) and track ranking (`relevance.rs`) are applied inside
//! the adapters, so every provider hands back entities that are already keyed
//! and ordered.

pub mod domain;
pub mod identifier;
pub mod lastfm;
pub mod relevance;
pub mod traits;

pub use domain::{Album, Artist, CatalogItems, Category, ProviderError, Song};
pub use traits::CatalogProvider;
