//! Search service - fans a query out to the provider, one call per category.
//!
//! A search is all-or-nothing: if any category's provider call fails, the
//! whole search fails with that category attached, and no partial envelope is
//! ever produced. Calls run concurrently; when one fails the others are
//! dropped (cancelled) with it.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::try_join_all;

use super::envelope::{SearchEnvelope, assemble};
use super::query::SearchQuery;
use crate::catalog::{CatalogItems, CatalogProvider, Category, ProviderError};

/// Aggregation failures
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("error searching {category}: {source}")]
    ProviderFailure {
        category: Category,
        #[source]
        source: ProviderError,
    },
}

impl SearchError {
    /// Category whose provider call failed
    pub fn category(&self) -> Category {
        match self {
            SearchError::ProviderFailure { category, .. } => *category,
        }
    }
}

/// Service that runs searches against an injected provider
pub struct SearchService {
    provider: Arc<dyn CatalogProvider>,
}

impl SearchService {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    /// Name of the provider backing this service
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Run `query` and assemble the response envelope.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchEnvelope, SearchError> {
        let results = self.fetch_all(query).await?;
        Ok(assemble(query, results))
    }

    /// Fetch every requested category, each truncated to the page size.
    ///
    /// The provider may return more than asked for, so results are clamped
    /// again here.
    pub async fn fetch_all(
        &self,
        query: &SearchQuery,
    ) -> Result<HashMap<Category, CatalogItems>, SearchError> {
        let calls = query
            .categories
            .iter()
            .map(|&category| self.fetch_category(query, category));

        let pages = try_join_all(calls).await?;

        tracing::info!(
            term = %query.term,
            categories = pages.len(),
            total = pages.iter().map(|(_, items)| items.len()).sum::<usize>(),
            "Search complete"
        );

        Ok(pages.into_iter().collect())
    }

    async fn fetch_category(
        &self,
        query: &SearchQuery,
        category: Category,
    ) -> Result<(Category, CatalogItems), SearchError> {
        tracing::debug!(
            %category,
            provider = self.provider.name(),
            limit = query.page_size,
            offset = query.offset,
            "Searching category"
        );

        let mut items = self
            .provider
            .search_category(category, &query.term, query.page_size, query.offset)
            .await
            .map_err(|source| {
                tracing::warn!(%category, error = %source, "Provider search failed");
                SearchError::ProviderFailure { category, source }
            })?;

        if items.len() > query.page_size {
            tracing::debug!(
                %category,
                returned = items.len(),
                limit = query.page_size,
                "Provider over-returned, truncating"
            );
        }
        items.truncate(query.page_size);

        Ok((category, items))
    }
}
