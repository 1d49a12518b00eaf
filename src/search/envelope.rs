//! Response envelope and its assembly.
//!
//! The envelope mirrors the Apple Music search response:
//!
//! ```json
//! {
//!   "results": { "songs": { "href": "...", "next": "...", "data": [...] } },
//!   "meta": { "results": { "order": ["songs"] } }
//! }
//! ```
//!
//! `results` is a map, so its iteration order means nothing. Clients read the
//! display order from `meta.results.order`, which is built from the request's
//! category list and never from the map.

use std::collections::HashMap;

use serde::Serialize;

use super::query::SearchQuery;
use crate::catalog::{CatalogItems, Category};

/// Path of the public search endpoint
pub const SEARCH_PATH: &str = "/v1/catalog/us/search";

/// One category's page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResultSet {
    #[serde(skip)]
    pub category: Category,
    /// Link to this page
    pub href: String,
    /// Link to the following page
    pub next: String,
    #[serde(rename = "data")]
    pub items: CatalogItems,
}

/// Full category-partitioned response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchEnvelope {
    pub results: HashMap<Category, CategoryResultSet>,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    pub results: MetaResults,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaResults {
    /// Requested categories, in request order
    pub order: Vec<Category>,
}

impl SearchEnvelope {
    /// Categories in display order
    pub fn category_order(&self) -> &[Category] {
        &self.meta.results.order
    }

    pub fn get(&self, category: Category) -> Option<&CategoryResultSet> {
        self.results.get(&category)
    }
}

/// Build the envelope for `query` from per-category results.
///
/// Every requested category gets a result set; one missing from `results`
/// is treated as empty. Categories in `results` that weren't requested are
/// ignored.
pub fn assemble(
    query: &SearchQuery,
    mut results: HashMap<Category, CatalogItems>,
) -> SearchEnvelope {
    let mut sets = HashMap::with_capacity(query.categories.len());
    let mut order = Vec::with_capacity(query.categories.len());

    for &category in &query.categories {
        let items = results
            .remove(&category)
            .unwrap_or_else(|| CatalogItems::empty(category));

        sets.insert(
            category,
            CategoryResultSet {
                category,
                href: search_link(&query.term, category, query.page_size, query.offset),
                next: search_link(
                    &query.term,
                    category,
                    query.page_size,
                    query.offset.saturating_add(query.page_size),
                ),
                items,
            },
        );
        order.push(category);
    }

    SearchEnvelope {
        results: sets,
        meta: Meta {
            results: MetaResults { order },
        },
    }
}

/// Public search URL for one category page
pub fn search_link(term: &str, category: Category, limit: usize, offset: usize) -> String {
    format!(
        "{}?term={}&types={}&limit={}&offset={}",
        SEARCH_PATH,
        urlencoding::encode(term),
        category.as_str(),
        limit,
        offset
    )
}
