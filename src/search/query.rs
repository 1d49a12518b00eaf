//! Request parameter normalization.
//!
//! Turns the raw query-string values of a search request into a
//! [`SearchQuery`] whose numbers are always in range and whose category list
//! is never empty.

use crate::catalog::Category;

/// Page size used when none (or a non-positive one) is given
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Largest page a client can ask for
pub const MAX_PAGE_SIZE: usize = 25;

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Non-empty search term, as given
    pub term: String,
    /// Always within `1..=MAX_PAGE_SIZE`
    pub page_size: usize,
    pub offset: usize,
    /// Requested categories in request order, no duplicates, never empty
    pub categories: Vec<Category>,
}

/// Caller-input faults. These never reach a provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("term parameter is required")]
    MissingTerm,

    #[error("invalid {field} parameter: {value:?} is not an integer")]
    MalformedNumber { field: &'static str, value: String },
}

/// Validate and clamp raw request parameters.
///
/// - a missing or blank `term` is rejected
/// - `limit`/`offset` that are present but not integers are rejected
/// - `limit < 1` falls back to the default, `limit > 25` is clamped to 25
/// - `offset < 0` becomes 0
/// - unknown `types` tokens are dropped; if none remain, all categories are
///   used in canonical order
pub fn normalize(
    raw_term: Option<&str>,
    raw_page_size: Option<&str>,
    raw_offset: Option<&str>,
    raw_categories: Option<&str>,
) -> Result<SearchQuery, ValidationError> {
    let term = match raw_term {
        Some(term) if !term.trim().is_empty() => term.to_string(),
        _ => return Err(ValidationError::MissingTerm),
    };

    let page_size = match parse_int("limit", raw_page_size)? {
        None => DEFAULT_PAGE_SIZE,
        Some(n) if n < 1 => DEFAULT_PAGE_SIZE,
        Some(n) => (n as u64).min(MAX_PAGE_SIZE as u64) as usize,
    };

    let offset = match parse_int("offset", raw_offset)? {
        Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => 0,
    };

    Ok(SearchQuery {
        term,
        page_size,
        offset,
        categories: parse_categories(raw_categories),
    })
}

/// Parse an optional integer; empty values count as absent.
fn parse_int(field: &'static str, raw: Option<&str>) -> Result<Option<i64>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ValidationError::MalformedNumber {
                field,
                value: value.to_string(),
            }),
    }
}

/// Parse a comma-separated `types` list, keeping first occurrences in order.
fn parse_categories(raw: Option<&str>) -> Vec<Category> {
    let mut categories = Vec::with_capacity(Category::ALL.len());

    for token in raw.unwrap_or_default().split(',') {
        match Category::from_token(token.trim()) {
            Some(category) if !categories.contains(&category) => categories.push(category),
            Some(_) => {}
            None if !token.trim().is_empty() => {
                tracing::debug!(token = token.trim(), "Ignoring unknown category");
            }
            None => {}
        }
    }

    if categories.is_empty() {
        Category::ALL.to_vec()
    } else {
        categories
    }
}
