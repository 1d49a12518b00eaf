//! Request handlers for the search endpoint.
//!
//! Parameters arrive as raw strings and go through the normalizer, so a bad
//! `limit` is a 400 with a message rather than an extractor rejection.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::error::ApiError;
use crate::search::{SearchService, normalize};

/// Raw query string of a search request.
///
/// Everything is taken as text; validation happens in [`normalize`] so that
/// malformed numbers become a 400 with a useful message.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub term: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub types: Option<String>,
}

/// `GET /v1/catalog/us/search`
pub async fn handle_search(
    State(service): State<Arc<SearchService>>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let query = normalize(
        params.term.as_deref(),
        params.limit.as_deref(),
        params.offset.as_deref(),
        params.types.as_deref(),
    )?;

    tracing::info!(
        term = %query.term,
        limit = query.page_size,
        offset = query.offset,
        types = ?query.categories,
        "Search request"
    );

    let envelope = service.search(&query).await?;
    let body = serde_json::to_vec(&envelope)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
