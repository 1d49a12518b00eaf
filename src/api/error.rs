//! HTTP error mapping.
//!
//! | Error            | Status |
//! |------------------|--------|
//! | Validation       | 400    |
//! | Provider failure | 500    |
//! | Encoding         | 500    |
//!
//! Bodies follow the Apple Music error document shape:
//! `{"errors": [{"status": "400", "title": "...", "detail": "..."}]}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::search::{SearchError, ValidationError};

/// Errors surfaced by the search endpoint
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("error performing search: {0}")]
    Search(#[from] SearchError),

    #[error("error encoding response: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Search(_) | ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Invalid Parameter Value",
            ApiError::Search(_) => "Upstream Search Failed",
            ApiError::Encoding(_) => "Response Encoding Failed",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Serialize)]
struct ErrorEntry {
    status: String,
    title: &'static str,
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Search request failed: {}", self);
        } else {
            tracing::debug!("Rejected search request: {}", self);
        }

        let body = ErrorBody {
            errors: vec![ErrorEntry {
                status: status.as_u16().to_string(),
                title: self.title(),
                detail: self.to_string(),
            }],
        };
        (status, Json(body)).into_response()
    }
}
