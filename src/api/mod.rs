//! HTTP API - exposes the search core over axum.
//!
//! Routes:
//! - `GET /v1/catalog/us/search` - category-partitioned catalog search

pub mod error;
pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::search::SearchService;
use crate::search::envelope::SEARCH_PATH;

pub use error::ApiError;

/// Build the application router around a search service
pub fn router(service: Arc<SearchService>) -> Router {
    Router::new()
        .route(SEARCH_PATH, get(handlers::handle_search))
        .with_state(service)
}

/// Serve the API on `addr` until Ctrl+C.
pub async fn serve(addr: SocketAddr, service: Arc<SearchService>) -> std::io::Result<()> {
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
