//! Last.fm HTTP client
//!
//! Handles communication with the Last.fm web service.
//! See: https://www.last.fm/api
//!
//! ## API Quirks
//!
//! ### Pages, not offsets
//! Search methods take `limit` and a 1-based `page`. A request for `count`
//! results at `offset` maps to a [`PageWindow`]: the page holding `offset`,
//! plus the following page when the window runs past its end. The position
//! of `offset` inside the first page is skipped after conversion (and, for
//! tracks, after ranking).
//!
//! ### Errors with a 200 status
//! Some failures come back as `{"error": N, "message": "..."}` with a success
//! status, so every body is checked for an error document before decoding.

use std::time::Duration;

use futures::future::try_join_all;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::{adapter, dto};
use crate::catalog::domain::{Album, Artist, ProviderError, Song};

/// Default Last.fm endpoint
pub const DEFAULT_BASE_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Track search fetches this many times `limit` so ranking has candidates to promote
const TRACK_OVERFETCH: usize = 2;

/// Credentials issued by Last.fm for an API account
#[derive(Debug, Clone)]
pub struct LastFmCredentials {
    pub api_key: String,
    /// Only needed for signed calls; kept so startup fails early when missing
    pub api_secret: String,
}

/// Last.fm API client
pub struct LastFmClient {
    credentials: LastFmCredentials,
    http_client: reqwest::Client,
    base_url: String,
}

impl LastFmClient {
    /// Create a new client
    ///
    /// The client is configured to:
    /// - Accept gzip-compressed responses
    /// - Send a User-Agent identifying the application
    /// - Give up on any request after `timeout`
    pub fn new(
        credentials: LastFmCredentials,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            credentials,
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Search tracks, most relevant first
    pub async fn search_tracks(
        &self,
        term: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Song>, ProviderError> {
        let per_page = limit.max(1) * TRACK_OVERFETCH;
        let window = PageWindow::new(offset, limit, per_page);
        let tracks = self
            .fetch_window::<dto::TrackSearchResponse>("track.search", "track", term, per_page, window)
            .await?;
        Ok(adapter::to_songs(term, tracks, window.skip, limit))
    }

    pub async fn search_albums(
        &self,
        term: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Album>, ProviderError> {
        let per_page = limit.max(1);
        let window = PageWindow::new(offset, limit, per_page);
        let albums = self
            .fetch_window::<dto::AlbumSearchResponse>("album.search", "album", term, per_page, window)
            .await?;
        Ok(adapter::to_albums(albums, window.skip, limit))
    }

    pub async fn search_artists(
        &self,
        term: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Artist>, ProviderError> {
        let per_page = limit.max(1);
        let window = PageWindow::new(offset, limit, per_page);
        let artists = self
            .fetch_window::<dto::ArtistSearchResponse>("artist.search", "artist", term, per_page, window)
            .await?;
        Ok(adapter::to_artists(artists, window.skip, limit))
    }

    /// Fetch every page of `window` concurrently and concatenate the matches
    /// in page order. Fails if any page fails.
    async fn fetch_window<P: SearchPage>(
        &self,
        method: &str,
        term_param: &str,
        term: &str,
        per_page: usize,
        window: PageWindow,
    ) -> Result<Vec<P::Match>, ProviderError> {
        let requests = window
            .pages()
            .map(|page| self.send_search_request::<P>(method, term_param, term, per_page, page));

        let pages = try_join_all(requests).await?;
        Ok(pages.into_iter().flat_map(P::into_matches).collect())
    }

    /// Send one search request and decode the body
    async fn send_search_request<T: DeserializeOwned>(
        &self,
        method: &str,
        term_param: &str,
        term: &str,
        per_page: usize,
        page: usize,
    ) -> Result<T, ProviderError> {
        let per_page = per_page.to_string();
        let page = page.to_string();

        tracing::debug!(method, term, per_page = %per_page, page = %page, "Last.fm request");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[
                ("method", method),
                (term_param, term),
                ("api_key", self.credentials.api_key.as_str()),
                ("format", "json"),
                ("limit", per_page.as_str()),
                ("page", page.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        decode_response(status, &body)
    }
}

/// Classify a raw Last.fm response.
///
/// - 429: rate limited
/// - an `{"error", "message"}` document (any status): API error
/// - any other non-2xx: network error
/// - a body that doesn't decode as `T`: parse error
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ProviderError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ProviderError::RateLimited);
    }

    // Error documents can arrive with any status
    if let Ok(error) = serde_json::from_str::<dto::ApiError>(body) {
        return Err(ProviderError::Api {
            code: error.error,
            message: error.message,
        });
    }

    if !status.is_success() {
        return Err(ProviderError::Network(format!(
            "HTTP {}: {} - {}",
            status,
            status.canonical_reason().unwrap_or("Unknown"),
            body.chars().take(200).collect::<String>()
        )));
    }

    serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))
}

/// A search response carrying one page of matches
trait SearchPage: DeserializeOwned {
    type Match;

    fn into_matches(self) -> Vec<Self::Match>;
}

impl SearchPage for dto::TrackSearchResponse {
    type Match = dto::TrackMatch;

    fn into_matches(self) -> Vec<dto::TrackMatch> {
        self.results.trackmatches.track
    }
}

impl SearchPage for dto::AlbumSearchResponse {
    type Match = dto::AlbumMatch;

    fn into_matches(self) -> Vec<dto::AlbumMatch> {
        self.results.albummatches.album
    }
}

impl SearchPage for dto::ArtistSearchResponse {
    type Match = dto::ArtistMatch;

    fn into_matches(self) -> Vec<dto::ArtistMatch> {
        self.results.artistmatches.artist
    }
}

/// The provider pages covering `count` results from `offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageWindow {
    /// 1-based page holding `offset`
    first_page: usize,
    /// Number of consecutive pages to fetch
    page_count: usize,
    /// Position of `offset` inside the first page
    skip: usize,
}

impl PageWindow {
    fn new(offset: usize, count: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let skip = offset % per_page;
        Self {
            first_page: offset / per_page + 1,
            page_count: (skip + count.max(1)).div_ceil(per_page),
            skip,
        }
    }

    fn pages(&self) -> std::ops::Range<usize> {
        self.first_page..self.first_page + self.page_count
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::Router;
    use axum::extract::Query;
    use axum::routing::get;
    use serde_json::{Value, json};

    use super::*;

    fn credentials() -> LastFmCredentials {
        LastFmCredentials {
            api_key: "test-key".to_string(),
            api_secret: "test-secret".to_string(),
        }
    }

    /// Stand-in for the Last.fm endpoint. Every page is full, and item `n`
    /// is named `Item n` by its absolute position. `artist.search` always
    /// answers with an invalid-key error document.
    async fn fake_lastfm(Query(params): Query<HashMap<String, String>>) -> axum::Json<Value> {
        let limit: usize = params["limit"].parse().unwrap();
        let page: usize = params["page"].parse().unwrap();
        let first = (page - 1) * limit;
        let items: Vec<Value> = (first..first + limit)
            .map(|n| json!({ "name": format!("Item {n}"), "artist": "Nobody" }))
            .collect();

        axum::Json(match params["method"].as_str() {
            "track.search" => json!({ "results": { "trackmatches": { "track": items } } }),
            "album.search" => json!({ "results": { "albummatches": { "album": items } } }),
            _ => json!({ "error": 10, "message": "Invalid API key" }),
        })
    }

    async fn fake_client() -> LastFmClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, Router::new().route("/2.0/", get(fake_lastfm)))
                .await
                .unwrap();
        });
        LastFmClient::new(credentials(), format!("http://{addr}/2.0/"), Duration::from_secs(5))
    }

    #[test]
    fn test_client_creation() {
        let client = LastFmClient::new(credentials(), DEFAULT_BASE_URL, Duration::from_secs(10));
        assert_eq!(client.base_url, "https://ws.audioscrobbler.com/2.0/");
        assert_eq!(client.credentials.api_key, "test-key");
    }

    #[test]
    fn test_page_window_aligned() {
        let window = PageWindow::new(10, 5, 5);
        assert_eq!(window.pages(), 3..4);
        assert_eq!(window.skip, 0);
    }

    #[test]
    fn test_page_window_crosses_page_boundary() {
        // limit 5 at offset 8 with 10-item track pages: items 8..13
        let window = PageWindow::new(8, 5, 10);
        assert_eq!(window.pages(), 1..3);
        assert_eq!(window.skip, 8);

        let window = PageWindow::new(3, 5, 5);
        assert_eq!(window.pages(), 1..3);
        assert_eq!(window.skip, 3);
    }

    #[test]
    fn test_page_window_fits_one_page() {
        let window = PageWindow::new(2, 5, 10);
        assert_eq!(window.pages(), 1..2);
        assert_eq!(window.skip, 2);
    }

    #[test]
    fn test_decode_rate_limited() {
        let result: Result<dto::AlbumSearchResponse, _> =
            decode_response(StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert!(matches!(result, Err(ProviderError::RateLimited)));
    }

    #[test]
    fn test_decode_error_document_with_success_status() {
        let result: Result<dto::AlbumSearchResponse, _> = decode_response(
            StatusCode::OK,
            r#"{"error": 10, "message": "Invalid API key"}"#,
        );
        match result {
            Err(ProviderError::Api { code, message }) => {
                assert_eq!(code, 10);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_other_status_is_network_error() {
        let result: Result<dto::AlbumSearchResponse, _> =
            decode_response(StatusCode::BAD_GATEWAY, "<html>upstream down</html>");
        match result {
            Err(ProviderError::Network(msg)) => {
                assert!(msg.contains("502"));
                assert!(msg.contains("upstream down"));
            }
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_malformed_body_is_parse_error() {
        let result: Result<dto::AlbumSearchResponse, _> =
            decode_response(StatusCode::OK, r#"{"results": "nope"}"#);
        assert!(matches!(result, Err(ProviderError::Parse(_))));
    }

    #[test]
    fn test_decode_search_page() {
        let page: dto::AlbumSearchResponse = decode_response(
            StatusCode::OK,
            r#"{"results": {"albummatches": {"album": [{"name": "Believe", "artist": "Cher"}]}}}"#,
        )
        .unwrap();
        assert_eq!(page.into_matches()[0].name, "Believe");
    }

    #[tokio::test]
    async fn test_albums_from_unaligned_offset() {
        let client = fake_client().await;

        let albums = client.search_albums("item", 5, 3).await.unwrap();

        let names: Vec<_> = albums.iter().map(|a| a.attributes.name.as_str()).collect();
        assert_eq!(names, vec!["Item 3", "Item 4", "Item 5", "Item 6", "Item 7"]);
    }

    #[tokio::test]
    async fn test_tracks_window_spanning_two_pages() {
        let client = fake_client().await;

        // Nothing matches the artist, so ranking keeps provider order
        let songs = client.search_tracks("zzz", 5, 8).await.unwrap();

        let names: Vec<_> = songs.iter().map(|s| s.attributes.name.as_str()).collect();
        assert_eq!(names, vec!["Item 8", "Item 9", "Item 10", "Item 11", "Item 12"]);
    }

    #[tokio::test]
    async fn test_error_document_from_server() {
        let client = fake_client().await;

        let result = client.search_artists("cher", 5, 0).await;

        assert!(matches!(result, Err(ProviderError::Api { code: 10, .. })));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_provider_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let client = LastFmClient::new(credentials(), "http://127.0.0.1:9/2.0/", Duration::from_secs(2));
        let result = client.search_albums("believe", 5, 0).await;
        assert!(matches!(
            result,
            Err(ProviderError::Network(_)) | Err(ProviderError::Timeout)
        ));
    }
}
