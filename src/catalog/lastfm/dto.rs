//! Last.fm API Data Transfer Objects
//!
//! These types match EXACTLY what the Last.fm search methods return.
//! DO NOT use these types outside the lastfm module - convert to domain types.
//!
//! API Reference:
//! - https://www.last.fm/api/show/track.search
//! - https://www.last.fm/api/show/album.search
//! - https://www.last.fm/api/show/artist.search

use serde::Deserialize;

/// `track.search` response
#[derive(Debug, Clone, Deserialize)]
pub struct TrackSearchResponse {
    pub results: TrackResults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackResults {
    pub trackmatches: TrackMatches,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackMatches {
    #[serde(default)]
    pub track: Vec<TrackMatch>,
}

/// A single track hit. `artist` is a plain name here, not an object.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackMatch {
    pub name: String,
    pub artist: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Vec<Image>,
}

/// `album.search` response
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumSearchResponse {
    pub results: AlbumResults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumResults {
    pub albummatches: AlbumMatches,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumMatches {
    #[serde(default)]
    pub album: Vec<AlbumMatch>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumMatch {
    pub name: String,
    pub artist: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Vec<Image>,
}

/// `artist.search` response
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSearchResponse {
    pub results: ArtistResults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistResults {
    pub artistmatches: ArtistMatches,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistMatches {
    #[serde(default)]
    pub artist: Vec<ArtistMatch>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistMatch {
    pub name: String,
    /// Listener count, sent as a string
    pub listeners: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Vec<Image>,
}

/// Sized image link
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    #[serde(rename = "#text")]
    pub url: String,
    /// small, medium, large, extralarge, mega
    pub size: String,
}

/// Error document. Last.fm may send this with a 200 status.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: i64,
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
