//! Internal domain models for catalog search results.
//!
//! These types are OUR types - they don't change when the upstream provider changes.
//! Provider responses get converted into these types via adapters, and these are
//! what the public endpoint serializes.

use std::fmt;

use serde::Serialize;

/// The kinds of result a search can be partitioned into.
///
/// Declaration order is the canonical order used when a request names no
/// categories: artists, songs, albums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Artists,
    Songs,
    Albums,
}

impl Category {
    /// Default category set, in canonical order.
    pub const ALL: [Category; 3] = [Category::Artists, Category::Songs, Category::Albums];

    /// Name used on the wire (`types=` parameter, result keys, `type` field).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Artists => "artists",
            Category::Songs => "songs",
            Category::Albums => "albums",
        }
    }

    /// Parse a single `types=` token. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "artists" => Some(Category::Artists),
            "songs" => Some(Category::Songs),
            "albums" => Some(Category::Albums),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Artwork reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Artwork {
    pub url: String,
    /// Pixel dimensions, when the provider reports them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// What a client needs to start playback of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayParams {
    pub id: String,
    pub kind: String,
}

/// A song (track) result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Category,
    pub href: String,
    pub attributes: SongAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongAttributes {
    pub name: String,
    pub artist_name: String,
    pub genre_names: Vec<String>,
    pub artwork: Artwork,
    /// Provider page for this track
    pub url: String,
    pub play_params: PlayParams,
}

/// An album result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Album {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Category,
    pub href: String,
    pub attributes: AlbumAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumAttributes {
    pub name: String,
    pub artist_name: String,
    pub genre_names: Vec<String>,
    pub artwork: Artwork,
    pub url: String,
    pub play_params: PlayParams,
}

/// An artist result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artist {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Category,
    pub href: String,
    pub attributes: ArtistAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistAttributes {
    pub name: String,
    pub genre_names: Vec<String>,
    pub artwork: Artwork,
    pub url: String,
}

impl Song {
    pub fn new(id: String, attributes: SongAttributes) -> Self {
        Self {
            href: resource_href(Category::Songs, &id),
            id,
            kind: Category::Songs,
            attributes,
        }
    }
}

impl Album {
    pub fn new(id: String, attributes: AlbumAttributes) -> Self {
        Self {
            href: resource_href(Category::Albums, &id),
            id,
            kind: Category::Albums,
            attributes,
        }
    }
}

impl Artist {
    pub fn new(id: String, attributes: ArtistAttributes) -> Self {
        Self {
            href: resource_href(Category::Artists, &id),
            id,
            kind: Category::Artists,
            attributes,
        }
    }
}

/// Catalog path of a single resource, e.g. `/v1/catalog/us/albums/<id>`
fn resource_href(category: Category, id: &str) -> String {
    format!("/v1/catalog/us/{}/{}", category.as_str(), urlencoding::encode(id))
}

/// Items returned for one category.
///
/// Keeps each category's entity type while letting the aggregator handle
/// every category uniformly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CatalogItems {
    Songs(Vec<Song>),
    Albums(Vec<Album>),
    Artists(Vec<Artist>),
}

impl CatalogItems {
    /// Empty result set for a category
    pub fn empty(category: Category) -> Self {
        match category {
            Category::Songs => CatalogItems::Songs(Vec::new()),
            Category::Albums => CatalogItems::Albums(Vec::new()),
            Category::Artists => CatalogItems::Artists(Vec::new()),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            CatalogItems::Songs(_) => Category::Songs,
            CatalogItems::Albums(_) => Category::Albums,
            CatalogItems::Artists(_) => Category::Artists,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CatalogItems::Songs(items) => items.len(),
            CatalogItems::Albums(items) => items.len(),
            CatalogItems::Artists(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything past the first `limit` items.
    pub fn truncate(&mut self, limit: usize) {
        match self {
            CatalogItems::Songs(items) => items.truncate(limit),
            CatalogItems::Albums(items) => items.truncate(limit),
            CatalogItems::Artists(items) => items.truncate(limit),
        }
    }
}

/// Errors a catalog provider can report
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(name: &str) -> Song {
        Song::new(
            name.to_lowercase(),
            SongAttributes {
                name: name.to_string(),
                artist_name: "Artist".to_string(),
                genre_names: vec![],
                artwork: Artwork::default(),
                url: String::new(),
                play_params: PlayParams {
                    id: name.to_lowercase(),
                    kind: "song".to_string(),
                },
            },
        )
    }

    #[test]
    fn test_category_tokens() {
        for category in Category::ALL {
            assert_eq!(Category::from_token(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_token("playlists"), None);
        assert_eq!(Category::from_token("Songs"), None);
    }

    #[test]
    fn test_resource_href() {
        let song = song("Intro");
        assert_eq!(song.href, "/v1/catalog/us/songs/intro");
        assert_eq!(song.kind, Category::Songs);
    }

    #[test]
    fn test_truncate_items() {
        let mut items = CatalogItems::Songs(vec![song("a"), song("b"), song("c")]);
        items.truncate(2);
        assert_eq!(items.len(), 2);
        items.truncate(5);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_empty_items_keep_category() {
        for category in Category::ALL {
            let items = CatalogItems::empty(category);
            assert!(items.is_empty());
            assert_eq!(items.category(), category);
        }
    }

    #[test]
    fn test_song_serializes_apple_style() {
        let json = serde_json::to_value(song("Intro")).unwrap();
        assert_eq!(json["type"], "songs");
        assert_eq!(json["attributes"]["artistName"], "Artist");
        assert_eq!(json["attributes"]["playParams"]["kind"], "song");
        assert!(json["attributes"]["artwork"].get("width").is_none());
    }
}
