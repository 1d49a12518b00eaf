//! The catalog provider interface.
//!
//! The search core only talks to providers through [`CatalogProvider`], so the
//! real Last.fm client, alternative providers and test doubles are all
//! injected the same way.
//!
//! # Example
//!
//! ```ignore
//! use catalog_search::catalog::traits::CatalogProvider;
//!
//! // In production code:
//! let provider: Arc<dyn CatalogProvider> = Arc::new(LastFmClient::new(credentials, base_url, timeout));
//! let service = SearchService::new(provider);
//!
//! // In tests:
//! let provider = Arc::new(MockProvider::default().with_songs(vec![...]));
//! ```

use async_trait::async_trait;

use super::domain::{Album, Artist, CatalogItems, Category, ProviderError, Song};

/// One search operation per category.
///
/// Each call may return more than `limit` items (the caller re-clamps) and
/// returns an empty list when nothing matches. Errors are reserved for
/// transport or parse failures of the underlying source.
///
/// Every method defaults to an empty list: a provider that cannot search a
/// category simply doesn't override it, and the category comes back empty.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &str;

    async fn search_songs(
        &self,
        _term: &str,
        _limit: usize,
        _offset: usize,
    ) -> Result<Vec<Song>, ProviderError> {
        Ok(Vec::new())
    }

    async fn search_albums(
        &self,
        _term: &str,
        _limit: usize,
        _offset: usize,
    ) -> Result<Vec<Album>, ProviderError> {
        Ok(Vec::new())
    }

    async fn search_artists(
        &self,
        _term: &str,
        _limit: usize,
        _offset: usize,
    ) -> Result<Vec<Artist>, ProviderError> {
        Ok(Vec::new())
    }

    /// Dispatch to the search for `category`.
    async fn search_category(
        &self,
        category: Category,
        term: &str,
        limit: usize,
        offset: usize,
    ) -> Result<CatalogItems, ProviderError> {
        Ok(match category {
            Category::Songs => CatalogItems::Songs(self.search_songs(term, limit, offset).await?),
            Category::Albums => {
                CatalogItems::Albums(self.search_albums(term, limit, offset).await?)
            }
            Category::Artists => {
                CatalogItems::Artists(self.search_artists(term, limit, offset).await?)
            }
        })
    }
}

#[async_trait]
impl CatalogProvider for super::lastfm::LastFmClient {
    fn name(&self) -> &str {
        "lastfm"
    }

    async fn search_songs(
        &self,
        term: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Song>, ProviderError> {
        self.search_tracks(term, limit, offset).await
    }

    async fn search_albums(
        &self,
        term: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Album>, ProviderError> {
        self.search_albums(term, limit, offset).await
    }

    async fn search_artists(
        &self,
        term: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Artist>, ProviderError> {
        self.search_artists(term, limit, offset).await
    }
}

/// Stub providers for tests.
#[cfg(test)]
pub mod mocks {
    use std::sync::Mutex;

    use super::*;
    use crate::catalog::domain::{
        AlbumAttributes, ArtistAttributes, Artwork, PlayParams, SongAttributes,
    };
    use crate::catalog::identifier::synthesize;

    /// Build a song the way the real adapter would.
    pub fn song(name: &str, artist: &str) -> Song {
        let id = synthesize(Some(artist), name);
        Song::new(
            id.clone(),
            SongAttributes {
                name: name.to_string(),
                artist_name: artist.to_string(),
                genre_names: vec![],
                artwork: Artwork::default(),
                url: String::new(),
                play_params: PlayParams {
                    id,
                    kind: "song".to_string(),
                },
            },
        )
    }

    pub fn album(name: &str, artist: &str) -> Album {
        let id = synthesize(Some(artist), name);
        Album::new(
            id.clone(),
            AlbumAttributes {
                name: name.to_string(),
                artist_name: artist.to_string(),
                genre_names: vec![],
                artwork: Artwork::default(),
                url: String::new(),
                play_params: PlayParams {
                    id,
                    kind: "album".to_string(),
                },
            },
        )
    }

    pub fn artist(name: &str) -> Artist {
        Artist::new(
            synthesize(None, name),
            ArtistAttributes {
                name: name.to_string(),
                genre_names: vec![],
                artwork: Artwork::default(),
                url: String::new(),
            },
        )
    }

    /// Provider returning canned results, optionally failing one category.
    #[derive(Default)]
    pub struct MockProvider {
        pub songs: Vec<Song>,
        pub albums: Vec<Album>,
        pub artists: Vec<Artist>,
        /// Category that fails, and with what
        pub failure: Option<(Category, ProviderError)>,
        /// Every call made, as (category, term, limit, offset)
        pub calls: Mutex<Vec<(Category, String, usize, usize)>>,
    }

    impl MockProvider {
        pub fn with_songs(mut self, songs: Vec<Song>) -> Self {
            self.songs = songs;
            self
        }

        pub fn with_albums(mut self, albums: Vec<Album>) -> Self {
            self.albums = albums;
            self
        }

        pub fn with_artists(mut self, artists: Vec<Artist>) -> Self {
            self.artists = artists;
            self
        }

        pub fn failing(mut self, category: Category, error: ProviderError) -> Self {
            self.failure = Some((category, error));
            self
        }

        pub fn recorded_calls(&self) -> Vec<(Category, String, usize, usize)> {
            self.calls.lock().unwrap().clone()
        }

        fn record(
            &self,
            category: Category,
            term: &str,
            limit: usize,
            offset: usize,
        ) -> Result<(), ProviderError> {
            self.calls
                .lock()
                .unwrap()
                .push((category, term.to_string(), limit, offset));
            match &self.failure {
                Some((failing, err)) if *failing == category => Err(err.clone()),
                _ => Ok(()),
            }
        }
    }

    #[async_trait]
    impl CatalogProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn search_songs(
            &self,
            term: &str,
            limit: usize,
            offset: usize,
        ) -> Result<Vec<Song>, ProviderError> {
            self.record(Category::Songs, term, limit, offset)?;
            Ok(self.songs.clone())
        }

        async fn search_albums(
            &self,
            term: &str,
            limit: usize,
            offset: usize,
        ) -> Result<Vec<Album>, ProviderError> {
            self.record(Category::Albums, term, limit, offset)?;
            Ok(self.albums.clone())
        }

        async fn search_artists(
            &self,
            term: &str,
            limit: usize,
            offset: usize,
        ) -> Result<Vec<Artist>, ProviderError> {
            self.record(Category::Artists, term, limit, offset)?;
            Ok(self.artists.clone())
        }
    }

    /// Provider that can only search songs.
    pub struct SongsOnlyProvider {
        pub songs: Vec<Song>,
    }

    #[async_trait]
    impl CatalogProvider for SongsOnlyProvider {
        fn name(&self) -> &str {
            "songs-only"
        }

        async fn search_songs(
            &self,
            _term: &str,
            _limit: usize,
            _offset: usize,
        ) -> Result<Vec<Song>, ProviderError> {
            Ok(self.songs.clone())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_records_calls() {
            let mock = MockProvider::default().with_songs(vec![song("Song", "Artist")]);
            let songs = mock.search_songs("song", 5, 10).await.unwrap();
            assert_eq!(songs.len(), 1);
            assert_eq!(
                mock.recorded_calls(),
                vec![(Category::Songs, "song".to_string(), 5, 10)]
            );
        }

        #[tokio::test]
        async fn test_mock_failure_only_hits_its_category() {
            let mock = MockProvider::default().failing(Category::Albums, ProviderError::Timeout);
            assert!(mock.search_artists("x", 5, 0).await.is_ok());
            assert!(matches!(
                mock.search_albums("x", 5, 0).await,
                Err(ProviderError::Timeout)
            ));
        }

        #[tokio::test]
        async fn test_missing_capability_is_empty_not_error() {
            let provider = SongsOnlyProvider {
                songs: vec![song("Song", "Artist")],
            };
            let albums = provider
                .search_category(Category::Albums, "x", 5, 0)
                .await
                .unwrap();
            assert!(albums.is_empty());
            assert_eq!(albums.category(), Category::Albums);

            let songs = provider
                .search_category(Category::Songs, "x", 5, 0)
                .await
                .unwrap();
            assert_eq!(songs.len(), 1);
        }
    }
}
