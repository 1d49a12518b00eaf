//! Adapter layer: Convert Last.fm DTOs to domain models
//!
//! This is the ONLY place where Last.fm DTO types are converted to domain types.
//! Last.fm has no durable ids for search hits (the `mbid` is usually empty), so
//! every entity gets a synthesized id here.

use super::dto;
use crate::catalog::domain::{
    Album, AlbumAttributes, Artist, ArtistAttributes, Artwork, PlayParams, Song, SongAttributes,
};
use crate::catalog::identifier::synthesize;
use crate::catalog::relevance::{self, Candidate};

/// Image size we expose as artwork
const ARTWORK_SIZE: &str = "large";

/// Pixel edge of Last.fm's `large` images
const ARTWORK_EDGE: u32 = 174;

impl Candidate for dto::TrackMatch {
    fn name(&self) -> &str {
        &self.name
    }

    fn artist(&self) -> &str {
        &self.artist
    }
}

/// Convert fetched track matches to songs, most relevant first.
///
/// `skip` drops that many entries after ranking, for offsets that fall
/// inside the first fetched page.
pub fn to_songs(
    query: &str,
    tracks: Vec<dto::TrackMatch>,
    skip: usize,
    limit: usize,
) -> Vec<Song> {
    relevance::classify(query, tracks)
        .into_iter()
        .skip(skip)
        .take(limit)
        .map(to_song)
        .collect()
}

fn to_song(track: dto::TrackMatch) -> Song {
    let id = synthesize(Some(&track.artist), &track.name);
    Song::new(
        id.clone(),
        SongAttributes {
            artwork: pick_artwork(&track.image),
            name: track.name,
            artist_name: track.artist,
            genre_names: Vec::new(),
            url: track.url,
            play_params: PlayParams {
                id,
                kind: "song".to_string(),
            },
        },
    )
}

/// Convert fetched album matches to albums, in provider order
pub fn to_albums(albums: Vec<dto::AlbumMatch>, skip: usize, limit: usize) -> Vec<Album> {
    albums
        .into_iter()
        .skip(skip)
        .take(limit)
        .map(|album| {
            let id = synthesize(Some(&album.artist), &album.name);
            Album::new(
                id.clone(),
                AlbumAttributes {
                    artwork: pick_artwork(&album.image),
                    name: album.name,
                    artist_name: album.artist,
                    genre_names: Vec::new(),
                    url: album.url,
                    play_params: PlayParams {
                        id,
                        kind: "album".to_string(),
                    },
                },
            )
        })
        .collect()
}

/// Convert fetched artist matches to artists, in provider order
pub fn to_artists(artists: Vec<dto::ArtistMatch>, skip: usize, limit: usize) -> Vec<Artist> {
    artists
        .into_iter()
        .skip(skip)
        .take(limit)
        .map(|artist| {
            Artist::new(
                synthesize(None, &artist.name),
                ArtistAttributes {
                    artwork: pick_artwork(&artist.image),
                    name: artist.name,
                    genre_names: Vec::new(),
                    url: artist.url,
                },
            )
        })
        .collect()
}

/// Use the `large` image if it has a URL, otherwise no artwork.
fn pick_artwork(images: &[dto::Image]) -> Artwork {
    images
        .iter()
        .find(|img| img.size == ARTWORK_SIZE && !img.url.is_empty())
        .map(|img| Artwork {
            url: img.url.clone(),
            width: Some(ARTWORK_EDGE),
            height: Some(ARTWORK_EDGE),
        })
        .unwrap_or_default()
}
