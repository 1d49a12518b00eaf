//! Last.fm API integration
//!
//! Last.fm's search methods back all three catalog categories.
//! API docs: https://www.last.fm/api

mod adapter;
mod client;
pub mod dto;

pub use client::{DEFAULT_BASE_URL, LastFmClient, LastFmCredentials};
