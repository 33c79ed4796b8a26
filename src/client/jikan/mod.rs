//! Jikan (MyAnimeList) metadata client
//!
//! Listing endpoints are mapped straight into [`WatchItem`](crate::shared::WatchItem)
//! cards so results can be added to a watchlist as they are.

mod client;
mod error;
pub mod types;

pub use client::{BrowseSections, JikanClient, DEFAULT_BROWSE_PAUSE};
pub use error::JikanError;
pub use types::{EpisodeInfo, JikanAnime, PLACEHOLDER_POSTER};
