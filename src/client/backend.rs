//! Watchlist backend seam
//!
//! The synchronizer talks to the server through [`WatchlistBackend`] so it
//! can be driven by the HTTP client in production and by an in-process fake
//! in tests.

use std::future::Future;

use crate::shared::{RewatchError, Watchlist};

/// Authoritative watchlist storage, as seen from the client
pub trait WatchlistBackend: Send + Sync {
    /// Current persisted watchlist of `user_id`
    fn read(&self, user_id: &str) -> impl Future<Output = Result<Watchlist, RewatchError>> + Send;

    /// Replace the watchlist of `user_id`, returning the canonical list
    fn replace_all(
        &self,
        user_id: &str,
        watchlist: &Watchlist,
    ) -> impl Future<Output = Result<Watchlist, RewatchError>> + Send;
}
