/**
 * Watchlist Store
 *
 * The authoritative owner of every user's watchlist. Clients read a list and
 * replace it whole; the store de-duplicates each candidate before it is
 * persisted and hands the canonical list back.
 *
 * # De-duplication
 *
 * Items are scanned in order and compared by normalized id. The first
 * occurrence of an id wins. Items without an id are kept as they are and
 * never compared against each other.
 */

use std::collections::HashSet;
use std::sync::Arc;

use crate::backend::store::{StoreError, UserRepository};
use crate::shared::{ItemKey, Watchlist};

/// Read and replace-all access to per-user watchlists
#[derive(Clone)]
pub struct WatchlistStore {
    repository: Arc<dyn UserRepository>,
}

impl WatchlistStore {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Persisted watchlist of `user_id`
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no user has this id.
    pub async fn read(&self, user_id: &str) -> Result<Watchlist, StoreError> {
        self.repository.read_watchlist(user_id).await
    }

    /// Replace the watchlist of `user_id` with the canonical form of `candidate`
    ///
    /// # Returns
    ///
    /// The list that was persisted.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no user has this id.
    pub async fn replace_all(
        &self,
        user_id: &str,
        candidate: Watchlist,
    ) -> Result<Watchlist, StoreError> {
        let canonical = canonicalize(candidate);
        self.repository.write_watchlist(user_id, &canonical).await?;
        Ok(canonical)
    }
}

/// De-duplicate `candidate` by normalized id, first occurrence wins
pub fn canonicalize(candidate: Watchlist) -> Watchlist {
    let mut seen: HashSet<ItemKey> = HashSet::new();
    candidate
        .into_iter()
        .filter(|item| match item.key() {
            Some(key) => seen.insert(key),
            None => true,
        })
        .collect()
}
