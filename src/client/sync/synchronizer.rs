//! Watchlist synchronizer
//!
//! Applies add and remove optimistically to the local state, pushes the
//! resulting list to the backend and reconciles with what the backend
//! answers.
//!
//! # State Machine
//!
//! ```text
//! Idle --add/remove--> Saving --ok--> Idle (cache = canonical list)
//!                             \-err-> Idle (cache = reloaded list, error set)
//! ```
//!
//! At most one write is outstanding per session; a second add or remove
//! while saving fails with `Busy` without touching the network.
//!
//! # Locking
//!
//! State sits behind a `std::sync::Mutex` that is only held to decide and
//! publish, never across an `.await`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::client::backend::WatchlistBackend;
use crate::client::sync::state::SyncState;
use crate::shared::{ItemId, RewatchError, UserRef, WatchItem, Watchlist};

/// Optimistic watchlist synchronizer over a [`WatchlistBackend`]
pub struct Synchronizer<B> {
    backend: B,
    state: Mutex<SyncState>,
}

/// A write that has been published locally and must now reach the backend
struct PendingWrite {
    user_id: String,
    epoch: u64,
    candidate: Watchlist,
}

impl<B: WatchlistBackend> Synchronizer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(SyncState::default()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn lock(&self) -> MutexGuard<'_, SyncState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install `user` as the current user with an empty cache
    ///
    /// Call [`load`](Self::load) afterwards to fetch the persisted list.
    pub fn start_session(&self, user: UserRef) {
        tracing::debug!(user = %user.id, "session started");
        self.lock().reset(Some(user));
    }

    /// Clear the current user and everything cached for them
    pub fn end_session(&self) {
        tracing::debug!("session ended");
        self.lock().reset(None);
    }

    /// Replace the cache with the backend's list
    ///
    /// On failure the cache is emptied and the error recorded. A read that
    /// overlaps a write is returned to the caller but not applied; the write
    /// reconciles the cache itself.
    pub async fn load(&self) -> Result<Watchlist, RewatchError> {
        let (user_id, epoch, revision) = {
            let state = self.lock();
            let user = state.user.as_ref().ok_or(RewatchError::Unauthenticated)?;
            (user.id.clone(), state.epoch, state.revision)
        };

        let result = self.backend.read(&user_id).await;

        let mut state = self.lock();
        if state.epoch != epoch {
            tracing::debug!("discarding load from a previous session");
            return result;
        }
        if state.revision != revision || state.is_saving() {
            tracing::debug!("discarding load that overlapped a write");
            return result;
        }
        match &result {
            Ok(list) => {
                state.watchlist = list.clone();
                state.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load watchlist");
                state.watchlist = Watchlist::new();
                state.error = Some(err.to_string());
            }
        }
        result
    }

    /// Alias of [`load`](Self::load)
    pub async fn refresh(&self) -> Result<Watchlist, RewatchError> {
        self.load().await
    }

    /// Append `item` unless an item with the same id is already cached
    ///
    /// A duplicate is a no-op success returning the unchanged list without a
    /// network call.
    pub async fn add(&self, item: WatchItem) -> Result<Watchlist, RewatchError> {
        let pending = {
            let mut state = self.lock();
            let user_id = Self::guard(&state)?;

            if let Some(key) = item.key() {
                if state.watchlist.contains(&key) {
                    tracing::debug!(id = %key, "already in watchlist");
                    return Ok(state.watchlist.clone());
                }
            }

            let candidate = state.watchlist.with_item(item);
            Self::publish(&mut state, user_id, candidate)
        };

        self.commit(pending).await
    }

    /// Drop every cached item whose id matches `item_id`
    ///
    /// The resulting list is sent even when nothing matched.
    pub async fn remove(&self, item_id: &ItemId) -> Result<Watchlist, RewatchError> {
        let pending = {
            let mut state = self.lock();
            let user_id = Self::guard(&state)?;
            let candidate = state.watchlist.without(&item_id.key());
            Self::publish(&mut state, user_id, candidate)
        };

        self.commit(pending).await
    }

    /// Current user id, provided no write is outstanding
    fn guard(state: &SyncState) -> Result<String, RewatchError> {
        let user = state.user.as_ref().ok_or(RewatchError::Unauthenticated)?;
        if state.is_saving() {
            return Err(RewatchError::Busy);
        }
        Ok(user.id.clone())
    }

    fn publish(state: &mut SyncState, user_id: String, candidate: Watchlist) -> PendingWrite {
        state.begin_write(candidate.clone());
        PendingWrite {
            user_id,
            epoch: state.epoch,
            candidate,
        }
    }

    async fn commit(&self, pending: PendingWrite) -> Result<Watchlist, RewatchError> {
        let PendingWrite {
            user_id,
            epoch,
            candidate,
        } = pending;

        match self.backend.replace_all(&user_id, &candidate).await {
            Ok(canonical) => {
                let mut state = self.lock();
                if state.epoch == epoch {
                    state.settle(canonical.clone(), None);
                } else {
                    tracing::debug!("discarding write result from a previous session");
                }
                Ok(canonical)
            }
            Err(err) => {
                tracing::warn!(error = %err, "watchlist write failed, reloading");
                let reloaded = match self.backend.read(&user_id).await {
                    Ok(list) => list,
                    Err(reload_err) => {
                        tracing::warn!(error = %reload_err, "reload after failed write failed");
                        Watchlist::new()
                    }
                };

                let mut state = self.lock();
                if state.epoch == epoch {
                    state.settle(reloaded, Some(err.to_string()));
                }
                Err(err)
            }
        }
    }

    /// Cached watchlist
    pub fn watchlist(&self) -> Watchlist {
        self.lock().watchlist.clone()
    }

    pub fn is_saving(&self) -> bool {
        self.lock().is_saving()
    }

    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn current_user(&self) -> Option<UserRef> {
        self.lock().user.clone()
    }

    pub fn is_in_watchlist(&self, item_id: &ItemId) -> bool {
        self.lock().is_in_watchlist(item_id)
    }

    pub fn snapshot(&self) -> SyncState {
        self.lock().clone()
    }
}
