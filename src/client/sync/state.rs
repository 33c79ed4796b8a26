//! Local watchlist state
//!
//! The client's cached view of the current user's watchlist. It is readable
//! at any time, including while a write is suspended on the network.

use crate::shared::{ItemId, UserRef, Watchlist};

/// Whether a watchlist write is outstanding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncPhase {
    #[default]
    Idle,
    Saving,
}

/// Snapshot of the synchronizer's state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncState {
    /// Cached watchlist: optimistic while saving, authoritative otherwise
    pub watchlist: Watchlist,
    pub phase: SyncPhase,
    /// Message of the most recent failed operation
    pub error: Option<String>,
    pub user: Option<UserRef>,
    /// Bumped on every session start and end
    pub epoch: u64,
    /// Bumped whenever a write starts or settles
    pub revision: u64,
}

impl SyncState {
    pub fn is_saving(&self) -> bool {
        self.phase == SyncPhase::Saving
    }

    pub fn is_in_watchlist(&self, id: &ItemId) -> bool {
        self.watchlist.contains(&id.key())
    }

    /// Install `user` with an empty cache
    pub(crate) fn reset(&mut self, user: Option<UserRef>) {
        *self = SyncState {
            user,
            epoch: self.epoch.wrapping_add(1),
            ..SyncState::default()
        };
    }

    /// Publish an optimistic candidate and mark the write as outstanding
    pub(crate) fn begin_write(&mut self, candidate: Watchlist) {
        self.watchlist = candidate;
        self.phase = SyncPhase::Saving;
        self.error = None;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Replace the cache whole and return to idle
    pub(crate) fn settle(&mut self, watchlist: Watchlist, error: Option<String>) {
        self.watchlist = watchlist;
        self.phase = SyncPhase::Idle;
        self.error = error;
        self.revision = self.revision.wrapping_add(1);
    }
}
