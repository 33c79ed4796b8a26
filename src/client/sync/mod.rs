//! Watchlist Synchronization
//!
//! Keeps a locally cached watchlist consistent with the backend using
//! optimistic updates, reconciliation with the canonical list and rollback by
//! reload on failure.
//!
//! # Module Structure
//!
//! ```text
//! sync/
//! ├── mod.rs           - Module exports
//! ├── state.rs         - SyncState and SyncPhase
//! └── synchronizer.rs  - Add / remove / load protocol
//! ```

/// Local watchlist state
pub mod state;

/// Optimistic synchronizer
pub mod synchronizer;

pub use state::{SyncPhase, SyncState};
pub use synchronizer::Synchronizer;
