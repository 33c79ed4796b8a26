//! Watchlist Module
//!
//! Backend ownership of per-user watchlists: the [`WatchlistStore`] with its
//! canonical de-duplication, and the HTTP handlers in front of it.
//!
//! # Module Structure
//!
//! ```text
//! watchlist/
//! ├── mod.rs       - Module exports
//! ├── store.rs     - Read / replace-all and de-duplication
//! └── handlers.rs  - GET and POST /watchlist/{userId}
//! ```

/// Read / replace-all store
pub mod store;

/// HTTP handlers
pub mod handlers;

pub use handlers::{get_watchlist, replace_watchlist};
pub use store::{canonicalize, WatchlistStore};
