//! Client Module
//!
//! Everything that runs on the user's machine: the backend HTTP client, the
//! optimistic watchlist synchronizer, the persisted session, local episode
//! progress and the Jikan metadata client. The `rewatch` command-line binary
//! (`main.rs`) is a thin front end over these.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs        - Module exports
//! ├── main.rs       - `rewatch` binary
//! ├── config.rs     - Environment / config.toml loading
//! ├── error.rs      - ClientError
//! ├── backend.rs    - WatchlistBackend trait
//! ├── api.rs        - reqwest client for the backend
//! ├── session.rs    - session.json persistence
//! ├── progress.rs   - progress.json episode tracking
//! ├── sync/         - Synchronizer and its state
//! └── jikan/        - Jikan v4 client
//! ```

pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod jikan;
pub mod progress;
pub mod session;
pub mod sync;

pub use api::ApiClient;
pub use backend::WatchlistBackend;
pub use config::load_config;
pub use error::ClientError;
pub use jikan::{JikanClient, JikanError};
pub use progress::{ProgressBook, WatchStatus};
pub use session::SessionStore;
pub use sync::{SyncPhase, SyncState, Synchronizer};
