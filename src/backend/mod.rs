//! Backend Module
//!
//! This module contains the server-side code for Re:Watch: an Axum HTTP
//! server exposing signup/login and per-user watchlist read / replace-all,
//! persisted in SQLite.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Route configuration and middleware
//! - **`auth`** - Signup and login
//! - **`watchlist`** - Watchlist store, de-duplication and handlers
//! - **`admin`** - Optional inspection routes
//! - **`store`** - Repository trait and its SQLite implementation
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - `rewatch-server` binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── watchlist/      - Watchlist store and handlers
//! ├── admin/          - Admin handlers
//! ├── store/          - Persistence
//! └── error/          - Error types
//! ```
//!
//! # Consistency
//!
//! Each watchlist write is a single-row overwrite. The list returned by
//! `POST /watchlist/{userId}` is exactly what was persisted.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication
pub mod auth;

/// Watchlist store and handlers
pub mod watchlist;

/// Admin inspection routes
pub mod admin;

/// Persistence
pub mod store;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
pub use store::{SqliteRepository, StoreError, UserRepository};
pub use watchlist::WatchlistStore;
