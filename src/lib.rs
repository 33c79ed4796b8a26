//! Re:Watch - Main Library
//!
//! Re:Watch keeps a per-user anime watchlist on a small HTTP backend and
//! lets a client add and remove entries optimistically, with anime metadata
//! coming from the public Jikan (MyAnimeList) API.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and backend
//!   - Watch items, identifier keys and watchlists
//!   - Request and response bodies
//!   - Error taxonomy and client configuration
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum router for signup, login and watchlist routes
//!   - SQLite user repository with bcrypt password hashes
//!   - Optional read-only admin routes
//!
//! - **`client`** - Client-side code
//!   - Backend API client and watchlist synchronizer
//!   - Session and episode progress persistence
//!   - Jikan client
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules and the `rewatch-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use rewatch::backend::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::default()).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Client library behind the `rewatch` binary
pub mod client;
