//! Admin Module
//!
//! Read-only development routes for inspecting stored users. They are only
//! mounted when `REWATCH_ADMIN_ROUTES` is enabled and never expose password
//! hashes.
//!
//! # Routes
//!
//! - `GET /admin/users` - All users with their watchlist sizes
//! - `GET /admin/users/{userId}` - One user with the full watchlist
//! - `GET /admin/stats` - Aggregate counters

/// HTTP handlers
pub mod handlers;

pub use handlers::{get_user, list_users, stats, AdminStats, UserDetail, UserList, UserSummary};
