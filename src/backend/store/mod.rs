//! User Repository Module
//!
//! This module defines the persistence seam of the backend. Every user is one
//! record holding its credentials and its watchlist; handlers never touch a
//! database directly, they go through a [`UserRepository`] injected in the
//! application state.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - Repository trait, record and error types
//! └── sqlite.rs   - SQLite implementation (sqlx)
//! ```
//!
//! # Write Model
//!
//! Watchlists are written whole. `write_watchlist` overwrites the stored
//! list in a single statement, so concurrent writers for the same user are
//! last-writer-wins.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::shared::{UserRef, Watchlist};

/// SQLite repository
pub mod sqlite;

pub use sqlite::SqliteRepository;

/// A user as stored by the repository
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Unique user ID (UUID string)
    pub id: String,
    /// Normalized email (trimmed, lower-cased)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Persisted watchlist
    pub watchlist: Watchlist,
}

impl UserRecord {
    /// Public view of this user, without the password hash
    pub fn to_user_ref(&self) -> UserRef {
        UserRef {
            id: self.id.clone(),
            email: self.email.clone(),
        }
    }
}

/// Repository errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// No user with the requested id
    #[error("user not found")]
    NotFound,

    /// Email is already registered
    #[error("email already registered")]
    Conflict,

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure at startup
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Stored watchlist could not be decoded or encoded
    #[error("corrupt watchlist data: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Aggregate counters for the admin routes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub total_users: u64,
    pub users_with_watchlist: u64,
    pub total_watchlist_items: u64,
}

/// Persistence operations the backend needs
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; `Conflict` if the email is taken
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<UserRecord, StoreError>;

    /// Look up a user by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Look up a user by id
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, StoreError>;

    /// All users, oldest first
    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Stored watchlist; `NotFound` for unknown users
    async fn read_watchlist(&self, user_id: &str) -> Result<Watchlist, StoreError>;

    /// Overwrite the stored watchlist; `NotFound` for unknown users
    async fn write_watchlist(&self, user_id: &str, watchlist: &Watchlist) -> Result<(), StoreError>;

    /// Aggregate counters over all users
    async fn stats(&self) -> Result<StoreStats, StoreError> {
        let users = self.list_users().await?;
        Ok(StoreStats {
            total_users: users.len() as u64,
            users_with_watchlist: users.iter().filter(|u| !u.watchlist.is_empty()).count() as u64,
            total_watchlist_items: users.iter().map(|u| u.watchlist.len() as u64).sum(),
        })
    }
}
