/**
 * Admin Handlers
 *
 * Development-only inspection endpoints. Response fields are camelCase.
 *
 * # Errors
 *
 * * `404 Not Found` - Unknown user id on `/admin/users/{userId}`
 * * `500 Internal Server Error` - Database failure
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::store::{StoreError, UserRecord, UserRepository};
use crate::shared::Watchlist;

/// One row of `GET /admin/users`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub watchlist_count: usize,
}

impl From<&UserRecord> for UserSummary {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
            watchlist_count: user.watchlist.len(),
        }
    }
}

/// `GET /admin/users` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    pub count: usize,
    pub users: Vec<UserSummary>,
}

/// `GET /admin/users/{userId}` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub watchlist: Watchlist,
    pub watchlist_count: usize,
}

impl From<UserRecord> for UserDetail {
    fn from(user: UserRecord) -> Self {
        let watchlist_count = user.watchlist.len();
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            watchlist: user.watchlist,
            watchlist_count,
        }
    }
}

/// `GET /admin/stats` response
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub users_with_watchlist: u64,
    pub total_watchlist_items: u64,
}

/// List all users
pub async fn list_users(
    State(repository): State<Arc<dyn UserRepository>>,
) -> Result<Json<UserList>, BackendError> {
    let users = repository.list_users().await?;
    tracing::debug!("Admin: listing {} users", users.len());

    Ok(Json(UserList {
        count: users.len(),
        users: users.iter().map(UserSummary::from).collect(),
    }))
}

/// Single user with the full watchlist
pub async fn get_user(
    State(repository): State<Arc<dyn UserRepository>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserDetail>, BackendError> {
    let user = repository
        .find_by_id(&user_id)
        .await?
        .ok_or(StoreError::NotFound)?;

    Ok(Json(UserDetail::from(user)))
}

/// Aggregate counters
pub async fn stats(
    State(repository): State<Arc<dyn UserRepository>>,
) -> Result<Json<AdminStats>, BackendError> {
    let stats = repository.stats().await?;

    Ok(Json(AdminStats {
        total_users: stats.total_users,
        users_with_watchlist: stats.users_with_watchlist,
        total_watchlist_items: stats.total_watchlist_items,
    }))
}
