/**
 * Watchlist Handlers
 *
 * This module implements the per-user watchlist endpoints.
 *
 * # Endpoints
 *
 * - `GET /watchlist/{userId}` - Read the persisted watchlist
 * - `POST /watchlist/{userId}` - Replace the watchlist, returns the canonical list
 *
 * # Errors
 *
 * * `400 Bad Request` - Body is not `{watchlist: WatchItem[]}`
 * * `404 Not Found` - No user with this id
 * * `500 Internal Server Error` - Database failure
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::watchlist::store::WatchlistStore;
use crate::shared::WatchlistBody;

/// Get watchlist handler
///
/// # Example Response
///
/// ```json
/// { "watchlist": [{ "id": 5, "title": "X", "year": 2024, "poster": "p" }] }
/// ```
pub async fn get_watchlist(
    State(store): State<WatchlistStore>,
    Path(user_id): Path<String>,
) -> Result<Json<WatchlistBody>, BackendError> {
    tracing::debug!("Get watchlist for user: {}", user_id);

    let watchlist = store.read(&user_id).await?;
    Ok(Json(WatchlistBody { watchlist }))
}

/// Replace watchlist handler
///
/// The candidate list is de-duplicated by the store before it is saved; the
/// response always carries the list that was actually persisted.
///
/// # Example Request
///
/// ```http
/// POST /watchlist/0b5c...e1 HTTP/1.1
/// Content-Type: application/json
///
/// { "watchlist": [{ "id": "1" }, { "id": 1 }, { "id": "2" }] }
/// ```
pub async fn replace_watchlist(
    State(store): State<WatchlistStore>,
    Path(user_id): Path<String>,
    payload: Result<Json<WatchlistBody>, JsonRejection>,
) -> Result<Json<WatchlistBody>, BackendError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!("Invalid watchlist body for {}: {}", user_id, rejection.body_text());
        BackendError::bad_request("Watchlist must be an array")
    })?;

    tracing::info!(
        "Replace watchlist for user: {} ({} items)",
        user_id,
        body.watchlist.len()
    );

    let watchlist = store.replace_all(&user_id, body.watchlist).await?;
    Ok(Json(WatchlistBody { watchlist }))
}
