/**
 * Admin Route Configuration
 *
 * Mounted under `/admin` only when `REWATCH_ADMIN_ROUTES` is enabled.
 *
 * - `GET /admin/users`
 * - `GET /admin/users/{userId}`
 * - `GET /admin/stats`
 */

use axum::{routing::get, Router};

use crate::backend::admin::{get_user, list_users, stats};
use crate::backend::server::state::AppState;

pub fn configure_admin_routes(router: Router<AppState>) -> Router<AppState> {
    let admin = Router::new()
        .route("/users", get(list_users))
        .route("/users/{user_id}", get(get_user))
        .route("/stats", get(stats));

    router.nest("/admin", admin)
}
