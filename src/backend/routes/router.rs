/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Middleware
 *
 * - `TraceLayer` - One span per request, logged through `tracing`
 * - `CorsLayer::permissive` - Any origin, method and header
 *
 * # Fallback
 *
 * Unknown routes get `404 {error: "Not found"}`.
 */

use axum::{http::StatusCode, response::Json, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::admin_routes::configure_admin_routes;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::shared::ErrorBody;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// ## API Routes
///
/// - `GET /` - Welcome message
/// - `POST /signup`, `POST /login` - Authentication
/// - `GET|POST /watchlist/{userId}` - Watchlist read / replace
///
/// ## Admin Routes (optional)
///
/// - `GET /admin/users`, `GET /admin/users/{userId}`, `GET /admin/stats`
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let router = if app_state.config.admin_routes {
        configure_admin_routes(router)
    } else {
        router
    };

    router
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
        }),
    )
}
