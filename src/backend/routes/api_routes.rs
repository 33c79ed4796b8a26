/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /signup` - User registration
 * - `POST /login` - User login
 *
 * ## Watchlist
 * - `GET /watchlist/{userId}` - Read a user's watchlist
 * - `POST /watchlist/{userId}` - Replace a user's watchlist
 *
 * ## Misc
 * - `GET /` - Welcome message
 */

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, signup};
use crate::backend::server::state::AppState;
use crate::backend::watchlist::{get_watchlist, replace_watchlist};
use crate::shared::api::WelcomeBody;

pub const WELCOME_MESSAGE: &str = "Welcome to the Rewatch Backend!";

/// Configure API routes
///
/// There is no authentication on the watchlist routes; the user id in the
/// path is trusted as given.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(welcome))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route(
            "/watchlist/{user_id}",
            get(get_watchlist).post(replace_watchlist),
        )
}

async fn welcome() -> Json<WelcomeBody> {
    Json(WelcomeBody {
        message: WELCOME_MESSAGE.to_string(),
    })
}
