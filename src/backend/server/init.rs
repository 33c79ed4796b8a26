/**
 * Server Initialization
 *
 * This module handles setup of the Axum application: connecting the
 * repository, building the state and configuring routes.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Create the application state
 * 3. Create and configure the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{SqliteRepository, StoreError};

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing Rewatch backend server");

    let repository = SqliteRepository::connect(&config.database_url).await?;

    if config.admin_routes {
        tracing::warn!("Admin routes enabled; stored users are readable without authentication");
    }

    let app_state = AppState::new(Arc::new(repository), config);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
