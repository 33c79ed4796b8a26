/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The user repository (credentials and watchlists)
 * - The watchlist store built on that repository
 * - The server configuration
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract only the part
 * they need, e.g. `State<WatchlistStore>` or `State<Arc<dyn UserRepository>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::server::config::ServerConfig;
use crate::backend::store::UserRepository;
use crate::backend::watchlist::WatchlistStore;

/// Central state container for the Axum application
#[derive(Clone)]
pub struct AppState {
    /// User persistence
    pub repository: Arc<dyn UserRepository>,

    /// Read / replace-all watchlist access over `repository`
    pub watchlists: WatchlistStore,

    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(repository: Arc<dyn UserRepository>, config: ServerConfig) -> Self {
        Self {
            watchlists: WatchlistStore::new(repository.clone()),
            repository,
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for Arc<dyn UserRepository> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.repository.clone()
    }
}

impl FromRef<AppState> for WatchlistStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.watchlists.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
