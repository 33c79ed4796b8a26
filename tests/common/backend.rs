//! Backend fixtures
//!
//! Every server gets its own `sqlite::memory:` database, so tests never see
//! each other's users.

use std::sync::Arc;

use axum_test::TestServer;
use reqwest::Url;
use serde_json::json;

use rewatch::backend::routes::create_router;
use rewatch::backend::{AppState, ServerConfig, SqliteRepository, UserRepository};
use rewatch::shared::UserRef;

pub const TEST_PASSWORD: &str = "password123";

/// App state over a fresh in-memory database
pub async fn test_state(admin_routes: bool) -> AppState {
    let config = ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        admin_routes,
        ..ServerConfig::default()
    };
    let repository = SqliteRepository::connect(&config.database_url)
        .await
        .expect("in-memory database");
    let repository: Arc<dyn UserRepository> = Arc::new(repository);
    AppState::new(repository, config)
}

/// In-process test server with admin routes off
pub async fn test_server() -> TestServer {
    test_server_with(false).await
}

pub async fn test_server_with(admin_routes: bool) -> TestServer {
    let app = create_router(test_state(admin_routes).await);
    TestServer::new(app).expect("test server")
}

/// Serve the app on an ephemeral local port for real HTTP clients
pub async fn spawn_server() -> Url {
    let app = create_router(test_state(false).await);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    Url::parse(&format!("http://{addr}")).expect("server url")
}

/// Sign up `email` with [`TEST_PASSWORD`] and return the created user
pub async fn signup_user(server: &TestServer, email: &str) -> UserRef {
    let response = server
        .post("/signup")
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    serde_json::from_value(body["user"].clone()).expect("user in signup response")
}
