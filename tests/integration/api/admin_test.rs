//! Admin API integration tests

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{signup_user, test_server, test_server_with};

#[tokio::test]
async fn test_admin_routes_disabled_by_default() {
    let server = test_server().await;

    for path in ["/admin/users", "/admin/stats"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn test_admin_views() {
    let server = test_server_with(true).await;
    let alice = signup_user(&server, "alice@example.com").await;
    signup_user(&server, "bob@example.com").await;
    server
        .post(&format!("/watchlist/{}", alice.id))
        .json(&json!({ "watchlist": [
            { "id": 1, "title": "Cowboy Bebop" },
            { "id": 20, "title": "Naruto" },
            { "id": 1, "title": "Cowboy Bebop (dup)" }
        ] }))
        .await
        .assert_status_ok();

    let users: Value = server.get("/admin/users").await.json();
    assert_eq!(users["count"], 2);
    assert!(users["users"]
        .as_array()
        .unwrap()
        .iter()
        .all(|u| u.get("password").is_none() && u.get("passwordHash").is_none()));

    let detail = server.get(&format!("/admin/users/{}", alice.id)).await;
    assert_eq!(detail.status_code(), StatusCode::OK);
    let detail: Value = detail.json();
    assert_eq!(detail["email"], "alice@example.com");
    assert_eq!(detail["watchlist"].as_array().unwrap().len(), 2);

    let stats: Value = server.get("/admin/stats").await.json();
    assert_eq!(stats["totalUsers"], 2);
    assert_eq!(stats["usersWithWatchlist"], 1);
    assert_eq!(stats["totalWatchlistItems"], 2);
}

#[tokio::test]
async fn test_admin_unknown_user() {
    let server = test_server_with(true).await;

    let response = server.get("/admin/users/missing").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "User not found");
}
