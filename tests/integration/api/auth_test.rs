//! Authentication API integration tests
//!
//! Tests for the signup and login endpoints, plus the welcome route.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{signup_user, test_server, TEST_PASSWORD};
use rewatch::backend::routes::WELCOME_MESSAGE;

#[tokio::test]
async fn test_welcome() {
    let server = test_server().await;

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], WELCOME_MESSAGE);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = test_server().await;

    let response = server.get("/nope").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_signup_success() {
    let server = test_server().await;

    let response = server
        .post("/signup")
        .json(&json!({
            "email": "Test@Example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], "test@example.com");
    assert!(body["user"]["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_signup_validation_messages() {
    let server = test_server().await;

    let cases = [
        (json!({ "email": "a@example.com" }), "Email and password are required"),
        (json!({ "email": "", "password": "password123" }), "Email and password are required"),
        (
            json!({ "email": "a@example.com", "password": "12345" }),
            "Password must be at least 6 characters",
        ),
        (json!({ "email": "not-an-email", "password": "password123" }), "Invalid email format"),
        (json!({ "email": " a@example.com", "password": "password123" }), "Invalid email format"),
    ];

    for (payload, message) in cases {
        let response = server.post("/signup").json(&payload).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{payload}");
        let body: Value = response.json();
        assert_eq!(body["error"], message, "{payload}");
    }
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let server = test_server().await;
    signup_user(&server, "dup@example.com").await;

    // Same address after normalization
    let response = server
        .post("/signup")
        .json(&json!({
            "email": "DUP@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "Email is already in use");
}

#[tokio::test]
async fn test_login_success() {
    let server = test_server().await;
    let user = signup_user(&server, "login@example.com").await;

    let response = server
        .post("/login")
        .json(&json!({
            "email": "Login@Example.com",
            "password": TEST_PASSWORD
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["id"], user.id.as_str());
    assert_eq!(body["user"]["email"], "login@example.com");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = test_server().await;
    signup_user(&server, "known@example.com").await;

    for payload in [
        json!({ "email": "known@example.com", "password": "wrong-password" }),
        json!({ "email": "unknown@example.com", "password": TEST_PASSWORD }),
    ] {
        let response = server.post("/login").json(&payload).await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid email or password");
    }
}

#[tokio::test]
async fn test_login_missing_fields() {
    let server = test_server().await;

    let response = server.post("/login").json(&json!({ "email": "x@example.com" })).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Email and password are required");
}
