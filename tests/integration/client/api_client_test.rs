//! ApiClient against a mock backend

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use reqwest::Url;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rewatch::client::{ApiClient, Synchronizer};
use rewatch::shared::{Credentials, RewatchError, UserRef, WatchItem, Watchlist};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(Url::parse(&server.uri()).unwrap())
}

fn user() -> UserRef {
    UserRef {
        id: "u-1".to_string(),
        email: "a@example.com".to_string(),
    }
}

#[tokio::test]
async fn test_login_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({ "email": "a@example.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": { "id": "u-1", "email": "a@example.com" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client(&server)
        .login(&Credentials::new("a@example.com", "secret1"))
        .await
        .unwrap();

    assert_eq!(user.id, "u-1");
}

#[tokio::test]
async fn test_server_messages_are_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "error": "Email is already in use" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": "Invalid email or password" })),
        )
        .mount(&server)
        .await;

    let api = client(&server);
    let creds = Credentials::new("a@example.com", "secret1");

    let err = api.signup(&creds).await.unwrap_err();
    assert_eq!(err, RewatchError::conflict("Email is already in use"));

    let err = api.login(&creds).await.unwrap_err();
    assert_eq!(err, RewatchError::InvalidCredentials);
}

#[tokio::test]
async fn test_default_messages_without_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/watchlist/u-1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let api = client(&server);

    let err = api
        .signup(&Credentials::new("a@example.com", "secret1"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Signup failed. Please try again.");

    let err = api.fetch_watchlist("u-1").await.unwrap_err();
    assert_eq!(err, RewatchError::internal("Failed to load watchlist."));
}

#[tokio::test]
async fn test_network_error() {
    // Bind then drop a listener so its port refuses connections
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let api = ApiClient::new(Url::parse(&format!("http://{addr}")).unwrap());

    let err = api.save_watchlist("u-1", &Watchlist::new()).await.unwrap_err();

    assert_eq!(err, RewatchError::network("Network error while saving watchlist."));
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/watchlist/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_watchlist("u-1").await.unwrap_err();

    assert_matches!(err, RewatchError::Internal(m) if m == "Unexpected response from server.");
}

#[tokio::test]
async fn test_save_sends_envelope_and_returns_canonical_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/watchlist/u-1"))
        .and(body_json(json!({
            "watchlist": [{ "id": 1, "title": "A", "year": null, "poster": null }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "watchlist": [{ "id": 1, "title": "A" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let list = client(&server)
        .save_watchlist("u-1", &Watchlist::from(vec![WatchItem::new(1, "A")]))
        .await
        .unwrap();

    assert_eq!(list, Watchlist::from(vec![WatchItem::new(1, "A")]));
}

#[tokio::test]
async fn test_synchronizer_rolls_back_failed_write() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/watchlist/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "watchlist": [{ "id": 1, "title": "A" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/watchlist/u-1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "disk full" })))
        .mount(&server)
        .await;

    let sync = Synchronizer::new(client(&server));
    sync.start_session(user());
    sync.load().await.unwrap();

    let err = sync.add(WatchItem::new(2, "B")).await.unwrap_err();

    assert_eq!(err, RewatchError::internal("disk full"));
    assert_eq!(sync.watchlist(), Watchlist::from(vec![WatchItem::new(1, "A")]));
    assert_eq!(sync.error().as_deref(), Some("disk full"));
    assert!(!sync.is_saving());
}
