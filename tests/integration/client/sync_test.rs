//! Client and backend end to end over real HTTP

use pretty_assertions::assert_eq;

use crate::common::{spawn_server, TEST_PASSWORD};
use rewatch::client::{ApiClient, Synchronizer};
use rewatch::shared::{Credentials, ItemId, RewatchError, WatchItem};

#[tokio::test]
async fn test_signup_add_remove_roundtrip() {
    let api = ApiClient::new(spawn_server().await);
    let user = api
        .signup(&Credentials::new("sync@example.com", TEST_PASSWORD))
        .await
        .unwrap();

    let sync = Synchronizer::new(api.clone());
    sync.start_session(user.clone());
    assert!(sync.load().await.unwrap().is_empty());

    sync.add(WatchItem::new(1, "Cowboy Bebop")).await.unwrap();
    sync.add(WatchItem::new("20", "Naruto")).await.unwrap();
    // "1" is the same anime as 1
    let list = sync.add(WatchItem::new("1", "Cowboy Bebop again")).await.unwrap();
    assert_eq!(list.len(), 2);

    assert!(sync.is_in_watchlist(&ItemId::from(20)));

    let list = sync.remove(&ItemId::from(1)).await.unwrap();
    assert_eq!(list.len(), 1);

    // A second client sees what the first one stored
    let other = Synchronizer::new(api.clone());
    other.start_session(user);
    let stored = other.load().await.unwrap();
    assert_eq!(stored, list);
    assert_eq!(stored.items()[0].title, "Naruto");
}

#[tokio::test]
async fn test_login_roundtrip_and_bad_password() {
    let api = ApiClient::new(spawn_server().await);
    let created = api
        .signup(&Credentials::new("Round@Example.com", TEST_PASSWORD))
        .await
        .unwrap();

    let user = api
        .login(&Credentials::new("round@example.com", TEST_PASSWORD))
        .await
        .unwrap();
    assert_eq!(user, created);

    let err = api
        .login(&Credentials::new("round@example.com", "nope-nope"))
        .await
        .unwrap_err();
    assert_eq!(err, RewatchError::InvalidCredentials);

    let err = api
        .signup(&Credentials::new("round@example.com", TEST_PASSWORD))
        .await
        .unwrap_err();
    assert_eq!(err, RewatchError::conflict("Email is already in use"));
}

#[tokio::test]
async fn test_unknown_user_load_records_error() {
    let api = ApiClient::new(spawn_server().await);
    let sync = Synchronizer::new(api);
    sync.start_session(rewatch::shared::UserRef {
        id: "ghost".to_string(),
        email: "ghost@example.com".to_string(),
    });

    let err = sync.load().await.unwrap_err();

    assert_eq!(err, RewatchError::not_found("User not found"));
    assert!(sync.watchlist().is_empty());
    assert_eq!(sync.error().as_deref(), Some("User not found"));
}
