//! JikanClient against a mock Jikan

use std::time::Duration;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use reqwest::Url;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{anime_json, page};
use rewatch::client::jikan::PLACEHOLDER_POSTER;
use rewatch::client::{JikanClient, JikanError};
use rewatch::shared::{ItemId, ReleaseYear};

/// Mock server mounted under `/v4`, like the real API
async fn jikan() -> (MockServer, JikanClient) {
    let server = MockServer::start().await;
    let base = Url::parse(&format!("{}/v4", server.uri())).unwrap();
    (server, JikanClient::new(base))
}

#[tokio::test]
async fn test_search_maps_cards() {
    let (server, client) = jikan().await;
    let mut untitled = anime_json(3, "", None);
    untitled["images"] = json!(null);
    Mock::given(method("GET"))
        .and(path("/v4/anime"))
        .and(query_param("q", "cowboy bebop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            anime_json(1, "Cowboy Bebop", Some(1998)),
            untitled,
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let cards = client.search("  cowboy bebop ").await.unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].id, Some(ItemId::from(1)));
    assert_eq!(cards[0].title, "Cowboy Bebop");
    assert_eq!(cards[0].year, Some(ReleaseYear::Number(1998)));
    assert_eq!(cards[1].title, "Untitled");
    assert_eq!(cards[1].year, Some(ReleaseYear::Text("Unknown".to_string())));
    assert_eq!(cards[1].poster.as_deref(), Some(PLACEHOLDER_POSTER));
}

#[tokio::test]
async fn test_blank_search_makes_no_request() {
    let (server, client) = jikan().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    assert!(client.search("   ").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_api_error_status() {
    let (server, client) = jikan().await;
    Mock::given(method("GET"))
        .and(path("/v4/top/anime"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let err = client.top_anime().await.unwrap_err();

    assert_matches!(err, JikanError::Api { status: 429, message } if message == "rate limited");
}

#[tokio::test]
async fn test_browse_sections_fail_independently() {
    let (server, client) = jikan().await;
    Mock::given(method("GET"))
        .and(path("/v4/top/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![anime_json(
            5114,
            "FMA:B",
            Some(2009),
        )])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/seasons/now"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/seasons/upcoming"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![])))
        .mount(&server)
        .await;

    let sections = client.browse(Duration::ZERO).await;

    assert_eq!(sections.top.unwrap()[0].title, "FMA:B");
    assert_matches!(sections.current_season, Err(JikanError::Api { status: 500, .. }));
    assert!(sections.upcoming.unwrap().is_empty());
}

#[tokio::test]
async fn test_episodes_numbering() {
    let (server, client) = jikan().await;
    Mock::given(method("GET"))
        .and(path("/v4/anime/1/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": { "last_visible_page": 1, "has_next_page": false },
            "data": [
                { "mal_id": 1, "title": "Asteroid Blues", "filler": false },
                { "mal_id": 2, "title": null, "filler": true }
            ]
        })))
        .mount(&server)
        .await;

    let episodes = client.episodes(1).await.unwrap();

    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[0].title, "Asteroid Blues");
    assert_eq!(episodes[1].number, 2);
    assert_eq!(episodes[1].title, "Episode 2");
    assert!(episodes[1].filler);
}

#[tokio::test]
async fn test_anime_detail() {
    let (server, client) = jikan().await;
    Mock::given(method("GET"))
        .and(path("/v4/anime/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": anime_json(1, "Cowboy Bebop", Some(1998))
        })))
        .mount(&server)
        .await;

    let anime = client.anime(1).await.unwrap();

    assert_eq!(anime.episodes, Some(12));
    assert_eq!(anime.display_title(), "Cowboy Bebop");
    assert_eq!(anime.status.as_deref(), Some("Finished Airing"));
    assert_eq!(anime.score, Some(8.75));
    assert_eq!(anime.scored_by, Some(1_000));
    assert_eq!(anime.synopsis.as_deref(), Some("Synopsis of Cowboy Bebop."));
}

#[tokio::test]
async fn test_empty_episode_list_numbers_from_count() {
    let (server, client) = jikan().await;
    Mock::given(method("GET"))
        .and(path("/v4/anime/7/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![])))
        .mount(&server)
        .await;

    let episodes = client.episodes_or_placeholder(7, Some(3)).await.unwrap();

    let titles: Vec<&str> = episodes.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Episode 1", "Episode 2", "Episode 3"]);
}

#[tokio::test]
async fn test_failed_episode_list_falls_back_to_count() {
    let (server, client) = jikan().await;
    Mock::given(method("GET"))
        .and(path("/v4/anime/7/episodes"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let episodes = client.episodes_or_placeholder(7, Some(2)).await.unwrap();
    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[1].number, 2);

    let err = client.episodes_or_placeholder(7, None).await.unwrap_err();
    assert_matches!(err, JikanError::Api { status: 404, .. });

    // Zero is an unknown count, not an empty show
    assert!(client.episodes_or_placeholder(7, Some(0)).await.is_err());
}

#[tokio::test]
async fn test_real_episode_list_wins_over_count() {
    let (server, client) = jikan().await;
    Mock::given(method("GET"))
        .and(path("/v4/anime/7/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            json!({ "mal_id": 1, "title": "Pilot" }),
        ])))
        .mount(&server)
        .await;

    let episodes = client.episodes_or_placeholder(7, Some(26)).await.unwrap();

    assert_eq!(episodes.len(), 1);
    assert_eq!(episodes[0].title, "Pilot");
}
