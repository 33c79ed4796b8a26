use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use super::error::JikanError;
use super::types::{
    number_episodes, placeholder_episodes, EpisodeInfo, JikanAnime, JikanEpisode, JikanPage,
    JikanSingle,
};
use crate::shared::WatchItem;

/// Pause between sequential `browse` requests (Jikan allows ~3 req/s).
pub const DEFAULT_BROWSE_PAUSE: Duration = Duration::from_secs(1);

/// Results of [`JikanClient::browse`]; each section fails independently.
#[derive(Debug)]
pub struct BrowseSections {
    pub top: Result<Vec<WatchItem>, JikanError>,
    pub current_season: Result<Vec<WatchItem>, JikanError>,
    pub upcoming: Result<Vec<WatchItem>, JikanError>,
}

/// Jikan v4 (MyAnimeList) API client.
#[derive(Debug, Clone)]
pub struct JikanClient {
    base: Url,
    http: Client,
}

impl JikanClient {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            http: Client::new(),
        }
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, JikanError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "Jikan API error");
            Err(JikanError::Api {
                status,
                message: body,
            })
        }
    }

    fn url(&self, segments: &[&str]) -> Result<Url, JikanError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| JikanError::Parse(format!("invalid base URL: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, JikanError> {
        tracing::debug!(%url, "Jikan request");
        let resp = self.http.get(url).query(query).send().await?;
        let resp = Self::check_response(resp).await?;
        resp.json().await.map_err(|e| JikanError::Parse(e.to_string()))
    }

    async fn cards(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Vec<WatchItem>, JikanError> {
        let page: JikanPage<JikanAnime> = self.get_json(self.url(segments)?, query).await?;
        Ok(page
            .data
            .into_iter()
            .map(JikanAnime::into_watch_item)
            .collect())
    }

    /// All-time top anime (`/top/anime`).
    pub async fn top_anime(&self) -> Result<Vec<WatchItem>, JikanError> {
        self.cards(&["top", "anime"], &[]).await
    }

    /// Currently airing season (`/seasons/now`).
    pub async fn season_now(&self) -> Result<Vec<WatchItem>, JikanError> {
        self.cards(&["seasons", "now"], &[]).await
    }

    /// Next season (`/seasons/upcoming`).
    pub async fn season_upcoming(&self) -> Result<Vec<WatchItem>, JikanError> {
        self.cards(&["seasons", "upcoming"], &[]).await
    }

    /// Title search (`/anime?q=`). A blank query returns nothing without a request.
    pub async fn search(&self, query: &str) -> Result<Vec<WatchItem>, JikanError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.cards(&["anime"], &[("q", query)]).await
    }

    /// Full entry for one anime (`/anime/{id}`).
    pub async fn anime(&self, id: u64) -> Result<JikanAnime, JikanError> {
        let id = id.to_string();
        let single: JikanSingle<JikanAnime> =
            self.get_json(self.url(&["anime", id.as_str()])?, &[]).await?;
        single
            .data
            .ok_or_else(|| JikanError::Parse(format!("anime {id} has no data")))
    }

    /// First page of episodes (`/anime/{id}/episodes`).
    pub async fn episodes(&self, id: u64) -> Result<Vec<EpisodeInfo>, JikanError> {
        let id = id.to_string();
        let page: JikanPage<JikanEpisode> = self
            .get_json(self.url(&["anime", id.as_str(), "episodes"])?, &[])
            .await?;
        if page.pagination.as_ref().is_some_and(|p| p.has_next_page) {
            tracing::debug!(anime = %id, "episodes are paginated, using first page only");
        }
        Ok(number_episodes(page.data))
    }

    /// Episodes of `id`, or `Episode 1..total` when the list is empty or
    /// cannot be fetched and `total` (the anime's episode count) is known.
    pub async fn episodes_or_placeholder(
        &self,
        id: u64,
        total: Option<u32>,
    ) -> Result<Vec<EpisodeInfo>, JikanError> {
        let total = total.filter(|t| *t > 0);
        match self.episodes(id).await {
            Ok(episodes) if !episodes.is_empty() => Ok(episodes),
            Ok(episodes) => Ok(total.map(placeholder_episodes).unwrap_or(episodes)),
            Err(err) => match total {
                Some(total) => {
                    tracing::warn!(
                        anime = id,
                        error = %err,
                        "episode list unavailable, numbering from count"
                    );
                    Ok(placeholder_episodes(total))
                }
                None => Err(err),
            },
        }
    }

    /// Top, current season and upcoming, fetched one after another with
    /// `pause` between requests.
    pub async fn browse(&self, pause: Duration) -> BrowseSections {
        let top = self.top_anime().await;
        tokio::time::sleep(pause).await;
        let current_season = self.season_now().await;
        tokio::time::sleep(pause).await;
        let upcoming = self.season_upcoming().await;

        BrowseSections {
            top,
            current_season,
            upcoming,
        }
    }
}
