use serde::Deserialize;

use crate::shared::{ItemId, ReleaseYear, WatchItem};

/// Poster shown when Jikan has no image for an entry
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/220x300.png?text=Anime+Poster";

// ── Envelopes ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JikanPage<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    pub pagination: Option<JikanPagination>,
}

#[derive(Debug, Deserialize)]
pub struct JikanSingle<T> {
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct JikanPagination {
    #[serde(default)]
    pub has_next_page: bool,
}

// ── Anime ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct JikanAnime {
    pub mal_id: Option<u64>,
    pub title: Option<String>,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    pub year: Option<i64>,
    pub aired: Option<JikanAired>,
    pub images: Option<JikanImages>,
    pub synopsis: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub score: Option<f64>,
    pub scored_by: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanAired {
    pub prop: Option<JikanAiredProp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanAiredProp {
    pub from: Option<JikanDateParts>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanDateParts {
    pub year: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanImages {
    pub jpg: Option<JikanImageSet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanImageSet {
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
}

impl JikanAnime {
    /// First non-empty of the romaji, English and Japanese titles
    pub fn display_title(&self) -> String {
        [&self.title, &self.title_english, &self.title_japanese]
            .into_iter()
            .flatten()
            .find(|t| !t.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Release year, falling back to the year the airing started
    pub fn release_year(&self) -> Option<i64> {
        self.year.or_else(|| {
            self.aired
                .as_ref()
                .and_then(|a| a.prop.as_ref())
                .and_then(|p| p.from.as_ref())
                .and_then(|f| f.year)
        })
    }

    fn image_url(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|i| i.jpg.as_ref())
            .and_then(|jpg| jpg.image_url.as_deref())
            .filter(|url| !url.is_empty())
    }

    pub fn into_watch_item(self) -> WatchItem {
        let year = match self.release_year() {
            Some(year) => ReleaseYear::Number(year),
            None => ReleaseYear::Text("Unknown".to_string()),
        };
        WatchItem {
            id: self.mal_id.map(|id| ItemId::Number(id.into())),
            title: self.display_title(),
            year: Some(year),
            poster: Some(self.image_url().unwrap_or(PLACEHOLDER_POSTER).to_string()),
        }
    }
}

// ── Episodes ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct JikanEpisode {
    pub mal_id: Option<u32>,
    pub title: Option<String>,
    #[serde(default)]
    pub filler: bool,
}

/// Episode as presented to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeInfo {
    pub number: u32,
    pub title: String,
    pub filler: bool,
}

/// Number episodes by `mal_id`, then an "Episode N" title, then position
pub fn number_episodes(episodes: Vec<JikanEpisode>) -> Vec<EpisodeInfo> {
    episodes
        .into_iter()
        .enumerate()
        .map(|(index, ep)| {
            let number = ep
                .mal_id
                .filter(|n| *n > 0)
                .or_else(|| ep.title.as_deref().and_then(number_from_title))
                .unwrap_or(index as u32 + 1);
            let title = ep
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| format!("Episode {number}"));
            EpisodeInfo {
                number,
                title,
                filler: ep.filler,
            }
        })
        .collect()
}

/// `Episode 1` .. `Episode total`, for anime whose episode list is unavailable
pub fn placeholder_episodes(total: u32) -> Vec<EpisodeInfo> {
    (1..=total)
        .map(|number| EpisodeInfo {
            number,
            title: format!("Episode {number}"),
            filler: false,
        })
        .collect()
}

/// `N` from a title containing `Episode N` (any case)
fn number_from_title(title: &str) -> Option<u32> {
    let lower = title.to_ascii_lowercase();
    let rest = &lower[lower.find("episode")? + "episode".len()..];
    let digits = rest.trim_start();
    if digits.len() == rest.len() {
        return None;
    }
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok().filter(|n| *n > 0)
}
