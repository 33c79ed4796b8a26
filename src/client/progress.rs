//! Episode progress
//!
//! Watched episode numbers and the last known episode total, per user and per
//! anime. Kept locally in `progress.json`; the backend never sees it.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::client::error::ClientError;

pub const PROGRESS_FILE: &str = "progress.json";

/// Where a user stands on one anime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchStatus {
    NotStarted,
    Watching,
    Complete,
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotStarted => "Not Started",
            Self::Watching => "Watching",
            Self::Complete => "Complete",
        })
    }
}

/// Progress on one anime
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeProgress {
    #[serde(default)]
    pub watched: BTreeSet<u32>,
    /// Episode count, once it has been seen
    #[serde(default)]
    pub total: Option<u32>,
}

impl AnimeProgress {
    pub fn status(&self) -> WatchStatus {
        if self.watched.is_empty() {
            return WatchStatus::NotStarted;
        }
        match self.total {
            Some(total) if total > 0 && self.watched.len() >= total as usize => {
                WatchStatus::Complete
            }
            _ => WatchStatus::Watching,
        }
    }
}

/// `progress.json` layout: user id → anime id → progress
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProgressFile {
    #[serde(default)]
    users: BTreeMap<String, BTreeMap<u64, AnimeProgress>>,
}

/// File-backed progress for every user of this machine
#[derive(Debug)]
pub struct ProgressBook {
    path: PathBuf,
    data: ProgressFile,
}

impl ProgressBook {
    /// Open `progress.json` under `data_dir`
    ///
    /// A missing file starts empty. A corrupt file is logged and also starts
    /// empty; it is overwritten on the next change.
    pub fn open(data_dir: &Path) -> Result<Self, ClientError> {
        let path = data_dir.join(PROGRESS_FILE);
        let data = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "ignoring corrupt progress file"
                );
                ProgressFile::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => ProgressFile::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, data })
    }

    pub fn progress(&self, user_id: &str, anime_id: u64) -> Option<&AnimeProgress> {
        self.data.users.get(user_id)?.get(&anime_id)
    }

    pub fn status(&self, user_id: &str, anime_id: u64) -> WatchStatus {
        self.progress(user_id, anime_id)
            .map(AnimeProgress::status)
            .unwrap_or(WatchStatus::NotStarted)
    }

    /// Flip `episode` between watched and unwatched, then save
    ///
    /// Returns whether the episode is now watched.
    pub fn toggle_episode(
        &mut self,
        user_id: &str,
        anime_id: u64,
        episode: u32,
    ) -> Result<bool, ClientError> {
        let entry = self.entry(user_id, anime_id);
        let watched = if entry.watched.remove(&episode) {
            false
        } else {
            entry.watched.insert(episode);
            true
        };
        self.save()?;
        Ok(watched)
    }

    /// Record the episode count of an anime, then save
    pub fn set_total(
        &mut self,
        user_id: &str,
        anime_id: u64,
        total: u32,
    ) -> Result<(), ClientError> {
        self.entry(user_id, anime_id).total = Some(total);
        self.save()
    }

    fn entry(&mut self, user_id: &str, anime_id: u64) -> &mut AnimeProgress {
        self.data
            .users
            .entry(user_id.to_string())
            .or_default()
            .entry(anime_id)
            .or_default()
    }

    fn save(&self) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(&self.data)?)?;
        Ok(())
    }
}
