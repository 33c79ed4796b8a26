//! Watch Item Data Model
//!
//! This module defines the watchlist entry as it travels between the client
//! and the backend, together with the identifier normalization every
//! comparison goes through.
//!
//! # Identifiers
//!
//! Provider ids reach us either as JSON numbers (`5`) or as JSON strings
//! (`"5"`). Comparisons never look at the raw form: they use the
//! [`ItemKey`] produced by [`ItemId::key`], so `5`, `5.0` and `"5"` are the
//! same anime.
//!
//! # Wire Shape
//!
//! ```json
//! { "id": 5, "title": "Frieren", "year": 2023, "poster": "https://..." }
//! ```
//!
//! `year` may also be a string (`"Unknown"`) or `null`, and `poster` may be
//! `null`. Fields the model does not know about are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-assigned anime identifier, as sent on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric id (`5`)
    Number(serde_json::Number),
    /// String id (`"5"`)
    Text(String),
}

/// Normalized identifier used for every id comparison
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(String);

impl ItemKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ItemId {
    /// Normalize this id to its comparison key
    ///
    /// Integers render in decimal, floats without a fractional part render
    /// as integers, strings are taken as-is.
    pub fn key(&self) -> ItemKey {
        match self {
            Self::Text(text) => ItemKey(text.clone()),
            Self::Number(number) => {
                if let Some(n) = number.as_i64() {
                    ItemKey(n.to_string())
                } else if let Some(n) = number.as_u64() {
                    ItemKey(n.to_string())
                } else {
                    match number.as_f64() {
                        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => {
                            ItemKey((f as i64).to_string())
                        }
                        Some(f) => ItemKey(f.to_string()),
                        None => ItemKey(number.to_string()),
                    }
                }
            }
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key().fmt(f)
    }
}

/// Release year, numeric when known, free text otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReleaseYear {
    Number(i64),
    Text(String),
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(year) => write!(f, "{year}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One tracked anime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchItem {
    /// Provider id; `None` when absent or `null`
    #[serde(default)]
    pub id: Option<ItemId>,
    /// Display name
    #[serde(default)]
    pub title: String,
    /// Release year, if known
    #[serde(default)]
    pub year: Option<ReleaseYear>,
    /// Poster image URL
    #[serde(default)]
    pub poster: Option<String>,
}

impl WatchItem {
    /// Create an item with an id and a title
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            year: None,
            poster: None,
        }
    }

    pub fn with_year(mut self, year: ReleaseYear) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    /// Normalized id, or `None` for items without a usable id
    pub fn key(&self) -> Option<ItemKey> {
        self.id.as_ref().map(ItemId::key)
    }
}

/// Ordered list of watch items owned by one user
///
/// Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist {
    items: Vec<WatchItem>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[WatchItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<WatchItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WatchItem> {
        self.items.iter()
    }

    /// Whether any item carries this normalized id
    pub fn contains(&self, key: &ItemKey) -> bool {
        self.items.iter().any(|item| item.key().as_ref() == Some(key))
    }

    /// Copy of this list with `item` appended
    pub fn with_item(&self, item: WatchItem) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// Copy of this list without any item matching `key`
    ///
    /// Remaining items keep their relative order.
    pub fn without(&self, key: &ItemKey) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.key().as_ref() != Some(key))
            .cloned()
            .collect();
        Self { items }
    }
}

impl From<Vec<WatchItem>> for Watchlist {
    fn from(items: Vec<WatchItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<WatchItem> for Watchlist {
    fn from_iter<I: IntoIterator<Item = WatchItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Watchlist {
    type Item = WatchItem;
    type IntoIter = std::vec::IntoIter<WatchItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Watchlist {
    type Item = &'a WatchItem;
    type IntoIter = std::slice::Iter<'a, WatchItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
