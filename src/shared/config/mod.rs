//! Application configuration module
//!
//! Provides the client configuration type and its builder. URLs are
//! validated when the configuration is built.

use reqwest::Url;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default backend base URL
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default Jikan v4 base URL
pub const DEFAULT_JIKAN_URL: &str = "https://api.jikan.moe/v4";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL
    pub api_url: Url,
    /// Jikan base URL
    pub jikan_url: Url,
    /// Directory holding `session.json`, `progress.json` and `config.toml`
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Create a new ClientConfigBuilder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Optional `config.toml` contents
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub jikan_url: Option<String>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::InvalidFile(e.to_string()))
    }
}

/// Builder for ClientConfig
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_url: Option<String>,
    jikan_url: Option<String>,
    data_dir: Option<PathBuf>,
}

impl ClientConfigBuilder {
    /// Set the backend URL
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the Jikan URL
    pub fn jikan_url(mut self, url: impl Into<String>) -> Self {
        self.jikan_url = Some(url.into());
        self
    }

    /// Set the data directory
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Fill unset URLs from a parsed config file
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        if self.api_url.is_none() {
            self.api_url = file.api_url;
        }
        if self.jikan_url.is_none() {
            self.jikan_url = file.jikan_url;
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let api_url = parse_url(self.api_url.as_deref().unwrap_or(DEFAULT_API_URL))?;
        let jikan_url = parse_url(self.jikan_url.as_deref().unwrap_or(DEFAULT_JIKAN_URL))?;
        let data_dir = self.data_dir.ok_or(ConfigError::MissingValue("data_dir"))?;
        Ok(ClientConfig {
            api_url,
            jikan_url,
            data_dir,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|_| ConfigError::InvalidUrl(raw.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("invalid config file: {0}")]
    InvalidFile(String),
}
