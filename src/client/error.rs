//! Client error type
//!
//! Everything the command-line front end can fail with. Watchlist and auth
//! failures keep their [`RewatchError`] so callers can match on the kind.

use thiserror::Error;

use crate::client::jikan::JikanError;
use crate::shared::{ConfigError, RewatchError};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] RewatchError),

    #[error("anime lookup failed: {0}")]
    Jikan(#[from] JikanError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode local data: {0}")]
    Encode(#[from] serde_json::Error),
}
