//! HTTP Wire Types
//!
//! Request and response bodies of the Re:Watch HTTP API, shared by the axum
//! handlers and the `reqwest` client.
//!
//! # Endpoints
//!
//! - `POST /signup` - [`Credentials`] in, [`AuthResponse`] out (201)
//! - `POST /login` - [`Credentials`] in, [`AuthResponse`] out
//! - `GET /watchlist/{userId}` - [`WatchlistBody`] out
//! - `POST /watchlist/{userId}` - [`WatchlistBody`] in and out
//!
//! Every failure is answered with an [`ErrorBody`].

use serde::{Deserialize, Serialize};

use crate::shared::watch_item::Watchlist;

/// Reference to a user, safe to hand to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// User id
    pub id: String,
    /// Normalized email address
    pub email: String,
}

/// Signup and login request body
///
/// Both fields default to empty so a missing field is reported as invalid
/// input by the handler instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful signup or login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserRef,
}

/// `{watchlist: [...]}` envelope used in both directions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchlistBody {
    pub watchlist: Watchlist,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Welcome message served on `/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeBody {
    pub message: String,
}
