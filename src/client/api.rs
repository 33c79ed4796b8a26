//! Re:Watch HTTP client
//!
//! Thin `reqwest` wrapper over the backend API. Non-2xx responses are mapped
//! back into [`RewatchError`] by status code, carrying the server's `{error}`
//! message when there is one.

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::client::backend::WatchlistBackend;
use crate::shared::{
    AuthResponse, Credentials, ErrorBody, RewatchError, UserRef, Watchlist, WatchlistBody,
};

/// Default messages per operation, used when the server sends none.
struct Messages {
    failed: &'static str,
    network: &'static str,
}

const SIGNUP: Messages = Messages {
    failed: "Signup failed. Please try again.",
    network: "Network error during signup. Please try again.",
};

const LOGIN: Messages = Messages {
    failed: "Login failed. Please check your credentials.",
    network: "Network error during login. Please try again.",
};

const LOAD: Messages = Messages {
    failed: "Failed to load watchlist.",
    network: "Network error while loading watchlist.",
};

const SAVE: Messages = Messages {
    failed: "Failed to save watchlist.",
    network: "Network error while saving watchlist.",
};

/// Backend API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            http: Client::new(),
        }
    }

    /// Register a new account
    pub async fn signup(&self, credentials: &Credentials) -> Result<UserRef, RewatchError> {
        let url = self.endpoint(&["signup"])?;
        tracing::debug!(%url, "signup");

        let resp = self
            .http
            .post(url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| transport_error(e, &SIGNUP))?;

        let auth: AuthResponse = decode(check_response(resp, &SIGNUP).await?).await?;
        Ok(auth.user)
    }

    /// Verify credentials
    pub async fn login(&self, credentials: &Credentials) -> Result<UserRef, RewatchError> {
        let url = self.endpoint(&["login"])?;
        tracing::debug!(%url, "login");

        let resp = self
            .http
            .post(url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| transport_error(e, &LOGIN))?;

        let auth: AuthResponse = decode(check_response(resp, &LOGIN).await?).await?;
        Ok(auth.user)
    }

    /// `GET /watchlist/{userId}`
    pub async fn fetch_watchlist(&self, user_id: &str) -> Result<Watchlist, RewatchError> {
        let url = self.endpoint(&["watchlist", user_id])?;

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(e, &LOAD))?;

        let body: WatchlistBody = decode(check_response(resp, &LOAD).await?).await?;
        Ok(body.watchlist)
    }

    /// `POST /watchlist/{userId}`; returns the canonical list
    pub async fn save_watchlist(
        &self,
        user_id: &str,
        watchlist: &Watchlist,
    ) -> Result<Watchlist, RewatchError> {
        let url = self.endpoint(&["watchlist", user_id])?;

        let resp = self
            .http
            .post(url)
            .json(&serde_json::json!({ "watchlist": watchlist }))
            .send()
            .await
            .map_err(|e| transport_error(e, &SAVE))?;

        let body: WatchlistBody = decode(check_response(resp, &SAVE).await?).await?;
        Ok(body.watchlist)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, RewatchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| RewatchError::internal(format!("Invalid API base URL: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl WatchlistBackend for ApiClient {
    async fn read(&self, user_id: &str) -> Result<Watchlist, RewatchError> {
        self.fetch_watchlist(user_id).await
    }

    async fn replace_all(
        &self,
        user_id: &str,
        watchlist: &Watchlist,
    ) -> Result<Watchlist, RewatchError> {
        self.save_watchlist(user_id, watchlist).await
    }
}

fn transport_error(err: reqwest::Error, messages: &Messages) -> RewatchError {
    tracing::warn!(error = %err, "request failed");
    RewatchError::network(messages.network)
}

/// Check the HTTP response for errors and map them by status
async fn check_response(resp: Response, messages: &Messages) -> Result<Response, RewatchError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| messages.failed.to_string());
    tracing::warn!(status = status.as_u16(), %message, "API error");

    Err(status_error(status, message))
}

/// Map a non-2xx status and its message into the shared taxonomy
pub fn status_error(status: StatusCode, message: String) -> RewatchError {
    match status {
        StatusCode::BAD_REQUEST => RewatchError::InvalidInput(message),
        StatusCode::UNAUTHORIZED => RewatchError::InvalidCredentials,
        StatusCode::NOT_FOUND => RewatchError::NotFound(message),
        StatusCode::CONFLICT => RewatchError::Conflict(message),
        _ => RewatchError::Internal(message),
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, RewatchError> {
    resp.json::<T>().await.map_err(|e| {
        tracing::warn!(error = %e, "malformed response body");
        RewatchError::internal("Unexpected response from server.")
    })
}
