/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Types
 *
 * - `HandlerError` - A rejected request, carries its HTTP status
 * - `StoreError` - Repository failure, mapped to 404/409 or a generic 500
 *
 * # Internal Faults
 *
 * Database and corrupt-data failures are logged with their details and
 * answered with a generic "Internal server error" message; no internals
 * reach the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::RewatchError;

/// Generic message sent for unexpected faults
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use rewatch::backend::error::BackendError;
///
/// let err = BackendError::bad_request("Watchlist must be an array");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (invalid input, unknown user, bad credentials)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Repository error
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::CONFLICT, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Store(NotFound)` - 404 Not Found
    /// - `Store(Conflict)` - 409 Conflict
    /// - other `Store` errors - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Conflict) => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message safe to send to clients
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Store(StoreError::NotFound) => "User not found".to_string(),
            Self::Store(StoreError::Conflict) => "Email is already in use".to_string(),
            Self::Store(_) => INTERNAL_MESSAGE.to_string(),
        }
    }

    /// Whether this error is a server fault rather than a rejected request
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl From<RewatchError> for BackendError {
    fn from(err: RewatchError) -> Self {
        let status = match &err {
            RewatchError::NotFound(_) => StatusCode::NOT_FOUND,
            RewatchError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RewatchError::Conflict(_) => StatusCode::CONFLICT,
            RewatchError::InvalidCredentials | RewatchError::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            RewatchError::Busy => StatusCode::CONFLICT,
            RewatchError::Network(_) | RewatchError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = if status.is_server_error() {
            INTERNAL_MESSAGE.to_string()
        } else {
            err.to_string()
        };
        Self::handler(status, message)
    }
}
