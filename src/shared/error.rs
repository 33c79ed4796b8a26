//! Shared Error Types
//!
//! This module defines the error taxonomy shared between the backend and the
//! client. The backend maps each variant to an HTTP status; the client maps
//! HTTP statuses back into variants and the synchronizer surfaces them to the
//! caller.
//!
//! # Error Categories
//!
//! - `Unauthenticated` - No current user on the client
//! - `Busy` - A watchlist write is already in flight
//! - `NotFound` - Unknown user or resource
//! - `InvalidInput` - Malformed request body or credentials
//! - `Conflict` - Email already registered
//! - `InvalidCredentials` - Login mismatch
//! - `Network` - Transport-level failure
//! - `Internal` - Unexpected server fault
//!
//! # Usage
//!
//! ```rust
//! use rewatch::shared::error::RewatchError;
//!
//! let error = RewatchError::not_found("User not found");
//! assert_eq!(error.to_string(), "User not found");
//! ```
use thiserror::Error;

/// Errors visible to callers on both sides of the wire
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewatchError {
    /// No current user
    #[error("Not authenticated")]
    Unauthenticated,

    /// A write is already outstanding for this session
    #[error("Already saving")]
    Busy,

    /// User or resource missing
    #[error("{0}")]
    NotFound(String),

    /// Malformed request body or credentials
    #[error("{0}")]
    InvalidInput(String),

    /// Duplicate email
    #[error("{0}")]
    Conflict(String),

    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Transport-level failure
    #[error("{0}")]
    Network(String),

    /// Unexpected server fault
    #[error("{0}")]
    Internal(String),
}

impl RewatchError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
