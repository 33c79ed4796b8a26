//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the client and the backend. These types are used for serialization and
//! communication over the Re:Watch HTTP API.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. All wire types are designed for
//! serialization and transmission over HTTP.

/// Watch item, identifier normalization and watchlist
pub mod watch_item;

/// HTTP request and response bodies
pub mod api;

/// Shared error taxonomy
pub mod error;

/// Client configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use watch_item::{ItemId, ItemKey, ReleaseYear, WatchItem, Watchlist};
pub use api::{AuthResponse, Credentials, ErrorBody, UserRef, WatchlistBody};
pub use error::RewatchError;
pub use config::{ClientConfig, ClientConfigBuilder, ConfigError};
