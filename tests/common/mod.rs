//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - In-memory backend servers
//! - Signup helpers
//! - Jikan response fixtures

#[cfg(feature = "ssr")]
pub mod backend;
pub mod jikan_fixtures;

#[cfg(feature = "ssr")]
pub use backend::*;
pub use jikan_fixtures::*;
