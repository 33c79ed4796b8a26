//! Integration tests
//!
//! - `api` drives the Axum router in-process
//! - `client` drives the HTTP clients against mock and real servers

pub mod api;
pub mod client;
