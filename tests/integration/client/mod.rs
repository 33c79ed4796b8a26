//! Client integration tests
//!
//! HTTP clients against `wiremock` servers, and the synchronizer against a
//! live backend.

mod api_client_test;
mod jikan_test;
#[cfg(feature = "ssr")]
mod sync_test;
