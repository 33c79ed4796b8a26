//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports and documentation
//! ├── router.rs        - Main router creation and middleware
//! ├── api_routes.rs    - Welcome, auth and watchlist routes
//! └── admin_routes.rs  - Optional `/admin` inspection routes
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

/// Admin inspection routes
pub mod admin_routes;

pub use api_routes::WELCOME_MESSAGE;
pub use router::create_router;
