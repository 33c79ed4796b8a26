//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── signup.rs   - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`login`** - POST /login - User authentication
//!
//! # Example
//!
//! ```rust,no_run
//! use rewatch::backend::auth::handlers::{signup, login};
//! use rewatch::backend::server::AppState;
//! use axum::{routing::post, Router};
//!
//! # fn example() {
//! let router: Router<AppState> = Router::new()
//!     .route("/signup", post(signup))
//!     .route("/login", post(login));
//! # }
//! ```

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

pub use login::login;
pub use signup::signup;
