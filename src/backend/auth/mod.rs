//! Authentication Module
//!
//! This module handles user registration and login. There are no server-side
//! sessions or tokens: a successful signup or login returns the user's id and
//! email, and the client keeps that as its current user.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Validation, normalization and password hashing
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── signup.rs   - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → validated → user created → `{success, user}` (201)
//! 2. **Login**: email and password → credentials verified → `{success, user}`
//!
//! # Security
//!
//! - Emails are trimmed and lower-cased before storage and lookup
//! - Passwords are hashed using bcrypt before storage
//! - Invalid credentials return 401 (no information leakage)

/// Validation, normalization and password hashing
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, signup};
pub use users::{normalize_email, validate_signup};
