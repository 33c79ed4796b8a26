/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Require both email and password
 * 2. Look up user by normalized email
 * 3. Verify password using bcrypt
 * 4. Return `{success, user}`
 *
 * # Security
 *
 * - Unknown email and wrong password get the same 401 response
 * - Passwords are never logged or returned in responses
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::users::{normalize_email, require_credentials, verify_password};
use crate::backend::error::BackendError;
use crate::backend::store::UserRepository;
use crate::shared::{AuthResponse, Credentials, RewatchError};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Email or password missing
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Database failure
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "user@example.com", "password": "secret1" }
/// ```
pub async fn login(
    State(repository): State<Arc<dyn UserRepository>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;

    require_credentials(&request.email, &request.password)?;

    let email = normalize_email(&request.email);
    tracing::info!("Login request for: {}", email);

    let invalid = || BackendError::from(RewatchError::InvalidCredentials);

    let user = repository.find_by_email(&email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        invalid()
    })?;

    if !verify_password(&request.password, &user.password_hash).await? {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(invalid());
    }

    tracing::info!("User logged in successfully: {} ({})", user.id, user.email);

    Ok(Json(AuthResponse {
        success: true,
        user: user.to_user_ref(),
    }))
}
