/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /signup.
 *
 * # Registration Process
 *
 * 1. Validate presence, password length and email format
 * 2. Normalize the email (trim, lower-case)
 * 3. Check if the email is already registered
 * 4. Hash password using bcrypt
 * 5. Create user with an empty watchlist
 * 6. Return `{success, user}` with 201 Created
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with cost 10
 * - Passwords and hashes are never returned or logged
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::users::{hash_password, normalize_email, validate_signup};
use crate::backend::error::BackendError;
use crate::backend::store::UserRepository;
use crate::shared::{AuthResponse, Credentials};

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, password too short or malformed email
/// * `409 Conflict` - Email already registered
/// * `500 Internal Server Error` - Hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "user@example.com", "password": "secret1" }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "success": true,
///   "user": { "id": "123e4567-e89b-12d3-a456-426614174000", "email": "user@example.com" }
/// }
/// ```
pub async fn signup(
    State(repository): State<Arc<dyn UserRepository>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let Json(request) = payload?;

    validate_signup(&request.email, &request.password)?;

    let email = normalize_email(&request.email);
    tracing::info!("Signup request for email: {}", email);

    if repository.find_by_email(&email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(BackendError::conflict("Email is already in use"));
    }

    let password_hash = hash_password(&request.password).await?;
    let user = repository.create_user(&email, &password_hash).await?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            user: user.to_user_ref(),
        }),
    ))
}
