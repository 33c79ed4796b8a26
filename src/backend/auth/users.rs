/**
 * Credential Validation and Password Hashing
 *
 * This module holds the pure parts of authentication: email normalization,
 * signup input validation and bcrypt hashing. Persistence lives behind the
 * repository in `backend::store`.
 *
 * # Validation
 *
 * - Email and password must both be present and non-empty
 * - Password must be at least 6 characters long
 * - Email must look like `local@domain.tld`, as sent (surrounding spaces
 *   are rejected, not trimmed)
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with cost 10
 * - Hashing runs on the blocking thread pool
 */

use crate::backend::error::{BackendError, INTERNAL_MESSAGE};

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// bcrypt work factor for new password hashes
pub const PASSWORD_HASH_COST: u32 = 10;

/// Trim and lower-case an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic `local@domain.tld` shape check
///
/// No whitespace anywhere, exactly one `@` with something on both sides, and
/// a dot inside the domain that is neither its first nor its last character.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Reject missing email or password
pub fn require_credentials(email: &str, password: &str) -> Result<(), BackendError> {
    if email.is_empty() || password.is_empty() {
        tracing::warn!("Credentials missing from request");
        return Err(BackendError::bad_request("Email and password are required"));
    }
    Ok(())
}

/// Validate a signup request
///
/// Checks run in order and the first failure is reported.
pub fn validate_signup(email: &str, password: &str) -> Result<(), BackendError> {
    require_credentials(email, password)?;

    if password.chars().count() < MIN_PASSWORD_LEN {
        tracing::warn!("Password too short");
        return Err(BackendError::bad_request(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    if !is_valid_email(email) {
        tracing::warn!("Invalid email format: {}", email);
        return Err(BackendError::bad_request("Invalid email format"));
    }

    Ok(())
}

/// Hash a password with bcrypt
pub async fn hash_password(password: &str) -> Result<String, BackendError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, PASSWORD_HASH_COST))
        .await
        .map_err(|e| {
            tracing::error!("Password hashing task failed: {:?}", e);
            BackendError::internal(INTERNAL_MESSAGE)
        })?
        .map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            BackendError::internal(INTERNAL_MESSAGE)
        })
}

/// Check a password against a stored bcrypt hash
///
/// A hash that bcrypt cannot parse counts as a mismatch.
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, BackendError> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| {
            tracing::error!("Password verification task failed: {:?}", e);
            BackendError::internal(INTERNAL_MESSAGE)
        })?;

    Ok(verified.unwrap_or_else(|e| {
        tracing::warn!("Stored password hash is unreadable: {:?}", e);
        false
    }))
}
