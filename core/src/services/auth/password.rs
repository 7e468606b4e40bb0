//! Password hashing and verification against stored bcrypt hashes.

use crate::errors::{DomainError, DomainResult};

/// Fixed bcrypt hash used when a login names an unknown user.
const DUMMY_HASH: &str = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

/// Hash a password with bcrypt at the default cost
pub fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("password hashing failed: {}", e),
    })
}

/// Verify a password against a stored bcrypt hash
///
/// # Errors
///
/// Returns `DomainError::Internal` when the stored hash is malformed;
/// a mismatch is `Ok(false)`, not an error.
pub fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
        message: format!("password verification failed: {}", e),
    })
}

/// Verify against a fixed hash and discard the result
///
/// Called when the user lookup misses, so a rejected login performs the
/// same hashing work whether or not the identifier resolved to an account.
pub(crate) fn verify_dummy(password: &str) {
    let _ = bcrypt::verify(password, DUMMY_HASH);
}
