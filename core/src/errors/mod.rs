//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use cr_shared::ConfigError;
use thiserror::Error;

/// Core domain errors
///
/// Callers branch on the error kind, never on message text: verification
/// failures (`is_unauthorized`) map to a 401-equivalent outcome at the
/// boundary, everything else to a 5xx-equivalent one.
#[derive(Error, Debug)]
pub enum DomainError {
    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    /// Missing or invalid startup configuration; fatal, never per-request
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Underlying store unreachable or a write failed. Distinct from
    /// "record does not exist": an unreachable store must never read as an
    /// invalid credential.
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// A write collided with an existing record; retry-worthy
    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// True when the error should surface as a 401-equivalent rejection
    pub fn is_unauthorized(&self) -> bool {
        match self {
            DomainError::Auth(_) => true,
            DomainError::Token(err) => err.is_unauthorized(),
            _ => false,
        }
    }
}

impl From<ConfigError> for DomainError {
    fn from(err: ConfigError) -> Self {
        DomainError::Configuration {
            message: err.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
