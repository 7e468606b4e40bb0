//! Domain-specific error types for authentication and token operations.

use thiserror::Error;

/// Authentication-related errors
///
/// Unknown user, wrong password and disabled accounts all collapse into a
/// single variant so the response cannot be used to enumerate accounts.
/// The actual rejection reason goes to the log, never to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Token-related errors
///
/// The sub-reasons are distinguished internally for logging and tests;
/// a boundary layer maps every unauthorized-class variant to the same
/// 401-equivalent response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid access token")]
    InvalidAccessToken,

    #[error("Access token expired")]
    AccessTokenExpired,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Refresh token expired")]
    RefreshTokenExpired,

    #[error("Refresh token revoked")]
    RefreshTokenRevoked,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Whether this error describes a rejected credential rather than a
    /// failure of the service itself
    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, TokenError::TokenGenerationFailed)
    }
}
