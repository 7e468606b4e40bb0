//! JWT authentication configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// JWT authentication configuration
///
/// Holds the symmetric signing key and the lifetimes of the two token
/// kinds. The key is immutable process-wide after startup; rotating it
/// invalidates every outstanding access token.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing and verifying access tokens
    pub key: String,

    /// Access token lifetime in minutes
    pub access_token_expires_in_minutes: i64,

    /// Refresh token lifetime in minutes; should exceed the access lifetime
    pub refresh_token_expires_in_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            key: String::from("development-secret-please-change-in-production"),
            access_token_expires_in_minutes: 15,
            refresh_token_expires_in_minutes: 7 * 24 * 60, // 7 days
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the given signing key
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Set the access token lifetime in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expires_in_minutes = minutes;
        self
    }

    /// Set the refresh token lifetime in minutes
    pub fn with_refresh_expiry_minutes(mut self, minutes: i64) -> Self {
        self.refresh_token_expires_in_minutes = minutes;
        self
    }

    /// Load from environment variables
    ///
    /// Reads `JWT_KEY`, `ACCESS_TOKEN_EXPIRES_IN_MINUTES` and
    /// `REFRESH_TOKEN_EXPIRES_IN_MINUTES`. The key is required; lifetimes
    /// fall back to the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let key = std::env::var("JWT_KEY").map_err(|_| ConfigError::MissingValue {
            key: "JWT_KEY".to_string(),
        })?;

        let access_token_expires_in_minutes =
            parse_minutes("ACCESS_TOKEN_EXPIRES_IN_MINUTES", 15)?;
        let refresh_token_expires_in_minutes =
            parse_minutes("REFRESH_TOKEN_EXPIRES_IN_MINUTES", 7 * 24 * 60)?;

        Ok(Self {
            key,
            access_token_expires_in_minutes,
            refresh_token_expires_in_minutes,
        })
    }

    /// Validate the configuration
    ///
    /// An empty key or a non-positive lifetime is a fatal startup error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "JWT_KEY".to_string(),
                reason: "signing key must not be empty".to_string(),
            });
        }
        if self.access_token_expires_in_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "ACCESS_TOKEN_EXPIRES_IN_MINUTES".to_string(),
                reason: "lifetime must be a positive number of minutes".to_string(),
            });
        }
        if self.refresh_token_expires_in_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "REFRESH_TOKEN_EXPIRES_IN_MINUTES".to_string(),
                reason: "lifetime must be a positive number of minutes".to_string(),
            });
        }
        Ok(())
    }

    /// Access token lifetime in seconds, the unit reported to clients
    pub fn access_token_expires_in_seconds(&self) -> i64 {
        self.access_token_expires_in_minutes * 60
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.key == "development-secret-please-change-in-production"
    }
}

fn parse_minutes(key: &str, default: i64) -> Result<i64, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            reason: format!("expected an integer number of minutes, got {raw:?}"),
        }),
        Err(_) => Ok(default),
    }
}
