//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing key and token lifetimes
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection

pub mod auth;
pub mod database;
pub mod environment;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;

/// Errors raised while loading or validating configuration
///
/// These are fatal at startup: the service must refuse to accept requests
/// rather than fail per-request on a bad configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required configuration value: {key}")]
    MissingValue { key: String },

    #[error("invalid configuration value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT authentication configuration
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Fails fast on a missing signing key or non-positive lifetimes so a
    /// misconfigured process never starts serving.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            environment: Environment::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env()?,
        };
        config.jwt.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingValue {
            key: "JWT_KEY".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing required configuration value: JWT_KEY"
        );
    }

    #[test]
    fn test_from_env_requires_signing_key() {
        std::env::remove_var("JWT_KEY");
        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue { key } if key == "JWT_KEY"));

        std::env::set_var("JWT_KEY", "env-secret");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.jwt.key, "env-secret");
        std::env::remove_var("JWT_KEY");
    }
}
