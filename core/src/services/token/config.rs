//! Configuration for the token service

use cr_shared::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in minutes
    pub refresh_token_expiry_minutes: i64,
}

impl TokenServiceConfig {
    /// Build from the application's JWT configuration
    pub fn from_jwt_config(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.key.clone(),
            access_token_expiry_minutes: jwt.access_token_expires_in_minutes,
            refresh_token_expiry_minutes: jwt.refresh_token_expires_in_minutes,
        }
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_minutes: 7 * 24 * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_jwt_config() {
        let jwt = JwtConfig::new("secret")
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_minutes(120);

        let config = TokenServiceConfig::from_jwt_config(&jwt);

        assert_eq!(config.jwt_secret, "secret");
        assert_eq!(config.access_token_expiry_minutes, 30);
        assert_eq!(config.refresh_token_expiry_minutes, 120);
    }
}
