//! Token entities for the authentication flow.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for the access token payload
///
/// Access tokens are self-contained: validity is established purely by
/// signature check and expiry comparison, never by a server-side lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID, unique per token instance for replay traceability
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// Expiry is issue time plus the configured lifetime; the `jti` is a
    /// fresh UUID so otherwise-identical tokens for the same subject stay
    /// distinguishable.
    pub fn new_access_token(user_id: Uuid, lifetime_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(lifetime_minutes);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    ///
    /// Exact comparison, no clock-skew allowance.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token entity stored in the database
///
/// Only the SHA-256 hash of the token value is persisted; the raw value is
/// returned to the client once and never stored. Records are immutable
/// except for the `is_revoked` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the refresh token record
    pub id: Uuid,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Hashed token value
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been revoked
    pub is_revoked: bool,
}

impl RefreshToken {
    /// Creates a new refresh token record
    ///
    /// # Arguments
    ///
    /// * `user_id` - The owning user's UUID
    /// * `token_hash` - The hashed token value
    /// * `lifetime_minutes` - Configured refresh-token lifetime
    pub fn new(user_id: Uuid, token_hash: String, lifetime_minutes: i64) -> Self {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(lifetime_minutes);

        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: now,
            expires_at,
            is_revoked: false,
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the refresh token is valid
    ///
    /// A token is usable only while unrevoked and unexpired.
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_revoked
    }

    /// Revokes the refresh token
    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, 15);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, 15 * 60);
        assert!(!claims.is_expired());
        assert!(Uuid::parse_str(&claims.jti).is_ok());
    }

    #[test]
    fn test_claims_jti_unique_per_instance() {
        let user_id = Uuid::new_v4();
        let first = Claims::new_access_token(user_id, 15);
        let second = Claims::new_access_token(user_id, 15);

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, 15);

        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_claims_expiration() {
        let user_id = Uuid::new_v4();
        let mut claims = Claims::new_access_token(user_id, 15);

        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }

    #[test]
    fn test_refresh_token_creation() {
        let user_id = Uuid::new_v4();
        let token = RefreshToken::new(user_id, "hashed_token_value".to_string(), 60);

        assert_eq!(token.user_id, user_id);
        assert_eq!(token.token_hash, "hashed_token_value");
        assert!(!token.is_revoked);
        assert!(!token.is_expired());
        assert!(token.is_valid());
    }

    #[test]
    fn test_refresh_token_expiry_matches_lifetime() {
        let token = RefreshToken::new(Uuid::new_v4(), "hash".to_string(), 90);

        let lifetime = token.expires_at - token.created_at;
        assert_eq!(lifetime, Duration::minutes(90));
    }

    #[test]
    fn test_refresh_token_revocation() {
        let mut token = RefreshToken::new(Uuid::new_v4(), "hash".to_string(), 60);

        assert!(token.is_valid());

        token.revoke();

        assert!(token.is_revoked);
        assert!(!token.is_valid());
    }

    #[test]
    fn test_refresh_token_expiration() {
        let mut token = RefreshToken::new(Uuid::new_v4(), "hash".to_string(), 60);

        token.expires_at = Utc::now() - Duration::days(1);

        assert!(token.is_expired());
        assert!(!token.is_valid());
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new_access_token(Uuid::new_v4(), 15);

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}
