//! Main token service implementation

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::RefreshTokenRepository;

use super::config::TokenServiceConfig;

/// Entropy of a refresh token value before base64 encoding
const REFRESH_TOKEN_BYTES: usize = 64;

/// Attempts at generating a refresh token before giving up on collisions
const MAX_GENERATION_ATTEMPTS: usize = 3;

/// Service for managing access tokens and refresh tokens
///
/// Access tokens are signed with HS256 and verified without server-side
/// state. Refresh tokens are opaque random values persisted (hashed)
/// through the repository; rotation consumes the presented value
/// atomically, so a token is spendable exactly once.
pub struct TokenService<R: RefreshTokenRepository> {
    repository: R,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: RefreshTokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Refresh token repository for persistence
    /// * `config` - Token service configuration
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` when the signing secret is
    /// empty. This is the only failure mode: a misconfigured service never
    /// constructs, so signing cannot fail per-request.
    pub fn new(repository: R, config: TokenServiceConfig) -> DomainResult<Self> {
        if config.jwt_secret.trim().is_empty() {
            return Err(DomainError::Configuration {
                message: "JWT signing secret must not be empty".to_string(),
            });
        }

        if config.refresh_token_expiry_minutes <= config.access_token_expiry_minutes {
            tracing::warn!(
                access_minutes = config.access_token_expiry_minutes,
                refresh_minutes = config.refresh_token_expiry_minutes,
                "refresh token lifetime does not exceed access token lifetime"
            );
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // jsonwebtoken defaults to 60 seconds of leeway; expiry is an exact
        // comparison here.
        validation.leeway = 0;

        Ok(Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Access token lifetime in seconds, as reported to clients
    pub fn access_token_expires_in_seconds(&self) -> i64 {
        self.config.access_token_expiry_minutes * 60
    }

    /// Issues a signed access token for a user
    ///
    /// The payload carries the subject, a fresh `jti`, issue time, and
    /// expiry = issue time + the configured access lifetime. Nothing
    /// secret is embedded.
    pub fn issue_access_token(&self, user_id: Uuid) -> DomainResult<String> {
        let claims = Claims::new_access_token(user_id, self.config.access_token_expiry_minutes);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Errors
    ///
    /// * `TokenError::AccessTokenExpired` - Expiry is in the past
    /// * `TokenError::InvalidAccessToken` - Bad signature or malformed token
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::AccessTokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidAccessToken)
                }
            })?;

        Ok(token_data.claims)
    }

    /// Generates and persists a new refresh token for a user
    ///
    /// The returned string is the raw token value; only its SHA-256 hash
    /// is stored. A hash collision with an existing record is retried with
    /// fresh material a bounded number of times rather than ignored.
    pub async fn issue_refresh_token(&self, user_id: Uuid) -> DomainResult<String> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let token_value = generate_token_value();
            let token_hash = Self::hash_token(&token_value);
            let record = RefreshToken::new(
                user_id,
                token_hash,
                self.config.refresh_token_expiry_minutes,
            );

            match self.repository.insert(record).await {
                Ok(_) => return Ok(token_value),
                Err(DomainError::Conflict { .. }) => {
                    tracing::warn!(%user_id, "refresh token hash collision, regenerating");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Validates a refresh token and returns the owning user id
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidRefreshToken` - No such token
    /// * `TokenError::RefreshTokenRevoked` - Token was revoked or rotated
    /// * `TokenError::RefreshTokenExpired` - Expiry is in the past
    pub async fn validate_refresh_token(&self, token: &str) -> DomainResult<Uuid> {
        let record = self
            .repository
            .find_by_hash(&Self::hash_token(token))
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        if record.is_revoked {
            return Err(DomainError::Token(TokenError::RefreshTokenRevoked));
        }

        if record.is_expired() {
            return Err(DomainError::Token(TokenError::RefreshTokenExpired));
        }

        Ok(record.user_id)
    }

    /// Rotates a refresh token, returning the owning user and replacement
    ///
    /// The presented token is consumed atomically: it is revoked in the
    /// same conditional write that checks it is still live, so two
    /// concurrent rotations of one value produce exactly one winner. The
    /// consumed value never validates again.
    pub async fn rotate_refresh_token(&self, token: &str) -> DomainResult<(Uuid, String)> {
        let consumed = self
            .repository
            .consume(&Self::hash_token(token))
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        let replacement = self.issue_refresh_token(consumed.user_id).await?;

        Ok((consumed.user_id, replacement))
    }

    /// Revokes all outstanding refresh tokens for a user
    pub async fn revoke_all_user_tokens(&self, user_id: Uuid) -> DomainResult<usize> {
        self.repository.revoke_all_for_user(user_id).await
    }

    /// Removes expired refresh tokens from storage
    pub async fn cleanup_expired_tokens(&self) -> DomainResult<usize> {
        self.repository.delete_expired().await
    }

    /// Hashes a token value for storage and lookup
    pub(crate) fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

/// Generates an opaque refresh token value
fn generate_token_value() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
