//! Refresh token repository trait defining the interface for token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// Implementations store token hashes, never raw token values. The
/// `consume` operation is the rotation primitive: it must be atomic with
/// respect to concurrent calls on the same hash, so that a refresh token
/// can be spent exactly once.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Insert a new refresh token record
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The persisted record
    /// * `Err(DomainError::Conflict)` - A record with the same hash already
    ///   exists; the caller retries with freshly generated material
    /// * `Err(DomainError)` - Persistence failed
    async fn insert(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its hashed value
    ///
    /// The returned record carries the owning user id, so validation never
    /// needs a second round trip.
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Atomically consume a live token
    ///
    /// Marks the record revoked if and only if it is currently unrevoked
    /// and unexpired, returning it when this call performed the flip.
    /// Of any number of concurrent calls with the same hash, at most one
    /// receives `Some`; the rest see `None`, exactly as for an absent,
    /// expired, or already-revoked token.
    async fn consume(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Revoke all outstanding tokens for a user
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens revoked
    async fn revoke_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError>;

    /// Delete expired refresh tokens from the repository
    ///
    /// Retention hook, called periodically from outside the auth flow.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired tokens deleted
    async fn delete_expired(&self) -> Result<usize, DomainError>;
}
