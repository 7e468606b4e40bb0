//! Mock implementation of RefreshTokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::RefreshTokenRepository;

/// Mock refresh token repository for testing
///
/// Clones share the underlying store, so a test can hold a handle and
/// inspect what the service persisted. `consume` runs under a single
/// write lock, mirroring the serialization the database provides.
#[derive(Clone)]
pub struct MockRefreshTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl MockRefreshTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored records, revoked and expired ones included
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }

    /// Fetch a stored record directly, bypassing the trait
    pub async fn get(&self, token_hash: &str) -> Option<RefreshToken> {
        self.tokens.read().await.get(token_hash).cloned()
    }
}

impl Default for MockRefreshTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn insert(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token_hash) {
            return Err(DomainError::Conflict {
                message: "refresh token hash already exists".to_string(),
            });
        }

        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token_hash).cloned())
    }

    async fn consume(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let mut tokens = self.tokens.write().await;

        match tokens.get_mut(token_hash) {
            Some(token) if token.is_valid() => {
                token.revoke();
                Ok(Some(token.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn revoke_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let mut count = 0;

        for token in tokens.values_mut() {
            if token.user_id == user_id && !token.is_revoked {
                token.revoke();
                count += 1;
            }
        }

        Ok(count)
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let initial_count = tokens.len();

        tokens.retain(|_, token| !token.is_expired());

        Ok(initial_count - tokens.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn live_token(user_id: Uuid, hash: &str) -> RefreshToken {
        RefreshToken::new(user_id, hash.to_string(), 60)
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_hash() {
        let repo = MockRefreshTokenRepository::new();
        let user_id = Uuid::new_v4();

        repo.insert(live_token(user_id, "hash-1")).await.unwrap();
        let err = repo.insert(live_token(user_id, "hash-1")).await.unwrap_err();

        assert!(matches!(err, DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_consume_spends_token_once() {
        let repo = MockRefreshTokenRepository::new();
        let user_id = Uuid::new_v4();
        repo.insert(live_token(user_id, "hash-1")).await.unwrap();

        let first = repo.consume("hash-1").await.unwrap();
        let second = repo.consume("hash-1").await.unwrap();

        assert_eq!(first.unwrap().user_id, user_id);
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn test_consume_ignores_expired_token() {
        let repo = MockRefreshTokenRepository::new();
        let mut token = live_token(Uuid::new_v4(), "hash-1");
        token.expires_at = Utc::now() - Duration::minutes(1);
        repo.insert(token).await.unwrap();

        assert!(repo.consume("hash-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_consume_missing_token_is_none() {
        let repo = MockRefreshTokenRepository::new();
        assert!(repo.consume("absent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_revoke_all_for_user() {
        let repo = MockRefreshTokenRepository::new();
        let user_id = Uuid::new_v4();
        let other = Uuid::new_v4();

        repo.insert(live_token(user_id, "hash-1")).await.unwrap();
        repo.insert(live_token(user_id, "hash-2")).await.unwrap();
        repo.insert(live_token(other, "hash-3")).await.unwrap();

        let revoked = repo.revoke_all_for_user(user_id).await.unwrap();

        assert_eq!(revoked, 2);
        assert!(repo.get("hash-3").await.unwrap().is_valid());
    }

    #[tokio::test]
    async fn test_delete_expired() {
        let repo = MockRefreshTokenRepository::new();
        let mut expired = live_token(Uuid::new_v4(), "hash-old");
        expired.expires_at = Utc::now() - Duration::days(1);
        repo.insert(expired).await.unwrap();
        repo.insert(live_token(Uuid::new_v4(), "hash-live"))
            .await
            .unwrap();

        let deleted = repo.delete_expired().await.unwrap();

        assert_eq!(deleted, 1);
        assert_eq!(repo.len().await, 1);
    }
}
