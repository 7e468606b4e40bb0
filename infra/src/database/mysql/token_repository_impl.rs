//! MySQL implementation of the RefreshTokenRepository trait.
//!
//! Handles refresh token storage, lookup, atomic consumption, and
//! revocation. The `refresh_tokens.token_hash` column carries a unique
//! index: an insert colliding with an existing hash surfaces as a
//! `Conflict` for the caller to retry, and the conditional `UPDATE` in
//! `consume` lets the database serialize concurrent rotations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use cr_core::domain::entities::token::RefreshToken;
use cr_core::errors::DomainError;
use cr_core::repositories::RefreshTokenRepository;

/// MySQL implementation of RefreshTokenRepository
pub struct MySqlRefreshTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRefreshTokenRepository {
    /// Create a new MySQL refresh token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| persistence(format!("failed to get id: {}", e)))?;

        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| persistence(format!("failed to get user_id: {}", e)))?;

        Ok(RefreshToken {
            id: Uuid::parse_str(&id)
                .map_err(|e| persistence(format!("invalid token UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| persistence(format!("invalid user UUID: {}", e)))?,
            token_hash: row
                .try_get("token_hash")
                .map_err(|e| persistence(format!("failed to get token_hash: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| persistence(format!("failed to get created_at: {}", e)))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| persistence(format!("failed to get expires_at: {}", e)))?,
            is_revoked: row
                .try_get("is_revoked")
                .map_err(|e| persistence(format!("failed to get is_revoked: {}", e)))?,
        })
    }
}

fn persistence(message: String) -> DomainError {
    DomainError::Persistence { message }
}

#[async_trait]
impl RefreshTokenRepository for MySqlRefreshTokenRepository {
    async fn insert(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                id, user_id, token_hash, created_at, expires_at, is_revoked
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id.to_string())
            .bind(&token.token_hash)
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(token.is_revoked)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // The unique index on token_hash is authoritative for
                // collision detection.
                if e.as_database_error()
                    .map(|db| db.is_unique_violation())
                    .unwrap_or(false)
                {
                    DomainError::Conflict {
                        message: "refresh token hash already exists".to_string(),
                    }
                } else {
                    persistence(format!("failed to save refresh token: {}", e))
                }
            })?;

        Ok(token)
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, created_at, expires_at, is_revoked
            FROM refresh_tokens
            WHERE token_hash = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| persistence(format!("failed to find refresh token: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn consume(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        // Conditional update: only a live token flips, and of any number of
        // concurrent callers exactly one observes rows_affected == 1.
        let query = r#"
            UPDATE refresh_tokens
            SET is_revoked = TRUE
            WHERE token_hash = ? AND is_revoked = FALSE AND expires_at > ?
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| persistence(format!("failed to consume refresh token: {}", e)))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_hash(token_hash).await
    }

    async fn revoke_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let query = r#"
            UPDATE refresh_tokens
            SET is_revoked = TRUE
            WHERE user_id = ? AND is_revoked = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| persistence(format!("failed to revoke user tokens: {}", e)))?;

        Ok(result.rows_affected() as usize)
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let query = r#"
            DELETE FROM refresh_tokens
            WHERE expires_at < ?
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| persistence(format!("failed to delete expired tokens: {}", e)))?;

        Ok(result.rows_affected() as usize)
    }
}
