//! MySQL implementation of the UserRepository trait.
//!
//! Read-only lookups against the `users` table; the columns collate
//! case-insensitively, matching the repository contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use cr_core::domain::entities::user::User;
use cr_core::errors::DomainError;
use cr_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| persistence(format!("failed to get id: {}", e)))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| persistence(format!("invalid user UUID: {}", e)))?,
            username: row
                .try_get("username")
                .map_err(|e| persistence(format!("failed to get username: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| persistence(format!("failed to get email: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| persistence(format!("failed to get password_hash: {}", e)))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| persistence(format!("failed to get is_active: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| persistence(format!("failed to get created_at: {}", e)))?,
        })
    }

    async fn find_by_column(
        &self,
        query: &str,
        value: &str,
    ) -> Result<Option<User>, DomainError> {
        let result = sqlx::query(query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| persistence(format!("user lookup failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

fn persistence(message: String) -> DomainError {
    DomainError::Persistence { message }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM users
            WHERE username = ?
            LIMIT 1
        "#;

        self.find_by_column(query, username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        self.find_by_column(query, email).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        self.find_by_column(query, &id.to_string()).await
    }
}
