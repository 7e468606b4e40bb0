//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// Mock user repository for testing
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a user into the mock store
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let repo = MockUserRepository::new();
        repo.insert(User::new("Thong.Smith", "thong.smith@test.com", "hash"))
            .await;

        let by_username = repo.find_by_username("thong.smith").await.unwrap();
        assert!(by_username.is_some());

        let by_email = repo.find_by_email("THONG.SMITH@TEST.COM").await.unwrap();
        assert!(by_email.is_some());
    }

    #[tokio::test]
    async fn test_missing_user_returns_none() {
        let repo = MockUserRepository::new();
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }
}
