//! User entity as exposed by the credential store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User record held by the credential store
///
/// The authentication core only reads this entity; creation and updates
/// belong to the user-management flow behind the repository boundary.
/// Username and email are unique and looked up case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,

    /// Unique username
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Bcrypt hash of the user's password
    pub password_hash: String,

    /// Whether the account may authenticate
    pub is_active: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user record
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Disables the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_active() {
        let user = User::new("thong.smith", "thong.smith@test.com", "$2b$12$hash");

        assert!(user.is_active);
        assert_eq!(user.username, "thong.smith");
        assert_eq!(user.email, "thong.smith@test.com");
    }

    #[test]
    fn test_deactivate() {
        let mut user = User::new("saitama", "saitama@onepunch.man", "$2b$12$hash");

        user.deactivate();

        assert!(!user.is_active);
    }
}
