//! User repository trait defining the credential-store interface.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for the credential store
///
/// This is the narrow, read-only contract the authentication core needs:
/// resolving a user by login identifier or id. User creation and updates
/// belong to the user-management flow and are not part of this interface.
///
/// Username and email lookups are case-insensitive.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by username
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that username
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;
}
