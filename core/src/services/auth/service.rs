//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::value_objects::AccessTokenResponse;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{RefreshTokenRepository, UserRepository};
use crate::services::token::TokenService;

use super::password;

/// Authentication service orchestrating login and refresh
///
/// The service holds no state across calls; the persistence layer behind
/// the repositories is the only shared mutable resource. Both operations
/// are cancel-safe: every write is a single repository call, so dropping
/// an in-flight future leaves either a fully committed record or nothing.
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    /// Credential store for user lookup
    user_repository: Arc<U>,
    /// Token service for access and refresh tokens
    token_service: Arc<TokenService<T>>,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Credential store for resolving users
    /// * `token_service` - Service for token issuance and rotation
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService<T>>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Authenticate a user and issue a token pair
    ///
    /// The identifier is resolved as a username first, then as an email.
    /// Unknown users, wrong passwords and disabled accounts are rejected
    /// with the same `InvalidCredentials` error; the reason goes to the
    /// log only. A rejected login performs no persistence write.
    ///
    /// On success the response carries a signed access token, its
    /// lifetime in seconds, and a freshly persisted refresh token.
    pub async fn login(
        &self,
        username_or_email: &str,
        password: &str,
    ) -> DomainResult<AccessTokenResponse> {
        // Step 1: resolve the user by username, falling back to email
        let user = match self.user_repository.find_by_username(username_or_email).await? {
            Some(user) => Some(user),
            None => self.user_repository.find_by_email(username_or_email).await?,
        };

        let Some(user) = user else {
            // Burn a bcrypt comparison so the response time does not
            // reveal whether the identifier resolved.
            password::verify_dummy(password);
            tracing::warn!("login rejected: unknown identifier");
            return Err(AuthError::InvalidCredentials.into());
        };

        // Step 2: check account state and password
        if !user.is_active {
            tracing::warn!(user_id = %user.id, "login rejected: account disabled");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !password::verify_password(password, &user.password_hash)? {
            tracing::warn!(user_id = %user.id, "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        // Step 3: issue the token pair
        let access_token = self.token_service.issue_access_token(user.id)?;
        let refresh_token = self.token_service.issue_refresh_token(user.id).await?;

        tracing::info!(user_id = %user.id, "login succeeded");

        Ok(AccessTokenResponse::new(
            access_token,
            self.token_service.access_token_expires_in_seconds(),
            refresh_token,
        ))
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// Validation and rotation are a single atomic consume on the
    /// repository: of two concurrent calls presenting the same token,
    /// exactly one succeeds and the other is rejected as invalid. The
    /// presented token never validates again after this call returns.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AccessTokenResponse> {
        let (user_id, new_refresh_token) =
            match self.token_service.rotate_refresh_token(refresh_token).await {
                Ok(pair) => pair,
                Err(e) => {
                    if e.is_unauthorized() {
                        tracing::warn!("refresh rejected: token not live");
                    }
                    return Err(e);
                }
            };

        let access_token = self.token_service.issue_access_token(user_id)?;

        tracing::info!(user_id = %user_id, "refresh token rotated");

        Ok(AccessTokenResponse::new(
            access_token,
            self.token_service.access_token_expires_in_seconds(),
            new_refresh_token,
        ))
    }
}
