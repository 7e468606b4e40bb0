//! # Credence Core
//!
//! Core business logic and domain layer for the Credence backend.
//! This crate contains the domain entities, authentication and token
//! services, repository interfaces, and error types behind the
//! credential-based authentication flow.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::token::{Claims, RefreshToken};
pub use domain::entities::user::User;
pub use domain::value_objects::AccessTokenResponse;
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{RefreshTokenRepository, UserRepository};
pub use services::{AuthService, TokenService, TokenServiceConfig};
