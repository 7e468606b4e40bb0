//! Shared configuration types for the Credence server
//!
//! This crate provides the configuration surface used across the server
//! modules: JWT signing settings, database connection settings, and
//! environment detection. Configuration is loaded once at startup and
//! passed explicitly to service constructors.

pub mod config;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, DatabaseConfig, Environment, JwtConfig};
