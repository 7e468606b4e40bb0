//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Credence
//! application. It provides the MySQL-backed implementations of the core
//! repository traits and connection pool management.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlRefreshTokenRepository, MySqlUserRepository};
