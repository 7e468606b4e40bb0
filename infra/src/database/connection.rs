//! Database connection pool management
//!
//! Connection pooling for MySQL using SQLx, configured from the shared
//! `DatabaseConfig`.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;

use cr_core::errors::{DomainError, DomainResult};
use cr_shared::DatabaseConfig;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx MySQL connection pool
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    pub async fn new(config: DatabaseConfig) -> DomainResult<Self> {
        tracing::info!(
            max_connections = config.max_connections,
            "creating database connection pool"
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .test_before_acquire(true)
            .connect(&config.url)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to create database pool");
                DomainError::Persistence {
                    message: format!("failed to connect to database: {}", e),
                }
            })?;

        Ok(Self { pool })
    }

    /// Create a pool from environment variables, loading `.env` if present
    pub async fn from_env() -> DomainResult<Self> {
        dotenvy::dotenv().ok();
        Self::new(DatabaseConfig::from_env()).await
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Check if the database connection is healthy
    pub async fn health_check(&self) -> DomainResult<bool> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(|e| DomainError::Persistence {
                message: format!("database health check failed: {}", e),
            })
    }
}
