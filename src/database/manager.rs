use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::{DatabaseConfig, StorageBackend};
use crate::database::repository::Storage;

/// Errors from the storage layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Translate unique-constraint violations into `Conflict`, pass everything else through.
    pub(crate) fn from_write(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unique").to_string();
                return DatabaseError::Conflict(constraint);
            }
        }
        DatabaseError::Sqlx(err)
    }
}

/// Builds connection pools and storage backends from configuration
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open the storage backend selected in config, running migrations when enabled
    pub async fn storage(config: &DatabaseConfig) -> Result<Storage, DatabaseError> {
        match config.backend {
            StorageBackend::Memory => {
                info!("Using in-memory storage backend");
                Ok(Storage::memory())
            }
            StorageBackend::Postgres => {
                let pool = Self::connect(config).await?;
                if config.run_migrations {
                    Self::run_migrations(&pool).await?;
                }
                Ok(Storage::postgres(pool))
            }
        }
    }

    /// Create a Postgres pool from `DATABASE_URL`
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let connection_string = config
            .url
            .as_deref()
            .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))?;
        let redacted = Self::redacted_url(connection_string)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(connection_string)
            .await?;

        info!("Created database pool for: {}", redacted);
        Ok(pool)
    }

    pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Connection string with the password stripped, for logging
    fn redacted_url(connection_string: &str) -> Result<String, DatabaseError> {
        let mut url = url::Url::parse(connection_string).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        if !matches!(url.scheme(), "postgres" | "postgresql") {
            return Err(DatabaseError::InvalidDatabaseUrl);
        }
        if url.password().is_some() {
            url.set_password(Some("***")).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        }
        Ok(url.into())
    }
}
