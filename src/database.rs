//! SQLite connection pool for the log store
//!
//! This module provides:
//! - Connection pooling shared by every repository
//! - Automatic migrations
//! - WAL mode for concurrent reads/writes
//! - Factory methods wiring repositories to the pool

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::repository::{
    LogMetadataRepository, LogRepository, LogsDataSourceRepository, TransactionExecutor,
};

/// Log store database handle
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the pool described by `config` and bring the schema up to date
    ///
    /// # Example
    ///
    /// ```ignore
    /// let db = Database::connect(&DatabaseConfig::in_memory()).await?;
    /// let logs = db.logs();
    /// ```
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .with_context(|| format!("Invalid database url: {}", config.url))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(config.busy_timeout_seconds));

        let in_memory = is_in_memory_url(&config.url);
        if !in_memory {
            ensure_parent_dir(options.get_filename())?;
        }

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds));
        if in_memory {
            // The database lives only as long as one of its connections
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .context("Failed to connect to log store database")?;

        tracing::info!(
            url = %config.url,
            max_connections = config.max_connections,
            "Log store database connected"
        );

        let db = Self { pool };
        db.run_migrations().await?;

        Ok(db)
    }

    /// Wrap an existing pool. The caller is responsible for migrations.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run log store database migrations")?;

        tracing::info!("Log store database migrations completed");
        Ok(())
    }

    pub fn transactions(&self) -> TransactionExecutor {
        TransactionExecutor::new(self.pool.clone())
    }

    pub fn logs(&self) -> LogRepository {
        LogRepository::new(self.pool.clone(), self.transactions())
    }

    pub fn log_metadata(&self) -> LogMetadataRepository {
        LogMetadataRepository::new(self.pool.clone(), self.transactions())
    }

    pub fn data_sources(&self) -> LogsDataSourceRepository {
        LogsDataSourceRepository::new(self.pool.clone(), self.transactions())
    }

    /// Get the underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// SQLite creates a missing database file but not its directory
fn ensure_parent_dir(db_file: &Path) -> Result<()> {
    match db_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
            tracing::debug!(path = %parent.display(), "Created database directory");
            Ok(())
        }
        _ => Ok(()),
    }
}
