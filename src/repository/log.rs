use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

use super::log_metadata::insert_metadata;
use super::{CrudRepository, TransactionExecutor};
use crate::error::{Result, StoreError};
use crate::models::{Log, LogMetadata};
use crate::validation::Validate;

const ENTITY: &str = "Log";

/// Store for `app_logs`, keyed by uuid
///
/// `find_all` and `find_by_application_id` return rows in store-native order
/// (no ORDER BY). Callers that need a stable order sort client-side, e.g. by uuid.
#[derive(Debug, Clone)]
pub struct LogRepository {
    pool: SqlitePool,
    transactions: TransactionExecutor,
}

impl LogRepository {
    pub fn new(pool: SqlitePool, transactions: TransactionExecutor) -> Self {
        Self { pool, transactions }
    }

    /// Every log owned by `application_id`
    pub async fn find_by_application_id(&self, application_id: &str) -> Result<Vec<Log>> {
        let rows = sqlx::query(
            "SELECT uuid, timestamp, severity, application_id, log_source, message
             FROM app_logs
             WHERE application_id = ?",
        )
        .bind(application_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_log_row).collect()
    }

    /// Insert a log and its initial metadata rows as one atomic unit.
    ///
    /// Every metadata row must reference `log`. If any insert fails nothing is written.
    pub async fn save_with_metadata(&self, log: &Log, metadata: &[LogMetadata]) -> Result<()> {
        log.validate()?;
        for item in metadata {
            item.validate()?;
            if item.log_id != log.uuid {
                return Err(StoreError::validation(
                    "log_id",
                    format!(
                        "Metadata '{}' references log '{}' instead of '{}'",
                        item.uuid, item.log_id, log.uuid
                    ),
                ));
            }
        }

        let owned_log = log.clone();
        let owned_metadata = metadata.to_vec();
        self.transactions
            .execute(move |conn| {
                Box::pin(async move {
                    insert_log_with_metadata(conn, &owned_log, &owned_metadata).await
                })
            })
            .await?;

        tracing::debug!(
            uuid = %log.uuid,
            metadata_count = metadata.len(),
            "Saved log with metadata"
        );
        Ok(())
    }
}

#[async_trait]
impl CrudRepository<Log> for LogRepository {
    async fn save(&self, entity: &Log) -> Result<()> {
        entity.validate()?;

        let log = entity.clone();
        self.transactions
            .execute(move |conn| Box::pin(async move { insert_log(conn, &log).await }))
            .await?;

        tracing::debug!(uuid = %entity.uuid, "Saved log");
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Log>> {
        let row = sqlx::query(
            "SELECT uuid, timestamp, severity, application_id, log_source, message
             FROM app_logs
             WHERE uuid = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_log_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Log>> {
        let rows = sqlx::query(
            "SELECT uuid, timestamp, severity, application_id, log_source, message
             FROM app_logs",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_log_row).collect()
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let uuid = id.to_string();
        let deleted = self
            .transactions
            .execute(move |conn| Box::pin(async move { delete_log(conn, &uuid).await }))
            .await?;

        tracing::debug!(uuid = %id, deleted, "Deleted log");
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        let deleted = self
            .transactions
            .execute(|conn| Box::pin(async move { delete_all_logs(conn).await }))
            .await?;

        tracing::debug!(deleted, "Deleted all logs");
        Ok(())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM app_logs WHERE uuid = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn update_by_id(&self, id: &str, entity: &Log) -> Result<()> {
        let log = entity.with_uuid(id);
        log.validate()?;

        self.transactions
            .execute(move |conn| Box::pin(async move { update_log(conn, &log).await }))
            .await?;

        tracing::debug!(uuid = %id, "Updated log");
        Ok(())
    }
}

async fn insert_log(conn: &mut SqliteConnection, log: &Log) -> Result<()> {
    sqlx::query(
        "INSERT INTO app_logs (uuid, timestamp, severity, application_id, log_source, message)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&log.uuid)
    .bind(log.timestamp)
    .bind(&log.severity)
    .bind(&log.application_id)
    .bind(&log.log_source)
    .bind(&log.message)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

async fn insert_log_with_metadata(
    conn: &mut SqliteConnection,
    log: &Log,
    metadata: &[LogMetadata],
) -> Result<()> {
    insert_log(conn, log).await?;
    for item in metadata {
        insert_metadata(conn, item).await?;
    }
    Ok(())
}

/// Updates every column except the key; `log.uuid` selects the row
async fn update_log(conn: &mut SqliteConnection, log: &Log) -> Result<()> {
    let result = sqlx::query(
        "UPDATE app_logs
         SET timestamp = ?,
             severity = ?,
             application_id = ?,
             log_source = ?,
             message = ?
         WHERE uuid = ?",
    )
    .bind(log.timestamp)
    .bind(&log.severity)
    .bind(&log.application_id)
    .bind(&log.log_source)
    .bind(&log.message)
    .bind(&log.uuid)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::not_found(ENTITY, &log.uuid));
    }
    Ok(())
}

async fn delete_log(conn: &mut SqliteConnection, uuid: &str) -> Result<u64> {
    let result = sqlx::query("DELETE FROM app_logs WHERE uuid = ?")
        .bind(uuid)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

async fn delete_all_logs(conn: &mut SqliteConnection) -> Result<u64> {
    let result = sqlx::query("DELETE FROM app_logs")
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

fn map_log_row(row: &SqliteRow) -> Result<Log> {
    Ok(Log {
        uuid: row.try_get("uuid")?,
        timestamp: row.try_get("timestamp")?,
        severity: row.try_get("severity")?,
        application_id: row.try_get("application_id")?,
        log_source: row.try_get("log_source")?,
        message: row.try_get("message")?,
    })
}
