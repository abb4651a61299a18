use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

use super::{CrudRepository, TransactionExecutor};
use crate::error::{Result, StoreError};
use crate::models::LogMetadata;
use crate::validation::Validate;

const ENTITY: &str = "LogMetadata";

/// Store for `logs_metadata`
///
/// The log -> metadata relation lives only in the `log_uuid` column and is
/// materialized on demand by [`LogMetadataRepository::find_by_root_log_id`].
/// Deleting a log does not delete its metadata.
#[derive(Debug, Clone)]
pub struct LogMetadataRepository {
    pool: SqlitePool,
    transactions: TransactionExecutor,
}

impl LogMetadataRepository {
    pub fn new(pool: SqlitePool, transactions: TransactionExecutor) -> Self {
        Self { pool, transactions }
    }

    /// Every metadata row whose `log_uuid` equals `log_id`.
    ///
    /// Pure filter: the root log is not required to exist.
    pub async fn find_by_root_log_id(&self, log_id: &str) -> Result<Vec<LogMetadata>> {
        let rows = sqlx::query(
            "SELECT uuid, log_uuid, metadata_type, metadata_value
             FROM logs_metadata
             WHERE log_uuid = ?",
        )
        .bind(log_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_metadata_row).collect()
    }
}

#[async_trait]
impl CrudRepository<LogMetadata> for LogMetadataRepository {
    async fn save(&self, entity: &LogMetadata) -> Result<()> {
        entity.validate()?;

        let metadata = entity.clone();
        self.transactions
            .execute(move |conn| Box::pin(async move { insert_metadata(conn, &metadata).await }))
            .await?;

        tracing::debug!(uuid = %entity.uuid, log_uuid = %entity.log_id, "Saved log metadata");
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LogMetadata>> {
        let row = sqlx::query(
            "SELECT uuid, log_uuid, metadata_type, metadata_value
             FROM logs_metadata
             WHERE uuid = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_metadata_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<LogMetadata>> {
        let rows = sqlx::query(
            "SELECT uuid, log_uuid, metadata_type, metadata_value
             FROM logs_metadata",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_metadata_row).collect()
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let uuid = id.to_string();
        let deleted = self
            .transactions
            .execute(move |conn| Box::pin(async move { delete_metadata(conn, &uuid).await }))
            .await?;

        tracing::debug!(uuid = %id, deleted, "Deleted log metadata");
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        let deleted = self
            .transactions
            .execute(|conn| Box::pin(async move { delete_all_metadata(conn).await }))
            .await?;

        tracing::debug!(deleted, "Deleted all log metadata");
        Ok(())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM logs_metadata WHERE uuid = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn update_by_id(&self, id: &str, entity: &LogMetadata) -> Result<()> {
        let metadata = entity.with_uuid(id);
        metadata.validate()?;

        self.transactions
            .execute(move |conn| Box::pin(async move { update_metadata(conn, &metadata).await }))
            .await?;

        tracing::debug!(uuid = %id, "Updated log metadata");
        Ok(())
    }
}

pub(crate) async fn insert_metadata(
    conn: &mut SqliteConnection,
    metadata: &LogMetadata,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO logs_metadata (uuid, log_uuid, metadata_type, metadata_value)
         VALUES (?, ?, ?, ?)",
    )
    .bind(&metadata.uuid)
    .bind(&metadata.log_id)
    .bind(&metadata.metadata_type)
    .bind(&metadata.metadata_value)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

async fn update_metadata(conn: &mut SqliteConnection, metadata: &LogMetadata) -> Result<()> {
    let result = sqlx::query(
        "UPDATE logs_metadata
         SET log_uuid = ?,
             metadata_type = ?,
             metadata_value = ?
         WHERE uuid = ?",
    )
    .bind(&metadata.log_id)
    .bind(&metadata.metadata_type)
    .bind(&metadata.metadata_value)
    .bind(&metadata.uuid)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::not_found(ENTITY, &metadata.uuid));
    }
    Ok(())
}

async fn delete_metadata(conn: &mut SqliteConnection, uuid: &str) -> Result<u64> {
    let result = sqlx::query("DELETE FROM logs_metadata WHERE uuid = ?")
        .bind(uuid)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

async fn delete_all_metadata(conn: &mut SqliteConnection) -> Result<u64> {
    let result = sqlx::query("DELETE FROM logs_metadata")
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

fn map_metadata_row(row: &SqliteRow) -> Result<LogMetadata> {
    Ok(LogMetadata {
        uuid: row.try_get("uuid")?,
        log_id: row.try_get("log_uuid")?,
        metadata_type: row.try_get("metadata_type")?,
        metadata_value: row.try_get("metadata_value")?,
    })
}
