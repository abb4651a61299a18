use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

use super::{CrudRepository, TransactionExecutor};
use crate::error::{Result, StoreError};
use crate::models::LogsDataSource;
use crate::validation::Validate;

const ENTITY: &str = "LogsDataSource";

/// Store for `logs_data_sources`
#[derive(Debug, Clone)]
pub struct LogsDataSourceRepository {
    pool: SqlitePool,
    transactions: TransactionExecutor,
}

impl LogsDataSourceRepository {
    pub fn new(pool: SqlitePool, transactions: TransactionExecutor) -> Self {
        Self { pool, transactions }
    }

    pub async fn find_by_application_id(&self, application_id: &str) -> Result<Vec<LogsDataSource>> {
        let rows = sqlx::query(
            "SELECT uuid, name, source_type, application_id, created_at, log_file_path
             FROM logs_data_sources
             WHERE application_id = ?",
        )
        .bind(application_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_data_source_row).collect()
    }
}

#[async_trait]
impl CrudRepository<LogsDataSource> for LogsDataSourceRepository {
    async fn save(&self, entity: &LogsDataSource) -> Result<()> {
        entity.validate()?;

        let source = entity.clone();
        self.transactions
            .execute(move |conn| Box::pin(async move { insert_data_source(conn, &source).await }))
            .await?;

        tracing::debug!(uuid = %entity.uuid, source_type = %entity.source_type, "Saved logs data source");
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LogsDataSource>> {
        let row = sqlx::query(
            "SELECT uuid, name, source_type, application_id, created_at, log_file_path
             FROM logs_data_sources
             WHERE uuid = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_data_source_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<LogsDataSource>> {
        let rows = sqlx::query(
            "SELECT uuid, name, source_type, application_id, created_at, log_file_path
             FROM logs_data_sources",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_data_source_row).collect()
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let uuid = id.to_string();
        let deleted = self
            .transactions
            .execute(move |conn| Box::pin(async move { delete_data_source(conn, &uuid).await }))
            .await?;

        tracing::debug!(uuid = %id, deleted, "Deleted logs data source");
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        let deleted = self
            .transactions
            .execute(|conn| Box::pin(async move { delete_all_data_sources(conn).await }))
            .await?;

        tracing::debug!(deleted, "Deleted all logs data sources");
        Ok(())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM logs_data_sources WHERE uuid = ?")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }

    async fn update_by_id(&self, id: &str, entity: &LogsDataSource) -> Result<()> {
        let source = entity.with_uuid(id);
        source.validate()?;

        self.transactions
            .execute(move |conn| Box::pin(async move { update_data_source(conn, &source).await }))
            .await?;

        tracing::debug!(uuid = %id, "Updated logs data source");
        Ok(())
    }
}

async fn insert_data_source(conn: &mut SqliteConnection, source: &LogsDataSource) -> Result<()> {
    sqlx::query(
        "INSERT INTO logs_data_sources
         (uuid, name, source_type, application_id, created_at, log_file_path)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&source.uuid)
    .bind(&source.name)
    .bind(&source.source_type)
    .bind(&source.application_id)
    .bind(source.created_at)
    .bind(&source.log_file_path)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

async fn update_data_source(conn: &mut SqliteConnection, source: &LogsDataSource) -> Result<()> {
    let result = sqlx::query(
        "UPDATE logs_data_sources
         SET name = ?,
             source_type = ?,
             application_id = ?,
             created_at = ?,
             log_file_path = ?
         WHERE uuid = ?",
    )
    .bind(&source.name)
    .bind(&source.source_type)
    .bind(&source.application_id)
    .bind(source.created_at)
    .bind(&source.log_file_path)
    .bind(&source.uuid)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::not_found(ENTITY, &source.uuid));
    }
    Ok(())
}

async fn delete_data_source(conn: &mut SqliteConnection, uuid: &str) -> Result<u64> {
    let result = sqlx::query("DELETE FROM logs_data_sources WHERE uuid = ?")
        .bind(uuid)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

async fn delete_all_data_sources(conn: &mut SqliteConnection) -> Result<u64> {
    let result = sqlx::query("DELETE FROM logs_data_sources")
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

fn map_data_source_row(row: &SqliteRow) -> Result<LogsDataSource> {
    Ok(LogsDataSource {
        uuid: row.try_get("uuid")?,
        name: row.try_get("name")?,
        source_type: row.try_get("source_type")?,
        application_id: row.try_get("application_id")?,
        created_at: row.try_get("created_at")?,
        log_file_path: row.try_get("log_file_path")?,
    })
}
