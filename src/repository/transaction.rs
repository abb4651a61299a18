//! Scoped commit-or-rollback execution

use futures::future::BoxFuture;
use sqlx::{SqliteConnection, SqlitePool};

use crate::error::Result;

/// Runs units of work inside a single store transaction
///
/// The unit of work receives the transaction's connection. Its statements
/// become visible together on `Ok`; on `Err` they are rolled back before the
/// error is returned. A unit of work that is dropped mid-flight (cancelled or
/// panicked) is rolled back when the underlying `sqlx::Transaction` drops.
#[derive(Debug, Clone)]
pub struct TransactionExecutor {
    pool: SqlitePool,
}

impl TransactionExecutor {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// # Example
    ///
    /// ```ignore
    /// executor
    ///     .execute(move |conn| {
    ///         Box::pin(async move {
    ///             sqlx::query("DELETE FROM app_logs").execute(&mut *conn).await?;
    ///             Ok(())
    ///         })
    ///     })
    ///     .await?;
    /// ```
    pub async fn execute<T, F>(&self, work: F) -> Result<T>
    where
        T: Send,
        F: for<'c> FnOnce(&'c mut SqliteConnection) -> BoxFuture<'c, Result<T>> + Send,
    {
        let mut tx = self.pool.begin().await?;

        let outcome = work(&mut *tx).await;

        match outcome {
            Ok(value) => {
                tx.commit().await?;
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    kind = err.kind(),
                    "Unit of work failed, rolling back transaction"
                );
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(
                        error = %rollback_err,
                        "Rollback failed, connection will discard the transaction on release"
                    );
                }
                Err(err)
            }
        }
    }
}
