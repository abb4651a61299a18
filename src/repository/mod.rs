//! Persistence layer
//!
//! Every concrete repository implements [`CrudRepository`] over one entity,
//! owns its own statements and row mapping, and routes its mutating calls
//! through a [`TransactionExecutor`].

pub mod log;
pub mod log_metadata;
pub mod logs_data_source;
pub mod transaction;

pub use log::LogRepository;
pub use log_metadata::LogMetadataRepository;
pub use logs_data_source::LogsDataSourceRepository;
pub use transaction::TransactionExecutor;

use async_trait::async_trait;

use crate::error::Result;

/// Uniform create/read/update/delete capability over entity `T`, keyed by a string id
#[async_trait]
pub trait CrudRepository<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Insert a new row. An existing row with the same id is a
    /// `ConstraintViolation`; use [`CrudRepository::update_by_id`] to modify it.
    async fn save(&self, entity: &T) -> Result<()>;

    /// The matching entity, or `None` when no row has this id
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Every row, in store-native order
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Remove the row if present. Missing ids are a no-op.
    async fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Remove every row of this entity type
    async fn delete_all(&self) -> Result<()>;

    /// Count-based existence check
    async fn exists_by_id(&self, id: &str) -> Result<bool>;

    /// Replace every mutable field of row `id` with the fields of `entity`.
    ///
    /// The id carried inside `entity` is ignored. Fails with `NotFound` when
    /// no row has this id.
    async fn update_by_id(&self, id: &str, entity: &T) -> Result<()>;
}
