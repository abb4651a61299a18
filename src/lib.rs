pub mod config;
pub mod database;
pub mod datetime;
pub mod error;
pub mod models;
pub mod repository;
pub mod validation;

pub use database::Database;
pub use error::{Result, StoreError};
pub use models::{new_uuid, Log, LogMetadata, LogsDataSource, SourceType};
pub use repository::{
    CrudRepository, LogMetadataRepository, LogRepository, LogsDataSourceRepository,
    TransactionExecutor,
};

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over the configured level.
/// Can only be called once per process.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).init(),
    }
}
