//! Entity model
//!
//! Each entity is a plain value mapped one-to-one with a store row. Relations
//! are carried by identifier value only (`LogMetadata::log_id`), never by
//! in-memory references.

pub mod log;
pub mod log_metadata;
pub mod logs_data_source;

pub use log::Log;
pub use log_metadata::LogMetadata;
pub use logs_data_source::{LogsDataSource, SourceType};

/// Generate a new canonical (v4) entity identifier
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}
