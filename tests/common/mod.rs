#![allow(dead_code)]

use applog_store::config::DatabaseConfig;
use applog_store::datetime::parse_utc;
use applog_store::{Database, Log, LogMetadata, LogsDataSource, SourceType};

pub const APP_ID: &str = "4b1d3f0e-2c9a-4e77-9f10-6a51c2d8e0b3";

/// Fresh in-memory database with migrations applied
pub async fn setup_db() -> Database {
    Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database")
}

pub fn sample_log(uuid: &str) -> Log {
    Log::new(
        uuid,
        parse_utc("2025-08-11 11:09:22 UTC").unwrap(),
        "WARN",
        APP_ID,
        "Chrome LTS  version 132.0.6834.223",
        "Object not found exception",
    )
}

pub fn sample_metadata(uuid: &str, log_id: &str) -> LogMetadata {
    LogMetadata::new(uuid, log_id, "browser", "Chrome 132")
}

pub fn sample_data_source(uuid: &str) -> LogsDataSource {
    LogsDataSource::new(
        uuid,
        "web frontend",
        SourceType::Api.as_str(),
        APP_ID,
        parse_utc("2025-08-10 08:00:00 UTC").unwrap(),
        None,
    )
}
