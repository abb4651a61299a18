//! Command implementations for the CLI
//!
//! - migrate: Create or upgrade the database schema
//! - logs: List and inspect stored log entries
//! - sources: List log data sources
//! - config: Configuration display

pub mod config;
pub mod logs;
pub mod migrate;
pub mod sources;
