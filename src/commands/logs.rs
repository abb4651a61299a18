//! Logs inspection commands
//!
//! Query and display stored log entries from the SQLite database.

use anyhow::Result;
use applog_store::config::Config;
use applog_store::datetime::format_utc;
use applog_store::{CrudRepository, Database, Log, LogMetadata};
use colored::Colorize;
use serde::Serialize;

/// A log entry together with the metadata rows that reference it
#[derive(Debug, Serialize)]
struct LogDetails {
    #[serde(flatten)]
    log: Log,
    metadata: Vec<LogMetadata>,
}

/// Execute the logs list command
pub async fn list(cfg: &Config, application: Option<&str>, format: &str) -> Result<()> {
    let db = Database::connect(&cfg.database).await?;
    let repository = db.logs();

    let mut logs = match application {
        Some(application_id) => repository.find_by_application_id(application_id).await?,
        None => repository.find_all().await?,
    };
    // Store order is unspecified
    logs.sort_by(|a, b| a.uuid.cmp(&b.uuid));

    if logs.is_empty() {
        println!("{}", "No logs found matching the criteria".yellow());
        return Ok(());
    }

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&logs)?;
            println!("{}", json);
        }
        _ => display_logs_text(&logs),
    }

    Ok(())
}

/// Execute the logs show command
pub async fn show(cfg: &Config, uuid: &str, format: &str) -> Result<()> {
    let db = Database::connect(&cfg.database).await?;

    let Some(log) = db.logs().find_by_id(uuid).await? else {
        println!("{}", format!("Log '{}' not found", uuid).yellow());
        return Ok(());
    };
    let metadata = db.log_metadata().find_by_root_log_id(uuid).await?;

    match format {
        "json" => {
            let details = LogDetails { log, metadata };
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
        _ => {
            display_logs_text(std::slice::from_ref(&log));
            println!();
            if metadata.is_empty() {
                println!("  {}", "(no metadata)".dimmed());
            }
            for item in &metadata {
                println!(
                    "  {} {} = {}",
                    item.uuid.dimmed(),
                    item.metadata_type.cyan(),
                    item.metadata_value
                );
            }
        }
    }

    Ok(())
}

/// Display logs in human-friendly text format
fn display_logs_text(logs: &[Log]) {
    println!("{}", format!("Found {} log entries", logs.len()).bold());
    println!();

    for log in logs {
        // Colorize level
        let severity_colored = match log.severity.as_str() {
            "ERROR" => log.severity.red().bold(),
            "WARN" => log.severity.yellow().bold(),
            "INFO" => log.severity.green(),
            "DEBUG" => log.severity.blue(),
            _ => log.severity.normal(),
        };

        println!(
            "{} {} {} [{}] {}",
            format_utc(&log.timestamp).dimmed(),
            severity_colored,
            log.uuid,
            log.application_id.cyan(),
            log.message
        );
        println!("    {}: {}", "source".dimmed(), log.log_source);
    }
}
