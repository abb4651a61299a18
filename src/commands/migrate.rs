use anyhow::Result;
use applog_store::config::Config;
use applog_store::Database;
use colored::Colorize;
use tracing::info;

/// Execute the migrate command
///
/// Connecting applies any pending migrations.
pub async fn execute(cfg: &Config) -> Result<()> {
    println!("{}", "Migrating log store database...".yellow());
    info!(url = %cfg.database.url, "Running migrations");

    let db = Database::connect(&cfg.database).await?;
    db.close().await;

    println!("{}", "✓ Database schema is up to date".green());
    println!("  {}: {}", "Database".cyan(), cfg.database.url);
    Ok(())
}
