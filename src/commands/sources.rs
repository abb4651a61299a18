use anyhow::Result;
use applog_store::config::Config;
use applog_store::datetime::format_utc;
use applog_store::{CrudRepository, Database, LogsDataSource};
use colored::Colorize;

/// Execute the sources list command
pub async fn list(cfg: &Config, application: Option<&str>) -> Result<()> {
    let db = Database::connect(&cfg.database).await?;
    let repository = db.data_sources();

    let mut sources = match application {
        Some(application_id) => repository.find_by_application_id(application_id).await?,
        None => repository.find_all().await?,
    };
    sort_sources(&mut sources);

    if sources.is_empty() {
        println!("{}", "No data sources found".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} data sources", sources.len()).bold());
    println!();

    for source in &sources {
        println!(
            "{} {} [{}] app={} created={}",
            source.uuid.dimmed(),
            source.name.cyan(),
            source.source_type,
            source.application_id,
            format_utc(&source.created_at)
        );
        if let Some(path) = &source.log_file_path {
            println!("    {}: {}", "file".dimmed(), path);
        }
    }

    Ok(())
}

/// Order by name, then uuid for sources sharing a name
fn sort_sources(sources: &mut [LogsDataSource]) {
    sources.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.uuid.cmp(&b.uuid)));
}
