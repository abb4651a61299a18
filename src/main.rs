use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use applog_store::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    let cfg = config::load_config(&args.config)?;
    init_tracing(&cfg.logging);

    // Dispatch to appropriate command handler
    match args.command {
        cli::Commands::Migrate => {
            commands::migrate::execute(&cfg).await?;
        }
        cli::Commands::Logs { action } => match action {
            cli::LogsCommands::List {
                application,
                format,
            } => {
                commands::logs::list(&cfg, application.as_deref(), &format).await?;
            }
            cli::LogsCommands::Show { uuid, format } => {
                commands::logs::show(&cfg, &uuid, &format).await?;
            }
        },
        cli::Commands::Sources { action } => match action {
            cli::SourcesCommands::List { application } => {
                commands::sources::list(&cfg, application.as_deref()).await?;
            }
        },
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
        },
        cli::Commands::Version => {
            println!("applog v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
