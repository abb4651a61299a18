use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "applog", version, about = "Application log store")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "applog.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create or upgrade the database schema
    Migrate,

    /// Inspect stored log entries
    Logs {
        #[command(subcommand)]
        action: LogsCommands,
    },

    /// Inspect registered log data sources
    Sources {
        #[command(subcommand)]
        action: SourcesCommands,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum LogsCommands {
    /// List log entries, sorted by uuid
    List {
        /// Only logs owned by this application
        #[arg(short, long)]
        application: Option<String>,

        /// Output format (text, json)
        #[arg(short = 'f', long, default_value = "text")]
        format: String,
    },

    /// Show one log entry with its metadata
    Show {
        /// Log uuid
        uuid: String,

        /// Output format (text, json)
        #[arg(short = 'f', long, default_value = "text")]
        format: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SourcesCommands {
    /// List data sources
    List {
        /// Only sources owned by this application
        #[arg(short, long)]
        application: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
}
