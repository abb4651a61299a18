use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL (default: "sqlite:./data/applog.db")
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Pool size (default: 5)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// How long a call waits for a pooled connection (default: 30)
    #[serde(default = "default_acquire_timeout_seconds")]
    pub acquire_timeout_seconds: u64,

    /// How long SQLite waits on a locked database (default: 30)
    #[serde(default = "default_busy_timeout_seconds")]
    pub busy_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            acquire_timeout_seconds: default_acquire_timeout_seconds(),
            busy_timeout_seconds: default_busy_timeout_seconds(),
        }
    }
}

impl DatabaseConfig {
    /// Private in-memory database, one connection
    ///
    /// The data lives as long as the pool; `Database::connect` keeps that
    /// connection open until the pool is closed.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Fallback filter when RUST_LOG is unset (default: "info")
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn default_database_url() -> String {
    "sqlite:./data/applog.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_seconds() -> u64 {
    30
}

fn default_busy_timeout_seconds() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load configuration from an optional TOML file, overridden by `APPLOG_*` env vars
///
/// e.g. `APPLOG_DATABASE__URL=sqlite:/var/lib/applog.db`
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("APPLOG").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.database.url.trim().is_empty() {
        anyhow::bail!("database.url cannot be empty");
    }

    if cfg.database.max_connections < 1 {
        anyhow::bail!("database.max_connections must be >= 1");
    }

    if cfg.database.acquire_timeout_seconds == 0 {
        anyhow::bail!("database.acquire_timeout_seconds must be > 0");
    }

    if cfg.logging.level.trim().is_empty() {
        anyhow::bail!("logging.level cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_configs() {
        let cfg = Config::default();
        assert_eq!(cfg.database.url, "sqlite:./data/applog.db");
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[database]
url = "sqlite:/tmp/applog-test.db"
max_connections = 2

[logging]
format = "json"
"#
        )
        .unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.database.url, "sqlite:/tmp/applog-test.db");
        assert_eq!(cfg.database.max_connections, 2);
        assert_eq!(cfg.database.busy_timeout_seconds, 30);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let cfg = load_config(Path::new("/nonexistent/applog.toml")).unwrap();
        assert_eq!(cfg.database.max_connections, 5);
    }

    #[test]
    fn test_validate_config_rejects_zero_connections() {
        let mut cfg = Config::default();
        cfg.database.max_connections = 0;

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_connections"));
    }

    #[test]
    fn test_validate_config_rejects_empty_url() {
        let mut cfg = Config::default();
        cfg.database.url = " ".to_string();

        assert!(validate_config(&cfg).is_err());
    }
}
