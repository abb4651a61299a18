use anyhow::Result;
use applog_store::config::Config;
use colored::Colorize;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file + environment overrides)
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying effective configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    Ok(())
}
