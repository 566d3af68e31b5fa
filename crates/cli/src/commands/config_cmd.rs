//! `studycoach config` — Configuration management commands.

use std::path::Path;

use clap::Subcommand;
use studycoach_config::{AppConfig, ConfigError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Validate the config file and summarize it
    Validate,
    /// Print a default config file
    Init,
}

pub async fn run(
    action: ConfigAction,
    path: &Path,
    loaded: Result<AppConfig, ConfigError>,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = loaded.map_err(|e| format!("Failed to load config: {e}"))?;
            println!("{}", config.to_toml());
        }
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init => println!("{}", AppConfig::default_toml()),
        ConfigAction::Validate => validate(path, loaded)?,
    }
    Ok(())
}

fn validate(
    path: &Path,
    loaded: Result<AppConfig, ConfigError>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating {}...", path.display());

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    };
    // Env overrides are applied after file validation; re-check.
    if let Err(e) = config.validate() {
        println!("   ❌ Config error: {e}");
        return Err(e.into());
    }
    println!("   ✅ Config parsed successfully");

    let catalog = config.build_catalog()?;
    println!();
    println!("   Weak weight:     {}", config.planner.weak_weight);
    println!("   Chunk fraction:  {}", config.planner.chunk_fraction);
    println!("   Day fullness:    {}", config.planner.day_fullness);
    println!("   Max days:        {}", config.planner.max_days);
    println!("   Modules:         {}", catalog.modules().len());
    Ok(())
}
