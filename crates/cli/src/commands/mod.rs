//! Subcommand implementations.

pub mod call;
pub mod config_cmd;
pub mod plan;
pub mod status;
pub mod tools;

use std::sync::Arc;

use studycoach_config::AppConfig;
use studycoach_core::tool::ToolResult;
use studycoach_planner::Planner;
use studycoach_tools::{CoachSession, default_registry};

/// How command results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Print the structured `data` of a result instead of its text.
    pub json: bool,
    /// Print the tool-call log after the result.
    pub show_log: bool,
}

/// Build a planner from configuration.
pub fn build_planner(config: &AppConfig) -> Result<Planner, Box<dyn std::error::Error>> {
    let catalog = config
        .build_catalog()
        .map_err(|e| format!("Failed to build catalog: {e}"))?;
    tracing::debug!(modules = catalog.modules().len(), "Catalog built");
    Ok(Planner::new(Arc::new(catalog), config.planner.clone()))
}

/// Build a session over the three planner tools.
pub fn build_session(config: &AppConfig) -> Result<CoachSession, Box<dyn std::error::Error>> {
    let planner = Arc::new(build_planner(config)?);
    Ok(CoachSession::new(Arc::new(default_registry(planner))))
}

pub fn print_result(result: &ToolResult, opts: Output) -> Result<(), Box<dyn std::error::Error>> {
    if opts.json {
        let value = serde_json::to_value(result)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", result.output);
    }
    Ok(())
}
