//! StudyCoach CLI — the main entry point.
//!
//! Commands:
//! - `outline`   — List the topics of a module
//! - `schedule`  — Build a day-by-day study schedule
//! - `practice`  — Suggest practice tasks
//! - `tools`     — Print the tool definitions offered to a language model
//! - `call`      — Execute a raw tool call and print the tool-call log
//! - `config`    — Show, locate, or validate configuration
//! - `status`    — Show configuration and catalog summary

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use studycoach_config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "studycoach",
    about = "StudyCoach — exam study planning tools",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging and print the tool-call log
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print structured JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Use this config file instead of ~/.studycoach/config.toml
    #[arg(short, long, global = true, env = "STUDYCOACH_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the topics of a module
    Outline {
        /// Module name (case-insensitive)
        module: String,
    },

    /// Build a day-by-day study schedule
    Schedule {
        /// Module name (case-insensitive)
        module: String,

        /// Days left until the exam
        #[arg(short, long)]
        days: u32,

        /// Study hours available per day
        #[arg(short = 'H', long)]
        hours: f64,

        /// Weak topics (substring match; repeat or comma-separate)
        #[arg(short, long, value_delimiter = ',')]
        weak: Vec<String>,
    },

    /// Suggest practice tasks for focus topics
    Practice {
        /// Module name (case-insensitive)
        module: String,

        /// Focus topics (substring match; repeat or comma-separate)
        #[arg(short, long, value_delimiter = ',')]
        focus: Vec<String>,
    },

    /// Print the tool definitions as JSON
    Tools,

    /// Execute a single tool call
    Call {
        /// Tool name, e.g. build_study_schedule
        tool: String,

        /// Arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config_cmd::ConfigAction,
    },

    /// Show configuration and catalog summary
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| AppConfig::config_dir().join("config.toml"));
    let loaded = AppConfig::load_from(&config_path).map(AppConfig::with_env_overrides);

    let log_format = loaded
        .as_ref()
        .map(|c| c.logging.format.as_str())
        .unwrap_or("pretty");
    init_tracing(cli.verbose, log_format);
    tracing::debug!(path = %config_path.display(), "Using config file");

    let opts = commands::Output {
        json: cli.json,
        show_log: cli.verbose,
    };

    match cli.command {
        Commands::Config { action } => {
            commands::config_cmd::run(action, &config_path, loaded).await?
        }
        command => {
            let config = loaded.map_err(|e| format!("Failed to load config: {e}"))?;
            dispatch(command, &config, &config_path, opts).await?
        }
    }

    Ok(())
}

async fn dispatch(
    command: Commands,
    config: &AppConfig,
    config_path: &Path,
    opts: commands::Output,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Outline { module } => commands::plan::outline(config, module, opts).await,
        Commands::Schedule {
            module,
            days,
            hours,
            weak,
        } => commands::plan::schedule(config, module, days, hours, weak, opts).await,
        Commands::Practice { module, focus } => {
            commands::plan::practice(config, module, focus, opts).await
        }
        Commands::Tools => commands::tools::run(config).await,
        Commands::Call { tool, args } => commands::call::run(config, tool, &args, opts).await,
        Commands::Status => commands::status::run(config, config_path).await,
        Commands::Config { action } => {
            commands::config_cmd::run(action, config_path, Ok(config.clone())).await
        }
    }
}

/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(verbose: bool, format: &str) {
    let level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
