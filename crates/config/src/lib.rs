//! Configuration loading, validation, and management for StudyCoach.
//!
//! Loads configuration from `~/.studycoach/config.toml` (the directory can
//! be moved with `STUDYCOACH_HOME`) with environment variable overrides.
//! Validates all settings at startup and builds the immutable [`Catalog`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use studycoach_core::catalog::{Catalog, Module, builtin_modules};
use studycoach_core::plan::PlanPolicy;

/// The root configuration structure.
///
/// Maps directly to `~/.studycoach/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weighting and packing policy
    #[serde(default)]
    pub planner: PlanPolicy,

    /// Modules and practice tasks
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Start from the built-in modules before applying `modules`.
    #[serde(default = "default_true")]
    pub include_builtin: bool,

    /// Extra modules. A module whose name matches a built-in one
    /// (case-insensitive) replaces it.
    #[serde(default)]
    pub modules: Vec<ModuleConfig>,
}

fn default_true() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            modules: vec![],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub name: String,

    /// Topics in study order
    pub topics: Vec<String>,

    /// Practice tasks keyed by topic name
    #[serde(default)]
    pub practice: BTreeMap<String, Vec<String>>,
}

impl From<ModuleConfig> for Module {
    fn from(config: ModuleConfig) -> Self {
        Module {
            name: config.name,
            topics: config.topics,
            practice: config.practice,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path
    /// (`~/.studycoach/config.toml`).
    ///
    /// `STUDYCOACH_LOG_FORMAT` overrides `logging.format`.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        Ok(Self::load_from(&config_path)?.with_env_overrides())
    }

    /// Load configuration from a specific file path. A missing file yields
    /// the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        match std::env::var("STUDYCOACH_HOME") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => dirs_home().join(".studycoach"),
        }
    }

    /// Apply environment variable overrides on top of file settings.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(format) = std::env::var("STUDYCOACH_LOG_FORMAT") {
            self.logging.format = format;
        }
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let policy = &self.planner;
        if policy.weak_weight == 0 {
            return Err(ConfigError::ValidationError(
                "planner.weak_weight must be at least 1".into(),
            ));
        }
        if !(policy.chunk_fraction > 0.0 && policy.chunk_fraction <= 1.0) {
            return Err(ConfigError::ValidationError(
                "planner.chunk_fraction must be in (0, 1]".into(),
            ));
        }
        if !(policy.day_fullness > 0.0 && policy.day_fullness <= 1.0) {
            return Err(ConfigError::ValidationError(
                "planner.day_fullness must be in (0, 1]".into(),
            ));
        }
        if policy.max_days == 0 {
            return Err(ConfigError::ValidationError(
                "planner.max_days must be at least 1".into(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be \"pretty\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }
        self.build_catalog().map(|_| ())
    }

    /// Build the catalog: built-in modules (unless disabled), then
    /// configured modules replacing or extending them.
    pub fn build_catalog(&self) -> Result<Catalog, ConfigError> {
        // (module, still the built-in version)
        let mut slots: Vec<(Module, bool)> = if self.catalog.include_builtin {
            builtin_modules().into_iter().map(|m| (m, true)).collect()
        } else {
            Vec::new()
        };

        for configured in &self.catalog.modules {
            let module = Module::from(configured.clone());
            let key = module.name.trim().to_lowercase();
            match slots
                .iter_mut()
                .find(|(m, builtin)| *builtin && m.name.trim().to_lowercase() == key)
            {
                Some(slot) => *slot = (module, false),
                None => slots.push((module, false)),
            }
        }

        if slots.is_empty() {
            return Err(ConfigError::ValidationError(
                "catalog has no modules (include_builtin = false and none configured)".into(),
            ));
        }

        let modules = slots.into_iter().map(|(m, _)| m).collect();
        Catalog::new(modules).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        Self::default().to_toml()
    }

    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.planner.weak_weight, 2);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn default_catalog_is_builtin() {
        let catalog = AppConfig::default().build_catalog().unwrap();
        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.planner, config.planner);
        assert_eq!(parsed.catalog.include_builtin, config.catalog.include_builtin);
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let result = AppConfig::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_ok());
        assert_eq!(result.unwrap().planner, PlanPolicy::default());
    }

    #[test]
    fn default_toml_generation() {
        let toml_str = AppConfig::default_toml();
        assert!(toml_str.contains("weak_weight = 2"));
        assert!(toml_str.contains("include_builtin = true"));
    }

    #[test]
    fn invalid_fullness_rejected() {
        let mut config = AppConfig::default();
        config.planner.day_fullness = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_weak_weight_rejected() {
        let mut config = AppConfig::default();
        config.planner.weak_weight = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_log_format_rejected() {
        let mut config = AppConfig::default();
        config.logging.format = "xml".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_catalog_rejected() {
        let mut config = AppConfig::default();
        config.catalog.include_builtin = false;
        assert!(config.build_catalog().is_err());
    }

    #[test]
    fn module_parsing_from_file() {
        let toml_str = r#"
[planner]
weak_weight = 3

[[catalog.modules]]
name = "Rust Systems"
topics = ["Ownership", "Traits", "Async"]

[catalog.modules.practice]
"Ownership" = ["Fix three borrow-checker errors."]
Async = ["Write a tokio echo server.", "Add graceful shutdown."]

[[catalog.modules]]
name = "generative ai"
topics = ["Embeddings", "RAG"]
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml_str.as_bytes()).unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.planner.weak_weight, 3);
        assert_eq!(config.planner.chunk_fraction, 0.5);

        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.modules().len(), 2);

        let rust = catalog.module("rust systems").unwrap();
        assert_eq!(rust.topics, vec!["Ownership", "Traits", "Async"]);
        assert_eq!(rust.tasks_for("Async").len(), 2);

        // Replaces the built-in module of the same name.
        let genai = catalog.module("Generative AI").unwrap();
        assert_eq!(genai.topics, vec!["Embeddings", "RAG"]);
    }

    #[test]
    fn duplicate_configured_modules_rejected() {
        let toml_str = r#"
[catalog]
include_builtin = false

[[catalog.modules]]
name = "Physics"
topics = ["Kinematics"]

[[catalog.modules]]
name = "physics"
topics = ["Optics"]
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml_str.as_bytes()).unwrap();
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[planner\nweak_weight = ").unwrap();
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
