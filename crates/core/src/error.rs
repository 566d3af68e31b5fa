//! Error types for the StudyCoach domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all StudyCoach operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Planning outcomes ---
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    // --- Catalog construction ---
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Expected, recoverable outcomes of the three planning operations.
///
/// The `Display` text is the message shown to the student (and to the LLM
/// narrating tool results).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("No module named '{module}' found.")]
    NotFound { module: String },

    #[error("Could not build a useful schedule.")]
    Unbuildable,

    #[error("No specific practice tasks found for the given focus topics.")]
    NoMatches,
}

impl PlanError {
    /// Stable snake_case tag used in structured tool output.
    pub fn kind(&self) -> &'static str {
        match self {
            PlanError::NotFound { .. } => "not_found",
            PlanError::Unbuildable => "unbuildable",
            PlanError::NoMatches => "no_matches",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Module '{0}' has no topics")]
    EmptyModule(String),

    #[error("Module '{0}' is defined more than once")]
    DuplicateModule(String),

    #[error("Module name must not be blank")]
    BlankModuleName,

    #[error("Practice tasks registered for '{topic}', which is not a topic of '{module}'")]
    UnknownPracticeTopic { module: String, topic: String },
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {tool_name} — {reason}")]
    ExecutionFailed { tool_name: String, reason: String },

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),
}
