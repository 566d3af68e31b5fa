//! Agent tools for StudyCoach.
//!
//! Each planner operation is exposed as a [`Tool`](studycoach_core::tool::Tool)
//! with a JSON schema, so a language model can look up outlines, build
//! schedules, and suggest practice. [`CoachSession`] runs calls and keeps
//! the per-query tool-call log.

pub mod args;
pub mod module_outline;
pub mod practice_tasks;
pub mod session;
pub mod study_schedule;

use std::sync::Arc;

use studycoach_core::error::PlanError;
use studycoach_core::tool::{ToolRegistry, ToolResult};
use studycoach_planner::Planner;

pub use module_outline::ModuleOutlineTool;
pub use practice_tasks::PracticeTasksTool;
pub use session::{CoachSession, ToolCallLog, ToolCallRecord};
pub use study_schedule::StudyScheduleTool;

/// Create a registry with all three planner tools sharing one planner.
pub fn default_registry(planner: Arc<Planner>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(ModuleOutlineTool::new(planner.clone())));
    registry.register(Box::new(StudyScheduleTool::new(planner.clone())));
    registry.register(Box::new(PracticeTasksTool::new(planner)));
    registry
}

/// A non-success result describing an expected planning outcome.
pub(crate) fn outcome_result(outcome: &PlanError, requested_module: &str) -> ToolResult {
    ToolResult::outcome(
        outcome.to_string(),
        serde_json::json!({
            "outcome": outcome.kind(),
            "module": requested_module,
        }),
    )
}
