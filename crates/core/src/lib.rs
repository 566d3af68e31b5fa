//! # StudyCoach Core
//!
//! Domain types, traits, and error definitions for the StudyCoach study
//! planner. This crate has **no framework dependencies**; it defines the
//! domain model that the planner, tools, and CLI implement against.
//!
//! ## Design Philosophy
//!
//! - The topic catalog is an explicitly constructed, immutable value that
//!   callers build once and share (usually behind an `Arc`).
//! - Expected outcomes (unknown module, nothing to schedule, no matching
//!   practice) are tagged [`PlanError`] values, never panics.
//! - Agent-facing capabilities are defined by the [`Tool`] trait; the
//!   implementations live in `studycoach-tools`.

pub mod catalog;
pub mod error;
pub mod plan;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use catalog::{Catalog, Module};
pub use error::{CatalogError, Error, PlanError, Result, ToolError};
pub use plan::{
    DaySchedule, DroppedHours, Outline, PlanPolicy, ScheduleEntry, ScheduleRequest, ScheduledDay,
    TopicTasks,
};
pub use tool::{Tool, ToolCall, ToolDefinition, ToolRegistry, ToolResult};
