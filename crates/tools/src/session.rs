//! Coach session — executes tool calls and keeps an explicit call log.
//!
//! The log answers "which tools ran, with what arguments" for one student
//! query. It is owned by the session, so concurrent sessions never share
//! entries. Call [`CoachSession::start_query`] between queries.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use studycoach_core::error::ToolError;
use studycoach_core::tool::{ToolCall, ToolDefinition, ToolRegistry, ToolResult};
use tracing::{info, warn};

/// A single recorded tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRecord {
    pub timestamp: DateTime<Utc>,
    pub call_id: String,
    pub tool: String,
    pub arguments: serde_json::Value,
}

/// Ordered record of the tool calls made while answering one query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCallLog {
    entries: Vec<ToolCallRecord>,
}

impl ToolCallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, call: &ToolCall) {
        self.entries.push(ToolCallRecord {
            timestamp: Utc::now(),
            call_id: call.id.clone(),
            tool: call.name.clone(),
            arguments: call.arguments.clone(),
        });
    }

    pub fn entries(&self) -> &[ToolCallRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Numbered, human-readable call sequence.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return "No tools were called.".to_string();
        }
        let mut lines = vec!["Tool call sequence:".to_string()];
        for (i, entry) in self.entries.iter().enumerate() {
            lines.push(format!("{}. {} → {}", i + 1, entry.tool, entry.arguments));
        }
        lines.join("\n")
    }
}

/// Runs tool calls against a registry, logging each one before execution.
pub struct CoachSession {
    registry: Arc<ToolRegistry>,
    log: ToolCallLog,
}

impl CoachSession {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            log: ToolCallLog::new(),
        }
    }

    /// Definitions of every tool available in this session.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }

    /// Execute a call. Unknown tools and malformed arguments are still
    /// recorded, since the caller did attempt them.
    pub async fn call(&mut self, call: ToolCall) -> Result<ToolResult, ToolError> {
        self.log.record(&call);
        info!(tool = %call.name, call_id = %call.id, "Executing tool call");

        let result = self.registry.execute(&call).await;
        match &result {
            Ok(r) if !r.success => {
                info!(tool = %call.name, output = %r.output, "Tool returned an outcome");
            }
            Ok(_) => {}
            Err(e) => warn!(tool = %call.name, error = %e, "Tool execution failed"),
        }
        result
    }

    pub fn log(&self) -> &ToolCallLog {
        &self.log
    }

    /// Forget the calls of the previous query.
    pub fn start_query(&mut self) {
        self.log.clear();
    }
}
