//! Practice tasks tool — hands-on exercises for weak or focus topics.

use std::sync::Arc;

use async_trait::async_trait;
use studycoach_core::error::ToolError;
use studycoach_core::tool::{Tool, ToolResult};
use studycoach_planner::{Planner, render_practice};

use crate::args::{required_str, string_list};
use crate::outcome_result;

pub struct PracticeTasksTool {
    planner: Arc<Planner>,
}

impl PracticeTasksTool {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self { planner }
    }
}

#[async_trait]
impl Tool for PracticeTasksTool {
    fn name(&self) -> &str {
        "suggest_practice_tasks"
    }

    fn description(&self) -> &str {
        "Suggest hands-on practice tasks for the student's weak or focus topics. With no focus topics, tasks for every topic are returned."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "module_name": {
                    "type": "string",
                    "description": "Name of the module (case-insensitive)"
                },
                "focus_topics": {
                    "description": "Topics to focus on, as a comma-separated string or a list; matched as case-insensitive substrings of topic names",
                    "anyOf": [
                        { "type": "string" },
                        { "type": "array", "items": { "type": "string" } }
                    ],
                    "default": ""
                }
            },
            "required": ["module_name"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let module_name = required_str(&arguments, "module_name")?;
        let focus = string_list(&arguments, "focus_topics")?;

        match self.planner.suggest_practice_tasks(module_name, &focus) {
            Ok(selected) => {
                let output = render_practice(&selected);
                Ok(ToolResult::ok(
                    output,
                    serde_json::json!({ "per_topic": selected }),
                ))
            }
            Err(outcome) => Ok(outcome_result(&outcome, module_name)),
        }
    }
}
