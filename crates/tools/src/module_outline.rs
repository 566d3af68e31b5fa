//! Module outline tool — lists the topics of a study module.

use std::sync::Arc;

use async_trait::async_trait;
use studycoach_core::error::ToolError;
use studycoach_core::tool::{Tool, ToolResult};
use studycoach_planner::{Planner, render_outline};

use crate::args::required_str;
use crate::outcome_result;

pub struct ModuleOutlineTool {
    planner: Arc<Planner>,
}

impl ModuleOutlineTool {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self { planner }
    }
}

#[async_trait]
impl Tool for ModuleOutlineTool {
    fn name(&self) -> &str {
        "get_module_outline"
    }

    fn description(&self) -> &str {
        "Return the list of topics covered in the specified module, in study order."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "module_name": {
                    "type": "string",
                    "description": "Name of the module, e.g. 'Generative AI' (case-insensitive)"
                }
            },
            "required": ["module_name"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let module_name = required_str(&arguments, "module_name")?;

        match self.planner.outline(module_name) {
            Ok(outline) => Ok(ToolResult::ok(
                render_outline(module_name, &outline),
                serde_json::json!({
                    "module": outline.module,
                    "topics": outline.topics,
                }),
            )),
            Err(outcome) => Ok(outcome_result(&outcome, module_name)),
        }
    }
}
