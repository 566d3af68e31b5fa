//! Study schedule tool — builds a day-by-day plan that prioritizes weak
//! topics while still covering the whole module.

use std::sync::Arc;

use async_trait::async_trait;
use studycoach_core::error::ToolError;
use studycoach_core::plan::ScheduleRequest;
use studycoach_core::tool::{Tool, ToolResult};
use studycoach_planner::{Planner, render_schedule};
use tracing::warn;

use crate::args::{required_f64, required_str, required_u32, string_list};
use crate::outcome_result;

pub struct StudyScheduleTool {
    planner: Arc<Planner>,
}

impl StudyScheduleTool {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self { planner }
    }

    fn parse_request(&self, arguments: &serde_json::Value) -> Result<ScheduleRequest, ToolError> {
        let module_name = required_str(arguments, "module_name")?;
        let days = required_u32(arguments, "days_until_exam")?;
        let max_days = self.planner.policy().max_days;
        if days > max_days {
            return Err(ToolError::InvalidArguments(format!(
                "'days_until_exam' must be at most {max_days}"
            )));
        }
        let hours_per_day = required_f64(arguments, "hours_per_day")?;
        let weak = string_list(arguments, "weak_topics")?;

        Ok(ScheduleRequest::new(module_name, days, hours_per_day).with_weak_topics(weak))
    }
}

#[async_trait]
impl Tool for StudyScheduleTool {
    fn name(&self) -> &str {
        "build_study_schedule"
    }

    fn description(&self) -> &str {
        "Build a day-by-day study schedule for the student. Weak topics get double weight while the full syllabus is still covered."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "module_name": {
                    "type": "string",
                    "description": "Name of the module to study (case-insensitive)"
                },
                "days_until_exam": {
                    "type": "integer",
                    "description": "Number of study days left before the exam",
                    "minimum": 1
                },
                "hours_per_day": {
                    "type": "number",
                    "description": "Hours the student can study each day"
                },
                "weak_topics": {
                    "description": "Topics the student is weak in, as a comma-separated string or a list; matched as case-insensitive substrings of topic names",
                    "anyOf": [
                        { "type": "string" },
                        { "type": "array", "items": { "type": "string" } }
                    ],
                    "default": ""
                }
            },
            "required": ["module_name", "days_until_exam", "hours_per_day"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let request = self.parse_request(&arguments)?;

        match self.planner.build_schedule(&request) {
            Ok(schedule) => {
                if !schedule.is_complete() {
                    warn!(
                        module = %request.module,
                        dropped_topics = schedule.dropped.len(),
                        "Schedule is incomplete"
                    );
                }
                let per_day: Vec<_> = schedule.occupied_days().collect();
                let data = serde_json::json!({
                    "module": request.module,
                    "days_until_exam": request.days_until_exam,
                    "hours_per_day": request.hours_per_day,
                    "weak_topics": request.weak_topics,
                    "per_day": per_day,
                    "complete": schedule.is_complete(),
                    "dropped": schedule.dropped,
                });
                Ok(ToolResult::ok(render_schedule(&request, &schedule), data))
            }
            Err(outcome) => Ok(outcome_result(&outcome, &request.module)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool() -> StudyScheduleTool {
        StudyScheduleTool::new(Arc::new(Planner::default()))
    }

    #[tokio::test]
    async fn builds_uniform_schedule() {
        let result = tool()
            .execute(serde_json::json!({
                "module_name": "generative ai",
                "days_until_exam": 5,
                "hours_per_day": 3.0
            }))
            .await
            .unwrap();

        assert!(result.success);
        assert!(result.output.starts_with("Study schedule for 'generative ai'"));
        assert!(result.output.contains("Days until exam: 5, Hours per day: 3.0"));
        assert!(result.output.contains("Weak topics prioritized: None specified"));
        assert!(result.output.contains("Day 1:\n  - LLM fundamentals: 1.5 hour(s)"));
        assert!(result.output.contains("Day 5:"));

        let data = result.data.unwrap();
        assert_eq!(data["per_day"].as_array().unwrap().len(), 5);
        assert_eq!(data["complete"], true);
    }

    #[tokio::test]
    async fn weak_topics_from_comma_string() {
        let result = tool()
            .execute(serde_json::json!({
                "module_name": "Generative AI",
                "days_until_exam": 5,
                "hours_per_day": 3,
                "weak_topics": "LangChain basics, RAG"
            }))
            .await
            .unwrap();

        assert!(result.success);
        assert!(result.output.contains("Weak topics prioritized: LangChain basics, RAG"));
        assert!(result.output.contains("  - RAG: 1.5 hour(s)\n  - RAG: 1.5 hour(s)"));
    }

    #[tokio::test]
    async fn incomplete_schedule_is_flagged_in_data() {
        let result = tool()
            .execute(serde_json::json!({
                "module_name": "generative ai",
                "days_until_exam": 1,
                "hours_per_day": 2.0
            }))
            .await
            .unwrap();

        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data["complete"], false);
        assert_eq!(data["dropped"][0]["topic"], "Agent security & guardrails");
        assert!(!result.output.contains("Agent security"));
    }

    #[tokio::test]
    async fn zero_hours_is_unbuildable() {
        let result = tool()
            .execute(serde_json::json!({
                "module_name": "generative ai",
                "days_until_exam": 5,
                "hours_per_day": 0
            }))
            .await
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.output, "Could not build a useful schedule.");
        assert_eq!(result.data.unwrap()["outcome"], "unbuildable");
    }

    #[tokio::test]
    async fn unknown_module_is_an_outcome() {
        let result = tool()
            .execute(serde_json::json!({
                "module_name": "Underwater Basket Weaving",
                "days_until_exam": 5,
                "hours_per_day": 2
            }))
            .await
            .unwrap();

        assert!(!result.success);
        assert!(result.output.contains("Underwater Basket Weaving"));
    }

    #[tokio::test]
    async fn horizon_beyond_max_days_rejected() {
        let result = tool()
            .execute(serde_json::json!({
                "module_name": "generative ai",
                "days_until_exam": 10_000,
                "hours_per_day": 2
            }))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn missing_hours_returns_error() {
        let result = tool()
            .execute(serde_json::json!({
                "module_name": "generative ai",
                "days_until_exam": 5
            }))
            .await;
        assert!(result.is_err());
    }

    #[test]
    fn tool_definition() {
        let def = tool().to_definition();
        assert_eq!(def.name, "build_study_schedule");
        assert_eq!(def.parameters["required"].as_array().unwrap().len(), 3);
    }
}
