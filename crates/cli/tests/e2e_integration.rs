//! End-to-end integration tests for StudyCoach.
//!
//! These tests drive the full pipeline a conversational front-end would:
//! configuration → catalog → planner → tool registry → session, including
//! the tool-call log shown next to the answer.

use std::io::Write;
use std::sync::Arc;

use studycoach_config::AppConfig;
use studycoach_core::tool::ToolCall;
use studycoach_planner::Planner;
use studycoach_tools::{CoachSession, default_registry};

fn session_from(config: &AppConfig) -> CoachSession {
    let catalog = config.build_catalog().unwrap();
    let planner = Arc::new(Planner::new(Arc::new(catalog), config.planner.clone()));
    CoachSession::new(Arc::new(default_registry(planner)))
}

// ── Default catalog ──────────────────────────────────────────────────────

#[tokio::test]
async fn e2e_typical_exam_query() {
    // "I have a Generative AI exam in 5 days, 3 hours/day.
    //  Weak in LangChain basics and RAG."
    let mut session = session_from(&AppConfig::default());

    let outline = session
        .call(ToolCall::new(
            "get_module_outline",
            serde_json::json!({"module_name": "Generative AI"}),
        ))
        .await
        .unwrap();
    assert!(outline.success);
    assert_eq!(outline.output.lines().count(), 8);

    let schedule = session
        .call(ToolCall::new(
            "build_study_schedule",
            serde_json::json!({
                "module_name": "Generative AI",
                "days_until_exam": 5,
                "hours_per_day": 3.0,
                "weak_topics": "LangChain basics, RAG"
            }),
        ))
        .await
        .unwrap();
    assert!(schedule.success);
    for day in 1..=5 {
        assert!(schedule.output.contains(&format!("Day {day}:")));
    }
    assert!(!schedule.output.contains("Day 6:"));

    let practice = session
        .call(ToolCall::new(
            "suggest_practice_tasks",
            serde_json::json!({
                "module_name": "Generative AI",
                "focus_topics": "LangChain basics, RAG"
            }),
        ))
        .await
        .unwrap();
    assert!(practice.success);
    assert!(practice.output.contains("* LangChain basics"));
    assert!(practice.output.contains("* RAG"));

    let log = session.log().render();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines[0], "Tool call sequence:");
    assert!(lines[1].starts_with("1. get_module_outline → "));
    assert!(lines[2].starts_with("2. build_study_schedule → "));
    assert!(lines[3].starts_with("3. suggest_practice_tasks → "));
}

#[tokio::test]
async fn e2e_uniform_schedule_covers_all_topics() {
    let mut session = session_from(&AppConfig::default());
    let result = session
        .call(ToolCall::new(
            "build_study_schedule",
            serde_json::json!({
                "module_name": "generative ai",
                "days_until_exam": 5,
                "hours_per_day": 3.0,
                "weak_topics": []
            }),
        ))
        .await
        .unwrap();

    assert!(result.success);
    let topics = session_outline_topics().await;
    for topic in &topics {
        assert!(result.output.contains(topic.as_str()), "missing {topic}");
    }

    let data = result.data.unwrap();
    let mut total = 0.0;
    for day in data["per_day"].as_array().unwrap() {
        for entry in day["entries"].as_array().unwrap() {
            let hours = entry["hours"].as_f64().unwrap();
            assert!(hours <= 1.5);
            total += hours;
        }
    }
    assert!(total <= 15.0);
}

async fn session_outline_topics() -> Vec<String> {
    let mut session = session_from(&AppConfig::default());
    let result = session
        .call(ToolCall::new(
            "get_module_outline",
            serde_json::json!({"module_name": "generative ai"}),
        ))
        .await
        .unwrap();
    result.data.unwrap()["topics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn e2e_outcomes_are_not_errors() {
    let mut session = session_from(&AppConfig::default());

    let missing = session
        .call(ToolCall::new(
            "get_module_outline",
            serde_json::json!({"module_name": "nonexistent module"}),
        ))
        .await
        .unwrap();
    assert!(!missing.success);
    assert_eq!(missing.output, "No module named 'nonexistent module' found.");

    let none = session
        .call(ToolCall::new(
            "suggest_practice_tasks",
            serde_json::json!({"module_name": "generative ai", "focus_topics": "groq"}),
        ))
        .await
        .unwrap();
    assert!(!none.success);

    assert_eq!(session.log().len(), 2);
}

#[tokio::test]
async fn e2e_new_query_resets_log() {
    let mut session = session_from(&AppConfig::default());
    session
        .call(ToolCall::new(
            "get_module_outline",
            serde_json::json!({"module_name": "generative ai"}),
        ))
        .await
        .unwrap();

    session.start_query();
    assert_eq!(session.log().render(), "No tools were called.");
}

// ── Configured catalog ───────────────────────────────────────────────────

#[tokio::test]
async fn e2e_configured_module_and_policy() {
    let toml_str = r#"
[planner]
weak_weight = 3
chunk_fraction = 0.5
day_fullness = 0.9

[catalog]
include_builtin = false

[[catalog.modules]]
name = "Rust Systems"
topics = ["Ownership", "Traits", "Async"]

[catalog.modules.practice]
Async = ["Write a tokio echo server."]
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(toml_str.as_bytes()).unwrap();
    let config = AppConfig::load_from(file.path()).unwrap();
    let mut session = session_from(&config);

    let genai = session
        .call(ToolCall::new(
            "get_module_outline",
            serde_json::json!({"module_name": "generative ai"}),
        ))
        .await
        .unwrap();
    assert!(!genai.success);

    // 3 topics, weights [1, 1, 3] over 10 hours: Async gets 6 hours.
    let schedule = session
        .call(ToolCall::new(
            "build_study_schedule",
            serde_json::json!({
                "module_name": "rust systems",
                "days_until_exam": 2,
                "hours_per_day": 5,
                "weak_topics": ["async"]
            }),
        ))
        .await
        .unwrap();
    assert!(schedule.success);
    let data = schedule.data.unwrap();
    let async_hours: f64 = data["per_day"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|d| d["entries"].as_array().unwrap().iter())
        .filter(|e| e["topic"] == "Async")
        .map(|e| e["hours"].as_f64().unwrap())
        .sum();
    assert!((async_hours - 6.0).abs() < 1e-9);
    assert_eq!(data["complete"], true);

    let practice = session
        .call(ToolCall::new(
            "suggest_practice_tasks",
            serde_json::json!({"module_name": "Rust Systems"}),
        ))
        .await
        .unwrap();
    assert!(practice.success);
    assert_eq!(
        practice.output,
        "Practice tasks:\n* Async\n  - Write a tokio echo server.\n"
    );
}

#[tokio::test]
async fn e2e_tool_definitions_are_complete() {
    let session = session_from(&AppConfig::default());
    let defs = session.definitions();
    assert_eq!(defs.len(), 3);
    for def in &defs {
        assert_eq!(def.parameters["type"], "object");
        assert!(def.parameters["required"]
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r == "module_name"));
    }
}
