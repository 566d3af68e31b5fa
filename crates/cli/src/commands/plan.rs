//! `studycoach outline | schedule | practice` — run one planner tool.
//!
//! These go through the same tool surface a language model would use, so
//! `--verbose` shows exactly the call that was made.

use studycoach_config::AppConfig;
use studycoach_core::tool::ToolCall;

use super::{Output, build_session, print_result};

pub async fn outline(
    config: &AppConfig,
    module: String,
    opts: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let call = ToolCall::new(
        "get_module_outline",
        serde_json::json!({ "module_name": module }),
    );
    run(config, call, opts).await
}

pub async fn schedule(
    config: &AppConfig,
    module: String,
    days: u32,
    hours: f64,
    weak: Vec<String>,
    opts: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let call = ToolCall::new(
        "build_study_schedule",
        serde_json::json!({
            "module_name": module,
            "days_until_exam": days,
            "hours_per_day": hours,
            "weak_topics": weak,
        }),
    );
    run(config, call, opts).await
}

pub async fn practice(
    config: &AppConfig,
    module: String,
    focus: Vec<String>,
    opts: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let call = ToolCall::new(
        "suggest_practice_tasks",
        serde_json::json!({
            "module_name": module,
            "focus_topics": focus,
        }),
    );
    run(config, call, opts).await
}

async fn run(
    config: &AppConfig,
    call: ToolCall,
    opts: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = build_session(config)?;
    let result = session.call(call).await?;
    print_result(&result, opts)?;

    if opts.show_log {
        eprintln!();
        eprintln!("{}", session.log().render());
    }
    Ok(())
}
