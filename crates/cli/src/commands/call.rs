//! `studycoach call` — execute a raw tool call, as a language model would.

use studycoach_config::AppConfig;
use studycoach_core::tool::ToolCall;

use super::{Output, build_session, print_result};

pub async fn run(
    config: &AppConfig,
    tool: String,
    args: &str,
    opts: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let arguments: serde_json::Value =
        serde_json::from_str(args).map_err(|e| format!("--args is not valid JSON: {e}"))?;
    if !arguments.is_object() {
        return Err("--args must be a JSON object".into());
    }

    let mut session = build_session(config)?;
    let outcome = session.call(ToolCall::new(tool, arguments)).await;

    if let Ok(result) = &outcome {
        print_result(result, opts)?;
    }

    println!();
    println!("{}", session.log().render());
    outcome.map(|_| ()).map_err(Into::into)
}
