//! `studycoach tools` — print the tool definitions offered to a model.

use studycoach_config::AppConfig;

use super::build_session;

pub async fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let session = build_session(config)?;
    println!("{}", serde_json::to_string_pretty(&session.definitions())?);
    Ok(())
}
