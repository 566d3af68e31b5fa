//! Argument extraction shared by the planner tools.
//!
//! LLMs are loose with JSON types, so numbers are also accepted as numeric
//! strings and topic lists as either an array or a comma-separated string.

use serde_json::Value;
use studycoach_core::error::ToolError;
use studycoach_planner::matching::split_list;

pub fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, ToolError> {
    args[key]
        .as_str()
        .ok_or_else(|| ToolError::InvalidArguments(format!("Missing '{key}' argument")))
}

pub fn required_u32(args: &Value, key: &str) -> Result<u32, ToolError> {
    let invalid = || ToolError::InvalidArguments(format!("'{key}' must be a non-negative integer"));
    let value = match &args[key] {
        Value::Null => {
            return Err(ToolError::InvalidArguments(format!("Missing '{key}' argument")));
        }
        Value::Number(n) => n.as_u64().ok_or_else(invalid)?,
        Value::String(s) => s.trim().parse::<u64>().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };
    u32::try_from(value).map_err(|_| invalid())
}

pub fn required_f64(args: &Value, key: &str) -> Result<f64, ToolError> {
    let invalid = || ToolError::InvalidArguments(format!("'{key}' must be a number"));
    match &args[key] {
        Value::Null => Err(ToolError::InvalidArguments(format!("Missing '{key}' argument"))),
        Value::Number(n) => n.as_f64().ok_or_else(invalid),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// An optional list of substrings. Missing or null means empty.
pub fn string_list(args: &Value, key: &str) -> Result<Vec<String>, ToolError> {
    match &args[key] {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(split_list(s)),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    ToolError::InvalidArguments(format!("'{key}' must contain only strings"))
                })
            })
            .collect(),
        _ => Err(ToolError::InvalidArguments(format!(
            "'{key}' must be a string or a list of strings"
        ))),
    }
}
