use roadside_intake::config::OutputConfig;
use roadside_intake::error::AppError;
use roadside_intake::intake::RawIntake;
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Read a submission from `path`, or stdin when no path is given.
pub(crate) fn read_submission(path: Option<&Path>) -> Result<RawIntake, AppError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    parse_submission(&text)
}

pub(crate) fn parse_submission(text: &str) -> Result<RawIntake, AppError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::InvalidInput(format!(
            "expected a JSON object of form fields, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub(crate) fn render_json<T: Serialize>(
    value: &T,
    output: &OutputConfig,
) -> Result<String, AppError> {
    let rendered = if output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
