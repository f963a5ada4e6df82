use crate::adapters::json::{from_json, to_json};
use crate::config::Command;
use crate::core::Duration;
use crate::utils::error::Result;

/// Runs one CLI command and returns the line to print.
pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::Parse { text, json: true } => {
            tracing::debug!("Decoding JSON literal {}", text);
            let duration = from_json(text)?;
            Ok(duration.as_millis().to_string())
        }
        Command::Parse { text, json: false } => {
            tracing::debug!("Parsing duration {:?}", text);
            let duration = Duration::parse(text)?;
            Ok(duration.as_millis().to_string())
        }
        Command::Format { millis, json } => {
            let duration = Duration::from_millis(*millis);
            tracing::debug!("Formatting {}ms with unit {}", millis, duration.unit());
            if *json {
                to_json(&duration)
            } else {
                Ok(duration.to_string())
            }
        }
    }
}
