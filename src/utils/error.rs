use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DurationError {
    #[error("not a valid duration string: {input:?}")]
    MalformedDurationText { input: String },

    /// Raised when the grammar accepts a unit token that the unit table
    /// does not know. The two are kept in sync, so this only fires if one
    /// of them changes without the other.
    #[error("invalid time unit in duration string: {unit:?}")]
    UnrecognizedUnit { unit: String },

    #[error("invalid duration count: {0}")]
    InvalidCount(#[from] ParseIntError),

    #[error("duration out of range: {input:?}")]
    Overflow { input: String },

    #[error("negative duration cannot be converted: {millis}ms")]
    Negative { millis: i64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DurationError {
    pub fn malformed(input: &str) -> Self {
        Self::MalformedDurationText {
            input: input.to_string(),
        }
    }

    pub fn overflow(input: impl Into<String>) -> Self {
        Self::Overflow {
            input: input.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DurationError>;
