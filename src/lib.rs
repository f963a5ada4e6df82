pub mod adapters;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::json::{from_json, to_json};
pub use crate::core::{parse_duration, Duration, Unit};
pub use utils::error::{DurationError, Result};
