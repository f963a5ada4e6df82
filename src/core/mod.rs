pub mod duration;
pub mod unit;

pub use crate::utils::error::Result;
pub use duration::{parse_duration, Duration};
pub use unit::Unit;
