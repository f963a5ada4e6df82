use crate::core::unit::Unit;
use crate::utils::error::{DurationError, Result};
use regex::Regex;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)(y|w|d|h|m|s|ms)$").expect("duration pattern is a valid regex")
});

/// Elapsed time held as a whole number of milliseconds.
///
/// The textual form is a count followed by a single unit token, e.g.
/// `"90s"`, `"2h"` or `"1500ms"`. A year is always 365 days, a week 7 days
/// and a day 24 hours.
///
/// Formatting picks the largest unit that represents the value exactly, so
/// parsing the output of [`Display`](std::fmt::Display) always gives back
/// the same number of milliseconds for non-negative values. Negative values
/// format with a leading `-` but cannot be parsed back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Parses `<count><unit>` where unit is one of `y`, `w`, `d`, `h`, `m`,
    /// `s` or `ms`. No sign, whitespace, fraction or compound form is
    /// accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let caps = DURATION_RE
            .captures(text)
            .ok_or_else(|| DurationError::malformed(text))?;

        let count: i64 = caps[1].parse()?;
        let unit = Unit::from_token(&caps[2])?;

        let millis = count
            .checked_mul(unit.millis())
            .ok_or_else(|| DurationError::overflow(text))?;

        tracing::trace!(input = text, millis, "parsed duration");
        Ok(Self(millis))
    }

    /// Largest unit that renders this value exactly.
    pub fn unit(&self) -> Unit {
        Unit::largest_exact(self.0)
    }
}

pub fn parse_duration(text: &str) -> Result<Duration> {
    Duration::parse(text)
}

impl std::str::FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = self.unit();
        write!(f, "{}{}", self.0 / unit.millis(), unit)
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = DurationError;

    /// Sub-millisecond precision is truncated.
    fn try_from(value: std::time::Duration) -> Result<Self> {
        i64::try_from(value.as_millis())
            .map(Self)
            .map_err(|_| DurationError::overflow(format!("{:?}", value)))
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = DurationError;

    fn try_from(value: Duration) -> Result<Self> {
        u64::try_from(value.0)
            .map(std::time::Duration::from_millis)
            .map_err(|_| DurationError::Negative { millis: value.0 })
    }
}

impl From<chrono::TimeDelta> for Duration {
    fn from(value: chrono::TimeDelta) -> Self {
        Self(value.num_milliseconds())
    }
}

impl TryFrom<Duration> for chrono::TimeDelta {
    type Error = DurationError;

    fn try_from(value: Duration) -> Result<Self> {
        chrono::TimeDelta::try_milliseconds(value.0)
            .ok_or_else(|| DurationError::overflow(format!("{}ms", value.0)))
    }
}
