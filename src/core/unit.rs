use crate::utils::error::{DurationError, Result};

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;
// Fixed 365-day year, not calendar-accurate.
const MS_PER_YEAR: i64 = 365 * MS_PER_DAY;

/// A unit token of the duration notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Year,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Unit {
    /// Units tried by the formatter, largest first. `Millisecond` is the
    /// fallback and divides everything, so it is not listed.
    pub const FORMAT_ORDER: [Unit; 6] = [
        Unit::Year,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "y" => Ok(Unit::Year),
            "w" => Ok(Unit::Week),
            "d" => Ok(Unit::Day),
            "h" => Ok(Unit::Hour),
            "m" => Ok(Unit::Minute),
            "s" => Ok(Unit::Second),
            "ms" => Ok(Unit::Millisecond),
            other => Err(DurationError::UnrecognizedUnit {
                unit: other.to_string(),
            }),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Unit::Year => "y",
            Unit::Week => "w",
            Unit::Day => "d",
            Unit::Hour => "h",
            Unit::Minute => "m",
            Unit::Second => "s",
            Unit::Millisecond => "ms",
        }
    }

    pub fn millis(self) -> i64 {
        match self {
            Unit::Year => MS_PER_YEAR,
            Unit::Week => MS_PER_WEEK,
            Unit::Day => MS_PER_DAY,
            Unit::Hour => MS_PER_HOUR,
            Unit::Minute => MS_PER_MINUTE,
            Unit::Second => MS_PER_SECOND,
            Unit::Millisecond => 1,
        }
    }

    /// Largest unit that divides `millis` exactly, checked in
    /// [`Unit::FORMAT_ORDER`].
    pub fn largest_exact(millis: i64) -> Self {
        Self::FORMAT_ORDER
            .into_iter()
            .find(|unit| millis % unit.millis() == 0)
            .unwrap_or(Unit::Millisecond)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
