//! JSON boundary for [`Duration`].
//!
//! A duration is written as a JSON string holding its textual form
//! (`"5s"`), and read back from a JSON string only. Other JSON types are
//! rejected by the decoder with its usual "invalid type" error; a string
//! that is not a valid duration fails with the codec's message, which names
//! the offending literal.

use crate::core::duration::Duration;
use crate::utils::error::Result;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DurationVisitor;

        impl<'de> de::Visitor<'de> for DurationVisitor {
            type Value = Duration;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a duration string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Duration, E> {
                Duration::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}

/// Encodes a duration as a JSON string literal.
pub fn to_json(duration: &Duration) -> Result<String> {
    Ok(serde_json::to_string(duration)?)
}

/// Decodes a duration from a JSON document consisting of one string literal.
pub fn from_json(json: &str) -> Result<Duration> {
    Ok(serde_json::from_str(json)?)
}
