//! Wire helpers shared across all models.
//!
//! TheAudioDB encodes every scalar as a string, but mirrors occasionally send
//! bare numbers or `null`. These helpers accept either and never fail on a
//! malformed optional field.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a required identifier or title that may arrive as a string
/// or a number.
pub(crate) fn required_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}

/// Deserialize an optional scalar, mapping numbers to their string form and
/// anything else (null, bool, object) to `None`.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Parse a string-encoded number, treating absent, blank or non-numeric
/// input as absent.
pub fn parse_numeric<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}
