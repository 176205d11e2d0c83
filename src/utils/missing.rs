//! Missing-value handling for CSV fields.
//!
//! A field is treated as absent when it is empty or matches one of
//! [`MISSING_TOKENS`] (case-insensitive). Absent values deserialize to `None`;
//! how `None` is treated downstream is decided by each aggregation.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Tokens recognised as an absent value, compared case-insensitively
pub const MISSING_TOKENS: [&str; 5] = ["", "na", "nan", "null", "none"];

/// Check whether a raw CSV field represents a missing value
pub fn is_missing(raw: &str) -> bool {
    let trimmed = raw.trim();
    MISSING_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
}

/// Parse an optional float, mapping missing tokens to `None`
pub fn parse_optional_f64(raw: &str) -> Result<Option<f64>, std::num::ParseFloatError> {
    if is_missing(raw) {
        Ok(None)
    } else {
        raw.trim().parse::<f64>().map(Some)
    }
}

pub fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) => parse_optional_f64(&value)
            .map_err(|e| D::Error::custom(format!("invalid numeric value '{}': {}", value, e))),
    }
}

pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|value| !is_missing(value))
        .map(|value| value.trim().to_string()))
}
