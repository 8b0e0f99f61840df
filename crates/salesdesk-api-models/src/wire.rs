//! Lenient decoders for backend scalar encodings.
//!
//! Decimal columns are serialized as strings by some endpoints and as numbers
//! by others; date columns arrive either as `YYYY-MM-DD` or as a full ISO
//! timestamp with optional fraction and offset.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de::Error as _};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Parse a decimal amount written as text (`"10000000.00"`).
#[must_use]
pub fn parse_amount(text: &str) -> Option<f64> {
    let parsed = text.trim().parse::<f64>().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// Parse a backend date or timestamp into a naive local timestamp.
///
/// Offsets are dropped after conversion; the console treats every timestamp
/// as wall-clock time in the backend's zone.
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(value) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(value);
    }
    if let Ok(value) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(value);
    }
    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Some(value.naive_local());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

pub(crate) fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(value) => Ok(value),
        RawAmount::Text(text) => {
            parse_amount(&text).ok_or_else(|| D::Error::custom(format!("invalid amount `{text}`")))
        }
    }
}

pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_timestamp(&text).ok_or_else(|| D::Error::custom(format!("invalid timestamp `{text}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_parse_from_text() {
        assert_eq!(parse_amount(" 1500.50 "), Some(1500.5));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn timestamps_accept_common_shapes() {
        let midnight = NaiveDate::from_ymd_opt(2024, 1, 5)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid");
        assert_eq!(parse_timestamp("2024-01-05"), Some(midnight));
        assert_eq!(parse_timestamp("2024-01-05T00:00:00"), Some(midnight));
        assert_eq!(parse_timestamp("2024-01-05T00:00:00.000"), Some(midnight));
        assert_eq!(parse_timestamp("2024-01-05T00:00:00+07:00"), Some(midnight));
        assert_eq!(parse_timestamp("05/01/2024"), None);
    }
}
