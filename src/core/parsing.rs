//! Timestamp normalization.
//!
//! Xueqiu mixes epoch milliseconds, epoch seconds, digit strings and ISO-ish
//! date strings across endpoints, sometimes within one payload. Everything
//! funnels through [`parse_datetime`] so the decoders agree on a single UTC
//! instant type and nobody reimplements the milliseconds heuristic.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Epoch values above this are taken to be milliseconds. Modern dates are
/// ~1e9 in seconds and ~1e12 in milliseconds, so the gap is unambiguous.
const MILLIS_THRESHOLD: f64 = 10_000_000_000.0;

/// Parse a Xueqiu timestamp into a timezone-aware UTC instant.
///
/// Accepts epoch seconds, epoch milliseconds, all-digit strings and
/// ISO-8601-ish strings (a trailing `Z` and naive date-times are both
/// treated as UTC). Anything unparsable yields `None`; this never errors.
pub fn parse_datetime(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => parse_epoch(n.as_f64()?),
        Value::String(s) => parse_datetime_str(s),
        _ => None,
    }
}

/// String form of [`parse_datetime`].
pub fn parse_datetime_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return parse_epoch(s.parse::<f64>().ok()?);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Naive forms are assumed UTC.
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    None
}

fn parse_epoch(ts: f64) -> Option<DateTime<Utc>> {
    if !ts.is_finite() {
        return None;
    }
    let secs = if ts > MILLIS_THRESHOLD { ts / 1000.0 } else { ts };
    #[allow(clippy::cast_possible_truncation)]
    DateTime::from_timestamp_millis((secs * 1000.0).round() as i64)
}

/// Field-level serde adaptor: `#[serde(default, deserialize_with = "de_datetime")]`.
pub(crate) fn de_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_datetime))
}
