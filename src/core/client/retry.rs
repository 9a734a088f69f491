//! Pure retry/backoff helpers shared by the async and blocking drivers.
//!
//! Classification and delay computation carry no I/O so both drivers loop
//! over exactly the same logic; only the sleep and send primitives differ.

use std::time::Duration;

use super::constants::BODY_SNIPPET_CHARS;

/// Outcome class of an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusClass {
    /// Below 400; proceed to decoding.
    Success,
    /// 429 or any 5xx; worth retrying.
    Retryable,
    /// Any other 4xx; retrying would repeat the same failure.
    Fatal,
}

pub(crate) fn classify_status(status: u16) -> StatusClass {
    if status < 400 {
        StatusClass::Success
    } else if status == 429 || status >= 500 {
        StatusClass::Retryable
    } else {
        StatusClass::Fatal
    }
}

/// Exponential backoff: 0.2s, 0.4s, 0.8s, ... capped at 4s.
pub(crate) fn backoff_delay(attempt: u32) -> Duration {
    let secs = (0.2 * 2f64.powi(attempt.min(16) as i32)).min(4.0);
    Duration::from_secs_f64(secs)
}

/// Parse a `Retry-After` header as a non-negative float number of seconds.
/// HTTP-date forms are not produced by the service and yield `None`.
pub(crate) fn parse_retry_after(value: Option<&str>) -> Option<Duration> {
    let secs: f64 = value?.trim().parse().ok()?;
    if !secs.is_finite() {
        return None;
    }
    Some(Duration::from_secs_f64(secs.max(0.0)))
}

/// Truncate a response body for embedding in error diagnostics.
pub(crate) fn truncate_body(body: &str) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    Some(body.chars().take(BODY_SNIPPET_CHARS).collect())
}
