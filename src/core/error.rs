use serde_json::Value;
use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Every failure surfaces as a distinct variant so callers can match on the
/// category (auth, transport, HTTP status, decode, API envelope, schema)
/// without string inspection.
#[derive(Debug, Error)]
pub enum XueqiuError {
    /// An endpoint required authentication but the client holds no cookie.
    /// Raised before any network attempt.
    #[error("authentication required: {0}")]
    Auth(String),

    /// A transport-level failure (connection, timeout, TLS), surfaced once
    /// the retry budget is exhausted.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status} for {method} {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The fully resolved request URL.
        url: String,
        /// The request method.
        method: String,
        /// Response body, truncated to the first 2000 characters.
        body: Option<String>,
    },

    /// The response body was not valid JSON.
    #[error("failed to decode JSON for {method} {url}: {message}")]
    Decode {
        /// The fully resolved request URL.
        url: String,
        /// The request method.
        method: String,
        /// The underlying parse failure.
        message: String,
        /// Response body, truncated to the first 2000 characters.
        body: Option<String>,
    },

    /// The service returned an error envelope (`error_code != 0` or
    /// `success: false`) after a successful HTTP exchange.
    #[error("Xueqiu API error {error_code} for {method} {url}: {}", .description.as_deref().unwrap_or(""))]
    Api {
        /// The upstream error code.
        error_code: i64,
        /// The upstream error description, when one was provided.
        description: Option<String>,
        /// The fully resolved request URL.
        url: String,
        /// The request method.
        method: String,
        /// The full decoded payload, kept for diagnostics.
        payload: Value,
    },

    /// The payload decoded fine as JSON but its shape is incompatible with
    /// the target model.
    #[error("unexpected data shape: {0}")]
    Data(String),

    /// A provided URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
