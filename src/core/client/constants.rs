//! Centralized constants: default endpoints, UA, environment variable names.

/// Default base URL; the stock data vertical carries most endpoints.
pub(crate) const DEFAULT_BASE_URL: &str = "https://stock.xueqiu.com";

/// Root domain gating credential attachment.
pub(crate) const PRIMARY_ROOT_DOMAIN: &str = "xueqiu.com";
pub(crate) const PRIMARY_DOMAIN_SUFFIX: &str = ".xueqiu.com";

/// A "realistic enough" UA; override via the builder or `XUEQIU_USER_AGENT`.
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (XueqiuRs; +https://crates.io/crates/xueqiu-rs)";

/// Environment variables consulted by `from_env` resolution.
pub(crate) const ENV_TOKEN: &str = "XUEQIU_TOKEN";
pub(crate) const ENV_COOKIE: &str = "XUEQIU_COOKIE";
pub(crate) const ENV_BASE_URL: &str = "XUEQIU_BASE_URL";
pub(crate) const ENV_TIMEOUT: &str = "XUEQIU_TIMEOUT";
pub(crate) const ENV_MAX_RETRIES: &str = "XUEQIU_MAX_RETRIES";
pub(crate) const ENV_USER_AGENT: &str = "XUEQIU_USER_AGENT";

/// Request timeout when neither the builder nor the environment says otherwise.
pub(crate) const DEFAULT_TIMEOUT_SECS: f64 = 10.0;

/// Retries after the initial attempt.
pub(crate) const DEFAULT_MAX_RETRIES: u32 = 2;

/// Error diagnostics keep at most this many characters of the response body.
pub(crate) const BODY_SNIPPET_CHARS: usize = 2000;
