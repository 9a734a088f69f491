//! Public client surface + builder.
//! Internals are split into `auth` (host policy), `retry` (pure backoff and
//! classification helpers) and `constants` (defaults + env var names).

mod auth;
mod constants;
pub(crate) mod retry;

use std::time::Duration;

use reqwest::header::{ACCEPT, COOKIE, HeaderMap, HeaderValue, RETRY_AFTER};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::core::envelope;
use crate::core::error::XueqiuError;
use crate::core::request::ApiRequest;
use constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, ENV_BASE_URL, ENV_COOKIE,
    ENV_MAX_RETRIES, ENV_TIMEOUT, ENV_TOKEN, ENV_USER_AGENT, USER_AGENT,
};
use retry::StatusClass;

/// Resolved, immutable client configuration, shared by the async and
/// blocking drivers. Constructed once by the builder; never mutated.
#[derive(Debug, Clone)]
pub(crate) struct ClientConfig {
    pub(crate) base_url: Url,
    pub(crate) cookie_header: Option<String>,
    pub(crate) timeout: Duration,
    pub(crate) max_retries: u32,
    pub(crate) user_agent: String,
}

impl ClientConfig {
    pub(crate) fn resolve_url(&self, path: &str) -> Result<Url, XueqiuError> {
        if path.starts_with("http://") || path.starts_with("https://") {
            Ok(Url::parse(path)?)
        } else {
            Ok(self.base_url.join(path)?)
        }
    }

    /// The credential to attach for `url`, or `None` when the host policy
    /// forbids it. Re-evaluated per request.
    pub(crate) fn cookie_for(&self, url: &Url) -> Option<&str> {
        if auth::should_send_auth(url, self.base_url.host_str()) {
            self.cookie_header.as_deref()
        } else {
            None
        }
    }

    pub(crate) fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }
}

/// Asynchronous Xueqiu client.
///
/// Cheap to clone; clones share the underlying connection pool. The
/// credential and configuration are immutable after construction.
#[derive(Debug, Clone)]
pub struct XueqiuClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl XueqiuClient {
    /// Create a new builder.
    pub fn builder() -> XueqiuClientBuilder {
        XueqiuClientBuilder::default()
    }

    /// A client configured entirely from `XUEQIU_*` environment variables.
    pub fn from_env() -> Result<Self, XueqiuError> {
        Self::builder().build()
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Whether a credential is configured.
    pub fn has_auth(&self) -> bool {
        self.config.cookie_header.is_some()
    }

    /// Perform a request and return the decoded JSON payload.
    ///
    /// This is the raw escape hatch underneath every typed endpoint: it
    /// applies the host policy, the retry/backoff loop and (unless the
    /// request opts out) the envelope-error check, but no schema decoding.
    pub async fn request_json(&self, request: &ApiRequest) -> Result<Value, XueqiuError> {
        if request.require_auth && self.config.cookie_header.is_none() {
            return Err(XueqiuError::Auth(
                "this endpoint requires a Xueqiu cookie".into(),
            ));
        }

        let url = self.config.resolve_url(&request.path)?;
        let max_retries = self.config.max_retries;
        let mut attempt: u32 = 0;

        loop {
            tracing::debug!(method = request.method, url = %url, attempt, "xueqiu request start");

            let mut req = self.http.get(url.clone());
            if !request.params.is_empty() {
                req = req.query(&request.params);
            }
            if let Some(cookie) = self.config.cookie_for(&url) {
                req = req.header(COOKIE, cookie);
            }

            let resp = match req.send().await {
                Ok(resp) => resp,
                Err(err) => {
                    if attempt >= max_retries {
                        tracing::warn!(url = %url, error = %err, "transport error, retries exhausted");
                        return Err(XueqiuError::Http(err));
                    }
                    let delay = retry::backoff_delay(attempt);
                    tracing::debug!(url = %url, error = %err, delay_ms = delay.as_millis() as u64, "transport error, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                    continue;
                }
            };

            let status = resp.status().as_u16();
            match retry::classify_status(status) {
                StatusClass::Success => {}
                StatusClass::Retryable if attempt < max_retries => {
                    let retry_after = resp
                        .headers()
                        .get(RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_owned);
                    let delay = retry::parse_retry_after(retry_after.as_deref())
                        .unwrap_or_else(|| retry::backoff_delay(attempt));
                    tracing::debug!(url = %url, status, delay_ms = delay.as_millis() as u64, "retryable status, sleeping");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                    continue;
                }
                StatusClass::Retryable | StatusClass::Fatal => {
                    let body = resp.text().await.unwrap_or_default();
                    return Err(XueqiuError::Status {
                        status,
                        url: url.to_string(),
                        method: request.method.to_string(),
                        body: retry::truncate_body(&body),
                    });
                }
            }

            let body = match resp.text().await {
                Ok(body) => body,
                Err(err) => {
                    if attempt >= max_retries {
                        return Err(XueqiuError::Http(err));
                    }
                    tokio::time::sleep(retry::backoff_delay(attempt)).await;
                    attempt += 1;
                    continue;
                }
            };

            let payload: Value = match serde_json::from_str(&body) {
                Ok(payload) => payload,
                Err(err) => {
                    if attempt >= max_retries {
                        tracing::warn!(url = %url, error = %err, "decode error, retries exhausted");
                        return Err(XueqiuError::Decode {
                            url: url.to_string(),
                            method: request.method.to_string(),
                            message: err.to_string(),
                            body: retry::truncate_body(&body),
                        });
                    }
                    // A truncated or garbled body may resolve on retry.
                    tracing::debug!(url = %url, error = %err, "decode error, retrying");
                    tokio::time::sleep(retry::backoff_delay(attempt)).await;
                    attempt += 1;
                    continue;
                }
            };

            if request.check_api_error {
                envelope::check_api_error(&payload, url.as_str(), request.method)?;
            }
            return Ok(payload);
        }
    }

    /// Perform a request and decode the payload into `T`.
    pub async fn request_api<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<T, XueqiuError> {
        let payload = self.request_json(request).await?;
        envelope::decode_model(payload, request.path())
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`XueqiuClient`] and its blocking twin.
///
/// Resolution order for every setting: explicit builder value, then the
/// matching `XUEQIU_*` environment variable, then the built-in default.
#[derive(Default)]
pub struct XueqiuClientBuilder {
    cookie: Option<String>,
    cookies: Option<Vec<(String, String)>>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    user_agent: Option<String>,
}

impl XueqiuClientBuilder {
    /// A pre-formatted `Cookie` header value (the common copy-from-browser
    /// form). Blank strings count as unset.
    pub fn cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    /// Named cookie values, rendered into a single `Cookie` header in the
    /// given order. Ignored when [`cookie`](Self::cookie) is also set.
    pub fn cookies<K, V>(mut self, cookies: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.cookies = Some(
            cookies
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Override the base URL (default: `https://stock.xueqiu.com`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Per-request network timeout. Default: 10 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Retries after the initial attempt. Default: 2.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    pub fn build(self) -> Result<XueqiuClient, XueqiuError> {
        let config = self.resolve_config()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(config.default_headers())
            .timeout(config.timeout)
            .build()?;
        Ok(XueqiuClient { http, config })
    }

    /// Build the blocking variant of the client with the same configuration.
    pub fn build_blocking(self) -> Result<crate::blocking::XueqiuClient, XueqiuError> {
        crate::blocking::XueqiuClient::from_config(self.resolve_config()?)
    }

    fn resolve_config(self) -> Result<ClientConfig, XueqiuError> {
        let cookie = self.cookie.as_deref().and_then(clean_cookie);
        let jar_header = self
            .cookies
            .filter(|jar| !jar.is_empty())
            .map(|jar| {
                jar.iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join("; ")
            });
        let cookie_header = cookie.or(jar_header).or_else(env_cookie);

        let base_url = match self.base_url {
            Some(url) => url,
            None => match std::env::var(ENV_BASE_URL) {
                Ok(raw) => Url::parse(&raw)?,
                Err(_) => Url::parse(DEFAULT_BASE_URL)?,
            },
        };

        let timeout = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs_f64(env_f64(ENV_TIMEOUT, DEFAULT_TIMEOUT_SECS)));
        let max_retries = self
            .max_retries
            .unwrap_or_else(|| env_u32(ENV_MAX_RETRIES, DEFAULT_MAX_RETRIES));
        let user_agent = self
            .user_agent
            .or_else(|| std::env::var(ENV_USER_AGENT).ok())
            .unwrap_or_else(|| USER_AGENT.to_string());

        Ok(ClientConfig {
            base_url,
            cookie_header,
            timeout,
            max_retries,
            user_agent,
        })
    }
}

fn clean_cookie(cookie: &str) -> Option<String> {
    let cookie = cookie.trim();
    if cookie.is_empty() {
        None
    } else {
        Some(cookie.to_string())
    }
}

fn env_cookie() -> Option<String> {
    for name in [ENV_TOKEN, ENV_COOKIE] {
        if let Some(cookie) = std::env::var(name).ok().and_then(|raw| clean_cookie(&raw)) {
            return Some(cookie);
        }
    }
    None
}

fn env_f64(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
