use reqwest::header::{COOKIE, RETRY_AFTER};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::core::client::ClientConfig;
use crate::core::client::retry::{self, StatusClass};
use crate::core::envelope;
use crate::core::error::XueqiuError;
use crate::core::request::ApiRequest;

/// Blocking Xueqiu client.
///
/// Built via [`crate::XueqiuClientBuilder::build_blocking`]; each call
/// occupies the current thread until resolved. Must not be used from inside
/// an async runtime.
#[derive(Debug)]
pub struct XueqiuClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl XueqiuClient {
    pub(crate) fn from_config(config: ClientConfig) -> Result<Self, XueqiuError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(config.default_headers())
            .timeout(config.timeout)
            .build()?;
        Ok(XueqiuClient { http, config })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Whether a credential is configured.
    pub fn has_auth(&self) -> bool {
        self.config.cookie_header.is_some()
    }

    /// Blocking twin of [`crate::XueqiuClient::request_json`].
    pub fn request_json(&self, request: &ApiRequest) -> Result<Value, XueqiuError> {
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

            let resp = match req.send() {
                Ok(resp) => resp,
                Err(err) => {
                    if attempt >= max_retries {
                        tracing::warn!(url = %url, error = %err, "transport error, retries exhausted");
                        return Err(XueqiuError::Http(err));
                    }
                    std::thread::sleep(retry::backoff_delay(attempt));
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
                    std::thread::sleep(delay);
                    attempt += 1;
                    continue;
                }
                StatusClass::Retryable | StatusClass::Fatal => {
                    let body = resp.text().unwrap_or_default();
                    return Err(XueqiuError::Status {
                        status,
                        url: url.to_string(),
                        method: request.method.to_string(),
                        body: retry::truncate_body(&body),
                    });
                }
            }

            let body = match resp.text() {
                Ok(body) => body,
                Err(err) => {
                    if attempt >= max_retries {
                        return Err(XueqiuError::Http(err));
                    }
                    std::thread::sleep(retry::backoff_delay(attempt));
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
                    std::thread::sleep(retry::backoff_delay(attempt));
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

    /// Blocking twin of [`crate::XueqiuClient::request_api`].
    pub fn request_api<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, XueqiuError> {
        let payload = self.request_json(request)?;
        envelope::decode_model(payload, request.path())
    }
}
