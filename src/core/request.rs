//! Per-call request descriptions.
//!
//! Every endpoint builds one [`ApiRequest`] and hands it to either the async
//! or the blocking driver; the two drivers share these descriptions so the
//! endpoint catalog is written exactly once.

use std::borrow::Cow;

/// One endpoint call: path (or absolute URL), query parameters and per-call
/// policy flags.
///
/// Paths starting with `http://` or `https://` are used as-is; anything else
/// is joined onto the client's base URL. All observed Xueqiu endpoints are
/// GETs.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: &'static str,
    pub(crate) path: Cow<'static, str>,
    pub(crate) params: Vec<(&'static str, String)>,
    pub(crate) require_auth: bool,
    pub(crate) check_api_error: bool,
}

impl ApiRequest {
    /// A GET request against `path`, with envelope-error checking enabled.
    pub fn get(path: impl Into<Cow<'static, str>>) -> Self {
        ApiRequest {
            method: "GET",
            path: path.into(),
            params: Vec::new(),
            require_auth: false,
            check_api_error: true,
        }
    }

    /// Append a query parameter. Values are stringified; booleans go through
    /// [`bool_str`] at call sites that need the literal `true`/`false` form.
    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// Mark the call as requiring a configured credential. The driver fails
    /// fast (no network) when none is present.
    pub fn require_auth(mut self) -> Self {
        self.require_auth = true;
        self
    }

    /// Disable envelope-error checking; used by auxiliary providers that
    /// share no envelope convention with Xueqiu.
    pub fn skip_envelope_check(mut self) -> Self {
        self.check_api_error = false;
        self
    }

    /// The endpoint path this request was built with.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Stringify a boolean the way the upstream API expects it.
pub(crate) fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
