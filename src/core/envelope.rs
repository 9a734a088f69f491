//! Response-envelope normalization.
//!
//! Xueqiu answers in two incompatible envelope conventions, and several
//! endpoints (plus every auxiliary provider) return bare payloads with no
//! envelope at all:
//!
//! ```text
//! {"error_code": 0, "error_description": null, "data": ...}
//! {"code": 0, "message": "...", "success": true, "data": ...}
//! [...] / {...} / scalar           (no envelope markers)
//! ```
//!
//! [`Envelope::from_value`] rewrites all of them into one canonical shape,
//! and [`XueqiuResponse`] layers a typed payload on top so callers always
//! see a single response type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::core::error::XueqiuError;

/// Keys that mark an object as an envelope rather than a bare payload.
const ENVELOPE_MARKERS: [&str; 4] = ["data", "error_code", "code", "success"];

/// The canonical, untyped form of a Xueqiu response.
///
/// `error_code == 0` means success unless an explicit `success: false`
/// overrides it; the `payload` is whatever the endpoint considers its data.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// The useful data: the `data` field when an envelope was present,
    /// otherwise the entire decoded value.
    pub payload: Value,
    /// Upstream status code; `0` means success.
    pub error_code: i64,
    /// Upstream human-readable message, when one was provided.
    pub error_description: Option<String>,
    /// Explicit success flag, when the convention carries one.
    pub success: Option<bool>,
    /// Envelope-level fields that are neither markers nor the payload.
    pub extra: Map<String, Value>,
}

impl Envelope {
    /// Normalize a decoded JSON value into the canonical envelope shape.
    ///
    /// Non-objects and objects without any envelope marker become the
    /// payload of a synthetic success envelope, so downstream decoding
    /// never has to care which convention the endpoint used.
    pub fn from_value(value: Value) -> Envelope {
        let map = match value {
            Value::Object(map) if ENVELOPE_MARKERS.iter().any(|k| map.contains_key(*k)) => map,
            other => {
                return Envelope {
                    payload: other,
                    error_code: 0,
                    error_description: None,
                    success: None,
                    extra: Map::new(),
                };
            }
        };

        let mut map = map;
        let payload = map.remove("data").unwrap_or(Value::Null);
        // `error_code` wins over the `code` alias; a malformed marker falls
        // back to 0 rather than failing the whole response.
        let error_code = coerce_code(map.get("error_code").or_else(|| map.get("code"))).unwrap_or(0);
        let error_description = string_field(map.get("error_description").or_else(|| map.get("message")));
        let success = map.get("success").and_then(Value::as_bool);
        for key in ["error_code", "code", "error_description", "message", "success"] {
            map.remove(key);
        }

        Envelope {
            payload,
            error_code,
            error_description,
            success,
            extra: map,
        }
    }

    /// Whether this envelope signals success.
    ///
    /// An explicit `success` flag takes precedence; otherwise `error_code == 0`.
    pub fn is_success(&self) -> bool {
        match self.success {
            Some(flag) => flag,
            None => self.error_code == 0,
        }
    }
}

/// Common Xueqiu response envelope, typed over the payload.
///
/// Deserialization goes through [`Envelope::from_value`], so this accepts
/// both envelope conventions as well as bare arrays/objects/scalars.
#[derive(Debug, Clone)]
pub struct XueqiuResponse<T> {
    /// The decoded payload. `None` when the endpoint returned no data.
    pub data: Option<T>,
    /// Upstream status code; `0` means success.
    pub error_code: i64,
    /// Upstream human-readable message, when one was provided.
    pub error_description: Option<String>,
    /// Explicit success flag, when the convention carries one.
    pub success: Option<bool>,
    /// Envelope-level fields outside the recognized schema.
    pub extra: Map<String, Value>,
}

impl<T> XueqiuResponse<T> {
    /// Whether the envelope signals success (see [`Envelope::is_success`]).
    pub fn is_success(&self) -> bool {
        match self.success {
            Some(flag) => flag,
            None => self.error_code == 0,
        }
    }
}

impl<'de, T> Deserialize<'de> for XueqiuResponse<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let envelope = Envelope::from_value(Value::deserialize(deserializer)?);
        let data = match envelope.payload {
            Value::Null => None,
            payload => Some(serde_json::from_value(payload).map_err(serde::de::Error::custom)?),
        };
        Ok(XueqiuResponse {
            data,
            error_code: envelope.error_code,
            error_description: envelope.error_description,
            success: envelope.success,
            extra: envelope.extra,
        })
    }
}

/// Raise [`XueqiuError::Api`] when the payload carries a failure envelope.
///
/// Only objects are checked; bare payloads cannot carry an error marker.
/// The `error_code` convention is checked before the `success` convention.
/// A marker that fails integer coercion is treated as non-failure; this
/// mirrors the service's observed behavior of shipping junk in the marker
/// field alongside perfectly good data.
pub(crate) fn check_api_error(payload: &Value, url: &str, method: &str) -> Result<(), XueqiuError> {
    let Some(map) = payload.as_object() else {
        return Ok(());
    };

    // Style A: {"error_code": 0, "error_description": "...", "data": ...}
    if map.contains_key("error_code") {
        let Ok(error_code) = coerce_code(map.get("error_code")) else {
            return Ok(());
        };
        if error_code == 0 {
            return Ok(());
        }
        return Err(XueqiuError::Api {
            error_code,
            description: string_field(map.get("error_description")),
            url: url.to_string(),
            method: method.to_string(),
            payload: payload.clone(),
        });
    }

    // Style B: {"code": 0, "message": "...", "success": true, ...}
    if let Some(Value::Bool(success)) = map.get("success") {
        if *success {
            return Ok(());
        }
        return Err(XueqiuError::Api {
            error_code: coerce_code(map.get("code")).unwrap_or(0),
            description: string_field(map.get("message")),
            url: url.to_string(),
            method: method.to_string(),
            payload: payload.clone(),
        });
    }

    Ok(())
}

/// Decode a payload into a typed model, mapping shape mismatches to
/// [`XueqiuError::Data`] with the endpoint path for context.
pub(crate) fn decode_model<T: DeserializeOwned>(payload: Value, context: &str) -> Result<T, XueqiuError> {
    serde_json::from_value(payload).map_err(|e| XueqiuError::Data(format!("{context}: {e}")))
}

/// Best-effort integer coercion matching the wire conventions: numbers
/// truncate, digit strings parse, null/empty count as 0. `Err` marks a
/// marker value that cannot be read as an integer at all.
fn coerce_code(value: Option<&Value>) -> Result<i64, ()> {
    let Some(value) = value else {
        return Ok(0);
    };
    match value {
        Value::Null => Ok(0),
        Value::Bool(flag) => Ok(i64::from(*flag)),
        #[allow(clippy::cast_possible_truncation)]
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or(()),
        Value::String(s) if s.is_empty() => Ok(0),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| ()),
        _ => Err(()),
    }
}

fn string_field(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}
