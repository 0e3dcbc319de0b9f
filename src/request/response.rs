//! The wrapper's view of a transport response.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;

/// Response payload, shaped by the requested response type.
#[derive(Debug, Clone)]
pub enum ResponseBody {
    /// JSON-decoded payload. A body that does not parse as JSON is kept as a
    /// JSON string; an empty body becomes `null`.
    Json(Value),
    /// Raw binary payload (Download mode or a Binary response-type hint).
    Binary(Bytes),
}

impl ResponseBody {
    /// Returns the JSON payload, when the body carries one.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the binary payload, when the body carries one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            ResponseBody::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub(crate) fn from_json_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return ResponseBody::Json(Value::Null);
        }
        match serde_json::from_slice(bytes) {
            Ok(value) => ResponseBody::Json(value),
            // Non-JSON payloads resolve as their text, mirroring a lenient
            // JSON response mode.
            Err(_) => ResponseBody::Json(Value::String(
                String::from_utf8_lossy(bytes).into_owned(),
            )),
        }
    }
}

/// A raw transport response: status, headers and decoded payload.
///
/// This is what response interceptors and the status interceptor observe.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Decoded payload.
    pub body: ResponseBody,
}

impl RawResponse {
    /// Consumes the response into its JSON payload.
    ///
    /// Binary payloads have no JSON rendition and become `null`.
    pub fn into_json(self) -> Value {
        match self.body {
            ResponseBody::Json(value) => value,
            ResponseBody::Binary(_) => Value::Null,
        }
    }
}
