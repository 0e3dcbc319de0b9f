//! Normalized transport-level request options.
//!
//! A [`Request`](crate::request::Request) descriptor is normalized into
//! [`RequestOptions`] before dispatch: the interface path is resolved into an
//! absolute URL, and the caller's payload is routed to the query string or the
//! body according to the method. Registered request interceptors receive the
//! normalized options and may rewrite them.

use crate::error::{Error, Result};
use crate::http::QuerySerializer;
use crate::request::method::Method;
use crate::utils::params::scalar_string;

use reqwest::header::HeaderMap;
use reqwest::multipart::Form;
use reqwest::Url;
use serde_json::Value;
use std::fmt;

/// The body of a normalized request.
pub enum RequestBody {
    /// No body bytes are sent.
    Empty,
    /// JSON payload.
    Json(Value),
    /// Multipart payload assembled by the Upload streaming mode.
    Multipart(Form),
}

impl RequestBody {
    /// Returns the JSON payload, when the body carries one.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Mutable access to the JSON payload, when the body carries one.
    pub fn as_json_mut(&mut self) -> Option<&mut Value> {
        match self {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestBody::Empty => f.write_str("Empty"),
            RequestBody::Json(value) => f.debug_tuple("Json").field(value).finish(),
            RequestBody::Multipart(_) => f.write_str("Multipart(..)"),
        }
    }
}

/// A normalized, transport-level request.
///
/// This is what request interceptors observe and may rewrite before the
/// transport call is built.
#[derive(Debug)]
pub struct RequestOptions {
    /// Request method.
    pub method: Method,
    /// Absolute target URL (query string not yet attached).
    pub url: Url,
    /// Request headers, applied after the body so they can override
    /// body-derived content types.
    pub headers: HeaderMap,
    /// Query parameters, serialized right before the call is built.
    pub params: Value,
    /// Request body.
    pub body: RequestBody,
}

/// Routes the caller's payload to the query string or the body.
///
/// With auto-differentiation enabled, the query-only method takes `data` as
/// its query parameters and sends an empty body; every other method keeps
/// `params` and `data` independent. With it disabled, both pass through
/// exactly as supplied.
pub(crate) fn route_payload(
    method: Method,
    auto_differentiate: bool,
    params: Value,
    data: Option<Value>,
) -> (Value, RequestBody) {
    let data = data.unwrap_or_else(|| Value::Object(Default::default()));
    if auto_differentiate && method.sends_data_as_query() {
        (data, RequestBody::Empty)
    } else {
        (params, RequestBody::Json(data))
    }
}

/// Resolves an interface path into an absolute URL.
///
/// Absolute paths are used verbatim; relative paths are joined onto the
/// bind-time base URL per RFC 3986 and fail when no base was configured.
pub(crate) fn resolve_url(base: Option<&Url>, interface_path: &str) -> Result<Url> {
    if let Ok(url) = Url::parse(interface_path) {
        return Ok(url);
    }
    match base {
        Some(base) => base
            .join(interface_path)
            .map_err(|e| Error::InvalidUrl(format!("{interface_path}: {e}"))),
        None => Err(Error::InvalidUrl(format!(
            "relative interface path `{interface_path}` requires a base URL at bind time"
        ))),
    }
}

/// Attaches the query parameters to the URL.
///
/// Uses the bind-time serializer hook when one was supplied, otherwise the
/// default flat serialization. An existing query string on the URL is kept and
/// extended.
pub(crate) fn append_query(url: &mut Url, params: &Value, serializer: Option<&QuerySerializer>) {
    let serialized = match serializer {
        Some(serialize) => serialize(params),
        None => default_query_string(params),
    };
    if serialized.is_empty() {
        return;
    }
    let combined = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{serialized}"),
        _ => serialized,
    };
    url.set_query(Some(&combined));
}

/// Default query serialization: flat `application/x-www-form-urlencoded`
/// pairs.
///
/// Only object-shaped params serialize; scalar members are stringified and
/// nested members rendered as compact JSON.
fn default_query_string(params: &Value) -> String {
    match params {
        Value::Object(map) if !map.is_empty() => {
            let mut serializer = form_urlencoded::Serializer::new(String::new());
            for (key, value) in map {
                serializer.append_pair(key, &scalar_string(value));
            }
            serializer.finish()
        }
        _ => String::new(),
    }
}
