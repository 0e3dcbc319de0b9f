//! The logical request descriptor.

use crate::error::{Error, Result};
use crate::request::method::Method;

use futures::future::AbortHandle;
use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use serde_json::Value;
use std::fmt;

/// Callback receiving a fresh abort handle before the transport call begins.
///
/// Triggering the handle aborts the in-flight call, which surfaces as
/// [`Error::Aborted`](crate::Error::Aborted) through the normal error path.
pub type AbortRegistrar = Box<dyn FnOnce(AbortHandle) + Send>;

/// Describes a logical request to dispatch through a
/// [`Relay`](crate::relay::Relay).
///
/// ```rust
/// use relay::request::Request;
/// use serde_json::json;
///
/// let descriptor = Request::get("/users").data(json!({"page": 2}));
/// ```
pub struct Request {
    /// Request method.
    pub method: Method,
    /// Target path, resolved against the bind-time base URL unless absolute.
    /// Must be non-empty.
    pub interface_path: String,
    /// Query parameters.
    pub params: Value,
    /// Body payload. Subject to auto-differentiation by method.
    pub data: Option<Value>,
    /// Additional request headers.
    pub headers: HeaderMap,
    /// Pass `params` and `data` through exactly as supplied.
    pub disable_data_auto_differentiate: bool,
    /// Skip the loading counter for this call.
    pub disable_loading: bool,
    /// Suppress toast-style notifications in the status interceptor.
    pub disable_toast: bool,
    /// Cancellation-registration callback.
    pub abort_registrar: Option<AbortRegistrar>,
}

impl Request {
    /// Creates a descriptor for the given method and interface path.
    pub fn new(method: Method, interface_path: impl Into<String>) -> Self {
        Self {
            method,
            interface_path: interface_path.into(),
            params: Value::Object(Default::default()),
            data: None,
            headers: HeaderMap::new(),
            disable_data_auto_differentiate: false,
            disable_loading: false,
            disable_toast: false,
            abort_registrar: None,
        }
    }

    /// Creates a GET descriptor.
    pub fn get(interface_path: impl Into<String>) -> Self {
        Self::new(Method::Get, interface_path)
    }

    /// Creates a POST descriptor.
    pub fn post(interface_path: impl Into<String>) -> Self {
        Self::new(Method::Post, interface_path)
    }

    /// Creates a PUT descriptor.
    pub fn put(interface_path: impl Into<String>) -> Self {
        Self::new(Method::Put, interface_path)
    }

    /// Creates a DELETE descriptor.
    pub fn delete(interface_path: impl Into<String>) -> Self {
        Self::new(Method::Delete, interface_path)
    }

    /// Creates a HEAD descriptor.
    pub fn head(interface_path: impl Into<String>) -> Self {
        Self::new(Method::Head, interface_path)
    }

    /// Creates an OPTIONS descriptor.
    pub fn options(interface_path: impl Into<String>) -> Self {
        Self::new(Method::Options, interface_path)
    }

    /// Creates a PATCH descriptor.
    pub fn patch(interface_path: impl Into<String>) -> Self {
        Self::new(Method::Patch, interface_path)
    }

    /// Sets the query parameters.
    pub fn params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }

    /// Sets the body payload.
    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Merges the given headers into the descriptor.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Adds a single header.
    ///
    /// ```rust
    /// use relay::request::Request;
    /// use reqwest::header::{self, HeaderValue};
    ///
    /// let descriptor = Request::get("/users")
    ///     .header(header::AUTHORIZATION, HeaderValue::from_static("Bearer token"));
    /// ```
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Disables the automatic params/data routing by method.
    pub fn disable_data_auto_differentiate(mut self, disable: bool) -> Self {
        self.disable_data_auto_differentiate = disable;
        self
    }

    /// Disables the loading counter for this call.
    pub fn disable_loading(mut self, disable: bool) -> Self {
        self.disable_loading = disable;
        self
    }

    /// Suppresses toast-style notifications for this call.
    pub fn disable_toast(mut self, disable: bool) -> Self {
        self.disable_toast = disable;
        self
    }

    /// Registers a cancellation callback.
    ///
    /// The callback receives a fresh [`AbortHandle`] wired to this call before
    /// the transport call begins, so the caller can trigger it externally.
    pub fn abort<F>(mut self, registrar: F) -> Self
    where
        F: FnOnce(AbortHandle) + Send + 'static,
    {
        self.abort_registrar = Some(Box::new(registrar));
        self
    }

    /// Fails fast when a descriptor field is invalid.
    ///
    /// Runs before any network activity.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.interface_path.is_empty() {
            return Err(Error::InvalidField {
                field: "interface_path",
                reason: "interface path must not be an empty string".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("interface_path", &self.interface_path)
            .field("params", &self.params)
            .field("data", &self.data)
            .field("headers", &self.headers)
            .field(
                "disable_data_auto_differentiate",
                &self.disable_data_auto_differentiate,
            )
            .field("disable_loading", &self.disable_loading)
            .field("disable_toast", &self.disable_toast)
            .field("abort_registrar", &self.abort_registrar.is_some())
            .finish()
    }
}
