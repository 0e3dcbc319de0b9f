//! HTTP client setup and middleware configuration.
//!
//! The defaults here describe a JSON API client: a JSON `Content-Type`
//! default header, a 60-second timeout, no cookie jar, and JSON response
//! parsing on the wrapper side. Every default is independently overridable by
//! the caller-supplied configuration merged on top.
//!
//! Retries, proxying and timeouts are transport concerns: they are forwarded
//! to the reqwest client and its middleware stack at bind time, and the
//! wrapper never retries on its own (retries default to 0).

use crate::error::Result;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Proxy, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Serializer hook turning query parameters into a raw query string.
///
/// When absent, parameters serialize through the default flat
/// `form_urlencoded` rendering.
pub type QuerySerializer = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Bind-time configuration for the underlying transport.
#[derive(Clone)]
pub struct TransportConfig {
    /// Base URL that relative interface paths resolve against.
    pub base_url: Option<Url>,
    /// Request timeout. Defaults to 60 seconds.
    pub timeout: Duration,
    /// Number of transport-level retries for failed requests. Defaults to 0,
    /// leaving the wrapper a pure pass-through.
    pub retries: u32,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers merged over the JSON content-type default.
    pub headers: Option<HeaderMap>,
    /// Optional query-string serializer hook.
    pub query_serializer: Option<QuerySerializer>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(60),
            retries: 0,
            proxy: None,
            headers: None,
            query_serializer: None,
        }
    }
}

impl fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("retries", &self.retries)
            .field("proxy", &self.proxy)
            .field("headers", &self.headers)
            .field("query_serializer", &self.query_serializer.is_some())
            .finish()
    }
}

/// The bound transport: the middleware-wrapped client plus the bind-time
/// pieces dispatch needs.
pub(crate) struct Transport {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) base_url: Option<Url>,
    pub(crate) query_serializer: Option<QuerySerializer>,
}

impl Transport {
    pub(crate) fn bind(config: TransportConfig) -> Result<Self> {
        let client = create_http_client(&config)?;
        Ok(Self {
            client,
            base_url: config.base_url,
            query_serializer: config.query_serializer,
        })
    }
}

/// Creates an HTTP client with middleware configuration.
///
/// The client carries:
/// - Tracing middleware for request/response spans
/// - Retry middleware with exponential backoff (no-op at the default of 0)
/// - A JSON `Content-Type` default header, overridable by `config.headers`
/// - The configured timeout and optional proxy
///
/// Cookies are not stored or sent; reqwest ships without a cookie jar unless
/// one is explicitly enabled, which matches the credentials-excluded default.
pub fn create_http_client(config: &TransportConfig) -> Result<ClientWithMiddleware> {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.retries);

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(extra) = &config.headers {
        headers.extend(extra.clone());
    }

    let mut inner_client_builder = reqwest::Client::builder()
        .timeout(config.timeout)
        .default_headers(headers);

    if let Some(proxy) = &config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy.clone());
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        // Retry failed requests.
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build();

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

    #[test]
    fn test_default_config() {
        let config = TransportConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.retries, 0);
        assert!(config.base_url.is_none());
        assert!(config.proxy.is_none());
        assert!(config.headers.is_none());
        assert!(config.query_serializer.is_none());
    }

    #[test]
    fn test_create_http_client_default() {
        let config = TransportConfig::default();
        let client = create_http_client(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_create_http_client_with_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("test-agent"));

        let config = TransportConfig {
            retries: 5,
            headers: Some(headers),
            ..TransportConfig::default()
        };

        let client = create_http_client(&config);
        assert!(client.is_ok());
    }
}
