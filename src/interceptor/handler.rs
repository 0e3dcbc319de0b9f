//! Interceptor traits and closure-pair adapters.

use crate::error::{Error, Result};
use crate::request::{RawResponse, RequestOptions};

/// Observes and may rewrite outgoing requests.
///
/// `on_request` runs before the transport call is built; mutating the options
/// rewrites the outgoing request. `on_error` is notified when a dispatch
/// fails, whether from an interceptor or from the transport.
pub trait RequestInterceptor: Send + Sync {
    /// Called with the normalized options before the transport call.
    fn on_request(&self, _options: &mut RequestOptions) -> Result<()> {
        Ok(())
    }

    /// Called when the dispatch fails.
    fn on_error(&self, _error: &Error) {}
}

/// Observes and may rewrite incoming responses.
///
/// A typical use is capturing a token from the response headers.
pub trait ResponseInterceptor: Send + Sync {
    /// Called with the raw response before resolution.
    fn on_response(&self, _response: &mut RawResponse) -> Result<()> {
        Ok(())
    }

    /// Called when the dispatch fails.
    fn on_error(&self, _error: &Error) {}
}

type BeforeRequestFn = Box<dyn Fn(&mut RequestOptions) -> Result<()> + Send + Sync>;
type OnResponseFn = Box<dyn Fn(&mut RawResponse) -> Result<()> + Send + Sync>;
type OnErrorFn = Box<dyn Fn(&Error) + Send + Sync>;

/// Builds a [`RequestInterceptor`] from an optional before/error closure pair.
///
/// Either closure may be omitted; an omitted hook is a no-op.
#[derive(Default)]
pub struct RequestHandler {
    before: Option<BeforeRequestFn>,
    error: Option<OnErrorFn>,
}

impl RequestHandler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the before-request closure.
    pub fn before<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut RequestOptions) -> Result<()> + Send + Sync + 'static,
    {
        self.before = Some(Box::new(f));
        self
    }

    /// Sets the error closure.
    pub fn error<F>(mut self, f: F) -> Self
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.error = Some(Box::new(f));
        self
    }
}

impl RequestInterceptor for RequestHandler {
    fn on_request(&self, options: &mut RequestOptions) -> Result<()> {
        match &self.before {
            Some(f) => f(options),
            None => Ok(()),
        }
    }

    fn on_error(&self, error: &Error) {
        if let Some(f) = &self.error {
            f(error);
        }
    }
}

/// Builds a [`ResponseInterceptor`] from an optional response/error closure
/// pair.
#[derive(Default)]
pub struct ResponseHandler {
    response: Option<OnResponseFn>,
    error: Option<OnErrorFn>,
}

impl ResponseHandler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response closure.
    pub fn response<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut RawResponse) -> Result<()> + Send + Sync + 'static,
    {
        self.response = Some(Box::new(f));
        self
    }

    /// Sets the error closure.
    pub fn error<F>(mut self, f: F) -> Self
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.error = Some(Box::new(f));
        self
    }
}

impl ResponseInterceptor for ResponseHandler {
    fn on_response(&self, response: &mut RawResponse) -> Result<()> {
        match &self.response {
            Some(f) => f(response),
            None => Ok(()),
        }
    }

    fn on_error(&self, error: &Error) {
        if let Some(f) = &self.error {
            f(error);
        }
    }
}
