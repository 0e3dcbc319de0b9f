//! Core wrapper implementation with the dispatch logic.
//!
//! A [`Relay`] is configured once at setup time (bind, interceptors, loading
//! hooks, status interceptor) and then shared for dispatching. Setup methods
//! take `&mut self`; dispatch takes `&self`, so steady-state calls only read
//! the shared state and no synchronization is needed beyond the atomic
//! loading counter.
//!
//! # Examples
//!
//! ```rust,no_run
//! use relay::http::TransportConfig;
//! use relay::relay::RelayBuilder;
//! use relay::request::Request;
//! use reqwest::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut relay = RelayBuilder::new().build();
//! relay.bind(TransportConfig {
//!     base_url: Some(Url::parse("https://api.example.com")?),
//!     ..TransportConfig::default()
//! })?;
//! let payload = relay.request(Request::get("/health")).await?;
//! # Ok(())
//! # }
//! ```

use super::config::RelayConfig;
use crate::error::{Error, Result};
use crate::http::client::Transport;
use crate::http::TransportConfig;
use crate::interceptor::handler::{RequestInterceptor, ResponseInterceptor};
use crate::interceptor::registry::{InterceptorId, InterceptorRegistry};
use crate::interceptor::status::{Settlement, StatusContext, StatusInterceptor};
use crate::loading::LoadingCounter;
use crate::request::descriptor::AbortRegistrar;
use crate::request::options::{append_query, resolve_url, route_payload};
use crate::request::{RawResponse, Request, RequestBody, RequestOptions, ResponseBody};
use crate::streaming::descriptor::{
    ProgressCallback, ProgressEvent, ResponseType, StreamMode, StreamOutcome, StreamRequest,
};
use crate::streaming::download::DownloadResponse;
use crate::streaming::multipart::build_multipart;
use crate::utils::content_length::get_content_length;
use crate::utils::params::filter_empty_params;

use bytes::{Bytes, BytesMut};
use futures::future::{AbortHandle, AbortRegistration, Abortable};
use futures::StreamExt;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use reqwest_middleware::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// The wrapper around the underlying HTTP transport.
///
/// A relay is created via its builder and must be bound to a transport before
/// dispatching:
///
/// ```rust
/// use relay::http::TransportConfig;
/// use relay::relay::RelayBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut relay = RelayBuilder::new().build();
/// relay.bind(TransportConfig::default())?;
/// # Ok(())
/// # }
/// ```
pub struct Relay {
    config: RelayConfig,
    transport: Option<Transport>,
    registry: InterceptorRegistry,
    status_interceptor: Option<StatusInterceptor>,
    loading: Option<Arc<LoadingCounter>>,
}

impl Debug for Relay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relay")
            .field("config", &self.config)
            .field("bound", &self.transport.is_some())
            .field("registry", &self.registry)
            .field("status_interceptor", &self.status_interceptor.is_some())
            .field("loading", &self.loading.is_some())
            .finish()
    }
}

impl Relay {
    /// Creates a new Relay with the given configuration.
    pub(crate) fn new(config: RelayConfig) -> Self {
        Self {
            config,
            transport: None,
            registry: InterceptorRegistry::new(),
            status_interceptor: None,
            loading: None,
        }
    }

    /// Gets the wrapper configuration.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Whether a transport has been bound.
    pub fn is_bound(&self) -> bool {
        self.transport.is_some()
    }

    /// Gets the interceptor registry.
    pub fn registry(&self) -> &InterceptorRegistry {
        &self.registry
    }

    /// Gets the loading counter, when one is installed.
    pub fn loading(&self) -> Option<&Arc<LoadingCounter>> {
        self.loading.as_ref()
    }

    /// Binds the wrapper to an underlying transport instance.
    ///
    /// Must be called before dispatching or registering interceptors.
    pub fn bind(&mut self, config: TransportConfig) -> Result<&mut Self> {
        self.transport = Some(Transport::bind(config)?);
        Ok(self)
    }

    fn transport(&self) -> Result<&Transport> {
        self.transport.as_ref().ok_or(Error::NotBound)
    }

    /// Installs a request interceptor and returns its opaque handle.
    ///
    /// Fails with [`Error::NotBound`] when no transport is bound yet.
    pub fn use_request_interceptor<I>(&mut self, interceptor: I) -> Result<InterceptorId>
    where
        I: RequestInterceptor + 'static,
    {
        self.transport()?;
        Ok(self.registry.add_request(Arc::new(interceptor)))
    }

    /// Removes a request interceptor. Removing an absent handle is a no-op.
    pub fn remove_request_interceptor(&mut self, id: InterceptorId) -> Result<()> {
        self.transport()?;
        self.registry.remove_request(id);
        Ok(())
    }

    /// Installs a response interceptor and returns its opaque handle.
    ///
    /// Fails with [`Error::NotBound`] when no transport is bound yet.
    pub fn use_response_interceptor<I>(&mut self, interceptor: I) -> Result<InterceptorId>
    where
        I: ResponseInterceptor + 'static,
    {
        self.transport()?;
        Ok(self.registry.add_response(Arc::new(interceptor)))
    }

    /// Removes a response interceptor. Removing an absent handle is a no-op.
    pub fn remove_response_interceptor(&mut self, id: InterceptorId) -> Result<()> {
        self.transport()?;
        self.registry.remove_response(id);
        Ok(())
    }

    /// Installs the status interceptor. A single slot: the last registration
    /// wins.
    ///
    /// The hook fully owns settlement of every successful plain or
    /// Default-mode streaming response; see
    /// [`StatusContext`](crate::interceptor::StatusContext).
    pub fn use_status_interceptor<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(StatusContext) + Send + Sync + 'static,
    {
        self.status_interceptor = Some(Arc::new(hook));
        self
    }

    /// Installs a loading counter built from start/stop hooks.
    pub fn use_loading<S, T>(&mut self, on_start: S, on_stop: T) -> &mut Self
    where
        S: Fn() + Send + Sync + 'static,
        T: Fn() + Send + Sync + 'static,
    {
        self.loading = Some(Arc::new(LoadingCounter::new(on_start, on_stop)));
        self
    }

    /// Installs a prebuilt loading counter, e.g. the
    /// [`spinner`](crate::loading::spinner) one.
    pub fn use_loading_counter(&mut self, counter: LoadingCounter) -> &mut Self {
        self.loading = Some(Arc::new(counter));
        self
    }

    /// Dispatches a plain request and resolves with its JSON payload.
    ///
    /// Fails fast (before any network activity) on an unbound transport or an
    /// empty interface path. On transport failure the error passes through
    /// untransformed; non-success statuses carry the response portion. The
    /// loading counter is released on every completion path.
    pub async fn request(&self, descriptor: Request) -> Result<Value> {
        let transport = self.transport()?;
        descriptor.validate()?;

        let Request {
            method,
            interface_path,
            params,
            data,
            headers,
            disable_data_auto_differentiate,
            disable_loading,
            disable_toast,
            abort_registrar,
        } = descriptor;

        let url = resolve_url(transport.base_url.as_ref(), &interface_path)?;
        let (params, body) = route_payload(method, !disable_data_auto_differentiate, params, data);
        let mut options = RequestOptions {
            method,
            url,
            headers,
            params,
            body,
        };

        let _loading = self.loading_guard(disable_loading);

        if let Err(error) = self.run_request_interceptors(&mut options) {
            self.notify_request_error(&error);
            return Err(error);
        }

        let registration = wire_abort(abort_registrar);
        let builder = self.build_call(options)?;

        let exchange = async {
            let response = builder.send().await.map_err(Error::from)?;
            collect_response(response, None).await
        };
        let (status, headers, payload) = match await_abortable(exchange, registration).await {
            Ok(parts) => parts,
            Err(error) => {
                self.notify_response_error(&error);
                return Err(error);
            }
        };

        let mut raw = RawResponse {
            status,
            headers,
            body: ResponseBody::from_json_bytes(&payload),
        };

        if !status.is_success() {
            let error = Error::Status { response: raw };
            self.notify_response_error(&error);
            return Err(error);
        }

        if let Err(error) = self.run_response_interceptors(&mut raw) {
            self.notify_response_error(&error);
            return Err(error);
        }

        self.settle(raw, disable_toast).await
    }

    /// Dispatches a plain request and deserializes the resolved payload.
    pub async fn request_json<T: DeserializeOwned>(&self, descriptor: Request) -> Result<T> {
        let value = self.request(descriptor).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Dispatches a streaming call.
    ///
    /// Upload mode merges body fields and blobs into one multipart payload;
    /// Download mode forces binary response handling and resolves with the
    /// fixed envelope (or a custom decoder's output), never consulting the
    /// status interceptor; Default mode behaves as [`Relay::request`].
    pub async fn streaming(&self, descriptor: StreamRequest) -> Result<StreamOutcome> {
        let transport = self.transport()?;
        descriptor.request.validate()?;

        let StreamRequest {
            request,
            mode,
            files,
            file_field,
            mut response_type,
            response_content_disposition,
            custom_download_response,
            enable_sequence,
            custom_sequence,
            on_upload_progress,
            on_download_progress,
        } = descriptor;
        let Request {
            method,
            interface_path,
            params,
            data,
            headers,
            disable_data_auto_differentiate,
            disable_loading,
            disable_toast,
            abort_registrar,
        } = request;

        let url = resolve_url(transport.base_url.as_ref(), &interface_path)?;

        let (params, body) = match mode {
            StreamMode::Upload => {
                let data = data.unwrap_or_else(|| Value::Object(Default::default()));
                let form = build_multipart(
                    data,
                    &files,
                    &file_field,
                    enable_sequence,
                    custom_sequence.as_ref(),
                )?;
                (params, RequestBody::Multipart(form))
            }
            StreamMode::Download => {
                // Download is a binary exchange no matter what the caller
                // hinted.
                response_type = ResponseType::Binary;
                route_payload(method, !disable_data_auto_differentiate, params, data)
            }
            StreamMode::Default => {
                route_payload(method, !disable_data_auto_differentiate, params, data)
            }
        };

        let mut options = RequestOptions {
            method,
            url,
            headers,
            params,
            body,
        };

        let _loading = self.loading_guard(disable_loading);

        if let Err(error) = self.run_request_interceptors(&mut options) {
            self.notify_request_error(&error);
            return Err(error);
        }

        let registration = wire_abort(abort_registrar);
        let builder = self.build_call(options)?;

        // Upload progress is coarse: the multipart body is opaque to the
        // wrapper, so events fire at send start and completion with the
        // summed blob sizes as the total.
        let upload_total: Option<u64> = (mode == StreamMode::Upload)
            .then(|| files.iter().map(|file| file.bytes.len() as u64).sum());
        if let Some(callback) = &on_upload_progress {
            callback(ProgressEvent {
                loaded: 0,
                total: upload_total,
            });
        }

        let exchange = async {
            let response = builder.send().await.map_err(Error::from)?;
            collect_response(response, on_download_progress.as_ref()).await
        };
        let (status, headers, payload) = match await_abortable(exchange, registration).await {
            Ok(parts) => parts,
            Err(error) => {
                self.notify_response_error(&error);
                return Err(error);
            }
        };

        if let (Some(callback), Some(total)) = (&on_upload_progress, upload_total) {
            callback(ProgressEvent {
                loaded: total,
                total: Some(total),
            });
        }

        let body = match response_type {
            ResponseType::Binary => ResponseBody::Binary(payload.clone()),
            ResponseType::Json => ResponseBody::from_json_bytes(&payload),
        };
        let mut raw = RawResponse {
            status,
            headers,
            body,
        };

        if !status.is_success() {
            let error = Error::Status { response: raw };
            self.notify_response_error(&error);
            return Err(error);
        }

        if let Err(error) = self.run_response_interceptors(&mut raw) {
            self.notify_response_error(&error);
            return Err(error);
        }

        if mode == StreamMode::Download {
            // The status interceptor is never consulted in Download mode.
            if let Some(decoder) = &custom_download_response {
                return Ok(decoder(&raw.headers, payload));
            }
            return Ok(StreamOutcome::Download(DownloadResponse::from_parts(
                &raw.headers,
                &response_content_disposition,
                payload,
            )));
        }

        if response_type == ResponseType::Binary {
            // A binary payload has no JSON rendition for the status
            // interceptor to branch on.
            return Ok(StreamOutcome::Binary(payload));
        }

        self.settle(raw, disable_toast).await.map(StreamOutcome::Json)
    }

    fn loading_guard(&self, disable_loading: bool) -> LoadingGuard {
        let counter = if disable_loading {
            None
        } else {
            self.loading.clone()
        };
        LoadingGuard::new(counter)
    }

    fn run_request_interceptors(&self, options: &mut RequestOptions) -> Result<()> {
        for interceptor in self.registry.request_interceptors() {
            interceptor.on_request(options)?;

            if self.config.enable_empty_params_filtering {
                if let Some(Value::Object(map)) = options.body.as_json_mut() {
                    filter_empty_params(map);
                }
            }

            if self.config.enable_log {
                debug!(
                    target: "relay::request",
                    method = %options.method,
                    url = %options.url,
                    params = %options.params,
                    body = ?options.body,
                    color = %self.config.success_font_color,
                    "request"
                );
            }
        }
        Ok(())
    }

    fn notify_request_error(&self, error: &Error) {
        for interceptor in self.registry.request_interceptors() {
            interceptor.on_error(error);
        }
        if self.config.enable_log {
            debug!(
                target: "relay::request",
                error = %error,
                color = %self.config.error_font_color,
                "request error"
            );
        }
    }

    fn run_response_interceptors(&self, response: &mut RawResponse) -> Result<()> {
        for interceptor in self.registry.response_interceptors() {
            interceptor.on_response(response)?;

            if self.config.enable_log {
                debug!(
                    target: "relay::response",
                    status = %response.status,
                    headers = ?response.headers,
                    color = %self.config.success_font_color,
                    "response"
                );
            }
        }
        Ok(())
    }

    fn notify_response_error(&self, error: &Error) {
        for interceptor in self.registry.response_interceptors() {
            interceptor.on_error(error);
        }
        if self.config.enable_log {
            debug!(
                target: "relay::response",
                error = %error,
                color = %self.config.error_font_color,
                "response error"
            );
        }
    }

    fn build_call(&self, options: RequestOptions) -> Result<RequestBuilder> {
        let transport = self.transport()?;
        let RequestOptions {
            method,
            mut url,
            headers,
            params,
            body,
        } = options;

        append_query(&mut url, &params, transport.query_serializer.as_ref());

        let mut builder = transport.client.request(method.to_reqwest(), url);
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
        };
        // Descriptor headers go last so they can override body-derived
        // content types.
        if !headers.is_empty() {
            builder = builder.headers(headers);
        }
        Ok(builder)
    }

    async fn settle(&self, response: RawResponse, disable_toast: bool) -> Result<Value> {
        match &self.status_interceptor {
            Some(hook) => {
                let (settlement, receiver) = Settlement::new_pair();
                hook(StatusContext {
                    response,
                    disable_toast,
                    settlement,
                });
                match receiver.await {
                    Ok(result) => result,
                    Err(_) => Err(Error::Unsettled),
                }
            }
            None => Ok(response.into_json()),
        }
    }
}

/// Wires the caller's registrar to a fresh abort handle.
fn wire_abort(registrar: Option<AbortRegistrar>) -> Option<AbortRegistration> {
    registrar.map(|register| {
        let (handle, registration) = AbortHandle::new_pair();
        register(handle);
        registration
    })
}

async fn await_abortable<F, T>(future: F, registration: Option<AbortRegistration>) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match registration {
        Some(registration) => match Abortable::new(future, registration).await {
            Ok(result) => result,
            Err(_) => Err(Error::Aborted),
        },
        None => future.await,
    }
}

/// Collects a response body, reporting per-chunk progress when asked to.
async fn collect_response(
    response: reqwest::Response,
    progress: Option<&ProgressCallback>,
) -> Result<(StatusCode, HeaderMap, Bytes)> {
    let status = response.status();
    let headers = response.headers().clone();

    let payload = match progress {
        Some(callback) => {
            let length = get_content_length(&response);
            let total = (length > 0).then_some(length);
            let mut stream = response.bytes_stream();
            let mut buffer = BytesMut::new();
            while let Some(chunk) = stream.next().await {
                let chunk = chunk?;
                buffer.extend_from_slice(&chunk);
                callback(ProgressEvent {
                    loaded: buffer.len() as u64,
                    total,
                });
            }
            buffer.freeze()
        }
        None => response.bytes().await?,
    };

    Ok((status, headers, payload))
}

/// Brackets a dispatch with the loading counter, releasing on every path.
struct LoadingGuard(Option<Arc<LoadingCounter>>);

impl LoadingGuard {
    fn new(counter: Option<Arc<LoadingCounter>>) -> Self {
        if let Some(counter) = &counter {
            counter.start();
        }
        Self(counter)
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if let Some(counter) = &self.0 {
            counter.stop();
        }
    }
}
