//! The streaming request descriptor and its resolution type.

use crate::request::{Method, Request};
use crate::streaming::download::DownloadResponse;
use crate::streaming::multipart::{BlobPart, SequenceFn};

use bytes::Bytes;
use futures::future::AbortHandle;
use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use serde_json::Value;
use std::fmt;

/// Streaming mode tag.
///
/// `Default` behaves exactly like plain dispatch. `Upload` merges body fields
/// and attached blobs into one multipart payload. `Download` forces binary
/// response handling and resolves with the fixed download envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamMode {
    #[default]
    Default,
    Upload,
    Download,
}

/// Response-type hint for a streaming call.
///
/// Coerced to `Binary` when the mode is `Download`, regardless of caller
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseType {
    #[default]
    Json,
    Binary,
}

/// A progress notification for an upload or download in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    /// Bytes transferred so far.
    pub loaded: u64,
    /// Total bytes when known.
    pub total: Option<u64>,
}

/// Callback receiving progress notifications.
pub type ProgressCallback = Box<dyn Fn(ProgressEvent) + Send + Sync>;

/// Custom decoder for Download-mode responses.
///
/// Receives the raw response headers and the raw binary payload; its return
/// value resolves the call directly, bypassing both the default envelope and
/// the status interceptor.
pub type DownloadDecoder = Box<dyn Fn(&HeaderMap, Bytes) -> StreamOutcome + Send + Sync>;

/// Resolution of a streaming dispatch.
#[derive(Debug)]
pub enum StreamOutcome {
    /// JSON payload (Default/Upload modes, or a status-interceptor result).
    Json(Value),
    /// Raw binary payload (a Binary response-type hint outside Download mode).
    Binary(Bytes),
    /// The fixed download envelope.
    Download(DownloadResponse),
}

impl StreamOutcome {
    /// Returns the JSON payload, when the outcome carries one.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            StreamOutcome::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the download envelope, when the outcome carries one.
    pub fn as_download(&self) -> Option<&DownloadResponse> {
        match self {
            StreamOutcome::Download(response) => Some(response),
            _ => None,
        }
    }
}

/// Describes a streaming call: a [`Request`] plus mode, blobs and decoding
/// controls.
///
/// ```rust
/// use relay::streaming::{BlobPart, StreamRequest};
///
/// let descriptor = StreamRequest::upload("/avatars")
///     .file(BlobPart::new(b"png bytes".to_vec()).file_name("avatar.png"))
///     .file_field("avatar");
/// ```
pub struct StreamRequest {
    /// The wrapped logical request.
    pub request: Request,
    /// Streaming mode.
    pub mode: StreamMode,
    /// Ordered binary blobs to attach in Upload mode.
    pub files: Vec<BlobPart>,
    /// Field name the blobs are appended under. Defaults to `"file"`.
    pub file_field: String,
    /// Response-type hint. Defaults to JSON; Download mode coerces to binary.
    pub response_type: ResponseType,
    /// Response header parsed into the envelope's `stream_config`.
    /// Defaults to `"content-disposition"`.
    pub response_content_disposition: String,
    /// Custom Download-mode decoder, takes precedence over the envelope.
    pub custom_download_response: Option<DownloadDecoder>,
    /// Suffix blob field names with their positional index when more than one
    /// blob is attached. Defaults to `true`.
    pub enable_sequence: bool,
    /// Custom merge routine placing blobs into the multipart form.
    pub custom_sequence: Option<SequenceFn>,
    /// Upload progress callback.
    pub on_upload_progress: Option<ProgressCallback>,
    /// Download progress callback.
    pub on_download_progress: Option<ProgressCallback>,
}

impl StreamRequest {
    /// Creates a streaming descriptor for the given method and interface path.
    pub fn new(method: Method, interface_path: impl Into<String>) -> Self {
        Self {
            request: Request::new(method, interface_path),
            mode: StreamMode::Default,
            files: Vec::new(),
            file_field: "file".to_string(),
            response_type: ResponseType::Json,
            response_content_disposition: "content-disposition".to_string(),
            custom_download_response: None,
            enable_sequence: true,
            custom_sequence: None,
            on_upload_progress: None,
            on_download_progress: None,
        }
    }

    /// Creates an Upload-mode descriptor (POST).
    pub fn upload(interface_path: impl Into<String>) -> Self {
        Self::new(Method::Post, interface_path).mode(StreamMode::Upload)
    }

    /// Creates a Download-mode descriptor (GET).
    pub fn download(interface_path: impl Into<String>) -> Self {
        Self::new(Method::Get, interface_path).mode(StreamMode::Download)
    }

    /// Sets the streaming mode.
    pub fn mode(mut self, mode: StreamMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the query parameters.
    pub fn params(mut self, params: Value) -> Self {
        self.request.params = params;
        self
    }

    /// Sets the body payload.
    pub fn data(mut self, data: Value) -> Self {
        self.request.data = Some(data);
        self
    }

    /// Merges the given headers into the descriptor.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.request.headers.extend(headers);
        self
    }

    /// Adds a single header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.request.headers.insert(name, value);
        self
    }

    /// Attaches a blob.
    pub fn file(mut self, file: BlobPart) -> Self {
        self.files.push(file);
        self
    }

    /// Attaches several blobs at once.
    pub fn files(mut self, files: impl IntoIterator<Item = BlobPart>) -> Self {
        self.files.extend(files);
        self
    }

    /// Sets the field name blobs are appended under.
    pub fn file_field(mut self, file_field: impl Into<String>) -> Self {
        self.file_field = file_field.into();
        self
    }

    /// Sets the response-type hint.
    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    /// Sets the header name parsed into the envelope's `stream_config`.
    pub fn response_content_disposition(mut self, header_name: impl Into<String>) -> Self {
        self.response_content_disposition = header_name.into();
        self
    }

    /// Sets a custom Download-mode decoder.
    pub fn custom_download_response<F>(mut self, decoder: F) -> Self
    where
        F: Fn(&HeaderMap, Bytes) -> StreamOutcome + Send + Sync + 'static,
    {
        self.custom_download_response = Some(Box::new(decoder));
        self
    }

    /// Enables or disables positional field-name sequencing.
    pub fn enable_sequence(mut self, enable: bool) -> Self {
        self.enable_sequence = enable;
        self
    }

    /// Sets a custom merge routine placing blobs into the multipart form.
    pub fn custom_sequence<F>(mut self, sequence: F) -> Self
    where
        F: Fn(reqwest::multipart::Form, &[BlobPart]) -> reqwest::multipart::Form
            + Send
            + Sync
            + 'static,
    {
        self.custom_sequence = Some(Box::new(sequence));
        self
    }

    /// Sets the upload progress callback.
    pub fn on_upload_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(ProgressEvent) + Send + Sync + 'static,
    {
        self.on_upload_progress = Some(Box::new(callback));
        self
    }

    /// Sets the download progress callback.
    pub fn on_download_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(ProgressEvent) + Send + Sync + 'static,
    {
        self.on_download_progress = Some(Box::new(callback));
        self
    }

    /// Disables the automatic params/data routing by method.
    pub fn disable_data_auto_differentiate(mut self, disable: bool) -> Self {
        self.request.disable_data_auto_differentiate = disable;
        self
    }

    /// Disables the loading counter for this call.
    pub fn disable_loading(mut self, disable: bool) -> Self {
        self.request.disable_loading = disable;
        self
    }

    /// Suppresses toast-style notifications for this call.
    pub fn disable_toast(mut self, disable: bool) -> Self {
        self.request.disable_toast = disable;
        self
    }

    /// Registers a cancellation callback.
    pub fn abort<F>(mut self, registrar: F) -> Self
    where
        F: FnOnce(AbortHandle) + Send + 'static,
    {
        self.request.abort_registrar = Some(Box::new(registrar));
        self
    }
}

impl fmt::Debug for StreamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamRequest")
            .field("request", &self.request)
            .field("mode", &self.mode)
            .field("files", &self.files.len())
            .field("file_field", &self.file_field)
            .field("response_type", &self.response_type)
            .field(
                "response_content_disposition",
                &self.response_content_disposition,
            )
            .field(
                "custom_download_response",
                &self.custom_download_response.is_some(),
            )
            .field("enable_sequence", &self.enable_sequence)
            .field("custom_sequence", &self.custom_sequence.is_some())
            .finish()
    }
}
