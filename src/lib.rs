//! Relay is a crate aiming at providing a simple way to dispatch HTTP(S)
//! requests with ergonomic defaults: interceptor bookkeeping, a shared
//! loading indicator, automatic body/query routing by method, and upload/
//! download convenience modes, all as a thin layer over reqwest.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use relay::http::TransportConfig;
//! use relay::relay::RelayBuilder;
//! use relay::request::Request;
//! use reqwest::Url;
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut relay = RelayBuilder::new().build();
//! relay.bind(TransportConfig {
//!     base_url: Some(Url::parse("https://api.example.com")?),
//!     ..TransportConfig::default()
//! })?;
//!
//! // GET routes `data` into the query string automatically.
//! let users = relay
//!     .request(Request::get("/users").data(json!({"page": 1})))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! The relay crate is organized into several modules:
//!
//! - [`relay`] - The main `Relay` wrapper and `RelayBuilder` for configuring it
//! - [`request`] - Logical request descriptors and their normalization
//! - [`streaming`] - Upload/download convenience modes
//! - [`interceptor`] - Interceptor traits, registry bookkeeping and the status hook
//! - [`loading`] - The shared loading-indicator counter
//! - [`http`] - Transport binding and defaults
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Shared utility functions

pub mod error;
pub mod http;
pub mod interceptor;
pub mod loading;
pub mod relay;
pub mod request;
pub mod streaming;
pub mod utils;

pub use error::{Error, Result};
pub use http::{create_http_client, QuerySerializer, TransportConfig};
pub use interceptor::{
    InterceptorId, RequestHandler, RequestInterceptor, ResponseHandler, ResponseInterceptor,
    Settlement, StatusContext,
};
pub use loading::LoadingCounter;
pub use relay::{Relay, RelayBuilder, RelayConfig};
pub use request::{Method, RawResponse, Request, RequestBody, RequestOptions, ResponseBody};
pub use streaming::{
    save_stream_file, BlobPart, DownloadData, DownloadResponse, ProgressEvent, ResponseType,
    StreamMode, StreamOutcome, StreamRequest,
};
pub use utils::{filter_empty_params, parse_header_query_parameters};
