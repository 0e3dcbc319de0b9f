//! Interceptor module containing registry bookkeeping and hook types.
//!
//! # Overview
//!
//! The interceptor module is organized into three components:
//!
//! - [`handler`] - The [`RequestInterceptor`]/[`ResponseInterceptor`] traits
//!   and closure-pair adapters
//! - [`registry`] - Opaque-handle bookkeeping for installed interceptors
//! - [`status`] - The single-slot status interceptor and its settlement pair
//!
//! # Examples
//!
//! ## A request interceptor from a closure pair
//!
//! ```rust
//! use relay::interceptor::RequestHandler;
//! use reqwest::header::HeaderValue;
//!
//! let handler = RequestHandler::new()
//!     .before(|options| {
//!         options
//!             .headers
//!             .insert("x-trace", HeaderValue::from_static("1"));
//!         Ok(())
//!     })
//!     .error(|error| eprintln!("request failed: {error}"));
//! ```
//!
//! ## Status interceptor with deferred settlement
//!
//! ```rust,no_run
//! use relay::interceptor::StatusContext;
//!
//! fn hook(cx: StatusContext) {
//!     let (response, _disable_toast, settlement) = cx.into_parts();
//!     tokio::spawn(async move {
//!         // e.g. refresh a token first, then settle
//!         settlement.resolve(response.into_json());
//!     });
//! }
//! ```

pub mod handler;
pub mod registry;
pub mod status;

pub use handler::{RequestHandler, RequestInterceptor, ResponseHandler, ResponseInterceptor};
pub use registry::{InterceptorId, InterceptorRegistry};
pub use status::{Settlement, StatusContext, StatusInterceptor};
