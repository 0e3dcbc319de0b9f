//! Request module containing the logical request description and its
//! normalization into a transport-level call.
//!
//! # Overview
//!
//! The request module is organized into four components:
//!
//! - [`method`] - The fixed HTTP method set and its payload-routing rule
//! - [`descriptor`] - The [`Request`] descriptor built by callers
//! - [`options`] - The normalized [`RequestOptions`] handed to interceptors
//! - [`response`] - The wrapper's view of a transport response
//!
//! # Examples
//!
//! ## Describing a request
//!
//! ```rust
//! use relay::request::Request;
//! use serde_json::json;
//!
//! let descriptor = Request::post("/users")
//!     .data(json!({"name": "ada"}))
//!     .disable_loading(true);
//! assert_eq!(descriptor.interface_path, "/users");
//! ```
//!
//! ## Method parsing is case-insensitive
//!
//! ```rust
//! use relay::request::Method;
//!
//! let method: Method = "patch".parse()?;
//! assert_eq!(method, Method::Patch);
//! # Ok::<(), relay::Error>(())
//! ```

pub mod descriptor;
pub mod method;
pub mod options;
pub mod response;

pub use descriptor::{AbortRegistrar, Request};
pub use method::Method;
pub use options::{RequestBody, RequestOptions};
pub use response::{RawResponse, ResponseBody};
