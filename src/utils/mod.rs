//! Shared utility functions.
//!
//! This module contains utility functions that are used across multiple
//! modules in the relay crate:
//!
//! - [`params`] - One-level empty-value pruning of request payloads
//! - [`header_params`] - Parsing query-parameter style response headers
//! - [`content_length`] - Content length extraction from HTTP responses
//!
//! # Examples
//!
//! ## Pruning empty payload fields
//!
//! ```rust
//! use relay::utils::filter_empty_params;
//! use serde_json::json;
//!
//! let mut data = json!({"name": "", "age": 5, "note": null})
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//! filter_empty_params(&mut data);
//! assert_eq!(data.len(), 1);
//! assert_eq!(data["age"], 5);
//! ```
//!
//! ## Parsing a header carrying query parameters
//!
//! ```rust
//! use relay::utils::parse_header_query_parameters;
//!
//! let parsed = parse_header_query_parameters("filename%3Dreport.csv");
//! assert_eq!(parsed["filename"], "report.csv");
//! ```

pub mod content_length;
pub mod header_params;
pub mod params;

pub use content_length::{extract_content_length, get_content_length, parse_content_range_total};
pub use header_params::parse_header_query_parameters;
pub use params::{filter_empty_params, filter_empty_params_each};
