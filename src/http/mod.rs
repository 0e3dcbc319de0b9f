//! HTTP module containing transport binding functionality.
//!
//! This module owns the creation of the underlying HTTP client and its
//! bind-time configuration. The transport is a reqwest client behind
//! reqwest-middleware, assembled with tracing and retry middleware; the
//! wrapper adds nothing of its own to transport semantics.
//!
//! # Examples
//!
//! ## Binding with defaults
//!
//! ```rust
//! use relay::http::{create_http_client, TransportConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TransportConfig::default();
//! let client = create_http_client(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Customizing the transport
//!
//! ```rust
//! use relay::http::TransportConfig;
//! use reqwest::Url;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TransportConfig {
//!     base_url: Some(Url::parse("https://api.example.com")?),
//!     timeout: Duration::from_secs(10),
//!     retries: 3,
//!     ..TransportConfig::default()
//! };
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{create_http_client, QuerySerializer, TransportConfig};
