//! Relay module containing the core wrapper, builder pattern, and
//! configuration.
//!
//! This module provides the main [`Relay`] struct and its associated builder
//! for configuring and dispatching requests. It handles transport binding,
//! interceptor bookkeeping, loading-state bracketing and the plain/streaming
//! dispatch paths.
//!
//! # Overview
//!
//! The relay module is organized into three main components:
//!
//! - `relay` - Core Relay struct with the dispatch logic
//! - `builder` - RelayBuilder for flexible configuration using the builder pattern
//! - `config` - Wrapper configuration and defaults
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use relay::http::TransportConfig;
//! use relay::relay::RelayBuilder;
//! use relay::request::Request;
//! use reqwest::Url;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut relay = RelayBuilder::new().build();
//! relay.bind(TransportConfig {
//!     base_url: Some(Url::parse("https://api.example.com")?),
//!     ..TransportConfig::default()
//! })?;
//!
//! let users = relay.request(Request::get("/users").data(json!({"page": 1}))).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Loading indicator and status interceptor
//!
//! ```rust,no_run
//! use relay::relay::RelayBuilder;
//! use relay::Error;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut relay = RelayBuilder::new().build();
//! relay
//!     .use_loading(|| println!("loading..."), || println!("done"))
//!     .use_status_interceptor(|cx| {
//!         let ok = cx.response.body.as_json()
//!             .and_then(|body| body["code"].as_i64())
//!             .map(|code| code == 0)
//!             .unwrap_or(false);
//!         if ok {
//!             let payload = cx.response.clone().into_json();
//!             cx.resolve(payload["data"].clone());
//!         } else {
//!             cx.reject(Error::Internal("business failure".to_string()));
//!         }
//!     });
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod relay;

pub use builder::RelayBuilder;
pub use config::RelayConfig;
pub use relay::Relay;
