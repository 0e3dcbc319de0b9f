//! Error handling for the Relay library.
//!
//! This module provides centralized error handling with comprehensive error types
//! that can occur during request dispatch. All errors implement the standard
//! Error trait and provide detailed context about failures.
//!
//! The taxonomy follows two families:
//!
//! - **Configuration errors** ([`Error::NotBound`], [`Error::InvalidField`],
//!   [`Error::InvalidUrl`]) are synchronous and fail fast, before any network
//!   activity takes place.
//! - **Transport errors** ([`Error::Status`], [`Error::Middleware`],
//!   [`Error::Reqwest`], [`Error::Aborted`]) surface asynchronously through the
//!   rejection path. The wrapper performs no retry and no classification of its
//!   own; whatever the transport reports is passed through.

use crate::request::RawResponse;

use std::io;
use thiserror::Error;

/// Errors that can happen when using Relay.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// This variant captures internal errors that don't fit into other categories,
    /// and is also the general-purpose error for caller-owned hooks that need to
    /// reject with a plain message.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    ///
    /// Returned when an interface path cannot be resolved into an absolute URL,
    /// either because it is malformed or because it is relative and no base URL
    /// was configured at bind time.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The wrapper has not been bound to a transport instance yet.
    ///
    /// Dispatching or registering interceptors requires a prior call to
    /// [`Relay::bind`](crate::relay::Relay::bind).
    #[error("transport is not bound, call bind() on the Relay instance before use")]
    NotBound,

    /// A request descriptor field failed validation before dispatch.
    ///
    /// Carries the name of the offending field so callers can tell which part
    /// of the descriptor to fix. This check runs before any network activity.
    #[error("invalid `{field}` field: {reason}")]
    InvalidField {
        /// Name of the descriptor field that failed validation.
        field: &'static str,
        /// Human readable explanation.
        reason: String,
    },

    /// The request was aborted through its abort handle.
    #[error("request aborted")]
    Aborted,

    /// The transport produced a response with a non-success status code.
    ///
    /// Carries the response portion so callers (and status interceptors) can
    /// inspect the status, headers and payload of the failed exchange.
    #[error("HTTP status {}", .response.status)]
    Status {
        /// The response portion of the failed exchange.
        response: RawResponse,
    },

    /// A status interceptor dropped its settlement without resolving or rejecting.
    #[error("status interceptor dropped its settlement without resolving or rejecting")]
    Unsettled,

    /// JSON decoding error when deserializing a resolved payload.
    #[error("JSON decode error")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// I/O Error.
    ///
    /// This variant wraps standard I/O errors that can occur while writing a
    /// downloaded payload to disk.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// This variant wraps HTTP client errors from the reqwest library, including
    /// network failures and request/response processing errors. Connection-level
    /// failures carry no response portion.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error from the middleware stack wrapping the Reqwest client.
    #[error("Middleware Error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

impl Error {
    /// Returns the response portion of the error, when one exists.
    ///
    /// Connection-level failures (no response received at all) return `None`.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Error::Status { response } => Some(response),
            _ => None,
        }
    }
}

/// Result type alias for operations that can fail with a Relay error.
pub type Result<T> = std::result::Result<T, Error>;
