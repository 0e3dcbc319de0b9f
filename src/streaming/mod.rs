//! Streaming module containing the upload/download convenience modes.
//!
//! # Overview
//!
//! The streaming module is organized into three components:
//!
//! - [`descriptor`] - The [`StreamRequest`] descriptor, its mode tag and the
//!   [`StreamOutcome`] resolution type
//! - [`multipart`] - Merging body fields and binary blobs into one multipart
//!   payload
//! - [`download`] - The fixed download envelope and file-saving helper
//!
//! # Examples
//!
//! ## Uploading a file with form fields
//!
//! ```rust,no_run
//! use relay::streaming::{BlobPart, StreamRequest};
//! use serde_json::json;
//!
//! let descriptor = StreamRequest::upload("/files")
//!     .data(json!({"owner": "ada"}))
//!     .file(BlobPart::new(b"file content".to_vec()).file_name("notes.txt"));
//! ```
//!
//! ## Downloading into the fixed envelope
//!
//! ```rust,no_run
//! use relay::streaming::{StreamOutcome, StreamRequest};
//!
//! # async fn example(relay: relay::Relay) -> relay::Result<()> {
//! let outcome = relay.streaming(StreamRequest::download("/reports/1")).await?;
//! if let StreamOutcome::Download(response) = outcome {
//!     println!("file name: {:?}", response.data.stream_config.get("filename"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod descriptor;
pub mod download;
pub mod multipart;

pub use descriptor::{
    DownloadDecoder, ProgressCallback, ProgressEvent, ResponseType, StreamMode, StreamOutcome,
    StreamRequest,
};
pub use download::{save_stream_file, DownloadData, DownloadResponse};
pub use multipart::{BlobPart, SequenceFn};
