//! The fixed download envelope and file-saving helper.

use crate::error::Result;
use crate::utils::header_params::parse_header_query_parameters;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// Code carried by a default-constructed download envelope.
pub const DOWNLOAD_SUCCESS_CODE: u16 = 200;
/// Message carried by a default-constructed download envelope.
pub const DOWNLOAD_SUCCESS_MESSAGE: &str = "download successful";

/// Payload section of the download envelope.
#[derive(Debug, Clone)]
pub struct DownloadData {
    /// Flat mapping parsed from the configured response header.
    pub stream_config: HashMap<String, String>,
    /// The raw binary payload.
    pub stream_result: Bytes,
}

/// The fixed envelope resolving a Download-mode call.
#[derive(Debug, Clone)]
pub struct DownloadResponse {
    /// Success code, `200` for the default envelope.
    pub code: u16,
    /// Success message.
    pub message: String,
    /// Parsed header mapping and binary payload.
    pub data: DownloadData,
}

impl DownloadResponse {
    /// Builds the default envelope from a response's headers and payload.
    ///
    /// The named header (usually `content-disposition`) is percent-decoded and
    /// parsed into the `stream_config` mapping; a missing or unreadable header
    /// yields an empty mapping.
    pub(crate) fn from_parts(headers: &HeaderMap, header_name: &str, payload: Bytes) -> Self {
        let stream_config = headers
            .get(header_name)
            .and_then(|value| value.to_str().ok())
            .map(parse_header_query_parameters)
            .unwrap_or_default();

        Self {
            code: DOWNLOAD_SUCCESS_CODE,
            message: DOWNLOAD_SUCCESS_MESSAGE.to_string(),
            data: DownloadData {
                stream_config,
                stream_result: payload,
            },
        }
    }

    /// Convenience accessor for the parsed file name, when the header carried
    /// one.
    pub fn file_name(&self) -> Option<&str> {
        self.data
            .stream_config
            .get("filename")
            .map(String::as_str)
    }
}

/// Writes a download envelope's binary payload to disk.
///
/// # Example
///
/// ```rust,no_run
/// use relay::streaming::{save_stream_file, StreamRequest};
///
/// # async fn example(relay: relay::Relay) -> relay::Result<()> {
/// let outcome = relay.streaming(StreamRequest::download("/reports/1")).await?;
/// if let Some(response) = outcome.as_download() {
///     let name = response.file_name().unwrap_or("download.bin");
///     save_stream_file(response, name).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub async fn save_stream_file(response: &DownloadResponse, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, &response.data.stream_result).await?;
    Ok(())
}
