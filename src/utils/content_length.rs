//! Content length extraction utilities.
//!
//! Used by the streaming dispatch to size download-progress reporting,
//! supporting both Content-Range and Content-Length headers.

use reqwest::Response;

/// Extract content length from a response, supporting both Content-Range and
/// Content-Length headers.
///
/// A Content-Range header (from range requests) wins and its total is used;
/// otherwise the Content-Length header is consulted.
pub fn get_content_length(response: &Response) -> u64 {
    if let Some(content_range) = response.headers().get("Content-Range") {
        content_range
            .to_str()
            .ok()
            .and_then(parse_content_range_total)
            .unwrap_or(0)
    } else {
        response.content_length().unwrap_or(0)
    }
}

/// Parse a Content-Range header value (`bytes start-end/total`) into its total.
///
/// # Example
///
/// ```rust
/// use relay::utils::parse_content_range_total;
///
/// assert_eq!(parse_content_range_total("bytes 0-1023/2048"), Some(2048));
/// ```
pub fn parse_content_range_total(content_range: &str) -> Option<u64> {
    content_range
        .split('/')
        .next_back()
        .and_then(|size| size.trim().parse::<u64>().ok())
}

/// Extract the Content-Length of a response with an optional fallback.
pub fn extract_content_length(response: &Response, fallback: Option<u64>) -> Option<u64> {
    response.content_length().or(fallback)
}
