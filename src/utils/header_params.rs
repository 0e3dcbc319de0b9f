//! Parsing of query-parameter style response headers.
//!
//! Backends commonly stuff download metadata (file name, size, checksum) into a
//! single response header as URL-encoded `key=value` pairs joined with `&`,
//! `content-disposition` being the usual carrier. This module decodes such a
//! header into a flat string mapping.

use percent_encoding::percent_decode_str;
use std::collections::HashMap;

/// Parses a `&`-delimited, `=`-delimited header value into a flat mapping.
///
/// The value is percent-decoded first, then split. A segment without a `=`
/// maps to the empty string. An empty or undecodable input yields an empty
/// map (undecodable bytes fall back to the raw string).
///
/// # Example
///
/// ```rust
/// use relay::utils::parse_header_query_parameters;
///
/// let parsed = parse_header_query_parameters("filename%3Dreport.csv");
/// assert_eq!(parsed["filename"], "report.csv");
///
/// let parsed = parse_header_query_parameters("filename=a.zip&size=1024");
/// assert_eq!(parsed["size"], "1024");
/// ```
pub fn parse_header_query_parameters(resource: &str) -> HashMap<String, String> {
    let mut result = HashMap::new();
    if resource.is_empty() {
        return result;
    }

    let decoded = percent_decode_str(resource)
        .decode_utf8()
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| resource.to_string());

    for item in decoded.split('&') {
        if item.is_empty() {
            continue;
        }
        match item.split_once('=') {
            Some((key, value)) => result.insert(key.to_string(), value.to_string()),
            None => result.insert(item.to_string(), String::new()),
        };
    }

    result
}
