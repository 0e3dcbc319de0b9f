//! Tests for utils module functionality.

use relay::utils::{filter_empty_params, parse_content_range_total, parse_header_query_parameters};
use serde_json::{json, Map, Value};

mod common;
use common::helpers::*;

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_filter_drops_null_and_empty_string() {
    let mut data = object(json!({"name": "", "age": 5, "note": null}));
    filter_empty_params(&mut data);

    assert_eq!(data.len(), 1);
    assert_eq!(data["age"], 5);
}

#[test]
fn test_filter_is_shallow() {
    let mut data = object(json!({
        "outer": "",
        "nested": {"inner": "", "other": null},
        "list": ["", null]
    }));
    filter_empty_params(&mut data);

    assert!(!data.contains_key("outer"));
    // One level deep only: nested structures are untouched.
    assert_eq!(data["nested"], json!({"inner": "", "other": null}));
    assert_eq!(data["list"], json!(["", null]));
}

#[test]
fn test_filter_keeps_falsy_but_non_empty_values() {
    let mut data = object(json!({"zero": 0, "no": false, "blank": " "}));
    filter_empty_params(&mut data);
    assert_eq!(data.len(), 3);
}

#[test]
fn test_parse_header_encoded_separator() {
    // URL-encoded `filename=report.csv`
    let parsed = parse_header_query_parameters(TEST_REPORT_HEADER);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed["filename"], "report.csv");
}

#[test]
fn test_parse_header_plain_pairs() {
    let parsed = parse_header_query_parameters("filename=data.zip&size=2048");
    assert_eq!(parsed["filename"], "data.zip");
    assert_eq!(parsed["size"], "2048");
}

#[test]
fn test_parse_header_empty_input() {
    assert!(parse_header_query_parameters("").is_empty());
}

#[test]
fn test_parse_content_range_total_vectors() {
    for (header, expected) in create_test_content_range_headers() {
        assert_eq!(parse_content_range_total(header), expected, "{header}");
    }
}
