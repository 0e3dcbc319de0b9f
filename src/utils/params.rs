//! One-level empty-value pruning of request payloads.
//!
//! The same pruning rule is applied in two places: interceptor-time filtering
//! of outgoing JSON bodies and the multipart merge in Upload mode. Both go
//! through [`filter_empty_params_each`] so the rule lives in exactly one spot.

use serde_json::{Map, Value};

/// Removes fields whose value is `null` or the empty string from a payload map.
///
/// Only the top level is inspected; nested objects and arrays pass through
/// untouched. Empty arrays and empty objects are kept.
///
/// # Example
///
/// ```rust
/// use relay::utils::filter_empty_params;
/// use serde_json::json;
///
/// let mut data = json!({"a": "", "b": null, "c": 0, "d": {"e": ""}})
///     .as_object()
///     .cloned()
///     .unwrap();
/// filter_empty_params(&mut data);
/// assert!(data.contains_key("c"));
/// assert!(data.contains_key("d"));
/// assert_eq!(data.len(), 2);
/// ```
pub fn filter_empty_params(data: &mut Map<String, Value>) {
    filter_empty_params_each(data, |_, _| {});
}

/// Same as [`filter_empty_params`], invoking `each` for every surviving field.
///
/// The callback receives the field name and its value after pruning, in map
/// order. The Upload-mode multipart merge uses this to copy the surviving
/// fields into the form.
pub fn filter_empty_params_each<F>(data: &mut Map<String, Value>, mut each: F)
where
    F: FnMut(&str, &Value),
{
    data.retain(|_, value| !is_empty_value(value));
    for (key, value) in data.iter() {
        each(key, value);
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Renders a JSON value as a plain string for query or form-field use.
///
/// Strings are used verbatim (no surrounding quotes), `null` becomes the empty
/// string, everything else is rendered as compact JSON.
pub(crate) fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
