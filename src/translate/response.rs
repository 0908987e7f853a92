use crate::error::{Result, TranslateError};
use serde_json::{Map, Value};

pub const RESPONSE_LABEL: &str = "responseData";
pub const TRANSLATION_LABEL: &str = "translatedText";

/// Parse `body` and return the string at `outer_key.inner_key`.
pub fn extract_nested_string(body: &str, outer_key: &str, inner_key: &str) -> Result<String> {
    let doc = parse_document(body)?;
    nested_string(&doc, outer_key, inner_key)
}

/// Parse `body`, take the array at `outer_key`, and extract
/// `outer_key.inner_key` from each element in order. A body that is itself
/// an array is treated as that array. The first bad element fails the batch.
pub fn extract_nested_string_array(
    body: &str,
    outer_key: &str,
    inner_key: &str,
) -> Result<Vec<String>> {
    let doc = parse_document(body)?;
    let items = match &doc {
        Value::Array(items) => items,
        other => field(as_object(other, "response")?, outer_key)?
            .as_array()
            .ok_or_else(|| TranslateError::parse(format!("'{outer_key}' is not an array")))?,
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            nested_string(item, outer_key, inner_key).map_err(|e| match e {
                TranslateError::Parse { message } => {
                    TranslateError::parse(format!("batch element {i}: {message}"))
                }
                other => other,
            })
        })
        .collect()
}

fn parse_document(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| {
        TranslateError::parse(format!("Invalid JSON: {e}. Body: {}", truncate(body, 300)))
    })
}

fn nested_string(doc: &Value, outer_key: &str, inner_key: &str) -> Result<String> {
    let outer = as_object(doc, "response")?;
    let inner = as_object(field(outer, outer_key)?, outer_key)?;
    field(inner, inner_key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| TranslateError::parse(format!("'{outer_key}.{inner_key}' is not a string")))
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| TranslateError::parse(format!("{what} is not a JSON object")))
}

fn field<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| TranslateError::parse(format!("missing '{key}'")))
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
