//! Byte coercion and percent-decoding.

use serde_json::Value;
use std::borrow::Cow;

use super::CompatError;

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Coerce a dynamically-typed value to bytes.
///
/// Strings are encoded as UTF-8; arrays of integers in `0..=255` are taken
/// as raw bytes. Anything else is rejected.
pub fn ensure_bytes(value: &Value) -> Result<Cow<'_, [u8]>, CompatError> {
    match value {
        Value::String(s) => Ok(Cow::Borrowed(s.as_bytes())),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
            .collect::<Option<Vec<u8>>>()
            .map(Cow::Owned)
            .ok_or(CompatError::UnsupportedCoercionType { found: "array" }),
        other => Err(CompatError::UnsupportedCoercionType {
            found: json_type_name(other),
        }),
    }
}

/// Statically-typed counterpart of [`ensure_bytes`]: text and bytes pass through.
pub fn ensure_bytes_of<T: AsRef<[u8]> + ?Sized>(value: &T) -> &[u8] {
    value.as_ref()
}

/// Decode a percent-encoded string, treating `+` as a space.
///
/// Invalid UTF-8 in the decoded bytes is replaced with U+FFFD.
pub fn unquote_str(value: &str) -> String {
    let spaced = value.replace('+', " ");
    let decoded = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&decoded).into_owned()
}
