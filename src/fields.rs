use serde_json::Value;

/// Placeholder emitted for any field that cannot be resolved to a value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Walk an ordered attribute path over a record, left to right. Returns
/// `None` as soon as a hop is missing or the current value has no
/// attributes to look up (scalars, arrays).
pub fn extract<'a>(record: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = record;
    for attribute in path {
        current = current.get(attribute)?;
    }
    Some(current)
}

/// Resolve a path to output text, substituting [`NOT_AVAILABLE`] for
/// anything that is absent or has no scalar rendering. String values are
/// escaped to plain ASCII so the emitted row survives any downstream text
/// encoding.
pub fn canonify(record: &Value, path: &[&str]) -> String {
    match extract(record, path) {
        Some(Value::String(text)) => escape_non_ascii(text),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        // null, arrays, objects and missing hops all canonify the same way.
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Backslash-escape characters outside ASCII instead of dropping them.
fn escape_non_ascii(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        if character.is_ascii() {
            escaped.push(character);
        } else {
            escaped.push_str(&format!("\\u{{{:x}}}", character as u32));
        }
    }
    escaped
}
