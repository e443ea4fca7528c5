//! Depth-limited previews of nested help data.

use crate::value::Value;

/// Depth used by the structured renderer: one level of nesting is shown.
pub const DEFAULT_MAX_DEPTH: usize = 1;

/// Returns a shallow preview of `node`.
///
/// Mappings are rebuilt key by key: nested mappings recurse one level deeper, non-empty
/// sequences are reduced to a preview of their first element, and every other value is
/// replaced by a `<kind>` marker. Once `level` exceeds `max_level` the whole node becomes
/// `<Nested data: L{level}+>`. Non-mapping nodes are returned unchanged.
pub fn limit_depth(node: &Value, level: usize, max_level: usize) -> Value {
    if level > max_level {
        return Value::String(format!("<Nested data: L{level}+>"));
    }

    match node {
        Value::Mapping(entries) => Value::Mapping(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), preview_entry(value, level, max_level)))
                .collect(),
        ),
        Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Sequence(_) => node.clone(),
    }
}

fn preview_entry(value: &Value, level: usize, max_level: usize) -> Value {
    match value {
        Value::Mapping(_) => limit_depth(value, level + 1, max_level),
        Value::Sequence(items) => match items.first() {
            Some(first) => Value::Sequence(vec![limit_depth(first, level + 1, max_level)]),
            None => kind_marker(value),
        },
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => kind_marker(value),
    }
}

fn kind_marker(value: &Value) -> Value {
    Value::String(format!("<{}>", value.kind()))
}
