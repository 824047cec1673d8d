//! Dotted key-path lookup over JSON values

use serde_json::Value;

/// Resolve `path` (e.g. `"updater.name"`) against `value`.
///
/// Returns `None` when any segment is missing, when an intermediate value is
/// not an object, or when the final value is JSON `null`. Array elements are
/// addressed by numeric segments (`"items.0.id"`).
pub fn get_by_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let resolved = path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })?;

    if resolved.is_null() {
        None
    } else {
        Some(resolved)
    }
}

/// Like [`get_by_path`] but yields an owned value, `Value::Null` when unresolved
pub fn get_by_path_or_null(value: &Value, path: &str) -> Value {
    get_by_path(value, path).cloned().unwrap_or(Value::Null)
}
