//! Shared test utilities for the posture workspace.
//!
//! Lives in its own crate (not a `#[cfg(test)]` module) so integration
//! tests in other crates can use it.

use serde_json::Value;

/// Normalize non-deterministic JSON fields for envelope comparison.
///
/// Two concerns are handled separately:
///
/// 1. **Root-only** — `tool.version` is replaced with `"__VERSION__"` only
///    when the *root* object looks like a posture envelope (has all four
///    keys: `schema`, `tool`, `started_at`, `result`). This prevents false
///    normalization of nested objects that happen to share the shape (e.g.
///    a check `data` payload).
///
/// 2. **Recursive** — timestamp keys (`started_at`, `finished_at`) are
///    normalized at any depth because their placeholder value is fixed and
///    cannot collide with real data.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("started_at")
            && obj.contains_key("result");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.contains_key("started_at") {
                map.insert(
                    "started_at".to_string(),
                    Value::String("__TIMESTAMP__".to_string()),
                );
            }
            if map.contains_key("finished_at") {
                map.insert(
                    "finished_at".to_string(),
                    Value::String("__TIMESTAMP__".to_string()),
                );
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
