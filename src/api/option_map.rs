use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ChartError, ChartResult};

/// Converts `snake_case` option names to the library's `camelCase`.
#[must_use]
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Serializes a typed option struct into a JSON object.
pub(crate) fn to_object<T: Serialize>(options: &T) -> ChartResult<Map<String, Value>> {
    match serde_json::to_value(options)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(ChartError::InvalidOption(format!(
            "options must serialize to an object, got `{other}`"
        ))),
    }
}

/// Top-level keys of `overrides` replace keys of `base`.
pub(crate) fn merge_shallow(base: &mut Map<String, Value>, overrides: Map<String, Value>) {
    for (key, value) in overrides {
        base.insert(key, value);
    }
}

/// Nested objects merge key by key; any other value replaces.
pub(crate) fn merge_deep(base: &mut Map<String, Value>, overrides: Map<String, Value>) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_deep(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
