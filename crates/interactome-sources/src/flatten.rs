//! Dotted-path flattening of nested JSON objects.
//!
//! STRING returns a flat array of interaction objects today, but nested
//! fields are flattened with dotted-path names (`a.b.c`) so the table schema
//! stays stable if the API nests metadata. Arrays and scalars are kept
//! as-is under their path.

use serde_json::{Map, Value};

/// Flatten one JSON value into a single-level map with dotted-path keys.
pub fn flatten_object(value: &Value) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into("", value, &mut flat);
    flat
}

fn flatten_into(prefix: &str, value: &Value, out: &mut Map<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(&path, nested, out);
            }
        }
        other => {
            // A top-level non-object flattens to nothing rather than an
            // unnamed column.
            if !prefix.is_empty() {
                out.insert(prefix.to_string(), other.clone());
            }
        }
    }
}
