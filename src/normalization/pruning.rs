use serde_json::{Map, Value};

pub struct EmptyFieldPruner;

impl EmptyFieldPruner {
    /// Drop every key whose value is null, an empty string, or an empty
    /// nested container, recursively.
    ///
    /// This is the final pipeline stage and the only one allowed to
    /// shrink the record shape; a record whose inputs were all empty
    /// legitimately prunes down to an empty mapping.
    pub fn prune(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let pruned: Map<String, Value> = map
                    .into_iter()
                    .map(|(key, value)| (key, Self::prune(value)))
                    .filter(|(_, value)| !is_empty(value))
                    .collect();
                Value::Object(pruned)
            }
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Self::prune)
                    .filter(|item| !is_empty(item))
                    .collect(),
            ),
            other => other,
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
