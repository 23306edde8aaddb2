//! Request payload helpers
//!
//! POST bodies are kept as an insertion-ordered JSON object so that the
//! echoed `data` matches what the client sent, field order included.

use serde_json::{Map, Value};

/// Parsed POST body
pub type Payload = Map<String, Value>;

/// Whether `key` is present at all (a `null` value counts as present)
pub fn has_key(payload: &Payload, key: &str) -> bool {
    payload.contains_key(key)
}

/// Whether every key in `keys` is present
pub fn has_all(payload: &Payload, keys: &[&str]) -> bool {
    keys.iter().all(|key| has_key(payload, key))
}

/// Whether the payload's key set is exactly `keys`, in any order
pub fn has_exactly(payload: &Payload, keys: &[&str]) -> bool {
    has_all(payload, keys) && payload.keys().all(|key| keys.contains(&key.as_str()))
}

/// Whether `key` holds a truthy value
///
/// Absent, `null`, `false`, `0` and `""` are falsy; arrays and objects are
/// truthy even when empty.
pub fn is_truthy(payload: &Payload, key: &str) -> bool {
    match payload.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Whether `key` holds exactly the string `expected` (no type coercion)
pub fn str_eq(payload: &Payload, key: &str, expected: &str) -> bool {
    payload.get(key).and_then(Value::as_str) == Some(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_truthiness() {
        let p = payload(json!({
            "null": null, "false": false, "zero": 0, "zero_float": 0.0,
            "empty": "", "text": "a", "one": 1, "list": [], "obj": {}
        }));
        for key in ["missing", "null", "false", "zero", "zero_float", "empty"] {
            assert!(!is_truthy(&p, key), "{key} should be falsy");
        }
        for key in ["text", "one", "list", "obj"] {
            assert!(is_truthy(&p, key), "{key} should be truthy");
        }
    }

    #[test]
    fn test_str_eq_is_strict() {
        let p = payload(json!({"id": 1, "name": "1"}));
        assert!(!str_eq(&p, "id", "1"));
        assert!(str_eq(&p, "name", "1"));
        assert!(!str_eq(&p, "absent", "1"));
    }

    #[test]
    fn test_key_sets() {
        let p = payload(json!({"b": null, "a": 1}));
        assert!(has_all(&p, &["a", "b"]));
        assert!(has_exactly(&p, &["a", "b"]));
        assert!(!has_exactly(&p, &["a"]));
        assert!(!has_exactly(&p, &["a", "b", "c"]));
        assert!(!has_all(&p, &["a", "c"]));
    }
}
