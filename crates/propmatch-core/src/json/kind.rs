use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Token kind of a JSON node. Integers and floats are distinct kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonKind {
    Object,
    Array,
    String,
    Integer,
    Float,
    Boolean,
    Null,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => JsonKind::Object,
            Value::Array(_) => JsonKind::Array,
            Value::String(_) => JsonKind::String,
            Value::Number(n) if n.is_f64() => JsonKind::Float,
            Value::Number(_) => JsonKind::Integer,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Null => JsonKind::Null,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonKind::Object => "object",
            JsonKind::Array => "array",
            JsonKind::String => "string",
            JsonKind::Integer => "integer",
            JsonKind::Float => "float",
            JsonKind::Boolean => "boolean",
            JsonKind::Null => "null",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    if a.is_f64() || b.is_f64() {
        return a.as_f64() == b.as_f64();
    }
    false
}

/// Full tree equality.
///
/// Object member order is ignored and both sides must have the same keys.
/// Arrays compare in order. Numbers compare by value, so `1` equals `1.0`.
pub fn deep_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| deep_equals(x, y))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| deep_equals(v, w)))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_of() {
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
        assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!(1)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Float);
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
    }

    #[test]
    fn test_deep_equals_ignores_key_order() {
        assert!(deep_equals(
            &json!({"a": 1, "b": [1, 2]}),
            &json!({"b": [1, 2], "a": 1})
        ));
    }

    #[test]
    fn test_deep_equals_is_two_directional() {
        assert!(!deep_equals(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!deep_equals(&json!({"a": 1, "b": 2}), &json!({"a": 1})));
    }

    #[test]
    fn test_deep_equals_arrays_are_ordered() {
        assert!(!deep_equals(&json!([1, 2]), &json!([2, 1])));
    }

    #[test]
    fn test_deep_equals_numbers_by_value() {
        assert!(deep_equals(&json!(1), &json!(1.0)));
        assert!(!deep_equals(&json!(-1), &json!(u64::MAX)));
    }
}
