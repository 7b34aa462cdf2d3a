//! Scalar coercion for string-or-number JSON values
//!
//! The daemon may send any numeric field either as a JSON number or as a
//! numeric string. Every decode site goes through [`coerce`] so the rules
//! live in one place. Coercion never fails: unparsable text and non-scalar
//! values yield the zero value of the target type.

use serde_json::Value;

/// A type a JSON scalar can be coerced into
pub trait Coerce: Sized {
    /// Convert `value`, falling back to the type's zero value
    fn coerce_from(value: &Value) -> Self;
}

/// Coerce a JSON scalar into `T`
pub fn coerce<T: Coerce>(value: &Value) -> T {
    T::coerce_from(value)
}

/// Render a float the canonical way: shortest round-trippable digits,
/// no exponent, no trailing zeros (`1.0` renders as `1`).
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() {
        // f64's Display is shortest round-trip and never uses an exponent
        format!("{}", value)
    } else {
        String::new()
    }
}

impl Coerce for String {
    fn coerce_from(value: &Value) -> Self {
        match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i.to_string()
                } else if let Some(u) = n.as_u64() {
                    u.to_string()
                } else {
                    n.as_f64().map(format_decimal).unwrap_or_default()
                }
            }
            _ => String::new(),
        }
    }
}

impl Coerce for f64 {
    fn coerce_from(value: &Value) -> Self {
        match value {
            Value::String(s) => s.parse::<f64>().unwrap_or(0.0),
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

impl Coerce for i64 {
    fn coerce_from(value: &Value) -> Self {
        match value {
            Value::String(s) => s.parse::<i64>().unwrap_or(0),
            Value::Number(n) => n
                .as_i64()
                // `as` truncates toward zero and saturates out-of-range values
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(0),
            _ => 0,
        }
    }
}

/// Whether the value is something the coercer treats as a scalar
pub fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_))
}
