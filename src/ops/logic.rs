//! The logical operators `and or xor not`.
//!
//! Strict: both operands must already be bools. There is no absent/void
//! propagation and no truthiness coercion; anything else is an error.

use crate::value::Value;

/// `and`.
pub fn logical_and(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => Value::from_bool(*x && *y),
        _ => Value::Error,
    }
}

/// `or`.
pub fn logical_or(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => Value::from_bool(*x || *y),
        _ => Value::Error,
    }
}

/// `xor`.
pub fn logical_xor(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => Value::from_bool(x != y),
        _ => Value::Error,
    }
}

/// `not`.
pub fn logical_not(a: &Value) -> Value {
    match a {
        Value::Bool(x) => Value::from_bool(!*x),
        _ => Value::Error,
    }
}
