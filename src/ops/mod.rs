//! Operator kernels and their disposition tables.
//!
//! Every binary operator owns a dense `TYPE_DIM x TYPE_DIM` table of kernel
//! function pointers, indexed by the operand type tags; every unary operator
//! owns a `TYPE_DIM` vector. Evaluating `op(a, b)` is one table lookup and
//! one call. The tables are filled densely: pairings an operator has no
//! semantics for hold the explicit `erro` kernel, never a default.
//!
//! The filler kernels below recur across operators; they encode the
//! propagation rules for Error, Absent, and Void operands. Their names are
//! kept short so the table literals stay readable as matrices.

use crate::value::Value;

mod arith;
mod bits;
mod cmp;
mod concat;
mod logic;

pub use arith::{
    add, divide, dot_add, dot_divide, dot_int_divide, dot_multiply, dot_subtract, int_divide,
    modulus, multiply, subtract, unary_minus, unary_plus,
};
pub use bits::{bitwise_and, bitwise_not, bitwise_or, bitwise_xor};
pub use cmp::{
    equals, greater_than, greater_than_or_equals, less_than, less_than_or_equals, not_equals,
};
pub use concat::concat;
pub use logic::{logical_and, logical_not, logical_or, logical_xor};

/// Kernel signature for unary-operator disposition vectors.
pub(crate) type UnaryFunc = fn(&Value) -> Value;

/// Kernel signature for binary-operator disposition matrices.
pub(crate) type BinaryFunc = fn(&Value, &Value) -> Value;

pub(crate) fn erro1(_a: &Value) -> Value {
    Value::Error
}

pub(crate) fn absn1(_a: &Value) -> Value {
    Value::Absent
}

pub(crate) fn void1(_a: &Value) -> Value {
    Value::Void
}

/// Return the operand unchanged.
pub(crate) fn pass1(a: &Value) -> Value {
    a.clone()
}

pub(crate) fn erro(_a: &Value, _b: &Value) -> Value {
    Value::Error
}

pub(crate) fn absn(_a: &Value, _b: &Value) -> Value {
    Value::Absent
}

pub(crate) fn void(_a: &Value, _b: &Value) -> Value {
    Value::Void
}

/// Return the first operand unchanged.
pub(crate) fn first(a: &Value, _b: &Value) -> Value {
    a.clone()
}

/// Return the second operand unchanged.
pub(crate) fn second(_a: &Value, b: &Value) -> Value {
    b.clone()
}

/// Return the first operand coerced to its string form.
pub(crate) fn first_str(a: &Value, _b: &Value) -> Value {
    Value::Str(a.to_string())
}

/// Return the second operand coerced to its string form.
pub(crate) fn second_str(_a: &Value, b: &Value) -> Value {
    Value::Str(b.to_string())
}

/// Int zero: the absent-numerator result for the division family.
pub(crate) fn int_zero(_a: &Value, _b: &Value) -> Value {
    Value::from_int64(0)
}

/// Float zero: the absent-numerator result for the division family.
pub(crate) fn float_zero(_a: &Value, _b: &Value) -> Value {
    Value::from_float64(0.0)
}
