//! The comparison operators `== != > >= < <=`.
//!
//! Numbers compare numerically (ints promote to float against a float
//! operand); strings compare lexicographically; a string against a number
//! compares lexicographically against the number's string form. Void takes
//! part as the empty string. An absent operand makes the comparison absent
//! rather than false, and bools do not compare at all.
//!
//! The six operators share one matrix shape, so the kernels and table are
//! stamped out per operator from the comparison itself.

use super::{BinaryFunc, absn, erro};
use crate::value::{TYPE_DIM, Value};

macro_rules! comparison_operator {
    ($name:ident, $entry:ident, $op:tt) => {
        mod $name {
            use super::*;

            pub(super) fn b_ss(a: &Value, b: &Value) -> Value {
                Value::from_bool(a.str_val() $op b.str_val())
            }

            pub(super) fn b_sx(a: &Value, b: &Value) -> Value {
                Value::from_bool(a.str_val() $op b.to_string().as_str())
            }

            pub(super) fn b_xs(a: &Value, b: &Value) -> Value {
                Value::from_bool(a.to_string().as_str() $op b.str_val())
            }

            pub(super) fn b_ii(a: &Value, b: &Value) -> Value {
                Value::from_bool(a.int_val() $op b.int_val())
            }

            pub(super) fn b_ff(a: &Value, b: &Value) -> Value {
                Value::from_bool(a.float_val() $op b.float_val())
            }

            pub(super) fn b_if(a: &Value, b: &Value) -> Value {
                Value::from_bool((a.int_val() as f64) $op b.float_val())
            }

            pub(super) fn b_fi(a: &Value, b: &Value) -> Value {
                Value::from_bool(a.float_val() $op (b.int_val() as f64))
            }

            pub(super) static DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
                //          ERROR  ABSENT VOID   STRING INT    FLOAT  BOOL
                /*ERROR */ [erro,  erro,  erro,  erro,  erro,  erro,  erro],
                /*ABSENT*/ [erro,  absn,  absn,  absn,  absn,  absn,  absn],
                /*VOID  */ [erro,  absn,  b_ss,  b_ss,  b_sx,  b_sx,  erro],
                /*STRING*/ [erro,  absn,  b_ss,  b_ss,  b_sx,  b_sx,  erro],
                /*INT   */ [erro,  absn,  b_xs,  b_xs,  b_ii,  b_if,  erro],
                /*FLOAT */ [erro,  absn,  b_xs,  b_xs,  b_fi,  b_ff,  erro],
                /*BOOL  */ [erro,  erro,  absn,  erro,  erro,  erro,  erro],
            ];
        }

        pub fn $entry(a: &Value, b: &Value) -> Value {
            $name::DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
        }
    };
}

comparison_operator!(eq, equals, ==);
comparison_operator!(ne, not_equals, !=);
comparison_operator!(gt, greater_than, >);
comparison_operator!(ge, greater_than_or_equals, >=);
comparison_operator!(lt, less_than, <);
comparison_operator!(le, less_than_or_equals, <=);
