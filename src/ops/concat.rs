//! The `.` concatenation operator.
//!
//! Loose-typed, unlike the numeric operators: `"10" + 2` is an error, but
//! `"10" . 2` is unambiguously `"102"`, so numbers and bools are coerced
//! to their string forms here. Error still absorbs, and two absent (or two
//! void) operands stay absent (void).

use super::{BinaryFunc, absn, erro, first, first_str, second, second_str, void};
use crate::value::{TYPE_DIM, Value};

fn cat_s_xx(a: &Value, b: &Value) -> Value {
    Value::Str(format!("{}{}", a, b))
}

static CONCAT_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT     VOID       STRING   INT         FLOAT       BOOL
    /*ERROR */ [erro,  erro,      erro,      erro,    erro,       erro,       erro],
    /*ABSENT*/ [erro,  absn,      void,      second,  second_str, second_str, second_str],
    /*VOID  */ [erro,  void,      void,      second,  second_str, second_str, second_str],
    /*STRING*/ [erro,  first,     first,     cat_s_xx, cat_s_xx,  cat_s_xx,   cat_s_xx],
    /*INT   */ [erro,  first_str, first_str, cat_s_xx, cat_s_xx,  cat_s_xx,   cat_s_xx],
    /*FLOAT */ [erro,  first_str, first_str, cat_s_xx, cat_s_xx,  cat_s_xx,   cat_s_xx],
    /*BOOL  */ [erro,  first_str, first_str, cat_s_xx, cat_s_xx,  cat_s_xx,   cat_s_xx],
];

/// `.`: string concatenation of the operands' string forms.
pub fn concat(a: &Value, b: &Value) -> Value {
    CONCAT_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}
