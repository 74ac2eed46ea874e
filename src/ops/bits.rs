//! The bitwise operators `& | ^ ~`, defined on ints only.

use super::{BinaryFunc, UnaryFunc, absn, absn1, erro, erro1, first, second, void, void1};
use crate::value::{TYPE_DIM, Value};

fn and_i_ii(a: &Value, b: &Value) -> Value {
    Value::from_int64(a.int_val() & b.int_val())
}

static BITWISE_AND_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT       FLOAT  BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,     erro,  erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  second,   erro,  erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,     void,  erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,     erro,  erro],
    /*INT   */ [erro,  first, void,  erro,  and_i_ii, erro,  erro],
    /*FLOAT */ [erro,  erro,  void,  erro,  erro,     erro,  erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,     erro,  erro],
];

/// `&`: bitwise AND.
pub fn bitwise_and(a: &Value, b: &Value) -> Value {
    BITWISE_AND_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

fn or_i_ii(a: &Value, b: &Value) -> Value {
    Value::from_int64(a.int_val() | b.int_val())
}

static BITWISE_OR_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT      FLOAT  BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,    erro,  erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  second,  erro,  erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,    void,  erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,    erro,  erro],
    /*INT   */ [erro,  first, void,  erro,  or_i_ii, erro,  erro],
    /*FLOAT */ [erro,  erro,  void,  erro,  erro,    erro,  erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,    erro,  erro],
];

/// `|`: bitwise OR.
pub fn bitwise_or(a: &Value, b: &Value) -> Value {
    BITWISE_OR_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

fn xor_i_ii(a: &Value, b: &Value) -> Value {
    Value::from_int64(a.int_val() ^ b.int_val())
}

static BITWISE_XOR_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT       FLOAT  BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,     erro,  erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  second,   erro,  erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,     void,  erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,     erro,  erro],
    /*INT   */ [erro,  first, void,  erro,  xor_i_ii, erro,  erro],
    /*FLOAT */ [erro,  erro,  void,  erro,  erro,     erro,  erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,     erro,  erro],
];

/// `^`: bitwise XOR.
pub fn bitwise_xor(a: &Value, b: &Value) -> Value {
    BITWISE_XOR_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

fn not_i_i(a: &Value) -> Value {
    Value::from_int64(!a.int_val())
}

static BITWISE_NOT_DISPOSITIONS: [UnaryFunc; TYPE_DIM] = [
    /*ERROR */ erro1,
    /*ABSENT*/ absn1,
    /*VOID  */ void1,
    /*STRING*/ erro1,
    /*INT   */ not_i_i,
    /*FLOAT */ erro1,
    /*BOOL  */ erro1,
];

/// `~`: bitwise NOT.
pub fn bitwise_not(a: &Value) -> Value {
    BITWISE_NOT_DISPOSITIONS[a.vtype() as usize](a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Value {
        Value::from_int64(n)
    }

    #[test]
    fn int_pairs_compute() {
        assert_eq!(bitwise_and(&int(5), &int(3)), int(1));
        assert_eq!(bitwise_or(&int(5), &int(3)), int(7));
        assert_eq!(bitwise_xor(&int(5), &int(3)), int(6));
        assert_eq!(bitwise_not(&int(0)), int(-1));
        assert_eq!(bitwise_not(&int(5)), int(-6));
    }

    #[test]
    fn non_ints_are_errors() {
        assert_eq!(
            bitwise_and(&Value::from_float64(5.0), &int(3)),
            Value::error()
        );
        assert_eq!(bitwise_or(&int(1), &Value::from_float64(2.0)), Value::error());
        assert_eq!(
            bitwise_xor(&Value::from_string("5"), &int(3)),
            Value::error()
        );
        assert_eq!(bitwise_and(&Value::from_bool(true), &int(1)), Value::error());
        assert_eq!(bitwise_not(&Value::from_float64(1.0)), Value::error());
    }

    #[test]
    fn absent_passes_the_int_operand_through() {
        assert_eq!(bitwise_and(&Value::absent(), &int(6)), int(6));
        assert_eq!(bitwise_and(&int(6), &Value::absent()), int(6));
        assert_eq!(bitwise_or(&Value::absent(), &Value::absent()), Value::absent());
        assert_eq!(bitwise_not(&Value::absent()), Value::absent());
    }

    #[test]
    fn void_stays_void() {
        assert_eq!(bitwise_and(&Value::void(), &int(6)), Value::void());
        assert_eq!(bitwise_and(&int(6), &Value::void()), Value::void());
        assert_eq!(bitwise_not(&Value::void()), Value::void());
    }

    #[test]
    fn error_absorbs() {
        assert_eq!(bitwise_and(&Value::error(), &int(1)), Value::error());
        assert_eq!(bitwise_xor(&int(1), &Value::error()), Value::error());
    }
}
