//! Arithmetic operators.
//!
//! The `+ - *` family auto-overflows: an int result that no longer fits
//! i64 demotes to float. The dotted family `.+ .- .* ./ .//` never
//! demotes; int results wrap in two's complement. Division and modulus are
//! Pythonic (quotient floored towards negative infinity, remainder with
//! the sign of the divisor), and a zero int divisor yields the IEEE float
//! quotient instead of trapping.

use super::{BinaryFunc, UnaryFunc, absn, absn1, erro, erro1, first, float_zero, int_zero, pass1, second, void, void1};
use crate::value::{TYPE_DIM, Value};

// Largest double strictly below 2^63. i64 has more precision than the
// 53-bit double mantissa at this range, so an integer product cannot be
// range-checked after the fact in either domain; instead the product is
// formed in floats and compared against this bound.
const INT_PRODUCT_LIMIT: f64 = 9_223_372_036_854_774_784.0;

// ── Addition ────────────────────────────────────────────────────────

fn add_n_ii(a: &Value, b: &Value) -> Value {
    let x = a.int_val();
    let y = b.int_val();
    match x.checked_add(y) {
        Some(sum) => Value::from_int64(sum),
        None => Value::from_float64(x as f64 + y as f64),
    }
}

fn add_f_if(a: &Value, b: &Value) -> Value {
    Value::from_float64(a.int_val() as f64 + b.float_val())
}

fn add_f_fi(a: &Value, b: &Value) -> Value {
    Value::from_float64(a.float_val() + b.int_val() as f64)
}

fn add_f_ff(a: &Value, b: &Value) -> Value {
    Value::from_float64(a.float_val() + b.float_val())
}

static ADD_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT       FLOAT     BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,     erro,     erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  second,   second,   erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,     void,     erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,     erro,     erro],
    /*INT   */ [erro,  first, void,  erro,  add_n_ii, add_f_if, erro],
    /*FLOAT */ [erro,  first, void,  erro,  add_f_fi, add_f_ff, erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,     erro,     erro],
];

/// `+` with int-to-float demotion when the integer sum overflows.
pub fn add(a: &Value, b: &Value) -> Value {
    ADD_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

// ── Subtraction ─────────────────────────────────────────────────────

fn sub_n_ii(a: &Value, b: &Value) -> Value {
    let x = a.int_val();
    let y = b.int_val();
    match x.checked_sub(y) {
        Some(diff) => Value::from_int64(diff),
        None => Value::from_float64(x as f64 - y as f64),
    }
}

fn sub_f_if(a: &Value, b: &Value) -> Value {
    Value::from_float64(a.int_val() as f64 - b.float_val())
}

fn sub_f_fi(a: &Value, b: &Value) -> Value {
    Value::from_float64(a.float_val() - b.int_val() as f64)
}

fn sub_f_ff(a: &Value, b: &Value) -> Value {
    Value::from_float64(a.float_val() - b.float_val())
}

static SUBTRACT_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT       FLOAT     BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,     erro,     erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  second,   second,   erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,     void,     erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,     erro,     erro],
    /*INT   */ [erro,  first, void,  erro,  sub_n_ii, sub_f_if, erro],
    /*FLOAT */ [erro,  first, void,  erro,  sub_f_fi, sub_f_ff, erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,     erro,     erro],
];

/// `-` with int-to-float demotion when the integer difference overflows.
pub fn subtract(a: &Value, b: &Value) -> Value {
    SUBTRACT_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

// ── Multiplication ──────────────────────────────────────────────────

fn mul_n_ii(a: &Value, b: &Value) -> Value {
    let x = a.int_val();
    let y = b.int_val();
    let product = x as f64 * y as f64;
    if product.abs() > INT_PRODUCT_LIMIT {
        Value::from_float64(product)
    } else {
        Value::from_int64(x.wrapping_mul(y))
    }
}

fn mul_f_if(a: &Value, b: &Value) -> Value {
    Value::from_float64(a.int_val() as f64 * b.float_val())
}

fn mul_f_fi(a: &Value, b: &Value) -> Value {
    Value::from_float64(a.float_val() * b.int_val() as f64)
}

fn mul_f_ff(a: &Value, b: &Value) -> Value {
    Value::from_float64(a.float_val() * b.float_val())
}

static MULTIPLY_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT       FLOAT     BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,     erro,     erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  second,   second,   erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,     void,     erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,     erro,     erro],
    /*INT   */ [erro,  first, void,  erro,  mul_n_ii, mul_f_if, erro],
    /*FLOAT */ [erro,  first, void,  erro,  mul_f_fi, mul_f_ff, erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,     erro,     erro],
];

/// `*` with int-to-float demotion when the integer product overflows.
pub fn multiply(a: &Value, b: &Value) -> Value {
    MULTIPLY_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

// ── Division ────────────────────────────────────────────────────────

fn div_n_ii(a: &Value, b: &Value) -> Value {
    let x = a.int_val();
    let y = b.int_val();

    if y == 0 {
        // Inf/NaN as with floats rather than a fatal integer divide.
        return Value::from_float64(x as f64 / y as f64);
    }

    if x.wrapping_rem(y) == 0 {
        Value::from_int64(x.wrapping_div(y))
    } else {
        Value::from_float64(x as f64 / y as f64)
    }
}

fn div_f_if(a: &Value, b: &Value) -> Value {
    Value::from_float64(a.int_val() as f64 / b.float_val())
}

fn div_f_fi(a: &Value, b: &Value) -> Value {
    Value::from_float64(a.float_val() / b.int_val() as f64)
}

fn div_f_ff(a: &Value, b: &Value) -> Value {
    Value::from_float64(a.float_val() / b.float_val())
}

static DIVIDE_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT       FLOAT      BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,      erro,      erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  int_zero,  float_zero, erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,      void,      erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,      erro,      erro],
    /*INT   */ [erro,  first, void,  erro,  div_n_ii,  div_f_if,  erro],
    /*FLOAT */ [erro,  first, void,  erro,  div_f_fi,  div_f_ff,  erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,      erro,      erro],
];

/// `/`: int pairs that divide exactly stay int; everything else goes
/// through float. An absent numerator divides to zero.
pub fn divide(a: &Value, b: &Value) -> Value {
    DIVIDE_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

// ── Integer-floor division ──────────────────────────────────────────

fn idiv_n_ii(a: &Value, b: &Value) -> Value {
    let x = a.int_val();
    let y = b.int_val();

    if y == 0 {
        return Value::from_float64(x as f64 / y as f64);
    }

    // Floored quotient, not the truncated one.
    let mut q = x.wrapping_div(y);
    let r = x.wrapping_rem(y);
    if (x < 0) != (y < 0) && r != 0 {
        q -= 1;
    }
    Value::from_int64(q)
}

fn idiv_f_if(a: &Value, b: &Value) -> Value {
    Value::from_float64((a.int_val() as f64 / b.float_val()).floor())
}

fn idiv_f_fi(a: &Value, b: &Value) -> Value {
    Value::from_float64((a.float_val() / b.int_val() as f64).floor())
}

fn idiv_f_ff(a: &Value, b: &Value) -> Value {
    Value::from_float64((a.float_val() / b.float_val()).floor())
}

static INT_DIVIDE_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT        FLOAT      BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,      erro,      erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  int_zero,  float_zero, erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,      void,      erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,      erro,      erro],
    /*INT   */ [erro,  first, void,  erro,  idiv_n_ii, idiv_f_if, erro],
    /*FLOAT */ [erro,  first, void,  erro,  idiv_f_fi, idiv_f_ff, erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,      erro,      erro],
];

/// `//`: quotient floored towards negative infinity.
pub fn int_divide(a: &Value, b: &Value) -> Value {
    INT_DIVIDE_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

// ── Modulus ─────────────────────────────────────────────────────────

fn mod_n_ii(a: &Value, b: &Value) -> Value {
    let x = a.int_val();
    let y = b.int_val();

    if y == 0 {
        return Value::from_float64(x as f64 / y as f64);
    }

    // Remainder with the sign of the divisor, not the dividend.
    let mut m = x.wrapping_rem(y);
    if (x >= 0) != (y >= 0) {
        m += y;
    }
    Value::from_int64(m)
}

fn mod_f_if(a: &Value, b: &Value) -> Value {
    let x = a.int_val() as f64;
    let y = b.float_val();
    Value::from_float64(x - y * (x / y).floor())
}

fn mod_f_fi(a: &Value, b: &Value) -> Value {
    let x = a.float_val();
    let y = b.int_val() as f64;
    Value::from_float64(x - y * (x / y).floor())
}

fn mod_f_ff(a: &Value, b: &Value) -> Value {
    let x = a.float_val();
    let y = b.float_val();
    Value::from_float64(x - y * (x / y).floor())
}

static MODULUS_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT        FLOAT      BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,      erro,      erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  int_zero,  float_zero, erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,      void,      erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,      erro,      erro],
    /*INT   */ [erro,  first, void,  erro,  mod_n_ii,  mod_f_if,  erro],
    /*FLOAT */ [erro,  first, void,  erro,  mod_f_fi,  mod_f_ff,  erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,      erro,      erro],
];

/// `%`: Pythonic remainder.
pub fn modulus(a: &Value, b: &Value) -> Value {
    MODULUS_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

// ── Non-demoting dotted family ──────────────────────────────────────
// Int pairs stay int whatever happens; overflow wraps in two's
// complement. Mixed int/float pairs share the plain operators' float
// kernels. An absent operand passes the other side through unchanged,
// for the division forms too.

fn dotadd_i_ii(a: &Value, b: &Value) -> Value {
    Value::from_int64(a.int_val().wrapping_add(b.int_val()))
}

fn dotsub_i_ii(a: &Value, b: &Value) -> Value {
    Value::from_int64(a.int_val().wrapping_sub(b.int_val()))
}

fn dotmul_i_ii(a: &Value, b: &Value) -> Value {
    Value::from_int64(a.int_val().wrapping_mul(b.int_val()))
}

fn dotdiv_i_ii(a: &Value, b: &Value) -> Value {
    let x = a.int_val();
    let y = b.int_val();
    if y == 0 {
        return Value::from_float64(x as f64 / y as f64);
    }
    Value::from_int64(x.wrapping_div(y))
}

static DOT_ADD_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT          FLOAT     BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,        erro,     erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  second,      second,   erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,        void,     erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,        erro,     erro],
    /*INT   */ [erro,  first, void,  erro,  dotadd_i_ii, add_f_if, erro],
    /*FLOAT */ [erro,  first, void,  erro,  add_f_fi,    add_f_ff, erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,        erro,     erro],
];

/// `.+`: addition without the int-to-float overflow demotion.
pub fn dot_add(a: &Value, b: &Value) -> Value {
    DOT_ADD_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

static DOT_SUBTRACT_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT          FLOAT     BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,        erro,     erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  second,      second,   erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,        void,     erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,        erro,     erro],
    /*INT   */ [erro,  first, void,  erro,  dotsub_i_ii, sub_f_if, erro],
    /*FLOAT */ [erro,  first, void,  erro,  sub_f_fi,    sub_f_ff, erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,        erro,     erro],
];

/// `.-`: subtraction without the int-to-float overflow demotion.
pub fn dot_subtract(a: &Value, b: &Value) -> Value {
    DOT_SUBTRACT_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

static DOT_MULTIPLY_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT          FLOAT     BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,        erro,     erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  second,      second,   erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,        void,     erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,        erro,     erro],
    /*INT   */ [erro,  first, void,  erro,  dotmul_i_ii, mul_f_if, erro],
    /*FLOAT */ [erro,  first, void,  erro,  mul_f_fi,    mul_f_ff, erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,        erro,     erro],
];

/// `.*`: multiplication without the int-to-float overflow demotion.
pub fn dot_multiply(a: &Value, b: &Value) -> Value {
    DOT_MULTIPLY_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

static DOT_DIVIDE_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT          FLOAT     BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,        erro,     erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  second,      second,   erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,        void,     erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,        erro,     erro],
    /*INT   */ [erro,  first, void,  erro,  dotdiv_i_ii, div_f_if, erro],
    /*FLOAT */ [erro,  first, void,  erro,  div_f_fi,    div_f_ff, erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,        erro,     erro],
];

/// `./`: int division truncating towards zero, never demoting.
pub fn dot_divide(a: &Value, b: &Value) -> Value {
    DOT_DIVIDE_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

static DOT_INT_DIVIDE_DISPOSITIONS: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
    //          ERROR  ABSENT VOID   STRING INT        FLOAT      BOOL
    /*ERROR */ [erro,  erro,  erro,  erro,  erro,      erro,      erro],
    /*ABSENT*/ [erro,  absn,  absn,  erro,  second,    second,    erro],
    /*VOID  */ [erro,  absn,  void,  erro,  void,      void,      erro],
    /*STRING*/ [erro,  erro,  erro,  erro,  erro,      erro,      erro],
    /*INT   */ [erro,  first, void,  erro,  idiv_n_ii, idiv_f_if, erro],
    /*FLOAT */ [erro,  first, void,  erro,  idiv_f_fi, idiv_f_ff, erro],
    /*BOOL  */ [erro,  erro,  erro,  erro,  erro,      erro,      erro],
];

/// `.//`: floored int division with pass-through absent handling.
pub fn dot_int_divide(a: &Value, b: &Value) -> Value {
    DOT_INT_DIVIDE_DISPOSITIONS[a.vtype() as usize][b.vtype() as usize](a, b)
}

// ── Unary plus and minus ────────────────────────────────────────────

fn neg_i_i(a: &Value) -> Value {
    Value::from_int64(a.int_val().wrapping_neg())
}

fn neg_f_f(a: &Value) -> Value {
    Value::from_float64(-a.float_val())
}

static UNARY_PLUS_DISPOSITIONS: [UnaryFunc; TYPE_DIM] = [
    /*ERROR */ erro1,
    /*ABSENT*/ absn1,
    /*VOID  */ void1,
    /*STRING*/ erro1,
    /*INT   */ pass1,
    /*FLOAT */ pass1,
    /*BOOL  */ erro1,
];

/// Unary `+`: identity on numbers.
pub fn unary_plus(a: &Value) -> Value {
    UNARY_PLUS_DISPOSITIONS[a.vtype() as usize](a)
}

static UNARY_MINUS_DISPOSITIONS: [UnaryFunc; TYPE_DIM] = [
    /*ERROR */ erro1,
    /*ABSENT*/ absn1,
    /*VOID  */ void1,
    /*STRING*/ erro1,
    /*INT   */ neg_i_i,
    /*FLOAT */ neg_f_f,
    /*BOOL  */ erro1,
];

/// Unary `-`: negation on numbers.
pub fn unary_minus(a: &Value) -> Value {
    UNARY_MINUS_DISPOSITIONS[a.vtype() as usize](a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Value {
        Value::from_int64(n)
    }

    fn float(x: f64) -> Value {
        Value::from_float64(x)
    }

    #[test]
    fn int_addition_stays_int_until_overflow() {
        assert_eq!(add(&int(2), &int(3)), int(5));

        let big = int(1 << 62);
        let sum = add(&big, &big);
        assert_eq!(sum, float(9223372036854775808.0)); // 2^63
    }

    #[test]
    fn int_subtraction_demotes_on_overflow() {
        assert_eq!(subtract(&int(7), &int(10)), int(-3));
        let diff = subtract(&int(i64::MIN), &int(1));
        assert_eq!(diff, float(i64::MIN as f64 - 1.0));
    }

    #[test]
    fn int_multiplication_demotes_past_the_float_limit() {
        assert_eq!(multiply(&int(6), &int(7)), int(42));

        let big = int(1 << 40);
        let product = multiply(&big, &big);
        assert_eq!(product, float(1.2089258196146292e24)); // 2^80
    }

    #[test]
    fn mixed_arithmetic_promotes_to_float() {
        assert_eq!(add(&int(1), &float(2.5)), float(3.5));
        assert_eq!(multiply(&float(2.5), &int(2)), float(5.0));
    }

    #[test]
    fn division_is_exact_int_or_float() {
        assert_eq!(divide(&int(10), &int(2)), int(5));
        assert_eq!(divide(&int(7), &int(2)), float(3.5));
        assert_eq!(divide(&float(1.0), &float(4.0)), float(0.25));
    }

    #[test]
    fn division_by_int_zero_goes_ieee() {
        assert_eq!(divide(&int(1), &int(0)), float(f64::INFINITY));
        assert_eq!(divide(&int(-1), &int(0)), float(f64::NEG_INFINITY));
        assert_eq!(divide(&int(0), &int(0)), float(f64::NAN));
    }

    #[test]
    fn floor_division_rounds_towards_negative_infinity() {
        assert_eq!(int_divide(&int(-7), &int(2)), int(-4));
        assert_eq!(int_divide(&int(7), &int(-2)), int(-4));
        assert_eq!(int_divide(&int(7), &int(2)), int(3));
        assert_eq!(int_divide(&int(-7), &int(-2)), int(3));
        assert_eq!(int_divide(&float(7.5), &int(2)), float(3.0));
    }

    #[test]
    fn modulus_takes_the_divisor_sign() {
        assert_eq!(modulus(&int(-7), &int(2)), int(1));
        assert_eq!(modulus(&int(7), &int(-2)), int(-1));
        assert_eq!(modulus(&int(7), &int(2)), int(1));
        assert_eq!(modulus(&float(7.5), &int(2)), float(1.5));
        assert_eq!(modulus(&int(1), &int(0)), float(f64::INFINITY));
    }

    #[test]
    fn dotted_ops_wrap_instead_of_demoting() {
        let big = int(1 << 62);
        assert_eq!(dot_add(&big, &big), int((1i64 << 62).wrapping_mul(2)));
        assert_eq!(
            dot_multiply(&int(1 << 40), &int(1 << 40)),
            int((1i64 << 40).wrapping_mul(1 << 40))
        );
        assert_eq!(dot_subtract(&int(3), &int(5)), int(-2));
        assert_eq!(dot_divide(&int(7), &int(2)), int(3));
        assert_eq!(dot_divide(&int(1), &int(0)), float(f64::INFINITY));
        assert_eq!(dot_int_divide(&int(-7), &int(2)), int(-4));
    }

    #[test]
    fn absent_is_identity_for_additive_ops() {
        assert_eq!(add(&Value::absent(), &int(5)), int(5));
        assert_eq!(add(&int(5), &Value::absent()), int(5));
        assert_eq!(subtract(&int(5), &Value::absent()), int(5));
        assert_eq!(dot_add(&Value::absent(), &float(1.5)), float(1.5));
        assert_eq!(add(&Value::absent(), &Value::absent()), Value::absent());
    }

    #[test]
    fn absent_numerator_divides_to_zero() {
        assert_eq!(divide(&Value::absent(), &int(5)), int(0));
        assert_eq!(divide(&Value::absent(), &float(5.0)), float(0.0));
        assert_eq!(int_divide(&Value::absent(), &int(5)), int(0));
        assert_eq!(modulus(&Value::absent(), &float(5.0)), float(0.0));
        // but the dotted divisions pass the divisor through
        assert_eq!(dot_divide(&Value::absent(), &int(5)), int(5));
    }

    #[test]
    fn void_propagates_through_numeric_ops() {
        assert_eq!(add(&Value::void(), &int(5)), Value::void());
        assert_eq!(add(&int(5), &Value::void()), Value::void());
        assert_eq!(add(&Value::void(), &Value::void()), Value::void());
        assert_eq!(add(&Value::void(), &Value::absent()), Value::absent());
        assert_eq!(divide(&Value::void(), &int(5)), Value::void());
    }

    #[test]
    fn strings_and_bools_do_not_add() {
        assert_eq!(add(&Value::from_string("10"), &int(2)), Value::error());
        assert_eq!(add(&int(2), &Value::from_string("10")), Value::error());
        assert_eq!(add(&Value::from_bool(true), &int(1)), Value::error());
    }

    #[test]
    fn errors_absorb() {
        assert_eq!(add(&Value::error(), &int(1)), Value::error());
        assert_eq!(divide(&int(1), &Value::error()), Value::error());
        assert_eq!(unary_minus(&Value::error()), Value::error());
    }

    #[test]
    fn unary_ops() {
        assert_eq!(unary_plus(&int(5)), int(5));
        assert_eq!(unary_minus(&int(5)), int(-5));
        assert_eq!(unary_minus(&float(2.5)), float(-2.5));
        assert_eq!(unary_plus(&Value::absent()), Value::absent());
        assert_eq!(unary_minus(&Value::void()), Value::void());
        assert_eq!(unary_minus(&Value::from_string("x")), Value::error());
        assert_eq!(unary_plus(&Value::from_bool(true)), Value::error());
    }

    #[test]
    fn unary_plus_keeps_the_input_spelling() {
        let v = Value::from_inferred_string("007");
        assert_eq!(unary_plus(&v).to_string(), "007");
    }
}
