use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, hex_digit1};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::number::complete::recognize_float;
use nom::sequence::{pair, preceded};

use super::Value;

/// Decimal integer with optional sign. Rejects values outside i64 so the
/// caller can fall through to float inference.
fn decimal_int(input: &str) -> IResult<&str, i64> {
    map_res(
        recognize(pair(opt(alt((char('+'), char('-')))), digit1)),
        |s: &str| s.parse::<i64>(),
    )(input)
}

/// Hex integer: `0x` or `0X` then hex digits.
fn hex_int(input: &str) -> IResult<&str, i64> {
    map_res(preceded(alt((tag("0x"), tag("0X"))), hex_digit1), |s: &str| {
        i64::from_str_radix(s, 16)
    })(input)
}

fn int_literal(input: &str) -> IResult<&str, i64> {
    alt((hex_int, decimal_int))(input)
}

/// Fixed or scientific float form.
fn float_literal(input: &str) -> IResult<&str, f64> {
    map_res(recognize_float, |s: &str| s.parse::<f64>())(input)
}

/// Type a piece of input text: int first, then float, then string.
/// Recognition is full-match, so trailing garbage disqualifies a numeric
/// reading. Empty text is the Void value.
pub(crate) fn from_text(text: &str) -> Value {
    if text.is_empty() {
        return Value::Void;
    }
    if let Ok((_, val)) = all_consuming(int_literal)(text) {
        return Value::Int {
            val,
            printrep: Some(text.to_string()),
        };
    }
    if let Ok((_, val)) = all_consuming(float_literal)(text) {
        return Value::Float {
            val,
            printrep: Some(text.to_string()),
        };
    }
    Value::Str(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueType;

    #[test]
    fn infers_decimal_ints() {
        assert_eq!(from_text("10"), Value::from_int64(10));
        assert_eq!(from_text("-3"), Value::from_int64(-3));
        assert_eq!(from_text("+7"), Value::from_int64(7));
        assert_eq!(from_text("0"), Value::from_int64(0));
    }

    #[test]
    fn infers_hex_ints() {
        assert_eq!(from_text("0xff"), Value::from_int64(255));
        assert_eq!(from_text("0XFF"), Value::from_int64(255));
    }

    #[test]
    fn infers_floats() {
        assert_eq!(from_text("10.5"), Value::from_float64(10.5));
        assert_eq!(from_text(".5"), Value::from_float64(0.5));
        assert_eq!(from_text("-2.5e-3"), Value::from_float64(-0.0025));
        assert_eq!(from_text("1E6"), Value::from_float64(1e6));
    }

    #[test]
    fn int_overflow_falls_through_to_float() {
        let v = from_text("9223372036854775808");
        assert_eq!(v.vtype(), ValueType::Float);
        assert_eq!(v, Value::from_float64(9223372036854775808.0));
    }

    #[test]
    fn non_numbers_stay_strings() {
        assert_eq!(from_text("abc"), Value::from_string("abc"));
        assert_eq!(from_text("10 "), Value::from_string("10 "));
        assert_eq!(from_text("10x"), Value::from_string("10x"));
        assert_eq!(from_text("1.2.3"), Value::from_string("1.2.3"));
        assert_eq!(from_text("-"), Value::from_string("-"));
    }

    #[test]
    fn empty_text_is_void() {
        assert_eq!(from_text(""), Value::void());
    }
}
