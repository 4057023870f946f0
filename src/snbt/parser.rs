//! Lexical rules for bare SNBT tokens.

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while1},
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, map_res, opt, recognize, verify},
    sequence::{terminated, tuple},
    IResult,
};

use crate::{Tag, Value};

/// Characters allowed in an unquoted string or key.
pub(crate) fn is_unquoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}

/// The longest run of unquoted characters at the start of `input`.
pub(crate) fn parse_unquoted(input: &str) -> IResult<&str, &str> {
    take_while1(is_unquoted_char)(input)
}

/// A numeric token, before narrowing. Integers keep their full parsed value
/// so arrays can narrow an unsuffixed element to their own width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Byte(i128),
    Short(i128),
    Int(i128),
    Long(i128),
    Float(f32),
    Double(f64),
}

impl Number {
    pub fn tag(self) -> Tag {
        match self {
            Number::Byte(_) => Tag::Byte,
            Number::Short(_) => Tag::Short,
            Number::Int(_) => Tag::Int,
            Number::Long(_) => Tag::Long,
            Number::Float(_) => Tag::Float,
            Number::Double(_) => Tag::Double,
        }
    }
}

// Out of range integers wrap to the width of their kind.
impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Byte(v) => Value::Byte(v as i8),
            Number::Short(v) => Value::Short(v as i16),
            Number::Int(v) => Value::Int(v as i32),
            Number::Long(v) => Value::Long(v as i64),
            Number::Float(v) => Value::Float(v),
            Number::Double(v) => Value::Double(v),
        }
    }
}

/// Interpret a whole bare token as a number. `None` if any of it is left
/// over, in which case the token is a string (`5e`, `1.2.3`, `007`).
pub(crate) fn parse_number(token: &str) -> Option<Number> {
    let mut number = alt((
        map_res(all_consuming(terminated(integer, one_of("bB"))), |s: &str| {
            s.parse().map(Number::Byte)
        }),
        map_res(all_consuming(terminated(integer, one_of("sS"))), |s: &str| {
            s.parse().map(Number::Short)
        }),
        map_res(all_consuming(terminated(integer, one_of("lL"))), |s: &str| {
            s.parse().map(Number::Long)
        }),
        map_res(
            all_consuming(terminated(alt((float, non_finite)), one_of("fF"))),
            |s: &str| s.parse().map(Number::Float),
        ),
        map_res(
            all_consuming(terminated(alt((float, non_finite)), one_of("dD"))),
            |s: &str| s.parse().map(Number::Double),
        ),
        map_res(all_consuming(integer), |s: &str| s.parse().map(Number::Int)),
        // Without a suffix a double needs a point or an exponent to tell it
        // from an int.
        map_res(
            all_consuming(verify(float, |s: &str| {
                s.contains(|c: char| matches!(c, '.' | 'e' | 'E'))
            })),
            |s: &str| s.parse().map(Number::Double),
        ),
    ));

    number(token).ok().map(|(_, n)| n)
}

// parse a single 0 OR a non-zero digit followed by a 0 or more digits
fn integer(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((recognize(tuple((one_of("123456789"), digit0))), tag("0"))),
    )))(input)
}

// `1`, `1.`, `1.5` or `.5`, each with an optional exponent
fn float(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(tuple((digit1, opt(tuple((char('.'), digit0)))))),
            recognize(tuple((char('.'), digit1))),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

// `inf`, `infinity` or `nan` in any case, signed or not. Only taken with a
// suffix, so the bare words stay strings.
fn non_finite(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((tag_no_case("infinity"), tag_no_case("inf"), tag_no_case("nan"))),
    )))(input)
}
