//! Text boundary: nom parsers for matrices, number lists and polynomial expressions.

#[cfg(feature = "symbolic")]
mod expr;
mod matrix;

#[cfg(feature = "symbolic")]
pub use expr::parse_expr;
pub use matrix::{parse_exact_matrix, parse_matrix, parse_numbers};

use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{all_consuming, opt, recognize};
use nom::error::VerboseError;
use nom::sequence::{pair, tuple};
use num_bigint::BigInt;
use num_traits::Num;

use crate::scalar::Rational;

/// Recognizes `[+-]digits[.digits][e[+-]digits]` and `[+-].digits[...]`.
pub(crate) fn decimal_literal(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// Largest `|exponent|` accepted in a decimal literal; `1e5000` is rejected rather
/// than expanded into a 5000-digit integer.
pub const MAX_DECIMAL_EXPONENT: u64 = 4096;

/// Converts a decimal literal to the exact rational it denotes.
///
/// Returns `None` for malformed text and for exponents beyond
/// [`MAX_DECIMAL_EXPONENT`].
pub fn decimal_to_rational(text: &str) -> Option<Rational> {
    let (_, literal) = all_consuming(decimal_literal)(text.trim()).ok()?;

    let (mantissa, exponent) = match literal.find(|c| c == 'e' || c == 'E') {
        Some(idx) => (&literal[..idx], literal[idx + 1..].parse::<i64>().ok()?),
        None => (literal, 0),
    };
    if exponent.unsigned_abs() > MAX_DECIMAL_EXPONENT {
        return None;
    }
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let digits = format!("{int_part}{frac_part}");
    let digits = if digits.is_empty() { "0".to_string() } else { digits };
    let mut numer = BigInt::from_str_radix(&digits, 10).ok()?;
    if negative {
        numer = -numer;
    }

    let scale = exponent - frac_part.len() as i64;
    let power = num_traits::pow(BigInt::from(10), scale.unsigned_abs() as usize);
    if scale >= 0 {
        Some(Rational::from_integer(numer * power))
    } else {
        Some(Rational::new(numer, power))
    }
}

#[cfg(feature = "symbolic")]
pub(crate) fn ws<'a, F, O>(
    inner: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
    use nom::character::complete::multispace0;
    use nom::sequence::delimited;

    delimited(multispace0, inner, multispace0)
}
