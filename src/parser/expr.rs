use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{alpha1, alphanumeric0, char, digit1};
use nom::combinator::{all_consuming, map, map_opt, opt, recognize};
use nom::error::VerboseError;
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded, separated_pair};
use num_traits::Zero;

use super::{decimal_to_rational, ws};
use crate::error::{NumericError, Result};
use crate::expr::{Expr, Rational};

/// Reads back what [`pretty`](crate::format::pretty) writes: `+ - * / ^`,
/// parentheses, integers, decimals, fractions like `1/2`, and identifiers.
///
/// `Poly::from_expr(&parse_expr(&pretty(e))?, var)` recovers the polynomial of `e`.
pub fn parse_expr(input: &str) -> Result<Expr> {
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, expr)) => Ok(expr),
        Err(e) => Err(NumericError::Parse(format!("{e:?}"))),
    }
}

fn parse_add_sub(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, init) = parse_mul_div(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), parse_mul_div),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Expr::Add(acc.boxed(), rhs.boxed()),
            _ => Expr::Sub(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_mul_div(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, init) = parse_unary(input)?;
    fold_many0(
        pair(ws(alt((char('*'), char('/')))), parse_unary),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' => Expr::Mul(acc.boxed(), rhs.boxed()),
            _ => Expr::Div(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

// `-x^2` is `-(x^2)`; exponents associate to the right
fn parse_pow(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, base) = parse_primary(input)?;
    if let Ok((next, exp)) = preceded(ws(char('^')), parse_unary)(rest) {
        Ok((next, Expr::Pow(base.boxed(), exp.boxed())))
    } else {
        Ok((rest, base))
    }
}

fn parse_unary(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    if let Ok((rest, expr)) = preceded(ws(char('-')), parse_unary)(input) {
        Ok((rest, Expr::Neg(expr.boxed())))
    } else {
        parse_pow(input)
    }
}

fn parse_primary(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    alt((parse_parens, parse_fraction, parse_number, parse_identifier))(input)
}

fn parse_parens(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

// `1/2` binds as a single constant so `1/2*x` reads as a coefficient
fn parse_fraction(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    map_opt(
        separated_pair(parse_unsigned, ws(char('/')), parse_unsigned),
        |(n, d)| (!d.is_zero()).then(|| Expr::Constant(n / d)),
    )(input)
}

fn parse_number(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    map(parse_unsigned, Expr::Constant)(input)
}

fn parse_identifier(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    map(ws(recognize(pair(alpha1, alphanumeric0))), |s: &str| {
        Expr::Variable(s.to_string())
    })(input)
}

fn parse_unsigned(input: &str) -> IResult<&str, Rational, VerboseError<&str>> {
    map_opt(
        ws(recognize(pair(digit1, opt(pair(char('.'), digit1))))),
        decimal_to_rational,
    )(input)
}
