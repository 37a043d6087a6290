//! Scalar field the elimination engine runs over.
//!
//! `f64` is the fast path. [`Rational`] is the high-precision path: values are exact
//! `BigRational`s rounded to [`Precision::digits`] significant decimal digits after
//! every arithmetic step, which gives arbitrary-precision decimal arithmetic with a
//! configurable rounding mode.

use std::cmp::Ordering;
use std::fmt::Debug;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::parser::decimal_to_rational;
use crate::precision::{Precision, RoundingMode};

pub type Rational = BigRational;

pub trait Scalar: Signed + Clone + PartialOrd + Debug {
    fn from_f64(value: f64) -> Option<Self>;

    fn to_f64(&self) -> f64;

    /// Applies the precision policy to a freshly computed value.
    fn round_to(self, precision: &Precision) -> Self;

    fn nearest_integer(&self) -> Self;

    /// `|self| <= bound`.
    fn within(&self, bound: f64) -> bool;

    fn to_decimal_string(&self, digits: u32) -> String;
}

impl Scalar for f64 {
    fn from_f64(value: f64) -> Option<Self> {
        value.is_finite().then_some(value)
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn round_to(self, _precision: &Precision) -> Self {
        self
    }

    fn nearest_integer(&self) -> Self {
        self.round()
    }

    fn within(&self, bound: f64) -> bool {
        self.abs() <= bound
    }

    fn to_decimal_string(&self, _digits: u32) -> String {
        format!("{self}")
    }
}

impl Scalar for Rational {
    fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // Display gives the shortest round-trip decimal, so 0.1 becomes 1/10
        decimal_to_rational(&format!("{value}"))
    }

    fn to_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }

    fn round_to(self, precision: &Precision) -> Self {
        round_significant(&self, precision.digits(), precision.rounding())
    }

    fn nearest_integer(&self) -> Self {
        self.round()
    }

    fn within(&self, bound: f64) -> bool {
        match Rational::from_float(bound) {
            Some(limit) => self.abs() <= limit,
            None => false,
        }
    }

    fn to_decimal_string(&self, digits: u32) -> String {
        format_decimal(self, digits)
    }
}

/// Rounds `value` to `digits` significant decimal digits.
pub fn round_significant(value: &Rational, digits: u32, mode: RoundingMode) -> Rational {
    if value.is_zero() {
        return value.clone();
    }
    let exponent = decimal_exponent(&value.abs());
    let shift = i64::from(digits) - 1 - exponent;
    let scale = pow10(shift);
    let scaled = value.clone() * scale.clone();
    round_integer(&scaled, mode) / scale
}

/// Renders `value` in plain decimal notation with at most `digits` significant digits.
pub fn format_decimal(value: &Rational, digits: u32) -> String {
    let rounded = round_significant(value, digits, RoundingMode::HalfEven);
    if rounded.is_integer() {
        return rounded.to_integer().to_string();
    }

    let magnitude = rounded.abs();
    let mut out = String::new();
    if rounded.is_negative() {
        out.push('-');
    }
    out.push_str(&magnitude.trunc().to_integer().to_string());
    out.push('.');

    let ten = Rational::from_integer(BigInt::from(10));
    let max_fraction_digits = (i64::from(digits) - decimal_exponent(&magnitude)).max(1);
    let mut fraction = magnitude.fract();
    let mut written = 0;
    while !fraction.is_zero() && written < max_fraction_digits {
        fraction *= ten.clone();
        let digit = fraction.trunc();
        out.push_str(&digit.to_integer().to_string());
        fraction -= digit;
        written += 1;
    }
    out
}

/// floor(log10(value)) for a strictly positive rational.
fn decimal_exponent(value: &Rational) -> i64 {
    let numer_digits = value.numer().to_string().len() as i64;
    let denom_digits = value.denom().to_string().len() as i64;
    let estimate = numer_digits - denom_digits;
    if *value < pow10(estimate) {
        estimate - 1
    } else {
        estimate
    }
}

fn pow10(exp: i64) -> Rational {
    let magnitude = num_traits::pow(BigInt::from(10), exp.unsigned_abs() as usize);
    if exp >= 0 {
        Rational::from_integer(magnitude)
    } else {
        Rational::new(BigInt::one(), magnitude)
    }
}

fn round_integer(value: &Rational, mode: RoundingMode) -> Rational {
    let truncated = value.trunc();
    let remainder = (value.clone() - truncated.clone()).abs();
    if remainder.is_zero() {
        return truncated;
    }
    let away = truncated.clone() + value.signum();
    let half = Rational::new(BigInt::one(), BigInt::from(2));

    match mode {
        RoundingMode::Down => truncated,
        RoundingMode::Floor => value.floor(),
        RoundingMode::Ceiling => value.ceil(),
        RoundingMode::HalfUp => {
            if remainder >= half {
                away
            } else {
                truncated
            }
        }
        RoundingMode::HalfEven => match remainder.cmp(&half) {
            Ordering::Less => truncated,
            Ordering::Greater => away,
            Ordering::Equal => {
                if truncated.to_integer().is_even() {
                    truncated
                } else {
                    away
                }
            }
        },
    }
}
