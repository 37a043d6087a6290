//! Dense-by-power polynomials with exact rational coefficients.
//!
//! Coefficients live in a `BTreeMap<power, coeff>` with zero coefficients never
//! stored, so two equal polynomials always compare equal.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::expr::{Expr, Rational, mul, pow};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly {
    coeffs: BTreeMap<usize, Rational>,
}

impl Poly {
    pub fn zero() -> Self {
        Poly {
            coeffs: BTreeMap::new(),
        }
    }

    pub fn one() -> Self {
        Poly::from_constant(Rational::one())
    }

    pub fn from_constant(c: Rational) -> Self {
        let mut coeffs = BTreeMap::new();
        if !c.is_zero() {
            coeffs.insert(0, c);
        }
        Poly { coeffs }
    }

    /// `x - root`.
    pub fn linear_factor(root: &Rational) -> Self {
        let mut coeffs = BTreeMap::new();
        coeffs.insert(1, Rational::one());
        if !root.is_zero() {
            coeffs.insert(0, -root.clone());
        }
        Poly { coeffs }
    }

    /// Builds from ascending coefficients `c[0] + c[1] x + ...`.
    pub fn from_coefficients(coeffs: &[Rational]) -> Self {
        Poly {
            coeffs: coeffs
                .iter()
                .enumerate()
                .filter(|(_, c)| !c.is_zero())
                .map(|(exp, c)| (exp, c.clone()))
                .collect(),
        }
    }

    pub fn degree(&self) -> Option<usize> {
        self.coeffs.keys().next_back().copied()
    }

    pub fn leading_coeff(&self) -> Rational {
        self.degree()
            .and_then(|d| self.coeffs.get(&d).cloned())
            .unwrap_or_else(Rational::zero)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn coeff(&self, power: usize) -> Rational {
        self.coeffs.get(&power).cloned().unwrap_or_else(Rational::zero)
    }

    /// Ascending coefficients up to the degree; empty for the zero polynomial.
    pub fn coefficients(&self) -> Vec<Rational> {
        match self.degree() {
            Some(d) => (0..=d).map(|p| self.coeff(p)).collect(),
            None => Vec::new(),
        }
    }

    pub fn scale(&self, k: &Rational) -> Self {
        if k.is_zero() {
            return Poly::zero();
        }
        Poly {
            coeffs: self
                .coeffs
                .iter()
                .map(|(exp, c)| (*exp, c.clone() * k.clone()))
                .collect(),
        }
    }

    pub fn pow(&self, exp: usize) -> Self {
        let mut result = Poly::one();
        let mut base = self.clone();
        let mut n = exp;
        while n > 0 {
            if n % 2 == 1 {
                result = result * &base;
            }
            base = base.clone() * &base;
            n /= 2;
        }
        result
    }

    /// Horner evaluation in exact arithmetic.
    pub fn evaluate(&self, x: &Rational) -> Rational {
        self.coefficients()
            .into_iter()
            .rev()
            .fold(Rational::zero(), |acc, c| acc * x.clone() + c)
    }

    pub fn evaluate_f64(&self, x: f64) -> f64 {
        self.coefficients()
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * x + c.to_f64().unwrap_or(f64::NAN))
    }

    /// Collects `expr` into a polynomial in `var`.
    ///
    /// Returns `None` for anything that is not a polynomial: other variables,
    /// division by a non-constant, negative or fractional powers.
    pub fn from_expr(expr: &Expr, var: &str) -> Option<Self> {
        match expr {
            Expr::Variable(v) if v == var => Some(Poly::linear_factor(&Rational::zero())),
            Expr::Variable(_) => None,
            Expr::Constant(c) => Some(Poly::from_constant(c.clone())),
            Expr::Add(a, b) => Some(Self::from_expr(a, var)? + Self::from_expr(b, var)?),
            Expr::Sub(a, b) => Some(Self::from_expr(a, var)? - Self::from_expr(b, var)?),
            Expr::Mul(a, b) => Some(Self::from_expr(a, var)? * &Self::from_expr(b, var)?),
            Expr::Div(a, b) => {
                let denom = Self::from_expr(b, var)?;
                if denom.degree() != Some(0) {
                    return None;
                }
                let inverse = Rational::one() / denom.coeff(0);
                Some(Self::from_expr(a, var)?.scale(&inverse))
            }
            Expr::Neg(inner) => Some(-Self::from_expr(inner, var)?),
            Expr::Pow(base, exp) => {
                let power = match Self::from_expr(exp, var)? {
                    p if p.is_zero() => 0,
                    p if p.degree() == Some(0) && p.coeff(0).is_integer() => {
                        let k = p.coeff(0).to_integer();
                        if k.is_negative() {
                            return None;
                        }
                        k.to_usize()?
                    }
                    _ => return None,
                };
                Some(Self::from_expr(base, var)?.pow(power))
            }
        }
    }

    /// Renders the polynomial with powers in descending order, e.g.
    /// `x^3 - 1/2*x^2 + x - 1/2`.
    pub fn to_expr(&self, var: &str) -> Expr {
        let mut terms = self.coeffs.iter().rev();
        let Some((&exp, coeff)) = terms.next() else {
            return Expr::Constant(Rational::zero());
        };

        let mut acc = if coeff.is_negative() {
            Expr::Neg(monomial(&-coeff.clone(), exp, var).boxed())
        } else {
            monomial(coeff, exp, var)
        };
        for (&exp, coeff) in terms {
            acc = if coeff.is_negative() {
                Expr::Sub(acc.boxed(), monomial(&-coeff.clone(), exp, var).boxed())
            } else {
                Expr::Add(acc.boxed(), monomial(coeff, exp, var).boxed())
            };
        }
        acc
    }
}

/// `coeff * var^exp` for a positive coefficient.
fn monomial(coeff: &Rational, exp: usize, var: &str) -> Expr {
    if exp == 0 {
        return Expr::Constant(coeff.clone());
    }
    let power = if exp == 1 {
        Expr::var(var)
    } else {
        pow(Expr::var(var), Expr::integer(exp))
    };
    if coeff.is_one() {
        power
    } else {
        mul(Expr::Constant(coeff.clone()), power)
    }
}

fn merge(mut coeffs: BTreeMap<usize, Rational>, exp: usize, coeff: Rational) -> BTreeMap<usize, Rational> {
    if coeff.is_zero() {
        return coeffs;
    }
    match coeffs.entry(exp) {
        Entry::Vacant(entry) => {
            entry.insert(coeff);
        }
        Entry::Occupied(mut entry) => {
            let updated = entry.get().clone() + coeff;
            if updated.is_zero() {
                entry.remove();
            } else {
                *entry.get_mut() = updated;
            }
        }
    }
    coeffs
}

impl std::ops::Add for Poly {
    type Output = Poly;
    fn add(self, rhs: Poly) -> Poly {
        let coeffs = rhs
            .coeffs
            .into_iter()
            .fold(self.coeffs, |acc, (exp, c)| merge(acc, exp, c));
        Poly { coeffs }
    }
}

impl std::ops::Sub for Poly {
    type Output = Poly;
    fn sub(self, rhs: Poly) -> Poly {
        self + (-rhs)
    }
}

impl std::ops::Mul<&Poly> for Poly {
    type Output = Poly;
    fn mul(self, rhs: &Poly) -> Poly {
        let mut coeffs = BTreeMap::new();
        for (exp_a, coeff_a) in &self.coeffs {
            for (exp_b, coeff_b) in &rhs.coeffs {
                coeffs = merge(coeffs, exp_a + exp_b, coeff_a.clone() * coeff_b.clone());
            }
        }
        Poly { coeffs }
    }
}

impl std::ops::Mul for Poly {
    type Output = Poly;
    fn mul(self, rhs: Poly) -> Poly {
        self * &rhs
    }
}

impl std::ops::Neg for Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        Poly {
            coeffs: self.coeffs.into_iter().map(|(exp, c)| (exp, -c)).collect(),
        }
    }
}
