//! Exact interpolating polynomials in collected form.
//!
//! Both forms work over [`Rational`] so the Lagrange and Newton constructions
//! produce the same [`Poly`] for the same data, coefficient for coefficient.

use num_traits::{One, Zero};

use crate::error::{NumericError, Result};
use crate::expr::{Expr, Rational, add, mul, sub};
use crate::interpolate::validate::{validate_nodes, validate_scalar_nodes};
use crate::polynomial::Poly;
use crate::scalar::Scalar;

/// Free variable used by the `f64` convenience constructors.
pub const DEFAULT_VARIABLE: &str = "x";

/// A way of turning `(nodes, values)` into one collected polynomial.
pub trait PolynomialForm {
    fn name(&self) -> &'static str;

    /// Callers validate; implementors may assume distinct nodes of equal length.
    fn polynomial(&self, nodes: &[Rational], values: &[Rational]) -> Result<Poly>;
}

/// Sum of value-weighted basis products, collected by expansion.
#[derive(Debug, Clone, Copy, Default)]
pub struct LagrangeForm;

/// Nested Newton form over exact divided differences.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonForm;

impl PolynomialForm for LagrangeForm {
    fn name(&self) -> &'static str {
        "lagrange"
    }

    fn polynomial(&self, nodes: &[Rational], values: &[Rational]) -> Result<Poly> {
        let expr = lagrange_expression(nodes, values, DEFAULT_VARIABLE);
        Poly::from_expr(&expr, DEFAULT_VARIABLE)
            .ok_or_else(|| NumericError::Parse("lagrange sum is not a polynomial".to_string()))
    }
}

impl PolynomialForm for NewtonForm {
    fn name(&self) -> &'static str {
        "newton"
    }

    fn polynomial(&self, nodes: &[Rational], values: &[Rational]) -> Result<Poly> {
        let coefficients = exact_divided_differences(nodes, values);
        let mut poly = Poly::zero();
        let mut basis = Poly::one();
        for (k, coeff) in coefficients.iter().enumerate() {
            if k > 0 {
                basis = basis * Poly::linear_factor(&nodes[k - 1]);
            }
            poly = poly + basis.scale(coeff);
        }
        Ok(poly)
    }
}

/// The uncollected Lagrange sum `Σ v_i · Π_{j≠i}(var - x_j) / Π_{j≠i}(x_i - x_j)`.
pub fn lagrange_expression(nodes: &[Rational], values: &[Rational], var: &str) -> Expr {
    let mut terms = nodes.iter().zip(values).enumerate().map(|(i, (xi, vi))| {
        let mut numerator = Expr::Constant(vi.clone());
        let mut denominator = Rational::one();
        for (j, xj) in nodes.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = mul(numerator, sub(Expr::var(var), Expr::Constant(xj.clone())));
            denominator = denominator * (xi.clone() - xj.clone());
        }
        Expr::Div(numerator.boxed(), Expr::Constant(denominator).boxed())
    });
    let first = terms.next().unwrap_or_else(|| Expr::Constant(Rational::zero()));
    terms.fold(first, add)
}

/// Validates exact data and returns the collected polynomial in `var`.
pub fn interpolating_polynomial(
    form: &dyn PolynomialForm,
    nodes: &[Rational],
    values: &[Rational],
    var: &str,
) -> Result<Expr> {
    validate_scalar_nodes(nodes, values)?;
    Ok(form.polynomial(nodes, values)?.to_expr(var))
}

/// Collected Lagrange polynomial in `x` for float data.
///
/// Floats become exact rationals through their shortest decimal form, so `0.5`
/// contributes `1/2` rather than its binary expansion.
pub fn lagrange_polynomial(nodes: &[f64], values: &[f64]) -> Result<Expr> {
    from_floats(&LagrangeForm, nodes, values)
}

/// Collected Newton polynomial in `x` for float data.
pub fn newton_polynomial(nodes: &[f64], values: &[f64]) -> Result<Expr> {
    from_floats(&NewtonForm, nodes, values)
}

fn from_floats(form: &dyn PolynomialForm, nodes: &[f64], values: &[f64]) -> Result<Expr> {
    validate_nodes(nodes, values)?;
    let nodes = to_exact(nodes)?;
    let values = to_exact(values)?;
    interpolating_polynomial(form, &nodes, &values, DEFAULT_VARIABLE)
}

fn to_exact(xs: &[f64]) -> Result<Vec<Rational>> {
    xs.iter()
        .enumerate()
        .map(|(idx, &value)| <Rational as Scalar>::from_f64(value).ok_or(NumericError::NonFinite { idx, value }))
        .collect()
}

fn exact_divided_differences(nodes: &[Rational], values: &[Rational]) -> Vec<Rational> {
    let n = nodes.len();
    let mut column = values.to_vec();
    let mut coefficients = Vec::with_capacity(n);
    for k in 0..n {
        coefficients.push(column[0].clone());
        column = (0..column.len().saturating_sub(1))
            .map(|j| (column[j + 1].clone() - column[j].clone()) / (nodes[j + k + 1].clone() - nodes[j].clone()))
            .collect();
    }
    coefficients
}
