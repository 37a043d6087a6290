//! Lagrange Interpolation
//!
//! Global polynomial interpolation as a weighted sum of
//! [basis polynomials](https://en.wikipedia.org/wiki/Lagrange_polynomial):
//!
//! ```text
//! L_i(y) = Π_{j≠i} (y - x_j) / (x_i - x_j)
//! P(y)   = Σ_i f_i · L_i(y)
//! ```
//!
//! The denominators `Π_{j≠i} (x_i - x_j)` are computed once at construction; each
//! evaluation still forms every numerator product, so a call costs O(n²).

use crate::error::Result;
use crate::interpolate::algorithms::Algorithm;
use crate::interpolate::traits::{Evaluation, Interpolator};
use crate::interpolate::validate::validate_nodes;

#[derive(Debug, Clone)]
pub struct LagrangeInterpolant {
    nodes: Vec<f64>,
    values: Vec<f64>,
    denominators: Vec<f64>,
}

/// A single basis polynomial `L_i`: one at `x_i`, zero at every other node.
#[derive(Debug, Clone, Copy)]
pub struct BasisPolynomial<'a> {
    nodes: &'a [f64],
    index: usize,
    denominator: f64,
}

/// Builds a Lagrange evaluator for `(nodes, values)`.
///
/// # Errors
/// - [`crate::NumericError::EmptyInput`] for empty input
/// - [`crate::NumericError::DimensionMismatch`] when the lengths differ
/// - [`crate::NumericError::NonFinite`] for NaN or infinite entries
/// - [`crate::NumericError::DuplicateNode`] when two nodes coincide
pub fn build_lagrange(nodes: &[f64], values: &[f64]) -> Result<LagrangeInterpolant> {
    validate_nodes(nodes, values)?;

    let denominators = (0..nodes.len())
        .map(|i| basis_denominator(nodes, i))
        .collect();

    Ok(LagrangeInterpolant {
        nodes: nodes.to_vec(),
        values: values.to_vec(),
        denominators,
    })
}

fn basis_denominator(nodes: &[f64], i: usize) -> f64 {
    let xi = nodes[i];
    nodes
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold(1.0, |acc, (_, &xj)| acc * (xi - xj))
}

// Π_{j≠i} (y - x_j); at y = x_i this repeats the denominator's products exactly
#[inline]
fn basis_numerator(nodes: &[f64], i: usize, y: f64, multiplications: &mut usize) -> f64 {
    let mut numerator = 1.0;
    for (j, &xj) in nodes.iter().enumerate() {
        if j != i {
            numerator *= y - xj;
            *multiplications += 1;
        }
    }
    numerator
}

impl LagrangeInterpolant {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn denominators(&self) -> &[f64] {
        &self.denominators
    }

    pub fn basis(&self, i: usize) -> Option<BasisPolynomial<'_>> {
        let denominator = *self.denominators.get(i)?;
        Some(BasisPolynomial {
            nodes: &self.nodes,
            index: i,
            denominator,
        })
    }
}

impl Interpolator for LagrangeInterpolant {
    fn evaluate(&self, y: f64) -> Evaluation {
        let mut multiplications = 0;
        let mut divisions = 0;
        let mut result = 0.0;

        for (i, (&fi, &denominator)) in self.values.iter().zip(&self.denominators).enumerate() {
            let numerator = basis_numerator(&self.nodes, i, y, &mut multiplications);
            result += fi * (numerator / denominator);
            multiplications += 1;
            divisions += 1;
        }

        Evaluation {
            value: result,
            multiplications,
            divisions,
        }
    }

    fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Lagrange
    }
}

impl BasisPolynomial<'_> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn eval(&self, y: f64) -> f64 {
        let mut unused = 0;
        basis_numerator(self.nodes, self.index, y, &mut unused) / self.denominator
    }
}
