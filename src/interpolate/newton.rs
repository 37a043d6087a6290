//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! The table is built once in O(n²); each evaluation then walks the Newton form
//! with nested multiplication in O(n):
//!
//! ```text
//! P(y) = c[0] + c[1](y - x0) + c[2](y - x0)(y - x1) + ...
//! ```

use crate::error::Result;
use crate::interpolate::algorithms::Algorithm;
use crate::interpolate::table::{DividedDifferences, build_table};
use crate::interpolate::traits::{Evaluation, Interpolator};

#[derive(Debug, Clone)]
pub struct NewtonInterpolant {
    nodes: Vec<f64>,
    table: DividedDifferences,
}

/// Builds a Newton evaluator for `(nodes, values)`.
///
/// Validation is the same as [`crate::interpolate::lagrange::build_lagrange`].
pub fn build_newton(nodes: &[f64], values: &[f64]) -> Result<NewtonInterpolant> {
    let table = build_table(nodes, values)?;
    Ok(NewtonInterpolant {
        nodes: nodes.to_vec(),
        table,
    })
}

impl NewtonInterpolant {
    pub fn table(&self) -> &DividedDifferences {
        &self.table
    }
}

impl Interpolator for NewtonInterpolant {
    fn evaluate(&self, y: f64) -> Evaluation {
        let n = self.nodes.len();
        let mut multiplications = 0;

        let mut result = self.table.coefficient(0);
        let mut term = 1.0;
        for i in 1..n {
            term *= y - self.nodes[i - 1];
            result += term * self.table.coefficient(i);
            multiplications += 2;
        }

        Evaluation {
            value: result,
            multiplications,
            divisions: 0,
        }
    }

    fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Newton
    }
}
