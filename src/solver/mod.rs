//! Gaussian elimination, rank and solvability classification of linear systems.
//!
//! The same pipeline serves the `f64` path and the high-precision [`Rational`] path;
//! the [`Precision`] policy decides rounding and what counts as zero.
//!
//! [`Rational`]: crate::scalar::Rational

mod echelon;

pub use echelon::{EchelonResult, eliminate, rank};

use crate::error::{NumericError, Result};
use crate::linalg::{Matrix, Vector};
use crate::precision::Precision;
use crate::scalar::Scalar;

#[derive(Debug, Clone)]
pub enum LinearResult<S> {
    Unique(LinearSolution<S>),
    Infinite(LinearFamily<S>),
    Inconsistent(LinearInconsistent<S>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solvability {
    UniqueSolution,
    InfiniteSolutions,
    NoSolution,
}

#[derive(Debug, Clone)]
pub struct LinearSolution<S> {
    /// Values exactly as computed; use [`LinearSolution::snapped`] for display.
    pub values: Vec<S>,
    pub diagnostics: LinearDiagnostics<S>,
}

#[derive(Debug, Clone)]
pub struct LinearFamily<S> {
    pub diagnostics: LinearDiagnostics<S>,
}

#[derive(Debug, Clone)]
pub struct LinearInconsistent<S> {
    pub diagnostics: LinearDiagnostics<S>,
}

#[derive(Debug, Clone)]
pub struct LinearDiagnostics<S> {
    pub unknowns: usize,
    pub rank_coefficients: usize,
    pub rank_augmented: usize,
    pub pivot_columns: Vec<usize>,
    pub free_columns: Vec<usize>,
    pub degenerate_columns: Vec<usize>,
    pub row_swaps: usize,
    pub determinant: Option<S>,
    pub inconsistent_row: Option<usize>,
}

impl<S> LinearResult<S> {
    pub fn solvability(&self) -> Solvability {
        match self {
            LinearResult::Unique(_) => Solvability::UniqueSolution,
            LinearResult::Infinite(_) => Solvability::InfiniteSolutions,
            LinearResult::Inconsistent(_) => Solvability::NoSolution,
        }
    }

    pub fn diagnostics(&self) -> &LinearDiagnostics<S> {
        match self {
            LinearResult::Unique(sol) => &sol.diagnostics,
            LinearResult::Infinite(family) => &family.diagnostics,
            LinearResult::Inconsistent(info) => &info.diagnostics,
        }
    }

    pub fn solution(&self) -> Option<&LinearSolution<S>> {
        match self {
            LinearResult::Unique(sol) => Some(sol),
            _ => None,
        }
    }
}

impl<S: Scalar> LinearSolution<S> {
    /// Copies of the values with anything within `snap_tolerance` of an integer
    /// replaced by that integer.
    pub fn snapped(&self, precision: &Precision) -> Vec<S> {
        self.values
            .iter()
            .map(|value| {
                let nearest = value.nearest_integer();
                if (value.clone() - nearest.clone()).within(precision.snap_tolerance()) {
                    nearest
                } else {
                    value.clone()
                }
            })
            .collect()
    }

    /// `‖A·x − b‖` for the augmented system `[A | b]` this solution was computed from.
    pub fn residual_norm(&self, augmented: &Matrix<S>) -> Result<f64> {
        let (coefficients, rhs) = augmented.split_augmented();
        let x = Vector::new(self.values.clone());
        Ok(coefficients.mul_vector(&x)?.sub(&rhs)?.norm())
    }
}

/// Solves the augmented system `[A | b]`; the last column is the right-hand side.
///
/// Let `r_coef` be the rank of `A` and `r_aug` the rank of `[A | b]` after
/// elimination, with `n` unknowns:
/// - `r_coef == r_aug == n` → [`LinearResult::Unique`], by back-substitution
/// - `r_coef == r_aug < n`  → [`LinearResult::Infinite`]
/// - `r_coef < r_aug`       → [`LinearResult::Inconsistent`]
pub fn solve<S: Scalar>(augmented: Matrix<S>, precision: &Precision) -> Result<LinearResult<S>> {
    let cols = augmented.n_cols();
    if cols < 2 {
        return Err(NumericError::DimensionMismatch {
            context: "augmented matrix needs a coefficient column and a right-hand side",
            left: cols,
            right: 2,
        });
    }
    let unknowns = cols - 1;
    let square = augmented.n_rows() == unknowns;

    let echelon = eliminate(augmented, precision)?;
    let rank_coefficients = echelon.rank_of_leading_columns(unknowns);
    let rank_augmented = echelon.rank;

    let pivot_columns: Vec<usize> = echelon
        .pivot_columns()
        .into_iter()
        .filter(|&col| col < unknowns)
        .collect();
    // a pivot in the right-hand side column is a `0 = c` row
    let inconsistent_row = echelon
        .pivots
        .iter()
        .find(|&&(_, col)| col >= unknowns)
        .map(|&(row, _)| row);
    let determinant = square.then(|| compute_determinant(&echelon, unknowns, pivot_columns.len(), precision));

    let diagnostics = LinearDiagnostics {
        unknowns,
        rank_coefficients,
        rank_augmented,
        free_columns: free_columns(unknowns, &pivot_columns),
        pivot_columns,
        degenerate_columns: echelon.degenerate_columns.clone(),
        row_swaps: echelon.row_swaps,
        determinant,
        inconsistent_row,
    };

    if rank_coefficients < rank_augmented {
        return Ok(LinearResult::Inconsistent(LinearInconsistent { diagnostics }));
    }

    // n coefficient pivots sit on the diagonal, so back-substitution applies
    if rank_coefficients == unknowns {
        let values = back_substitute(&echelon.matrix, unknowns, precision);
        return Ok(LinearResult::Unique(LinearSolution {
            values,
            diagnostics,
        }));
    }

    Ok(LinearResult::Infinite(LinearFamily { diagnostics }))
}

/// Treats a square matrix `A` as the homogeneous system `[A | 0]`.
pub fn solve_homogeneous<S: Scalar>(square: Matrix<S>, precision: &Precision) -> Result<LinearResult<S>> {
    if !square.is_square() {
        return Err(NumericError::DimensionMismatch {
            context: "homogeneous system needs a square matrix",
            left: square.n_rows(),
            right: square.n_cols(),
        });
    }
    solve(square.with_zero_column(), precision)
}

/// Square input is homogeneous, anything else is augmented.
pub fn solve_matrix<S: Scalar>(matrix: Matrix<S>, precision: &Precision) -> Result<LinearResult<S>> {
    if matrix.is_square() {
        solve_homogeneous(matrix, precision)
    } else {
        solve(matrix, precision)
    }
}

/// `x[i] = (rhs[i] − Σ_{k>i} a[i][k]·x[k]) / a[i][i]` for `i = n−1 … 0`.
///
/// `matrix` must already be in echelon form with its first `n` pivots on the
/// diagonal.
fn back_substitute<S: Scalar>(matrix: &Matrix<S>, n: usize, precision: &Precision) -> Vec<S> {
    let mut x = vec![S::zero(); n];
    for i in (0..n).rev() {
        let mut acc = matrix.get(i, n).clone();
        for k in i + 1..n {
            acc = (acc - matrix.get(i, k).clone() * x[k].clone()).round_to(precision);
        }
        x[i] = (acc / matrix.get(i, i).clone()).round_to(precision);
    }
    x
}

fn compute_determinant<S: Scalar>(
    echelon: &EchelonResult<S>,
    n: usize,
    coefficient_pivots: usize,
    precision: &Precision,
) -> S {
    if coefficient_pivots < n {
        return S::zero();
    }
    let mut det = S::one();
    for i in 0..n {
        det = (det * echelon.matrix.get(i, i).clone()).round_to(precision);
    }
    if echelon.row_swaps % 2 == 1 {
        det = -det;
    }
    det
}

fn free_columns(n_vars: usize, pivots: &[usize]) -> Vec<usize> {
    let mut is_pivot = vec![false; n_vars];
    for &p in pivots {
        is_pivot[p] = true;
    }
    (0..n_vars).filter(|&col| !is_pivot[col]).collect()
}
