use crate::error::Result;
use crate::linalg::Matrix;
use crate::precision::Precision;
use crate::scalar::Scalar;

/// Outcome of forward elimination.
#[derive(Debug, Clone)]
pub struct EchelonResult<S> {
    /// The reduced matrix, in row-echelon form.
    pub matrix: Matrix<S>,
    /// Number of pivots. A column counts only if some entry beats the zero tolerance,
    /// so rank and pivots always agree.
    pub rank: usize,
    /// `(row, col)` of every pivot, in elimination order.
    pub pivots: Vec<(usize, usize)>,
    /// Columns whose best pivot candidate was within the zero tolerance.
    pub degenerate_columns: Vec<usize>,
    pub row_swaps: usize,
}

impl<S: Scalar> EchelonResult<S> {
    pub fn pivot_columns(&self) -> Vec<usize> {
        self.pivots.iter().map(|&(_, col)| col).collect()
    }

    /// Number of pivots found in the first `cols` columns.
    pub fn rank_of_leading_columns(&self, cols: usize) -> usize {
        self.pivots.iter().filter(|&&(_, col)| col < cols).count()
    }
}

/// Reduces `matrix` to row-echelon form with partial pivoting.
///
/// Every column is visited, the right-hand side of an augmented matrix included. A
/// column with no usable pivot is recorded in `degenerate_columns` and skipped, so a
/// singular block never aborts the reduction. Every computed entry goes through
/// [`Scalar::round_to`].
pub fn eliminate<S: Scalar>(mut matrix: Matrix<S>, precision: &Precision) -> Result<EchelonResult<S>> {
    let rows = matrix.n_rows();
    let cols = matrix.n_cols();
    let tolerance = precision.zero_tolerance();

    let mut pivots = Vec::new();
    let mut degenerate_columns = Vec::new();
    let mut row_swaps = 0;
    let mut pivot_row = 0;

    for col in 0..cols {
        if pivot_row >= rows {
            break;
        }

        let mut best = pivot_row;
        let mut best_abs = matrix.get(pivot_row, col).abs();
        for r in pivot_row + 1..rows {
            let candidate = matrix.get(r, col).abs();
            if candidate > best_abs {
                best = r;
                best_abs = candidate;
            }
        }

        if best_abs.within(tolerance) {
            degenerate_columns.push(col);
            continue;
        }

        if best != pivot_row {
            matrix.swap_rows(pivot_row, best);
            row_swaps += 1;
        }

        let pivot = matrix.get(pivot_row, col).clone();
        for r in pivot_row + 1..rows {
            let entry = matrix.get(r, col).clone();
            if entry.is_zero() {
                continue;
            }
            let factor = (-entry / pivot.clone()).round_to(precision);
            let scaled = matrix.row(pivot_row).scale(&factor);
            let updated = matrix.row(r).add(&scaled)?.rounded(precision);
            matrix.replace_row(r, updated);
            // residual noise in the pivot column is discarded
            matrix.set(r, col, S::zero());
        }

        pivots.push((pivot_row, col));
        pivot_row += 1;
    }

    Ok(EchelonResult {
        matrix,
        rank: pivots.len(),
        pivots,
        degenerate_columns,
        row_swaps,
    })
}

/// Rank of `matrix` after elimination.
pub fn rank<S: Scalar>(matrix: Matrix<S>, precision: &Precision) -> Result<usize> {
    Ok(eliminate(matrix, precision)?.rank)
}
