use crate::error::{NumericError, Result};
use crate::linalg::vector::Vector;
use crate::scalar::Scalar;

/// Row-major matrix whose rows all share one length.
///
/// Used either as a square coefficient matrix or as an augmented matrix whose last
/// column is the right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<S> {
    rows: Vec<Vector<S>>,
    cols: usize,
}

impl<S: Scalar> Matrix<S> {
    /// Builds a matrix, rejecting ragged input. Row numbers in errors are 1-based.
    pub fn from_rows(rows: Vec<Vec<S>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(NumericError::EmptyInput);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(NumericError::EmptyInput);
        }
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(NumericError::RaggedRow {
                    row: idx + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
        }
        Ok(Matrix {
            rows: rows.into_iter().map(Vector::new).collect(),
            cols,
        })
    }

    /// Converts plain `f64` rows into the scalar type, rejecting non-finite entries.
    pub fn from_f64_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let mut converted = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let mut out = Vec::with_capacity(row.len());
            for (c, &value) in row.iter().enumerate() {
                let scalar = S::from_f64(value).ok_or(NumericError::NonFinite {
                    idx: r * row.len() + c,
                    value,
                })?;
                out.push(scalar);
            }
            converted.push(out);
        }
        Self::from_rows(converted)
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows.len() == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> &S {
        &self.rows[row][col]
    }

    pub fn row(&self, row: usize) -> &Vector<S> {
        &self.rows[row]
    }

    pub fn rows(&self) -> &[Vector<S>] {
        &self.rows
    }

    pub fn to_rows(&self) -> Vec<Vec<S>> {
        self.rows.iter().map(|r| r.values().to_vec()).collect()
    }

    /// Appends a zero right-hand-side column, turning `A` into `[A | 0]`.
    pub fn with_zero_column(self) -> Self {
        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                let mut values = row.into_values();
                values.push(S::zero());
                Vector::new(values)
            })
            .collect();
        Matrix {
            rows,
            cols: self.cols + 1,
        }
    }

    /// Copy with rows reordered by `order` (a permutation of row indices).
    pub fn permuted(&self, order: &[usize]) -> Result<Self> {
        let mut seen = vec![false; self.rows.len()];
        if order.len() != self.rows.len() {
            return Err(NumericError::DimensionMismatch {
                context: "row permutation",
                left: order.len(),
                right: self.rows.len(),
            });
        }
        let mut rows = Vec::with_capacity(order.len());
        for &idx in order {
            if idx >= seen.len() || seen[idx] {
                return Err(NumericError::DimensionMismatch {
                    context: "row permutation index",
                    left: idx,
                    right: self.rows.len(),
                });
            }
            seen[idx] = true;
            rows.push(self.rows[idx].clone());
        }
        Ok(Matrix {
            rows,
            cols: self.cols,
        })
    }

    /// `self * x` for a vector of length `n_cols`.
    pub fn mul_vector(&self, x: &Vector<S>) -> Result<Vector<S>> {
        let values = self
            .rows
            .iter()
            .map(|row| row.dot(x))
            .collect::<Result<Vec<_>>>()?;
        Ok(Vector::new(values))
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            self.rows.swap(a, b);
        }
    }

    pub(crate) fn replace_row(&mut self, idx: usize, row: Vector<S>) {
        self.rows[idx] = row;
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: S) {
        self.rows[row].set(col, value);
    }

    /// Splits an augmented matrix into its coefficient block and right-hand side.
    pub(crate) fn split_augmented(&self) -> (Matrix<S>, Vector<S>) {
        let n = self.cols - 1;
        let coefficients = Matrix {
            rows: self.rows.iter().map(|r| r.head(n)).collect(),
            cols: n,
        };
        let rhs = Vector::new(self.rows.iter().map(|r| r[n].clone()).collect());
        (coefficients, rhs)
    }
}
