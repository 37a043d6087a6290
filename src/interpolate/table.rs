//! Newton divided-difference table.
//!
//! Level `k` holds the `n - k` divided differences of order `k`:
//!
//! ```text
//! t[0][j] = y[j]
//! t[k][j] = (t[k-1][j+1] - t[k-1][j]) / (x[k+j] - x[j])
//! ```
//!
//! `t[k][0]` for increasing `k` are the coefficients of the Newton form.

use crate::error::Result;
use crate::interpolate::validate::validate_nodes;

#[derive(Debug, Clone, PartialEq)]
pub struct DividedDifferences {
    levels: Vec<Vec<f64>>,
}

/// Builds the full triangular table after validating `(nodes, values)`.
pub fn build_table(nodes: &[f64], values: &[f64]) -> Result<DividedDifferences> {
    validate_nodes(nodes, values)?;
    Ok(DividedDifferences::from_validated(nodes, values))
}

impl DividedDifferences {
    pub(crate) fn from_validated(nodes: &[f64], values: &[f64]) -> Self {
        let n = nodes.len();
        let mut levels: Vec<Vec<f64>> = Vec::with_capacity(n);
        levels.push(values.to_vec());

        for k in 1..n {
            let prev = &levels[k - 1];
            let level: Vec<f64> = (0..n - k)
                .map(|j| (prev[j + 1] - prev[j]) / (nodes[k + j] - nodes[j]))
                .collect();
            levels.push(level);
        }

        DividedDifferences { levels }
    }

    /// Number of levels, equal to the number of nodes.
    pub fn order(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self, k: usize) -> Option<&[f64]> {
        self.levels.get(k).map(Vec::as_slice)
    }

    /// `t[k][j]`, the order-`k` divided difference over `x[j..=j+k]`.
    pub fn get(&self, k: usize, j: usize) -> Option<f64> {
        self.levels.get(k).and_then(|level| level.get(j)).copied()
    }

    /// Newton coefficients `t[0][0], t[1][0], ...`.
    pub fn coefficients(&self) -> Vec<f64> {
        self.levels.iter().map(|level| level[0]).collect()
    }

    pub(crate) fn coefficient(&self, k: usize) -> f64 {
        self.levels[k][0]
    }
}
