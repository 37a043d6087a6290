//! Input checks shared by every interpolation constructor.
//!
//! All checks run before any table or basis is built:
//! - both sequences non-empty               ([`NumericError::EmptyInput`])
//! - equal lengths                          ([`NumericError::DimensionMismatch`])
//! - finite values (`f64` only)             ([`NumericError::NonFinite`])
//! - pairwise distinct nodes                ([`NumericError::DuplicateNode`])
//!
//! Length and distinctness are checked independently; comparing the sizes of the
//! node set and the value set is not a substitute for either.

use std::cmp::Ordering;

use crate::error::{NumericError, Result};
use crate::scalar::Scalar;

pub fn validate_nodes(nodes: &[f64], values: &[f64]) -> Result<()> {
    check_shape(nodes.len(), values.len())?;
    if let Some((idx, &value)) = non_finite(nodes) {
        return Err(NumericError::NonFinite { idx, value });
    }
    if let Some((idx, &value)) = non_finite(values) {
        return Err(NumericError::NonFinite { idx, value });
    }
    check_distinct(nodes)
}

/// Same checks for exact (or any other scalar) node sets.
pub fn validate_scalar_nodes<S: Scalar>(nodes: &[S], values: &[S]) -> Result<()> {
    check_shape(nodes.len(), values.len())?;
    check_distinct(nodes)
}

fn check_shape(n_nodes: usize, n_values: usize) -> Result<()> {
    if n_nodes == 0 || n_values == 0 {
        return Err(NumericError::EmptyInput);
    }
    if n_nodes != n_values {
        return Err(NumericError::DimensionMismatch {
            context: "nodes and values",
            left: n_nodes,
            right: n_values,
        });
    }
    Ok(())
}

fn non_finite(xs: &[f64]) -> Option<(usize, &f64)> {
    xs.iter().enumerate().find(|(_, x)| !x.is_finite())
}

fn check_distinct<S: Scalar>(nodes: &[S]) -> Result<()> {
    let mut order: Vec<usize> = (0..nodes.len()).collect();
    order.sort_by(|&a, &b| {
        nodes[a]
            .partial_cmp(&nodes[b])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    for pair in order.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if nodes[a] == nodes[b] {
            return Err(NumericError::DuplicateNode {
                first: a.min(b),
                second: a.max(b),
                value: nodes[a].to_f64(),
            });
        }
    }
    Ok(())
}
