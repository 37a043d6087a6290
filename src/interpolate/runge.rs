//! Runge phenomenon sampling.
//!
//! Interpolates `f(x) = 1 / (1 + 25x²)` at equispaced nodes on `[-1, 1]` and
//! samples both curves on a fine grid. High-degree equispaced interpolation
//! oscillates near the interval ends, so `max_error` grows with the node count.

use crate::error::{NumericError, Result};
use crate::interpolate::lagrange::build_lagrange;
use crate::interpolate::traits::Interpolator;

pub const RUNGE_INTERVAL: (f64, f64) = (-1.0, 1.0);

#[inline]
pub fn runge_function(x: f64) -> f64 {
    1.0 / (1.0 + 25.0 * x * x)
}

/// `count` evenly spaced points from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Series a presentation layer needs to plot one Runge experiment.
#[derive(Debug, Clone)]
pub struct RungeSample {
    pub nodes: Vec<f64>,
    pub node_values: Vec<f64>,
    pub grid: Vec<f64>,
    pub exact: Vec<f64>,
    pub interpolated: Vec<f64>,
    pub max_error: f64,
}

pub fn sample_runge(node_count: usize, grid_points: usize) -> Result<RungeSample> {
    if node_count < 2 {
        return Err(NumericError::InsufficientPoints {
            got: node_count,
            need: 2,
        });
    }
    if grid_points < 2 {
        return Err(NumericError::InsufficientPoints {
            got: grid_points,
            need: 2,
        });
    }

    let (start, end) = RUNGE_INTERVAL;
    let nodes = linspace(start, end, node_count);
    let node_values: Vec<f64> = nodes.iter().map(|&x| runge_function(x)).collect();
    let interpolant = build_lagrange(&nodes, &node_values)?;

    let grid = linspace(start, end, grid_points);
    let exact: Vec<f64> = grid.iter().map(|&x| runge_function(x)).collect();
    let interpolated = interpolant.eval_many(&grid);
    let max_error = exact
        .iter()
        .zip(&interpolated)
        .map(|(e, p)| (e - p).abs())
        .fold(0.0, f64::max);

    Ok(RungeSample {
        nodes,
        node_values,
        grid,
        exact,
        interpolated,
        max_error,
    })
}
