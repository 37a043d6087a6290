//! Polynomial interpolation through distinct nodes.

pub mod algorithms;
pub mod lagrange;
pub mod newton;
pub mod runge;
pub mod table;
pub mod traits;
pub mod validate;

pub use algorithms::Algorithm;
pub use lagrange::{BasisPolynomial, LagrangeInterpolant, build_lagrange};
pub use newton::{NewtonInterpolant, build_newton};
pub use runge::{RungeSample, linspace, runge_function, sample_runge};
pub use table::{DividedDifferences, build_table};
pub use traits::{Evaluation, Interpolator};
