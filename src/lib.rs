//! Numerical teaching core: Gaussian elimination with solvability classification,
//! divided differences, Lagrange and Newton interpolation, and (behind the `symbolic`
//! feature) exact collected interpolating polynomials.

pub mod error;
#[cfg(feature = "symbolic")]
pub mod expr;
pub mod format;
pub mod interpolate;
pub mod linalg;
pub mod parser;
#[cfg(feature = "symbolic")]
pub mod polynomial;
pub mod precision;
pub mod scalar;
pub mod solver;
#[cfg(feature = "symbolic")]
pub mod symbolic;

pub use error::{ErrorKind, NumericError, Result};
pub use format::{latex_matrix, solve_summary};
pub use interpolate::{
    Algorithm, DividedDifferences, Evaluation, Interpolator, LagrangeInterpolant,
    NewtonInterpolant, RungeSample, build_lagrange, build_newton, build_table, linspace,
    runge_function, sample_runge,
};
pub use linalg::{Matrix, Vector};
pub use parser::{parse_exact_matrix, parse_matrix, parse_numbers};
pub use precision::{Precision, RoundingMode};
pub use scalar::{Rational, Scalar};
pub use solver::{
    EchelonResult, LinearDiagnostics, LinearFamily, LinearInconsistent, LinearResult,
    LinearSolution, Solvability, eliminate, rank, solve, solve_homogeneous, solve_matrix,
};

#[cfg(feature = "symbolic")]
pub use expr::Expr;
#[cfg(feature = "symbolic")]
pub use format::{latex, pretty};
#[cfg(feature = "symbolic")]
pub use parser::parse_expr;
#[cfg(feature = "symbolic")]
pub use polynomial::Poly;
#[cfg(feature = "symbolic")]
pub use symbolic::{
    LagrangeForm, NewtonForm, PolynomialForm, interpolating_polynomial, lagrange_polynomial,
    newton_polynomial,
};
