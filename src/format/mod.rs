//! Formatting helpers for rendering expressions and solver output.

#[cfg(feature = "symbolic")]
pub mod expr;
pub mod latex;
pub mod solve;

#[cfg(feature = "symbolic")]
pub use expr::pretty;
#[cfg(feature = "symbolic")]
pub use latex::latex;
pub use latex::latex_matrix;
pub use solve::solve_summary;
