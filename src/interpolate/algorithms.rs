//! Interpolation algorithm variants.

/// - [`Algorithm::Lagrange`] basis-polynomial sum, O(n²) per evaluation
/// - [`Algorithm::Newton`]   divided differences with nested multiplication, O(n)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Lagrange,
    Newton,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange => "lagrange",
            Algorithm::Newton => "newton",
        }
    }
}
