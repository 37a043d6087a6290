//! Numeric precision policy shared by the `f64` and high-precision elimination paths.
//!
//! [`Precision`] bundles
//! - `digits`         : significant decimal digits kept by exact scalars after each step
//! - `rounding`       : how the last kept digit is rounded
//! - `zero_tolerance` : entries / row norms at or below this are treated as zero
//! - `snap_tolerance` : distance to an integer under which presented values are snapped
//!
//! `f64` ignores `digits` and `rounding`; the tolerances apply to both paths.

use crate::error::{NumericError, Result};

pub const DEFAULT_DIGITS: u32 = 50;
pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-12;
pub const DEFAULT_SNAP_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Ties go to the even neighbour.
    #[default]
    HalfEven,
    /// Ties go away from zero.
    HalfUp,
    /// Truncate toward zero.
    Down,
    Floor,
    Ceiling,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision {
    digits: u32,
    rounding: RoundingMode,
    zero_tolerance: f64,
    snap_tolerance: f64,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            rounding: RoundingMode::HalfEven,
            zero_tolerance: DEFAULT_ZERO_TOLERANCE,
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
        }
    }
}

impl Precision {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_digits(mut self, digits: u32) -> Result<Self> {
        if digits == 0 {
            return Err(NumericError::InvalidPrecision(
                "digits must be at least 1".to_string(),
            ));
        }
        self.digits = digits;
        Ok(self)
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_zero_tolerance(mut self, tolerance: f64) -> Result<Self> {
        self.zero_tolerance = check_tolerance("zero_tolerance", tolerance)?;
        Ok(self)
    }

    pub fn with_snap_tolerance(mut self, tolerance: f64) -> Result<Self> {
        self.snap_tolerance = check_tolerance("snap_tolerance", tolerance)?;
        Ok(self)
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    pub fn zero_tolerance(&self) -> f64 {
        self.zero_tolerance
    }

    pub fn snap_tolerance(&self) -> f64 {
        self.snap_tolerance
    }
}

// zero is allowed: exact scalars can ask for a strict "non-zero" test
fn check_tolerance(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(NumericError::InvalidPrecision(format!(
            "{name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(value)
}
