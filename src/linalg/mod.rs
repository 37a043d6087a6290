//! Minimal vector and matrix support for row operations.

pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
