use crate::error::{NumericError, Result};
use crate::precision::Precision;
use crate::scalar::Scalar;

/// Fixed-length row of scalars. Every operation returns a new vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<S> {
    values: Vec<S>,
}

impl<S: Scalar> Vector<S> {
    pub fn new(values: Vec<S>) -> Self {
        Vector { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[S] {
        &self.values
    }

    pub fn into_values(self) -> Vec<S> {
        self.values
    }

    pub fn get(&self, idx: usize) -> Option<&S> {
        self.values.get(idx)
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_len(other, "vector addition")?;
        Ok(self.zip_with(other, |a, b| a.clone() + b.clone()))
    }

    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_len(other, "vector subtraction")?;
        Ok(self.zip_with(other, |a, b| a.clone() - b.clone()))
    }

    /// Scalar product `k * self`.
    pub fn scale(&self, k: &S) -> Self {
        Vector {
            values: self.values.iter().map(|v| v.clone() * k.clone()).collect(),
        }
    }

    /// Inner product.
    pub fn dot(&self, other: &Self) -> Result<S> {
        self.check_len(other, "inner product")?;
        Ok(self
            .values
            .iter()
            .zip(other.values.iter())
            .fold(S::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }

    pub fn norm_squared(&self) -> S {
        self.values
            .iter()
            .fold(S::zero(), |acc, v| acc + v.clone() * v.clone())
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.norm_squared().to_f64().sqrt()
    }


    pub fn rounded(self, precision: &Precision) -> Self {
        Vector {
            values: self
                .values
                .into_iter()
                .map(|v| v.round_to(precision))
                .collect(),
        }
    }

    /// Prefix `[0, len)` as a new vector.
    pub fn head(&self, len: usize) -> Self {
        Vector {
            values: self.values[..len.min(self.values.len())].to_vec(),
        }
    }

    pub(crate) fn set(&mut self, idx: usize, value: S) {
        self.values[idx] = value;
    }

    fn zip_with(&self, other: &Self, op: impl Fn(&S, &S) -> S) -> Self {
        Vector {
            values: self
                .values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| op(a, b))
                .collect(),
        }
    }

    fn check_len(&self, other: &Self, context: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(NumericError::DimensionMismatch {
                context,
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }
}

impl<S: Scalar> From<Vec<S>> for Vector<S> {
    fn from(values: Vec<S>) -> Self {
        Vector::new(values)
    }
}

impl<S> std::ops::Index<usize> for Vector<S> {
    type Output = S;
    fn index(&self, idx: usize) -> &S {
        &self.values[idx]
    }
}
