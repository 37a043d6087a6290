use crate::interpolate::algorithms::Algorithm;

/// One evaluation together with the arithmetic it cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub multiplications: usize,
    pub divisions: usize,
}

/// Interpolating polynomial evaluator.
///
/// Implementors hold only read-only data, so a shared reference can be evaluated
/// from several threads at once.
pub trait Interpolator: Send + Sync {
    /// evaluates a single point, counting multiplications and divisions
    fn evaluate(&self, x: f64) -> Evaluation;

    fn nodes(&self) -> &[f64];

    fn algorithm(&self) -> Algorithm;

    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self.evaluate(x).value
    }

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
