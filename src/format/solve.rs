use crate::precision::Precision;
use crate::scalar::Scalar;
use crate::solver::{LinearDiagnostics, LinearResult};

/// Render a `LinearResult` into human-readable lines for the CLI.
///
/// Unknowns are labelled `x1 … xn`; displayed values are snapped per `precision`.
pub fn solve_summary<S: Scalar>(result: &LinearResult<S>, precision: &Precision) -> Vec<String> {
    match result {
        LinearResult::Unique(sol) => {
            let mut lines = vec!["Unique solution:".to_string()];
            for (i, value) in sol.snapped(precision).iter().enumerate() {
                lines.push(format!(
                    "x{} = {}",
                    i + 1,
                    value.to_decimal_string(precision.digits())
                ));
            }
            push_diag(&mut lines, &sol.diagnostics, precision);
            lines
        }
        LinearResult::Infinite(family) => {
            let mut lines = vec!["Infinitely many solutions.".to_string()];
            push_diag(&mut lines, &family.diagnostics, precision);
            lines
        }
        LinearResult::Inconsistent(info) => {
            let mut lines = vec!["No solution (inconsistent system).".to_string()];
            if let Some(row) = info.diagnostics.inconsistent_row {
                lines.push(format!("Inconsistent reduced row index: {row}"));
            }
            push_diag(&mut lines, &info.diagnostics, precision);
            lines
        }
    }
}

fn push_diag<S: Scalar>(lines: &mut Vec<String>, diag: &LinearDiagnostics<S>, precision: &Precision) {
    lines.push(format!(
        "Rank: {} (augmented: {}, unknowns: {})",
        diag.rank_coefficients, diag.rank_augmented, diag.unknowns
    ));
    if let Some(det) = &diag.determinant {
        lines.push(format!(
            "Determinant: {}",
            det.to_decimal_string(precision.digits())
        ));
    }
    if !diag.pivot_columns.is_empty() {
        lines.push(format!("Pivot columns: {:?}", diag.pivot_columns));
    }
    if !diag.free_columns.is_empty() {
        lines.push(format!("Free columns: {:?}", diag.free_columns));
    }
}
