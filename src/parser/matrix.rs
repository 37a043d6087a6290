use nom::combinator::all_consuming;

use super::{decimal_literal, decimal_to_rational};
use crate::error::{NumericError, Result};
use crate::linalg::Matrix;
use crate::scalar::{Rational, Scalar};

/// Parses one matrix row per non-blank line, entries separated by whitespace.
///
/// Line and column numbers in errors are 1-based and refer to the input text. A
/// literal that overflows `f64` is an invalid token, not an infinity.
pub fn parse_matrix(text: &str) -> Result<Matrix<f64>> {
    Matrix::from_rows(parse_rows(text, parse_finite)?)
}

/// Same grammar as [`parse_matrix`], keeping every decimal exactly.
pub fn parse_exact_matrix(text: &str) -> Result<Matrix<Rational>> {
    Matrix::from_rows(parse_rows(text, decimal_to_rational)?)
}

/// Whitespace-separated numbers, e.g. an interpolation node list `-1 0 0.5 1`.
pub fn parse_numbers(text: &str) -> Result<Vec<f64>> {
    let mut out = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        for (column, token) in tokens(line) {
            out.push(convert(token, line_idx + 1, column, parse_finite)?);
        }
    }
    Ok(out)
}

fn parse_rows<S: Scalar>(text: &str, parse: impl Fn(&str) -> Option<S>) -> Result<Vec<Vec<S>>> {
    let mut rows: Vec<Vec<S>> = Vec::new();
    let mut expected: Option<usize> = None;

    for (line_idx, line) in text.lines().enumerate() {
        let line_no = line_idx + 1;
        let row = tokens(line)
            .into_iter()
            .map(|(column, token)| convert(token, line_no, column, &parse))
            .collect::<Result<Vec<S>>>()?;
        if row.is_empty() {
            continue;
        }
        match expected {
            None => expected = Some(row.len()),
            Some(cols) if cols != row.len() => {
                return Err(NumericError::RaggedRow {
                    row: line_no,
                    expected: cols,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(NumericError::EmptyInput);
    }
    Ok(rows)
}

fn convert<S>(token: &str, line: usize, column: usize, parse: impl Fn(&str) -> Option<S>) -> Result<S> {
    let invalid = || NumericError::InvalidToken {
        line,
        column,
        token: token.to_string(),
    };
    all_consuming(decimal_literal)(token).map_err(|_| invalid())?;
    parse(token).ok_or_else(invalid)
}

fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// `(1-based column, token)` for every whitespace-separated token of `line`.
fn tokens(line: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut rest = line;
    loop {
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            break;
        }
        let column = line.len() - trimmed.len() + 1;
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        out.push((column, &trimmed[..end]));
        rest = &trimmed[end..];
    }
    out
}
