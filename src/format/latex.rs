//! LaTeX rendering for display in markup front-ends.

#[cfg(feature = "symbolic")]
use crate::expr::{Expr, Rational};
use crate::linalg::Matrix;
use crate::scalar::Scalar;

/// `\begin{pmatrix} ... \end{pmatrix}` with entries in plain decimal notation.
pub fn latex_matrix<S: Scalar>(matrix: &Matrix<S>, digits: u32) -> String {
    let mut out = String::from("\\begin{pmatrix}\n");
    for row in matrix.rows() {
        let cells: Vec<String> = row
            .values()
            .iter()
            .map(|v| v.to_decimal_string(digits))
            .collect();
        out.push_str(&cells.join(" & "));
        out.push_str(" \\\\\n");
    }
    out.push_str("\\end{pmatrix}");
    out
}

/// LaTeX for a polynomial expression, e.g. `x^{3} - \frac{1}{2} x^{2} + x - \frac{1}{2}`.
#[cfg(feature = "symbolic")]
pub fn latex(expr: &Expr) -> String {
    use super::expr::split_neg;

    fn tex(ctx: u8, expr: &Expr) -> String {
        match expr {
            Expr::Variable(v) => v.clone(),
            Expr::Constant(r) => {
                let body = tex_rational(r);
                bracket(ctx, if body.starts_with('-') { 1 } else { 4 }, body)
            }
            Expr::Add(a, b) | Expr::Sub(a, b) => {
                let (neg_b, b_inner) = split_neg(b);
                let minus = matches!(expr, Expr::Sub(..)) ^ neg_b;
                let body = format!(
                    "{} {} {}",
                    tex(1, a),
                    if minus { "-" } else { "+" },
                    tex(2, &b_inner)
                );
                bracket(ctx, 1, body)
            }
            Expr::Mul(a, b) => {
                let (na, a_inner) = split_neg(a);
                let (nb, b_inner) = split_neg(b);
                let sep = if matches!(a_inner, Expr::Constant(_)) && matches!(b_inner, Expr::Constant(_)) {
                    " \\cdot "
                } else {
                    " "
                };
                let body = format!("{}{sep}{}", tex(2, &a_inner), tex(2, &b_inner));
                if na ^ nb {
                    bracket(ctx, 1, format!("-{body}"))
                } else {
                    bracket(ctx, 2, body)
                }
            }
            Expr::Div(a, b) => format!("\\frac{{{}}}{{{}}}", tex(0, a), tex(0, b)),
            Expr::Pow(a, b) => bracket(ctx, 3, format!("{}^{{{}}}", tex(4, a), tex(0, b))),
            Expr::Neg(a) => {
                let (is_neg, inner) = split_neg(a);
                if is_neg {
                    tex(ctx, &inner)
                } else {
                    bracket(ctx, 1, format!("-{}", tex(2, &inner)))
                }
            }
        }
    }

    tex(0, expr)
}

#[cfg(feature = "symbolic")]
fn tex_rational(r: &Rational) -> String {
    use num_traits::Signed;

    if r.is_integer() {
        return r.numer().to_string();
    }
    let sign = if r.is_negative() { "-" } else { "" };
    format!("{sign}\\frac{{{}}}{{{}}}", r.numer().abs(), r.denom())
}

#[cfg(feature = "symbolic")]
fn bracket(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx {
        format!("\\left({body}\\right)")
    } else {
        body
    }
}
