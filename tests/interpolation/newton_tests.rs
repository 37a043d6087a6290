use numlab::{Algorithm, Interpolator, NumericError, build_newton};

type NumResult = Result<(), NumericError>;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at index {}: left={}, right={}, ATOL={}",
            i, ai, bi, ATOL
        );
    }
}

const X: [f64; 4] = [-1.0, 0.0, 0.5, 1.0];

#[test]
fn cubic_through_four_nodes() -> NumResult {
    let p = build_newton(&X, &[-3.0, -0.5, 0.0, 1.0])?;
    assert_vec_close(&p.eval_many(&[-0.5, 1.5, 2.0]), &[-1.25, 3.25, 7.5]);
    Ok(())
}

#[test]
fn cubic_with_zero_values() -> NumResult {
    let p = build_newton(&X, &[-1.5, 0.0, 0.0, 0.5])?;
    assert_vec_close(&p.eval_many(&[-0.5, 1.5, 2.0]), &[-0.25, 2.25, 6.0]);
    Ok(())
}

#[test]
fn exact_hits() -> NumResult {
    let x = [0.0, 1.0, 3.0, 6.0, 10.0];
    let y = [0.0, 2.0, 3.0, 3.0, 8.0];
    let p = build_newton(&x, &y)?;
    assert_vec_close(&p.eval_many(&x), &y);
    Ok(())
}

#[test]
fn quadratic_between_nodes() -> NumResult {
    let p = build_newton(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])?;
    assert!(approx_eq(p.eval(0.5), 0.25));
    assert!(approx_eq(p.eval(1.5), 2.25));
    Ok(())
}

#[test]
fn two_points() -> NumResult {
    let p = build_newton(&[2.0, 4.0], &[5.0, 9.0])?;
    assert!(approx_eq(p.eval(3.0), 7.0));
    Ok(())
}

#[test]
fn single_node_is_constant() -> NumResult {
    let p = build_newton(&[2.0], &[7.0])?;
    let evaluation = p.evaluate(-100.0);
    assert_eq!(evaluation.value, 7.0);
    assert_eq!(evaluation.multiplications, 0);
    Ok(())
}

#[test]
fn operation_counts() -> NumResult {
    let p = build_newton(&X, &[-3.0, -0.5, 0.0, 1.0])?;
    let evaluation = p.evaluate(0.25);
    assert_eq!(evaluation.multiplications, 2 * (4 - 1));
    assert_eq!(evaluation.divisions, 0);
    Ok(())
}

#[test]
fn table_is_exposed() -> NumResult {
    let p = build_newton(&X, &[-3.0, -0.5, 0.0, 1.0])?;
    assert_eq!(p.table().coefficients(), vec![-3.0, 2.5, -1.0, 1.0]);
    assert_eq!(p.algorithm(), Algorithm::Newton);
    assert_eq!(p.algorithm().algorithm_name(), "newton");
    Ok(())
}

#[test]
fn duplicate_node_error() {
    let err = build_newton(&[0.0, 0.0, 2.0], &[0.0, 1.0, 2.0]).unwrap_err();
    assert!(matches!(err, NumericError::DuplicateNode { first: 0, second: 1, .. }));
}

#[test]
fn unequal_length_error() {
    let err = build_newton(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, NumericError::DimensionMismatch { left: 3, right: 2, .. }));
}
