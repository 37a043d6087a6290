use numlab::{Algorithm, Interpolator, NumericError, build_lagrange};

type NumResult = Result<(), NumericError>;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

const X: [f64; 4] = [-1.0, 0.0, 0.5, 1.0];

#[test]
fn cubic_through_four_nodes() -> NumResult {
    let p = build_lagrange(&X, &[-3.0, -0.5, 0.0, 1.0])?;
    assert!(approx_eq(p.eval(-0.5), -1.25));
    assert!(approx_eq(p.eval(1.5), 3.25));
    assert!(approx_eq(p.eval(2.0), 7.5));
    Ok(())
}

#[test]
fn cubic_with_zero_values() -> NumResult {
    let p = build_lagrange(&X, &[-1.5, 0.0, 0.0, 0.5])?;
    assert!(approx_eq(p.eval(-0.5), -0.25));
    assert!(approx_eq(p.eval(1.5), 2.25));
    assert!(approx_eq(p.eval(2.0), 6.0));
    Ok(())
}

#[test]
fn exact_hits_at_nodes() -> NumResult {
    let x = [0.3, 1.7, 2.2, 4.9, 5.1];
    let y = [1.0, -2.5, 0.125, 9.75, 3.3];
    let p = build_lagrange(&x, &y)?;
    for (&xi, &yi) in x.iter().zip(&y) {
        assert_eq!(p.eval(xi), yi);
    }
    Ok(())
}

#[test]
fn basis_is_cardinal() -> NumResult {
    let p = build_lagrange(&X, &[0.0; 4])?;
    for i in 0..X.len() {
        let basis = p.basis(i).expect("basis in range");
        assert_eq!(basis.index(), i);
        for (j, &xj) in X.iter().enumerate() {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(basis.eval(xj), expected);
        }
    }
    assert!(p.basis(X.len()).is_none());
    Ok(())
}

#[test]
fn denominators_precomputed() -> NumResult {
    let p = build_lagrange(&[0.0, 1.0, 3.0], &[1.0, 1.0, 1.0])?;
    // (0-1)(0-3), (1-0)(1-3), (3-0)(3-1)
    assert_eq!(p.denominators(), &[3.0, -2.0, 6.0]);
    assert_eq!(p.values(), &[1.0, 1.0, 1.0]);
    Ok(())
}

#[test]
fn operation_counts() -> NumResult {
    let p = build_lagrange(&X, &[-3.0, -0.5, 0.0, 1.0])?;
    let evaluation = p.evaluate(0.25);
    assert_eq!(evaluation.multiplications, 4 * 3 + 4);
    assert_eq!(evaluation.divisions, 4);
    Ok(())
}

#[test]
fn report_metadata() -> NumResult {
    let p = build_lagrange(&[0.0, 1.0], &[0.0, 1.0])?;
    assert_eq!(p.algorithm(), Algorithm::Lagrange);
    assert_eq!(p.algorithm().algorithm_name(), "lagrange");
    assert_eq!(p.nodes(), &[0.0, 1.0]);
    Ok(())
}

#[test]
fn repeated_values_are_fine() -> NumResult {
    let p = build_lagrange(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0])?;
    assert!(approx_eq(p.eval(10.0), 5.0));
    Ok(())
}

#[test]
fn duplicate_node_with_matching_lengths() {
    let err = build_lagrange(&[1.0, 2.0, 1.0], &[5.0, 6.0, 7.0]).unwrap_err();
    assert!(matches!(err, NumericError::DuplicateNode { first: 0, second: 2, .. }));
}

#[test]
fn unequal_length_error() {
    let err = build_lagrange(&[0.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err();
    assert!(matches!(err, NumericError::DimensionMismatch { left: 2, right: 3, .. }));
}

#[test]
fn non_finite_error() {
    let err = build_lagrange(&[0.0, f64::INFINITY], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, NumericError::NonFinite { idx: 1, .. }));
    let err = build_lagrange(&[0.0, 1.0], &[f64::NAN, 1.0]).unwrap_err();
    assert!(matches!(err, NumericError::NonFinite { idx: 0, .. }));
}

#[test]
fn empty_error() {
    assert!(matches!(build_lagrange(&[], &[]), Err(NumericError::EmptyInput)));
}
