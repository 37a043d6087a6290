use numlab::{NumericError, build_table};

type NumResult = Result<(), NumericError>;

const X: [f64; 4] = [-1.0, 0.0, 0.5, 1.0];

#[test]
fn cubic_table_levels() -> NumResult {
    let table = build_table(&X, &[-3.0, -0.5, 0.0, 1.0])?;

    assert_eq!(table.order(), 4);
    assert_eq!(table.level(0), Some(&[-3.0, -0.5, 0.0, 1.0][..]));
    assert_eq!(table.level(1), Some(&[2.5, 1.0, 2.0][..]));
    assert_eq!(table.level(2), Some(&[-1.0, 1.0][..]));
    assert_eq!(table.level(3), Some(&[1.0][..]));
    assert_eq!(table.level(4), None);
    Ok(())
}

#[test]
fn coefficients_are_the_top_diagonal() -> NumResult {
    let table = build_table(&X, &[-1.5, 0.0, 0.0, 0.5])?;
    assert_eq!(table.coefficients(), vec![-1.5, 1.5, -1.0, 1.0]);
    assert_eq!(table.get(1, 2), Some(1.0));
    assert_eq!(table.get(3, 1), None);
    Ok(())
}

#[test]
fn rebuild_is_bit_identical() -> NumResult {
    let x = [0.1, 0.7, 1.3, 2.9, 3.3];
    let y = [1.0, -0.3, 2.2, 0.01, 5.5];
    let first = build_table(&x, &y)?;
    let second = build_table(&x, &y)?;
    for k in 0..first.order() {
        let a = first.level(k).unwrap();
        let b = second.level(k).unwrap();
        for (p, q) in a.iter().zip(b) {
            assert_eq!(p.to_bits(), q.to_bits());
        }
    }
    Ok(())
}

#[test]
fn single_node_table() -> NumResult {
    let table = build_table(&[2.0], &[7.0])?;
    assert_eq!(table.order(), 1);
    assert_eq!(table.coefficients(), vec![7.0]);
    Ok(())
}

#[test]
fn duplicate_node_error() {
    let err = build_table(&[0.0, 1.0, 0.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, NumericError::DuplicateNode { first: 0, second: 2, value }
        if value == 0.0));
}

#[test]
fn unequal_length_error() {
    let err = build_table(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, NumericError::DimensionMismatch { left: 3, right: 2, .. }));
}

#[test]
fn empty_error() {
    assert!(matches!(build_table(&[], &[]), Err(NumericError::EmptyInput)));
}
