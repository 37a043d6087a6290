use numlab::{NumericError, linspace, runge_function, sample_runge};

type NumResult = Result<(), NumericError>;

#[test]
fn runge_function_values() {
    assert_eq!(runge_function(0.0), 1.0);
    assert_eq!(runge_function(1.0), 1.0 / 26.0);
    assert_eq!(runge_function(-1.0), runge_function(1.0));
}

#[test]
fn linspace_includes_both_ends() {
    let xs = linspace(-1.0, 1.0, 5);
    assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
}

#[test]
fn sample_shapes() -> NumResult {
    let sample = sample_runge(7, 101)?;
    assert_eq!(sample.nodes.len(), 7);
    assert_eq!(sample.node_values.len(), 7);
    assert_eq!(sample.grid.len(), 101);
    assert_eq!(sample.exact.len(), 101);
    assert_eq!(sample.interpolated.len(), 101);
    assert_eq!(sample.nodes[0], -1.0);
    assert_eq!(sample.nodes[6], 1.0);
    for (x, e) in sample.grid.iter().zip(&sample.exact) {
        assert_eq!(runge_function(*x), *e);
    }
    Ok(())
}

#[test]
fn equispaced_error_grows_with_degree() -> NumResult {
    let low = sample_runge(5, 401)?.max_error;
    let mid = sample_runge(11, 401)?.max_error;
    let high = sample_runge(21, 401)?.max_error;
    assert!(low < mid, "low={low}, mid={mid}");
    assert!(mid < high, "mid={mid}, high={high}");
    assert!(high > 10.0);
    Ok(())
}

#[test]
fn too_few_points() {
    assert!(matches!(
        sample_runge(1, 100),
        Err(NumericError::InsufficientPoints { got: 1, need: 2 })
    ));
    assert!(matches!(
        sample_runge(5, 0),
        Err(NumericError::InsufficientPoints { got: 0, need: 2 })
    ));
}
