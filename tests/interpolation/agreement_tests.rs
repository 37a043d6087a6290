use numlab::{Interpolator, NumericError, build_lagrange, build_newton, linspace};

type NumResult = Result<(), NumericError>;

#[test]
fn lagrange_and_newton_agree_inside_and_outside() -> NumResult {
    let x = [-2.0, -0.5, 0.25, 1.0, 3.0, 4.5];
    let y = [4.0, -1.0, 0.5, 2.0, -3.0, 6.0];
    let lagrange = build_lagrange(&x, &y)?;
    let newton = build_newton(&x, &y)?;

    for q in linspace(-4.0, 6.0, 101) {
        let (a, b) = (lagrange.eval(q), newton.eval(q));
        assert!(
            (a - b).abs() <= 1e-9 * (1.0 + a.abs()),
            "disagree at {q}: lagrange={a}, newton={b}"
        );
    }
    Ok(())
}

#[test]
fn eval_many_matches_pointwise() -> NumResult {
    let p = build_lagrange(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0])?;
    let xs = [-1.0, 0.5, 1.5, 7.0];
    let batch = p.eval_many(&xs);
    for (q, v) in xs.iter().zip(batch) {
        assert_eq!(p.eval(*q), v);
    }
    Ok(())
}

#[test]
fn newton_is_cheaper_as_nodes_grow() -> NumResult {
    for n in 2..12 {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| v * v).collect();
        let lagrange = build_lagrange(&x, &y)?.evaluate(0.5);
        let newton = build_newton(&x, &y)?.evaluate(0.5);

        assert_eq!(lagrange.multiplications, n * (n - 1) + n);
        assert_eq!(lagrange.divisions, n);
        assert_eq!(newton.multiplications, 2 * (n - 1));
        assert!(newton.multiplications < lagrange.multiplications);
    }
    Ok(())
}

#[test]
fn evaluators_are_shared_across_threads() -> NumResult {
    let x = [-1.0, 0.0, 0.5, 1.0];
    let y = [-3.0, -0.5, 0.0, 1.0];
    let evaluators: Vec<Box<dyn Interpolator>> =
        vec![Box::new(build_lagrange(&x, &y)?), Box::new(build_newton(&x, &y)?)];
    let grid = linspace(-2.0, 2.0, 64);

    let serial: Vec<Vec<f64>> = evaluators.iter().map(|e| e.eval_many(&grid)).collect();
    let grid = &grid;
    let parallel: Vec<Vec<f64>> = std::thread::scope(|s| {
        let handles: Vec<_> = evaluators
            .iter()
            .map(|e| s.spawn(move || e.eval_many(grid)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(serial, parallel);
    Ok(())
}
