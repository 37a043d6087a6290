use numlab::precision::{DEFAULT_DIGITS, DEFAULT_SNAP_TOLERANCE, DEFAULT_ZERO_TOLERANCE};
use numlab::scalar::{format_decimal, round_significant};
use numlab::{NumericError, Precision, Rational, RoundingMode, Scalar};

fn r(num: i64, den: i64) -> Rational {
    Rational::new(num.into(), den.into())
}

#[test]
fn defaults() {
    let p = Precision::default();
    assert_eq!(p.digits(), DEFAULT_DIGITS);
    assert_eq!(p.digits(), 50);
    assert_eq!(p.rounding(), RoundingMode::HalfEven);
    assert_eq!(p.zero_tolerance(), DEFAULT_ZERO_TOLERANCE);
    assert_eq!(p.snap_tolerance(), DEFAULT_SNAP_TOLERANCE);
    assert_eq!(p.snap_tolerance(), 1e-10);
    assert_eq!(Precision::new(), p);
}

#[test]
fn builders_validate() {
    let p = Precision::new()
        .with_digits(20)
        .unwrap()
        .with_rounding(RoundingMode::Floor)
        .with_zero_tolerance(1e-9)
        .unwrap()
        .with_snap_tolerance(0.0)
        .unwrap();
    assert_eq!(p.digits(), 20);
    assert_eq!(p.rounding(), RoundingMode::Floor);
    assert_eq!(p.zero_tolerance(), 1e-9);
    assert_eq!(p.snap_tolerance(), 0.0);

    assert!(matches!(Precision::new().with_digits(0), Err(NumericError::InvalidPrecision(_))));
    assert!(matches!(
        Precision::new().with_zero_tolerance(-1e-3),
        Err(NumericError::InvalidPrecision(_))
    ));
    assert!(matches!(
        Precision::new().with_snap_tolerance(f64::NAN),
        Err(NumericError::InvalidPrecision(_))
    ));
}

#[test]
fn significant_digit_rounding_modes() {
    let two_thirds = r(2, 3);
    assert_eq!(round_significant(&two_thirds, 5, RoundingMode::HalfEven), r(66667, 100000));
    assert_eq!(round_significant(&two_thirds, 5, RoundingMode::Down), r(66666, 100000));
    assert_eq!(round_significant(&-two_thirds.clone(), 5, RoundingMode::Floor), r(-66667, 100000));
    assert_eq!(round_significant(&-two_thirds, 5, RoundingMode::Ceiling), r(-66666, 100000));
}

#[test]
fn ties_follow_the_mode() {
    let value = r(12250, 1);
    assert_eq!(round_significant(&value, 3, RoundingMode::HalfEven), r(12200, 1));
    assert_eq!(round_significant(&value, 3, RoundingMode::HalfUp), r(12300, 1));
    assert_eq!(round_significant(&r(12350, 1), 3, RoundingMode::HalfEven), r(12400, 1));
}

#[test]
fn values_that_fit_are_untouched() {
    assert_eq!(round_significant(&r(1, 8), 50, RoundingMode::HalfEven), r(1, 8));
    assert_eq!(round_significant(&r(0, 1), 1, RoundingMode::HalfEven), r(0, 1));
}

#[test]
fn exact_scalars_round_to_the_policy() {
    let p = Precision::new().with_digits(2).unwrap();
    assert_eq!(r(1, 3).round_to(&p), r(33, 100));
    assert_eq!(1.0_f64 / 3.0, (1.0_f64 / 3.0).round_to(&p));
}

#[test]
fn decimal_rendering() {
    assert_eq!(format_decimal(&r(1, 3), 5), "0.33333");
    assert_eq!(format_decimal(&r(-5, 2), 50), "-2.5");
    assert_eq!(format_decimal(&r(7, 1), 50), "7");
    assert_eq!(format_decimal(&r(1, 8), 2), "0.12");
    assert_eq!(r(1, 400).to_decimal_string(50), "0.0025");
}

#[test]
fn float_conversion_uses_shortest_decimal() {
    assert_eq!(<Rational as Scalar>::from_f64(0.1), Some(r(1, 10)));
    assert_eq!(<Rational as Scalar>::from_f64(f64::INFINITY), None);
    assert_eq!(<f64 as Scalar>::from_f64(f64::NAN), None);
    assert!(r(1, 10).within(0.1));
    assert!(!r(1, 10).within(0.05));
}
