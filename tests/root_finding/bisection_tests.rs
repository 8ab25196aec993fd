//! tests for the bisection root finding algorithm
use approx::assert_abs_diff_eq;
use zof::root_finding::bisection::bisection;
use zof::root_finding::config::SolveCfg;
use zof::root_finding::errors::{EvaluationError, RootFindingError};
use zof::root_finding::function::Fallible;
use zof::root_finding::report::{IterationRecord, TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_root_of_cubic() -> TestResult {
    let f   = |x: f64| x.powi(3) - 2.0 * x - 5.0;
    let cfg = SolveCfg::new(1e-6, 50)?;

    let res = bisection(&f, 2.0, 3.0, &cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.root, 2.094551, epsilon = 1e-5);
    assert!(res.iterations() <= 50);
    assert!(res.error < 1e-6);
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn first_record_is_the_midpoint_of_the_seed_bracket() -> TestResult {
    let f   = |x: f64| x.powi(3) - 2.0 * x - 5.0;
    let cfg = SolveCfg::new(1e-6, 50)?;

    let res = bisection(&f, 2.0, 3.0, &cfg)?;

    assert_eq!(
        res.trace[0],
        IterationRecord::Bracket { iter: 1, a: 2.0, b: 3.0, x: 2.5, fx: 5.625, error: 0.5 }
    );
    Ok(())
}

#[test]
fn error_halves_every_step() -> TestResult {
    let f   = |x: f64| x.powi(3) - 2.0 * x - 5.0;
    let cfg = SolveCfg::new(1e-6, 50)?;

    let res = bisection(&f, 2.0, 3.0, &cfg)?;

    for pair in res.trace.windows(2) {
        assert_eq!(pair[1].error(), pair[0].error() / 2.0);
        if let (
            IterationRecord::Bracket { a: a0, b: b0, .. },
            IterationRecord::Bracket { a: a1, b: b1, .. },
        ) = (pair[0], pair[1]) {
            assert_eq!((b1 - a1).abs(), (b0 - a0).abs() / 2.0);
        }
    }
    Ok(())
}

#[test]
fn stops_on_width_when_function_is_steep() -> TestResult {
    // |f| stays large near the root, so only the width test can fire
    let f   = |x: f64| 1e9 * (x - 0.3);
    let cfg = SolveCfg::new(1e-3, 100)?;

    let res = bisection(&f, 0.0, 1.0, &cfg)?;

    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    // 2^-10 < 1e-3 < 2^-9
    assert_eq!(res.iterations(), 10);
    Ok(())
}

#[test]
fn stops_on_function_value_first() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let cfg = SolveCfg::new(1e-10, 60)?;

    // midpoint of [0, 6] is the exact root
    let res = bisection(&f, 0.0, 6.0, &cfg)?;

    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.iterations(), 1);
    assert_eq!(res.root, 3.0);
    Ok(())
}

#[test]
fn accepts_reversed_bracket() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SolveCfg::new(1e-10, 60)?;

    let res = bisection(&f, 2.0, 0.0, &cfg)?;

    assert!(res.converged());
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-9);
    assert!((0.0..=2.0).contains(&res.root));
    Ok(())
}

#[test]
fn iteration_limit_returns_final_bracket_midpoint() -> TestResult {
    let f   = |x: f64| x;
    let cfg = SolveCfg::new(1e-30, 10)?;

    let res = bisection(&f, -3.0, 2.0, &cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations(), 10);

    // one more halving than the last recorded step
    let last = res.trace[9];
    assert_eq!(res.error, 5.0 / 2048.0);
    assert_eq!(res.error, last.error() / 2.0);
    assert_eq!((res.root - last.estimate()).abs(), last.error() / 2.0);
    Ok(())
}

#[test]
fn max_iter_1_hits_limit() -> TestResult {
    let f   = |x: f64| x - 0.3;
    let cfg = SolveCfg::new(1e-12, 1)?;

    let res = bisection(&f, -5.0, 1.0, &cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations(), 1);
    Ok(())
}

#[test]
fn no_sign_change() {
    let f   = |x: f64| x * x + 1.0;
    let cfg = SolveCfg::new(1e-10, 50).unwrap();
    let err = bisection(&f, -1.0, 1.0, &cfg).unwrap_err();

    assert_eq!(err, RootFindingError::InvalidBracket { a: -1.0, b: 1.0, fa: 2.0, fb: 2.0 });
}

#[test]
fn root_at_endpoint_is_not_a_valid_bracket() {
    let f   = |x: f64| x;
    let cfg = SolveCfg::new(1e-10, 50).unwrap();
    let err = bisection(&f, 0.0, 5.0, &cfg).unwrap_err();

    assert!(matches!(err, RootFindingError::InvalidBracket { a, b, .. } if a == 0.0 && b == 5.0));
}

#[test]
fn non_finite_bound() {
    let f   = |x: f64| x;
    let cfg = SolveCfg::new(1e-10, 50).unwrap();
    let err = bisection(&f, f64::NAN, 1.0, &cfg).unwrap_err();

    assert!(matches!(err, RootFindingError::NonFiniteSeed { name: "a", .. }));
}

#[test]
fn evaluation_error_aborts() {
    let f = Fallible(|x: f64| {
        if x > 2.2 && x < 2.8 {
            Err(EvaluationError::Message { x, message: "unstable region".into() })
        } else {
            Ok(x.powi(3) - 2.0 * x - 5.0)
        }
    });
    let cfg = SolveCfg::new(1e-6, 50).unwrap();
    let err = bisection(&f, 2.0, 3.0, &cfg).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::Evaluation(EvaluationError::Message { x, .. }) if x == 2.5
    ));
}
