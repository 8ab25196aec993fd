//! tests for the newton-raphson root finding algorithm
use approx::assert_abs_diff_eq;
use zof::root_finding::config::SolveCfg;
use zof::root_finding::errors::{EvaluationError, RootFindingError};
use zof::root_finding::function::Fallible;
use zof::root_finding::newton::newton_raphson;
use zof::root_finding::report::{IterationRecord, TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_two() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = SolveCfg::new(1e-10, 50)?;

    let res = newton_raphson(&f, &df, 1.0, &cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.iterations(), 5);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(res.algorithm_name, "newton_raphson");
    Ok(())
}

#[test]
fn quadratic_convergence() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = SolveCfg::new(1e-10, 50)?;

    let res = newton_raphson(&f, &df, 1.0, &cfg)?;

    assert_eq!(res.trace[0].error(), 0.5);
    for pair in res.trace.windows(2) {
        let (e0, e1) = (pair[0].error(), pair[1].error());
        assert!(e1 <= e0 * e0, "{e1} > {e0}^2");
    }
    Ok(())
}

#[test]
fn first_record() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = SolveCfg::new(1e-10, 50)?;

    let res = newton_raphson(&f, &df, 1.0, &cfg)?;

    assert_eq!(
        res.trace[0],
        IterationRecord::Newton { iter: 1, x: 1.0, fx: -1.0, dfx: 2.0, x_new: 1.5, error: 0.5 }
    );
    Ok(())
}

#[test]
fn function_test_uses_value_before_update() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let df  = |_: f64| 1.0;
    let cfg = SolveCfg::new(1e-10, 50)?;

    // lands exactly on the root after one step, but f(3) = 2 is what step 1 tests
    let res = newton_raphson(&f, &df, 3.0, &cfg)?;

    assert_eq!(res.iterations(), 2);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.root, 1.0);
    // f and f' once per step
    assert_eq!(res.evaluations, 4);
    Ok(())
}

#[test]
fn iteration_limit_returns_last_update() -> TestResult {
    let f   = |x: f64| x.powi(3) - 2.0 * x - 5.0;
    let df  = |x: f64| 3.0 * x * x - 2.0;
    let cfg = SolveCfg::new(1e-15, 2)?;

    let res = newton_raphson(&f, &df, 10.0, &cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.root, res.trace[1].estimate());
    assert_eq!(res.error, res.trace[1].error());
    Ok(())
}

#[test]
fn zero_derivative() {
    let f   = |x: f64| x * x + 1.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = SolveCfg::new(1e-10, 50).unwrap();
    let err = newton_raphson(&f, &df, 0.0, &cfg).unwrap_err();

    assert_eq!(err, RootFindingError::ZeroDerivative { x: 0.0 });
}

#[test]
fn derivative_evaluation_error() {
    let f   = |x: f64| x * x - 2.0;
    let df  = Fallible(|x: f64| -> Result<f64, EvaluationError> {
        Err(EvaluationError::Message { x, message: "no derivative".into() })
    });
    let cfg = SolveCfg::new(1e-10, 50).unwrap();
    let err = newton_raphson(&f, &df, 1.0, &cfg).unwrap_err();

    assert!(matches!(err, RootFindingError::Evaluation(EvaluationError::Message { x, .. }) if x == 1.0));
}

#[test]
fn non_finite_guess() {
    let f   = |x: f64| x;
    let df  = |_: f64| 1.0;
    let cfg = SolveCfg::new(1e-10, 50).unwrap();
    let err = newton_raphson(&f, &df, f64::NAN, &cfg).unwrap_err();

    assert!(matches!(err, RootFindingError::NonFiniteSeed { name: "x0", .. }));
}
