//! tests for the regula falsi root-finding algorithm
use approx::assert_abs_diff_eq;
use zof::root_finding::config::SolveCfg;
use zof::root_finding::errors::RootFindingError;
use zof::root_finding::regula_falsi::regula_falsi;
use zof::root_finding::report::{IterationRecord, TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_root_of_cubic() -> TestResult {
    let f   = |x: f64| x.powi(3) - 2.0 * x - 5.0;
    let cfg = SolveCfg::new(1e-6, 50)?;

    let res = regula_falsi(&f, 2.0, 3.0, &cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.root, 2.094551, epsilon = 1e-5);
    assert_eq!(res.algorithm_name, "regula_falsi");
    Ok(())
}

#[test]
fn first_step_is_the_x_intercept() -> TestResult {
    let f   = |x: f64| x.powi(3) - 2.0 * x - 5.0;
    let cfg = SolveCfg::new(1e-6, 50)?;

    let res = regula_falsi(&f, 2.0, 3.0, &cfg)?;

    match res.trace[0] {
        IterationRecord::Bracket { iter, a, b, x, error, .. } => {
            assert_eq!((iter, a, b), (1, 2.0, 3.0));
            // (2*16 - 3*(-1)) / (16 - (-1))
            assert_abs_diff_eq!(x, 35.0 / 17.0, epsilon = 1e-15);
            // previous estimate starts at `a`
            assert_abs_diff_eq!(error, 35.0 / 17.0 - 2.0, epsilon = 1e-15);
        }
        other => panic!("unexpected record {other:?}"),
    }
    Ok(())
}

#[test]
fn estimates_stay_inside_the_seed_bracket() -> TestResult {
    let f   = |x: f64| x.exp() - 3.0;
    let cfg = SolveCfg::new(1e-12, 200)?;

    let res = regula_falsi(&f, 3.0, -1.0, &cfg)?;

    for record in &res.trace {
        assert!((-1.0..=3.0).contains(&record.estimate()));
    }
    assert!((-1.0..=3.0).contains(&res.root));
    assert_abs_diff_eq!(res.root, 3.0_f64.ln(), epsilon = 1e-10);
    Ok(())
}

#[test]
fn linear_function_converges_on_first_intercept() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let cfg = SolveCfg::new(1e-10, 40)?;

    let res = regula_falsi(&f, 0.0, 10.0, &cfg)?;

    assert_eq!(res.iterations(), 1);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert_abs_diff_eq!(res.root, 3.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn step_tolerance_stops_a_stalled_endpoint() -> TestResult {
    // convex: the right endpoint never moves and |f| shrinks slowly
    let f   = |x: f64| x * x - 2.0;
    let cfg = SolveCfg::new(1e-3, 100)?;

    let res = regula_falsi(&f, 0.0, 4.0, &cfg)?;

    assert!(res.converged());
    for record in &res.trace {
        if let IterationRecord::Bracket { b, .. } = record {
            assert_eq!(*b, 4.0);
        }
    }
    Ok(())
}

#[test]
fn iteration_limit_returns_last_estimate() -> TestResult {
    let f   = |x: f64| x.powi(3) - 2.0 * x - 5.0;
    let cfg = SolveCfg::new(1e-14, 3)?;

    let res = regula_falsi(&f, 2.0, 3.0, &cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations(), 3);
    assert_eq!(res.root, res.trace[2].estimate());
    assert_eq!(res.error, res.trace[2].error());
    Ok(())
}

#[test]
fn caches_endpoint_values() -> TestResult {
    let calls = std::cell::Cell::new(0);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        x.powi(3) - 2.0 * x - 5.0
    };
    let cfg = SolveCfg::new(1e-6, 50)?;

    let res = regula_falsi(&f, 2.0, 3.0, &cfg)?;

    // f(a), f(b), then one evaluation per step
    assert_eq!(res.evaluations, 2 + res.iterations());
    assert_eq!(calls.get(), res.evaluations);
    Ok(())
}

#[test]
fn no_sign_change() {
    let f   = |x: f64| x * x + 1.0;
    let cfg = SolveCfg::new(1e-10, 50).unwrap();
    let err = regula_falsi(&f, -1.0, 1.0, &cfg).unwrap_err();

    assert!(matches!(err, RootFindingError::InvalidBracket { a, b, .. } if a == -1.0 && b == 1.0));
}

#[test]
fn infinite_bound() {
    let f   = |x: f64| x;
    let cfg = SolveCfg::new(1e-10, 50).unwrap();
    let err = regula_falsi(&f, -1.0, f64::INFINITY, &cfg).unwrap_err();

    assert!(matches!(err, RootFindingError::NonFiniteSeed { name: "b", .. }));
}
