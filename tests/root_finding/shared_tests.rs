//! behavior common to every method
use zof::root_finding::{
    bisection, fixed_point, modified_secant, newton_raphson, regula_falsi, secant, Algorithm,
    RootFindingError, RootFindingReport, SolveCfg,
};

type TestResult = Result<(), RootFindingError>;

fn cubic(x: f64) -> f64 {
    x.powi(3) - 2.0 * x - 5.0
}

fn dcubic(x: f64) -> f64 {
    3.0 * x * x - 2.0
}

/// One run of every method on x^3 - 2x - 5 (fixed-point on its Newton map).
fn solve_all(cfg: &SolveCfg) -> Result<Vec<RootFindingReport>, RootFindingError> {
    let newton_map = |x: f64| x - cubic(x) / dcubic(x);

    Ok(vec![
        bisection(&cubic, 2.0, 3.0, cfg)?,
        regula_falsi(&cubic, 2.0, 3.0, cfg)?,
        secant(&cubic, 2.0, 3.0, cfg)?,
        newton_raphson(&cubic, &dcubic, 2.0, cfg)?,
        fixed_point(&newton_map, 2.0, cfg)?,
        modified_secant(&cubic, 2.0, 1e-3, cfg)?,
    ])
}

#[test]
fn every_method_reaches_the_same_root() -> TestResult {
    let cfg = SolveCfg::new(1e-8, 100)?;

    for res in solve_all(&cfg)? {
        assert!(res.converged(), "{} did not converge", res.algorithm_name);
        assert!((res.root - 2.0945514815423265).abs() < 1e-6, "{}: {}", res.algorithm_name, res.root);
    }
    Ok(())
}

#[test]
fn report_names_follow_algorithm_order() -> TestResult {
    let cfg   = SolveCfg::new(1e-8, 100)?;
    let names: Vec<_> = solve_all(&cfg)?.iter().map(|r| r.algorithm_name).collect();
    let expected: Vec<_> = Algorithm::ALL.iter().map(|a| a.algorithm_name()).collect();

    assert_eq!(names, expected);
    Ok(())
}

#[test]
fn traces_are_numbered_and_bounded() -> TestResult {
    for max_iter in [1, 3, 50] {
        let cfg = SolveCfg::new(1e-12, max_iter)?;

        for res in solve_all(&cfg)? {
            assert!(!res.trace.is_empty());
            assert!(res.iterations() <= max_iter);
            for (i, record) in res.trace.iter().enumerate() {
                assert_eq!(record.iter(), i + 1);
            }
            // the reported error is never worse than the last recorded one
            let last = res.trace[res.trace.len() - 1];
            assert!(res.error <= last.error());
        }
    }
    Ok(())
}

#[test]
fn columns_match_record_width() -> TestResult {
    let cfg = SolveCfg::new(1e-8, 100)?;

    for (algorithm, res) in Algorithm::ALL.iter().zip(solve_all(&cfg)?) {
        let columns = algorithm.trace_columns();
        for record in &res.trace {
            // leading `i` column
            assert_eq!(record.values().len() + 1, columns.len(), "{algorithm}");
        }
    }
    Ok(())
}

#[test]
fn reruns_are_identical() -> TestResult {
    let cfg = SolveCfg::new(1e-10, 50)?;

    assert_eq!(solve_all(&cfg)?, solve_all(&cfg)?);
    Ok(())
}

#[test]
fn cfg_rejects_bad_tolerance() {
    for tol in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            SolveCfg::new(tol, 50),
            Err(RootFindingError::InvalidTolerance { .. })
        ));
    }
}

#[test]
fn cfg_rejects_zero_max_iter() {
    assert_eq!(
        SolveCfg::new(1e-6, 0),
        Err(RootFindingError::InvalidMaxIter { got: 0 })
    );
}

#[test]
fn cfg_setters_keep_other_field() -> TestResult {
    let cfg = SolveCfg::new(1e-6, 50)?.set_tolerance(1e-9)?;

    assert_eq!(cfg.tolerance(), 1e-9);
    assert_eq!(cfg.max_iter(), 50);
    Ok(())
}
