//! Shared iteration loop.
//!
//! Every method is a small state machine implementing [`Iteration`]: one
//! call to [`Iteration::step`] performs one update and says whether it met
//! the tolerance. [`run`] owns the loop bound, the trace and the report.

use super::algorithms::Algorithm;
use super::config::SolveCfg;
use super::errors::RootFindingError;
use super::report::{IterationRecord, RootFindingReport, TerminationReason, ToleranceSatisfied};


/// Traces are preallocated up to this many records; longer runs grow normally.
const TRACE_PREALLOC_CAP: usize = 1024;


/// Outcome of a single iteration step.
pub(crate) struct Step {
    /// estimate returned if the run stops here
    pub estimate:  f64,
    /// error magnitude of `estimate`
    pub error:     f64,
    pub record:    IterationRecord,
    /// `Some` if a tolerance test passed on this step
    pub converged: Option<ToleranceSatisfied>,
}


pub(crate) trait Iteration {
    const ALGORITHM: Algorithm;

    /// Performs iteration `iter` (1-based).
    fn step(&mut self, iter: usize, tol: f64) -> Result<Step, RootFindingError>;

    /// `(root, error)` reported when `max_iter` runs out.
    fn exhausted(&self, last_estimate: f64, last_error: f64) -> (f64, f64) {
        (last_estimate, last_error)
    }

    /// Function evaluations so far, including any done before the first step.
    fn evaluations(&self) -> usize;
}


/// Dual stop test shared by the methods with a function-value criterion:
/// |f| first, then the step/width error.
#[inline]
pub(crate) fn dual_test(
    fx: f64,
    error: f64,
    tol: f64,
    error_kind: ToleranceSatisfied,
) -> Option<ToleranceSatisfied> {
    if fx.abs() < tol {
        Some(ToleranceSatisfied::AbsFxReached)
    } else if error < tol {
        Some(error_kind)
    } else {
        None
    }
}


/// Runs `method` for at most `cfg.max_iter()` steps.
pub(crate) fn run<I>(mut method: I, cfg: &SolveCfg) -> Result<RootFindingReport, RootFindingError>
where I: Iteration {
    let tol      = cfg.tolerance();
    let max_iter = cfg.max_iter();

    let mut trace = Vec::with_capacity(max_iter.min(TRACE_PREALLOC_CAP));
    let mut last  = None;

    for iter in 1..=max_iter {
        let step = method.step(iter, tol)?;
        trace.push(step.record);

        if let Some(tolerance_satisfied) = step.converged {
            return Ok(RootFindingReport {
                root                : step.estimate,
                error               : step.error,
                trace,
                evaluations         : method.evaluations(),
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied,
                algorithm_name      : I::ALGORITHM.algorithm_name(),
            });
        }
        last = Some((step.estimate, step.error));
    }

    // SolveCfg guarantees max_iter >= 1, so at least one step ran
    let (last_estimate, last_error) = last.ok_or(RootFindingError::InvalidMaxIter { got: max_iter })?;
    let (root, error) = method.exhausted(last_estimate, last_error);

    Ok(RootFindingReport {
        root,
        error,
        trace,
        evaluations         : method.evaluations(),
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        algorithm_name      : I::ALGORITHM.algorithm_name(),
    })
}
