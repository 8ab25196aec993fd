//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms, and the [`IterationRecord`] trace it carries.

use std::fmt;


/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - all methods except fixed-point
///     - |f(x)| < tol
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - bisection
///     - |b - a| / 2 < tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - regula falsi and all open methods
///     - |x_n - x_{n-1}| < tol
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - all methods, alongside [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
    ToleranceNotReached,
}


/// One completed iteration step. Fields depend on the method's shape.
///
/// ┌ [`IterationRecord::Bracket`]        : bisection (`x` = midpoint), regula falsi
/// ├ [`IterationRecord::Secant`]         : secant
/// ├ [`IterationRecord::Newton`]         : newton-raphson
/// ├ [`IterationRecord::FixedPoint`]     : fixed-point iteration (`x_new` = g(x))
/// └ [`IterationRecord::ModifiedSecant`] : modified secant
///
/// `iter` is 1-based and equals the record's position in the trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationRecord {
    Bracket        { iter: usize, a: f64, b: f64, x: f64, fx: f64, error: f64 },
    Secant         { iter: usize, x0: f64, x1: f64, x2: f64, fx2: f64, error: f64 },
    Newton         { iter: usize, x: f64, fx: f64, dfx: f64, x_new: f64, error: f64 },
    FixedPoint     { iter: usize, x: f64, x_new: f64, error: f64 },
    ModifiedSecant { iter: usize, x: f64, fx: f64, x_new: f64, error: f64 },
}

impl IterationRecord {
    pub fn iter(&self) -> usize {
        match *self {
            IterationRecord::Bracket        { iter, .. }
            | IterationRecord::Secant       { iter, .. }
            | IterationRecord::Newton       { iter, .. }
            | IterationRecord::FixedPoint   { iter, .. }
            | IterationRecord::ModifiedSecant { iter, .. } => iter,
        }
    }

    /// The estimate produced by this step.
    pub fn estimate(&self) -> f64 {
        match *self {
            IterationRecord::Bracket        { x, .. }     => x,
            IterationRecord::Secant         { x2, .. }    => x2,
            IterationRecord::Newton         { x_new, .. } => x_new,
            IterationRecord::FixedPoint     { x_new, .. } => x_new,
            IterationRecord::ModifiedSecant { x_new, .. } => x_new,
        }
    }

    pub fn error(&self) -> f64 {
        match *self {
            IterationRecord::Bracket        { error, .. }
            | IterationRecord::Secant       { error, .. }
            | IterationRecord::Newton       { error, .. }
            | IterationRecord::FixedPoint   { error, .. }
            | IterationRecord::ModifiedSecant { error, .. } => error,
        }
    }

    /// Numeric fields after `iter`, in column order
    /// (see [`Algorithm::trace_columns`](super::algorithms::Algorithm::trace_columns)).
    pub fn values(&self) -> Vec<f64> {
        match *self {
            IterationRecord::Bracket        { a, b, x, fx, error, .. }       => vec![a, b, x, fx, error],
            IterationRecord::Secant         { x0, x1, x2, fx2, error, .. }   => vec![x0, x1, x2, fx2, error],
            IterationRecord::Newton         { x, fx, dfx, x_new, error, .. } => vec![x, fx, dfx, x_new, error],
            IterationRecord::FixedPoint     { x, x_new, error, .. }          => vec![x, x_new, error],
            IterationRecord::ModifiedSecant { x, fx, x_new, error, .. }      => vec![x, fx, x_new, error],
        }
    }
}

/// `i | v1 | v2 | ...`
impl fmt::Display for IterationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter())?;
        for v in self.values() {
            write!(f, " | {v}")?;
        }
        Ok(())
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`                : best root estimate
/// - `error`               : error magnitude of the final estimate
/// - `trace`               : one [`IterationRecord`] per completed iteration
/// - `evaluations`         : total function evaluations (all handles)
/// - `termination_reason`  : why the solver stopped  ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
///
/// Hitting the iteration limit still yields a report; check
/// [`RootFindingReport::converged`] or compare `error` with your tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct RootFindingReport {
    pub root                : f64,
    pub error               : f64,
    pub trace               : Vec<IterationRecord>,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub algorithm_name      : &'static str,
}

impl RootFindingReport {
    /// Number of iterations performed (= trace length).
    pub fn iterations(&self) -> usize {
        self.trace.len()
    }

    pub fn converged(&self) -> bool {
        self.termination_reason == TerminationReason::ToleranceReached
    }
}
