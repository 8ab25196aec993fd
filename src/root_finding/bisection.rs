use super::algorithms::{Algorithm, BracketFamily};
use super::config::{check_seed, SolveCfg};
use super::errors::RootFindingError;
use super::function::{Counted, Function};
use super::iteration::{dual_test, run, Iteration, Step};
use super::report::{IterationRecord, RootFindingReport, ToleranceSatisfied};
use super::signs::opposite_signs;


/// Bisection state: the current bracket and the cached `f(a)`.
struct Bisection<'f, F: ?Sized> {
    f:  Counted<'f, F>,
    a:  f64,
    b:  f64,
    fa: f64,
}

impl<'f, F> Bisection<'f, F>
where F: Function + ?Sized {
    fn new(func: &'f F, a: f64, b: f64) -> Result<Self, RootFindingError> {
        let mut f = Counted::new(func);
        let fa = f.eval(a)?;
        let fb = f.eval(b)?;
        if !opposite_signs(fa, fb) {
            return Err(RootFindingError::InvalidBracket { a, b, fa, fb });
        }

        Ok(Self { f, a, b, fa })
    }
}

impl<F> Iteration for Bisection<'_, F>
where F: Function + ?Sized {
    const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);

    fn step(&mut self, iter: usize, tol: f64) -> Result<Step, RootFindingError> {
        let (a, b) = (self.a, self.b);
        let c      = (a + b) / 2.0;
        let fc     = self.f.eval(c)?;
        let error  = (b - a).abs() / 2.0;

        let record    = IterationRecord::Bracket { iter, a, b, x: c, fx: fc, error };
        let converged = dual_test(fc, error, tol, ToleranceSatisfied::WidthTolReached);

        if converged.is_none() {
            // root in [a, c] on a strict sign change, otherwise keep [c, b]
            if opposite_signs(self.fa, fc) {
                self.b = c;
            } else {
                self.a  = c;
                self.fa = fc;
            }
        }

        Ok(Step { estimate: c, error, record, converged })
    }

    fn exhausted(&self, _last_estimate: f64, _last_error: f64) -> (f64, f64) {
        ((self.a + self.b) / 2.0, (self.b - self.a).abs() / 2.0)
    }

    fn evaluations(&self) -> usize {
        self.f.evals()
    }
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the bracket. Must be finite.
/// ├ `b`    - Other end of the bracket. Must be finite. `b < a` is allowed.
/// └ `cfg`  - [`SolveCfg`] with `tolerance` and `max_iter`.
///
/// # Behavior
///
/// Each step halves `[a, b]` at `c = (a + b) / 2` with error `|b - a| / 2`.
/// ├ stops when `|f(c)| < tol`  ([`ToleranceSatisfied::AbsFxReached`])
/// ├ else when  `error < tol`   ([`ToleranceSatisfied::WidthTolReached`])
/// └ else keeps `[a, c]` if `f(a) * f(c) < 0`, `[c, b]` otherwise.
///
/// If `max_iter` steps complete, the report carries the midpoint and
/// half-width of the final bracket with
/// [`TerminationReason::IterationLimit`](super::report::TerminationReason::IterationLimit).
///
/// # Errors
///
/// ┌ [`RootFindingError::NonFiniteSeed`]  - `a` or `b` is NaN/inf.
/// ├ [`RootFindingError::InvalidBracket`] - `f(a) * f(b) >= 0` (an exact root at an endpoint included).
/// └ [`RootFindingError::Evaluation`]     - `func` failed to evaluate.
pub fn bisection<F>(
    func: &F,
    a: f64,
    b: f64,
    cfg: &SolveCfg,
) -> Result<RootFindingReport, RootFindingError>
where F: Function + ?Sized {
    let a = check_seed("a", a)?;
    let b = check_seed("b", b)?;

    run(Bisection::new(func, a, b)?, cfg)
}
