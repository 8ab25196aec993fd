use super::algorithms::{Algorithm, BracketFamily};
use super::config::{check_seed, SolveCfg};
use super::errors::RootFindingError;
use super::function::{Counted, Function};
use super::iteration::{dual_test, run, Iteration, Step};
use super::report::{IterationRecord, RootFindingReport, ToleranceSatisfied};
use super::signs::opposite_signs;


/// False-position state. `fa`/`fb` are only refreshed when their endpoint moves.
struct RegulaFalsi<'f, F: ?Sized> {
    f:      Counted<'f, F>,
    a:      f64,
    b:      f64,
    fa:     f64,
    fb:     f64,
    x_prev: f64,
}

impl<'f, F> RegulaFalsi<'f, F>
where F: Function + ?Sized {
    fn new(func: &'f F, a: f64, b: f64) -> Result<Self, RootFindingError> {
        let mut f = Counted::new(func);
        let fa = f.eval(a)?;
        let fb = f.eval(b)?;
        if !opposite_signs(fa, fb) {
            return Err(RootFindingError::InvalidBracket { a, b, fa, fb });
        }

        Ok(Self { f, a, b, fa, fb, x_prev: a })
    }
}

/// x-intercept of the line through `(a, fa)` and `(b, fb)`.
///
/// The bracket invariant `fa * fb < 0` keeps the denominator non-zero.
#[inline]
fn secant_x_intercept((a, fa): (f64, f64), (b, fb): (f64, f64)) -> f64 {
    (a * fb - b * fa) / (fb - fa)
}

impl<F> Iteration for RegulaFalsi<'_, F>
where F: Function + ?Sized {
    const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::RegulaFalsi);

    fn step(&mut self, iter: usize, tol: f64) -> Result<Step, RootFindingError> {
        let (a, b) = (self.a, self.b);
        let x      = secant_x_intercept((a, self.fa), (b, self.fb));
        let fx     = self.f.eval(x)?;
        let error  = (x - self.x_prev).abs();

        let record    = IterationRecord::Bracket { iter, a, b, x, fx, error };
        let converged = dual_test(fx, error, tol, ToleranceSatisfied::StepSizeReached);

        if converged.is_none() {
            if opposite_signs(self.fa, fx) {
                self.b  = x;
                self.fb = fx;
            } else {
                self.a  = x;
                self.fa = fx;
            }
            self.x_prev = x;
        }

        Ok(Step { estimate: x, error, record, converged })
    }

    fn evaluations(&self) -> usize {
        self.f.evals()
    }
}


/// Finds a root of a function using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the bracket. Must be finite.
/// ├ `b`    - Other end of the bracket. Must be finite.
/// └ `cfg`  - [`SolveCfg`] with `tolerance` and `max_iter`.
///
/// # Behavior
///
/// Each step takes the x-intercept `x = (a*f(b) - b*f(a)) / (f(b) - f(a))`
/// with error `|x - x_prev|` (`x_prev` starts at `a`).
/// ├ stops when `|f(x)| < tol` ([`ToleranceSatisfied::AbsFxReached`])
/// ├ else when  `error < tol`  ([`ToleranceSatisfied::StepSizeReached`])
/// └ else replaces `b` if `f(a) * f(x) < 0`, `a` otherwise.
///
/// On the iteration limit the last `x` and its error are reported.
///
/// # Errors
///
/// ┌ [`RootFindingError::NonFiniteSeed`]  - `a` or `b` is NaN/inf.
/// ├ [`RootFindingError::InvalidBracket`] - `f(a) * f(b) >= 0`.
/// └ [`RootFindingError::Evaluation`]     - `func` failed to evaluate.
///
/// # Warning
/// └ The pure method can stall with one endpoint fixed on convex/concave
///   functions; the step error then shrinks slowly.
pub fn regula_falsi<F>(
    func: &F,
    a: f64,
    b: f64,
    cfg: &SolveCfg,
) -> Result<RootFindingReport, RootFindingError>
where F: Function + ?Sized {
    let a = check_seed("a", a)?;
    let b = check_seed("b", b)?;

    run(RegulaFalsi::new(func, a, b)?, cfg)
}
