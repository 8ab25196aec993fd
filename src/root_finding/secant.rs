use super::algorithms::{Algorithm, OpenFamily};
use super::config::{check_seed, SolveCfg};
use super::errors::RootFindingError;
use super::function::{Counted, Function};
use super::iteration::{dual_test, run, Iteration, Step};
use super::report::{IterationRecord, RootFindingReport, ToleranceSatisfied};


/// Secant window `(x0, f(x0))`, `(x1, f(x1))`.
struct Secant<'f, F: ?Sized> {
    f:  Counted<'f, F>,
    x0: f64,
    x1: f64,
    f0: f64,
    f1: f64,
}

impl<'f, F> Secant<'f, F>
where F: Function + ?Sized {
    fn new(func: &'f F, x0: f64, x1: f64) -> Result<Self, RootFindingError> {
        let mut f = Counted::new(func);
        let f0 = f.eval(x0)?;
        let f1 = f.eval(x1)?;

        Ok(Self { f, x0, x1, f0, f1 })
    }
}

/// Secant update `x1 - f1 * (x1 - x0) / (f1 - f0)`.
///
/// Only an exactly zero denominator is rejected; there is no near-zero guard.
#[inline]
fn secant_update(
    (x0, f0): (f64, f64),
    (x1, f1): (f64, f64),
) -> Result<f64, RootFindingError> {
    let denom = f1 - f0;
    if denom == 0.0 {
        return Err(RootFindingError::ZeroDenominator { x0, x1 });
    }

    Ok(x1 - f1 * (x1 - x0) / denom)
}

impl<F> Iteration for Secant<'_, F>
where F: Function + ?Sized {
    const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);

    fn step(&mut self, iter: usize, tol: f64) -> Result<Step, RootFindingError> {
        let (x0, x1) = (self.x0, self.x1);
        let x2       = secant_update((x0, self.f0), (x1, self.f1))?;
        let fx2      = self.f.eval(x2)?;
        let error    = (x2 - x1).abs();

        let record    = IterationRecord::Secant { iter, x0, x1, x2, fx2, error };
        let converged = dual_test(fx2, error, tol, ToleranceSatisfied::StepSizeReached);

        // advance window
        self.x0 = x1;
        self.f0 = self.f1;
        self.x1 = x2;
        self.f1 = fx2;

        Ok(Step { estimate: x2, error, record, converged })
    }

    fn evaluations(&self) -> usize {
        self.f.evals()
    }
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess. Must be finite
/// - `x1`   : Second initial guess. Must be finite
/// - `cfg`  : [`SolveCfg`] (tolerance, max_iter)
///
/// # Behavior
/// - Update: `x2 = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))`, error `|x2 - x1|`
/// - Stops when `|f(x2)| < tol` or `error < tol`, then the window advances
///   `x0, x1 := x1, x2`
/// - Function values of the window are carried between steps, so each
///   iteration costs one new evaluation
///
/// # Errors
/// - [`RootFindingError::NonFiniteSeed`]   : `x0` or `x1` is NaN/inf
/// - [`RootFindingError::ZeroDenominator`] : `f(x1) - f(x0) == 0` exactly
///   (e.g. `x0 == x1`, or a flat window)
/// - [`RootFindingError::Evaluation`]      : `func` failed to evaluate
///
/// # Warning
/// - Unbracketed: poor guesses may diverge. A nearly (but not exactly) zero
///   denominator produces a huge step rather than an error.
pub fn secant<F>(
    func: &F,
    x0: f64,
    x1: f64,
    cfg: &SolveCfg,
) -> Result<RootFindingReport, RootFindingError>
where F: Function + ?Sized {
    let x0 = check_seed("x0", x0)?;
    let x1 = check_seed("x1", x1)?;

    run(Secant::new(func, x0, x1)?, cfg)
}
