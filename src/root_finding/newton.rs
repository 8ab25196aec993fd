//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily};
use super::config::{check_seed, SolveCfg};
use super::errors::RootFindingError;
use super::function::{Counted, Function};
use super::iteration::{dual_test, run, Iteration, Step};
use super::report::{IterationRecord, RootFindingReport, ToleranceSatisfied};


struct NewtonRaphson<'f, F: ?Sized, G: ?Sized> {
    f:  Counted<'f, F>,
    df: Counted<'f, G>,
    x:  f64,
}

impl<F, G> Iteration for NewtonRaphson<'_, F, G>
where
    F: Function + ?Sized,
    G: Function + ?Sized,
{
    const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::NewtonRaphson);

    fn step(&mut self, iter: usize, tol: f64) -> Result<Step, RootFindingError> {
        let x   = self.x;
        let fx  = self.f.eval(x)?;
        let dfx = self.df.eval(x)?;
        if dfx == 0.0 {
            return Err(RootFindingError::ZeroDerivative { x });
        }

        let x_new = x - fx / dfx;
        let error = (x_new - x).abs();

        let record = IterationRecord::Newton { iter, x, fx, dfx, x_new, error };
        // tested against f(x) before the update
        let converged = dual_test(fx, error, tol, ToleranceSatisfied::StepSizeReached);

        self.x = x_new;

        Ok(Step { estimate: x_new, error, record, converged })
    }

    fn evaluations(&self) -> usize {
        self.f.evals() + self.df.evals()
    }
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// with a caller-supplied derivative.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : its derivative
/// - `x0`    : finite initial guess
/// - `cfg`   : [`SolveCfg`] (tolerance, max_iter)
///
/// # Behavior
/// - Update: `x_new = x - f(x) / f'(x)`, error `|x_new - x|`
/// - Stops when `|f(x)| < tol` or `error < tol`, returning `x_new`.
///   The function-value test uses `f(x)` at the *current* iterate, not
///   `f(x_new)`, so the reported root is one step past the iterate that
///   satisfied it.
/// - `evaluations` counts both `f` and `f'` calls
///
/// # Errors
/// - [`RootFindingError::NonFiniteSeed`]  : `x0` is NaN/inf
/// - [`RootFindingError::ZeroDerivative`] : `f'(x) == 0` exactly at an iterate
/// - [`RootFindingError::Evaluation`]     : `func` or `dfunc` failed to evaluate
///
/// # Notes
/// - Convergence is *local only* and depends on a good initial guess `x0` and
///   smoothness of `f`. Near a simple root the error roughly squares each step.
///   For guaranteed convergence, use a bracketed method (e.g. bisection).
pub fn newton_raphson<F, G>(
    func: &F,
    dfunc: &G,
    x0: f64,
    cfg: &SolveCfg,
) -> Result<RootFindingReport, RootFindingError>
where
    F: Function + ?Sized,
    G: Function + ?Sized,
{
    let x0 = check_seed("x0", x0)?;

    run(
        NewtonRaphson { f: Counted::new(func), df: Counted::new(dfunc), x: x0 },
        cfg,
    )
}
