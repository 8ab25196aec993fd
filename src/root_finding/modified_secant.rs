use super::algorithms::{Algorithm, OpenFamily};
use super::config::{check_seed, SolveCfg};
use super::errors::RootFindingError;
use super::function::{Counted, Function};
use super::iteration::{dual_test, run, Iteration, Step};
use super::report::{IterationRecord, RootFindingReport, ToleranceSatisfied};


struct ModifiedSecant<'f, F: ?Sized> {
    f:     Counted<'f, F>,
    x:     f64,
    delta: f64,
}

impl<F> Iteration for ModifiedSecant<'_, F>
where F: Function + ?Sized {
    const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::ModifiedSecant);

    fn step(&mut self, iter: usize, tol: f64) -> Result<Step, RootFindingError> {
        let x  = self.x;
        let h  = self.delta * x;
        let fx = self.f.eval(x)?;
        let fp = self.f.eval(x + h)?;

        let denom = fp - fx;
        if denom == 0.0 {
            return Err(RootFindingError::ZeroDenominator { x0: x, x1: x + h });
        }

        let x_new = x - h * fx / denom;
        let error = (x_new - x).abs();

        let record    = IterationRecord::ModifiedSecant { iter, x, fx, x_new, error };
        let converged = dual_test(fx, error, tol, ToleranceSatisfied::StepSizeReached);

        self.x = x_new;

        Ok(Step { estimate: x_new, error, record, converged })
    }

    fn evaluations(&self) -> usize {
        self.f.evals()
    }
}


/// Finds a root of `func` with the modified secant method: a secant step
/// whose second point is the relative perturbation `x + delta * x`.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `x0`    : finite initial guess
/// - `delta` : relative perturbation, conventionally small (e.g. `1e-3`)
/// - `cfg`   : [`SolveCfg`] (tolerance, max_iter)
///
/// # Behavior
/// - Update: `x_new = x - delta*x*f(x) / (f(x + delta*x) - f(x))`,
///   error `|x_new - x|`
/// - Stops when `|f(x)| < tol` or `error < tol`, returning `x_new`
///
/// # Errors
/// - [`RootFindingError::NonFiniteSeed`]   : `x0` or `delta` is NaN/inf
/// - [`RootFindingError::ZeroDenominator`] : `f(x + delta*x) == f(x)` exactly.
///   Always the case for `delta == 0` or an iterate at `x == 0`.
/// - [`RootFindingError::Evaluation`]      : `func` failed to evaluate
pub fn modified_secant<F>(
    func: &F,
    x0: f64,
    delta: f64,
    cfg: &SolveCfg,
) -> Result<RootFindingReport, RootFindingError>
where F: Function + ?Sized {
    let x0    = check_seed("x0", x0)?;
    let delta = check_seed("delta", delta)?;

    run(ModifiedSecant { f: Counted::new(func), x: x0, delta }, cfg)
}
