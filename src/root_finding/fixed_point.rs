use super::algorithms::{Algorithm, OpenFamily};
use super::config::{check_seed, SolveCfg};
use super::errors::RootFindingError;
use super::function::{Counted, Function};
use super::iteration::{run, Iteration, Step};
use super::report::{IterationRecord, RootFindingReport, ToleranceSatisfied};


struct FixedPoint<'g, G: ?Sized> {
    g: Counted<'g, G>,
    x: f64,
}

impl<G> Iteration for FixedPoint<'_, G>
where G: Function + ?Sized {
    const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::FixedPoint);

    fn step(&mut self, iter: usize, tol: f64) -> Result<Step, RootFindingError> {
        let x     = self.x;
        let x_new = self.g.eval(x)?;
        let error = (x_new - x).abs();

        let record = IterationRecord::FixedPoint { iter, x, x_new, error };
        // g is an iteration map, so there is no |f(x)| test
        let converged = (error < tol).then_some(ToleranceSatisfied::StepSizeReached);

        self.x = x_new;

        Ok(Step { estimate: x_new, error, record, converged })
    }

    fn evaluations(&self) -> usize {
        self.g.evals()
    }
}


/// Finds a fixed point `x = g(x)` by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration).
///
/// # Arguments
/// - `g`   : iteration map
/// - `x0`  : finite initial guess
/// - `cfg` : [`SolveCfg`] (tolerance, max_iter)
///
/// # Behavior
/// - Update: `x_new = g(x)`, error `|x_new - x|`
/// - Stops only when `error < tol`
/// - Divergence is not detected: a non-contracting map runs to `max_iter`
///   and reports the last iterate
///
/// # Errors
/// - [`RootFindingError::NonFiniteSeed`] : `x0` is NaN/inf
/// - [`RootFindingError::Evaluation`]    : `g` failed to evaluate
pub fn fixed_point<G>(
    g: &G,
    x0: f64,
    cfg: &SolveCfg,
) -> Result<RootFindingReport, RootFindingError>
where G: Function + ?Sized {
    let x0 = check_seed("x0", x0)?;

    run(FixedPoint { g: Counted::new(g), x: x0 }, cfg)
}
