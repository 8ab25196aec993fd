//! The function capability consumed by every algorithm.
//!
//! The algorithms only ever call [`Function::evaluate`]; how the function
//! is built (closure, parsed formula, ...) is up to the caller.

use super::errors::{EvaluationError, RootFindingError};


/// A scalar function `f: f64 -> f64` that may fail to evaluate.
pub trait Function {
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError>;
}

/// Plain closures never fail.
impl<F> Function for F
where F: Fn(f64) -> f64 {
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        Ok(self(x))
    }
}


/// Adapts a closure returning `Result<f64, EvaluationError>` into a [`Function`].
///
/// ```
/// use zof::root_finding::errors::EvaluationError;
/// use zof::root_finding::function::{Fallible, Function};
///
/// let ln = Fallible(|x: f64| {
///     if x > 0.0 { Ok(x.ln()) } else { Err(EvaluationError::NonFinite { x, value: f64::NAN }) }
/// });
/// assert!(ln.evaluate(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F> Function for Fallible<F>
where F: Fn(f64) -> Result<f64, EvaluationError> {
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        (self.0)(x)
    }
}


/// Wraps a [`Function`] and counts evaluations for the report.
pub(crate) struct Counted<'f, F: ?Sized> {
    func:  &'f F,
    evals: usize,
}

impl<'f, F> Counted<'f, F>
where F: Function + ?Sized {
    pub(crate) fn new(func: &'f F) -> Self {
        Self { func, evals: 0 }
    }

    #[inline]
    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, RootFindingError> {
        self.evals += 1;
        Ok(self.func.evaluate(x)?)
    }

    #[inline]
    pub(crate) fn evals(&self) -> usize {
        self.evals
    }
}
