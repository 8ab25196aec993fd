//! Shared configuration for root-finding algorithms.
//!
//! [`SolveCfg`] — universal fields
//! ├ `tolerance` : convergence threshold for |f(x)| and the step/width error
//! └ `max_iter`  : iteration cap
//!
//! There are no defaults here; callers (e.g. the CLI) choose them.
//! Method seeds (`a`, `b`, `x0`, `delta`, ...) are passed to each algorithm
//! directly.

use super::errors::RootFindingError;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolveCfg {
    tolerance: f64,
    max_iter:  usize,
}

impl SolveCfg {
    /// # Errors
    /// - [`RootFindingError::InvalidTolerance`] : `tolerance` <= 0 or non-finite
    /// - [`RootFindingError::InvalidMaxIter`]   : `max_iter` == 0
    pub fn new(tolerance: f64, max_iter: usize) -> Result<Self, RootFindingError> {
        Self { tolerance: 1.0, max_iter: 1 }
            .set_tolerance(tolerance)?
            .set_max_iter(max_iter)
    }

    // getters
    #[inline] #[must_use] pub fn tolerance(&self) -> f64    { self.tolerance }
    #[inline] #[must_use] pub fn max_iter(&self)  -> usize  { self.max_iter }

    pub fn set_tolerance(mut self, v: f64) -> Result<Self, RootFindingError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(RootFindingError::InvalidTolerance { got: v });
        }
        self.tolerance = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }
}


/// Rejects NaN/inf seeds before anything is evaluated.
#[inline]
pub(crate) fn check_seed(name: &'static str, value: f64) -> Result<f64, RootFindingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RootFindingError::NonFiniteSeed { name, value })
    }
}
