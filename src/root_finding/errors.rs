//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : structural failures of a solve call
//! │  ├ invalid configuration (tolerance, max_iter) or non-finite seeds
//! │  ├ no sign change across the bracket
//! │  ├ exact-zero secant denominator / derivative
//! │  └ evaluator failure (wraps [`EvaluationError`])
//! │
//! └ [`EvaluationError`]  : failures raised by a [`Function`](super::function::Function)
//!     ├ malformed or disallowed formula (parse time)
//!     └ division by zero / non-finite result (evaluation time)
//!
//! Running out of iterations is *not* an error; see
//! [`TerminationReason::IterationLimit`](super::report::TerminationReason::IterationLimit).


use thiserror::Error;


/// Root-finding runtime errors.
///
/// Every variant aborts the solve call; no trace is returned alongside it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindingError {
    #[error("invalid bracket [{a}, {b}]: f(a) and f(b) must have opposite signs. got f(a)={fa}, f(b)={fb}")]
    InvalidBracket { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("zero denominator in secant update between x0={x0} and x1={x1}")]
    ZeroDenominator { x0: f64, x1: f64 },

    #[error("derivative is zero at x={x}")]
    ZeroDerivative { x: f64 },

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid `{name}`: must be finite. got {value}")]
    NonFiniteSeed { name: &'static str, value: f64 },
}


/// Function evaluation errors.
///
/// ┌ Formula rejected while parsing (syntax, unknown name, wrong arity)
/// └ Formula failed at a point (division by zero, domain error / overflow)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("syntax error at position {position}: {message}")]
    Syntax { position: usize, message: String },

    #[error("unknown name `{name}`: only `x`, math constants and math functions are allowed")]
    UnknownName { name: String },

    #[error("function `{name}` takes {expected} argument(s), got {got}")]
    Arity { name: String, expected: usize, got: usize },

    #[error("division by zero evaluating at x={x}")]
    DivisionByZero { x: f64 },

    #[error("math domain error evaluating at x={x}: result {value}")]
    NonFinite { x: f64, value: f64 },

    #[error("error evaluating function at x={x}: {message}")]
    Message { x: f64, message: String },
}
