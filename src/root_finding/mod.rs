// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod function;
pub mod report;
pub(crate) mod iteration;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod regula_falsi;
pub mod secant;
pub mod newton;
pub mod fixed_point;
pub mod modified_secant;

pub use algorithms::Algorithm;
pub use config::SolveCfg;
pub use errors::{EvaluationError, RootFindingError};
pub use function::{Fallible, Function};
pub use report::{IterationRecord, RootFindingReport, TerminationReason, ToleranceSatisfied};

pub use bisection::bisection;
pub use regula_falsi::regula_falsi;
pub use secant::secant;
pub use newton::newton_raphson;
pub use fixed_point::fixed_point;
pub use modified_secant::modified_secant;
