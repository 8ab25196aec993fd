//! Root finding for scalar functions.
//!
//! Six classical methods share one contract: each takes the function
//! handle(s), its seeds and a [`SolveCfg`](root_finding::SolveCfg), and
//! returns a [`RootFindingReport`](root_finding::RootFindingReport) with the
//! root estimate, its error and the full iteration trace.
//!
//! ```
//! use zof::root_finding::{bisection, SolveCfg};
//!
//! let cfg = SolveCfg::new(1e-6, 50)?;
//! let res = bisection(&|x: f64| x * x * x - 2.0 * x - 5.0, 2.0, 3.0, &cfg)?;
//! assert!((res.root - 2.094551).abs() < 1e-5);
//! # Ok::<(), zof::root_finding::RootFindingError>(())
//! ```
//!
//! Formulas typed by a user can be turned into functions with
//! [`expression::Expression`].

pub mod expression;
pub mod root_finding;
