//! Sandboxed formula evaluator.
//!
//! [`Expression`] parses a formula in the single variable `x` once and then
//! evaluates it at any point. Only arithmetic, the constants `pi`, `e`,
//! `tau`, `inf`, `nan` and a whitelist of `math`-style functions are
//! accepted; any other name is rejected at parse time.
//!
//! ```
//! use zof::expression::Expression;
//! use zof::root_finding::Function;
//!
//! let f: Expression = "x**3 - 2*x - 5".parse().unwrap();
//! assert_eq!(f.evaluate(2.0).unwrap(), -1.0);
//! ```

mod builtins;
mod lexer;
mod parser;

use std::fmt;
use std::str::FromStr;

use crate::root_finding::errors::EvaluationError;
use crate::root_finding::function::Function;
use builtins::Builtin;
use parser::{BinaryOp, Expr, Parser};


/// A parsed formula `f(x)`.
#[derive(Debug, Clone)]
pub struct Expression {
    source: String,
    root:   Expr,
}

impl Expression {
    /// # Errors
    /// - [`EvaluationError::Syntax`]      : malformed formula
    /// - [`EvaluationError::UnknownName`] : a name other than `x`, a constant or a whitelisted function
    /// - [`EvaluationError::Arity`]       : a function called with the wrong number of arguments
    pub fn parse(source: &str) -> Result<Self, EvaluationError> {
        let tokens = lexer::tokenize(source)?;
        let root   = Parser::new(tokens, source.len()).parse()?;

        Ok(Self { source: source.trim().to_string(), root })
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl FromStr for Expression {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// # Errors
/// - [`EvaluationError::DivisionByZero`] : `/` or `%` by zero, or zero to a negative power
/// - [`EvaluationError::NonFinite`]      : a math function or the whole formula
///   produced NaN/inf (e.g. `sqrt(-1)`, `log(0)`, overflow)
impl Function for Expression {
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        let value = eval(&self.root, x)?;
        if !value.is_finite() {
            return Err(EvaluationError::NonFinite { x, value });
        }

        Ok(value)
    }
}


fn eval(expr: &Expr, x: f64) -> Result<f64, EvaluationError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Variable  => Ok(x),
        Expr::Neg(inner) => Ok(-eval(inner, x)?),
        Expr::Binary(left, op, right) => {
            let a = eval(left, x)?;
            let b = eval(right, x)?;
            apply_binary(*op, a, b, x)
        }
        Expr::Call(builtin, args) => {
            let values = args
                .iter()
                .map(|arg| eval(arg, x))
                .collect::<Result<Vec<_>, _>>()?;
            apply_call(builtin, &values, x)
        }
    }
}

fn apply_binary(op: BinaryOp, a: f64, b: f64, x: f64) -> Result<f64, EvaluationError> {
    let value = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(EvaluationError::DivisionByZero { x });
            }
            a / b
        }
        BinaryOp::Rem => {
            if b == 0.0 {
                return Err(EvaluationError::DivisionByZero { x });
            }
            // result takes the sign of the divisor
            a - b * (a / b).floor()
        }
        BinaryOp::Pow => {
            if a == 0.0 && b < 0.0 {
                return Err(EvaluationError::DivisionByZero { x });
            }
            let value = a.powf(b);
            // overflow, or a negative base with a fractional exponent
            if !value.is_finite() && a.is_finite() && b.is_finite() {
                return Err(EvaluationError::NonFinite { x, value });
            }
            value
        }
    };

    Ok(value)
}

fn apply_call(builtin: &Builtin, args: &[f64], x: f64) -> Result<f64, EvaluationError> {
    let value = match (builtin, args) {
        (Builtin::Unary(_, f), &[a])     => f(a),
        (Builtin::Binary(_, f), &[a, b]) => f(a, b),
        (Builtin::Log, &[a])             => a.ln(),
        (Builtin::Log, &[a, base])       => a.ln() / base.ln(),
        // arity is checked when parsing
        _ => {
            return Err(EvaluationError::Arity {
                name:     builtin.name().to_string(),
                expected: builtin.arity_mismatch(args.len()).unwrap_or(args.len()),
                got:      args.len(),
            });
        }
    };

    // math functions raise on domain errors instead of returning NaN/inf
    if !value.is_finite() && args.iter().all(|a| a.is_finite()) {
        return Err(EvaluationError::NonFinite { x, value });
    }

    Ok(value)
}
