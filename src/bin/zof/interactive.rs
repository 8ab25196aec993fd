//! Prompt-driven flow: formula, method, stopping policy, then seeds.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use zof::expression::Expression;
use zof::root_finding::algorithms::{BracketFamily, OpenFamily};
use zof::root_finding::{Algorithm, SolveCfg};

use crate::{Method, Request, DEFAULT_DELTA, DEFAULT_MAX_ITER, DEFAULT_TOLERANCE};


/// Reads one trimmed answer. EOF is an error.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input ended while waiting for: {}", prompt.trim_end());
    }
    Ok(line.trim().to_string())
}

/// Parses an answer, falling back to `default` when it is empty.
fn ask_parsed<T, R, W>(input: &mut R, out: &mut W, prompt: &str, default: Option<T>) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    R: BufRead,
    W: Write,
{
    let answer = ask(input, out, prompt)?;
    match (answer.is_empty(), default) {
        (true, Some(v)) => Ok(v),
        (true, None)    => bail!("a value is required for: {}", prompt.trim_end()),
        (false, _)      => answer
            .parse()
            .with_context(|| format!("could not parse `{answer}`")),
    }
}

fn ask_formula<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Expression> {
    let source = ask(input, out, prompt)?;
    Expression::parse(&source).with_context(|| format!("invalid formula `{source}`"))
}


pub(crate) fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Request> {
    writeln!(out, "zof - root finding methods")?;
    let f = ask_formula(input, out, "Enter function f(x) (use 'x' and math functions, e.g. 'x**3 - 2*x - 5'): ")?;

    writeln!(out, "Choose method:")?;
    for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
        writeln!(out, "{} {}", i + 1, algorithm.title())?;
    }
    let choice: usize = ask_parsed(input, out, "Method number: ", None)?;
    let Some(algorithm) = Algorithm::from_choice(choice) else {
        bail!("unknown method choice {choice}");
    };

    let tol: f64 = ask_parsed(input, out, "Tolerance (e.g. 1e-6): ", Some(DEFAULT_TOLERANCE))?;
    let max_iter: usize = ask_parsed(input, out, "Max iterations (e.g. 50): ", Some(DEFAULT_MAX_ITER))?;
    let cfg = SolveCfg::new(tol, max_iter)?;

    let (function, method) = match algorithm {
        Algorithm::Bracket(family) => {
            let a = ask_parsed(input, out, "a: ", None)?;
            let b = ask_parsed(input, out, "b: ", None)?;
            let method = match family {
                BracketFamily::Bisection   => Method::Bisection { a, b },
                BracketFamily::RegulaFalsi => Method::RegulaFalsi { a, b },
            };
            (f, method)
        }
        Algorithm::Open(OpenFamily::Secant) => {
            let x0 = ask_parsed(input, out, "x0: ", None)?;
            let x1 = ask_parsed(input, out, "x1: ", None)?;
            (f, Method::Secant { x0, x1 })
        }
        Algorithm::Open(OpenFamily::NewtonRaphson) => {
            let df = ask_formula(input, out, "Enter derivative f'(x) (e.g. '3*x**2 - 2'): ")?;
            let x0 = ask_parsed(input, out, "Initial x0: ", None)?;
            (f, Method::NewtonRaphson { df, x0 })
        }
        Algorithm::Open(OpenFamily::FixedPoint) => {
            let g  = ask_formula(input, out, "Enter iteration function g(x) (so that x = g(x)): ")?;
            let x0 = ask_parsed(input, out, "Initial x0: ", None)?;
            (g, Method::FixedPoint { x0 })
        }
        Algorithm::Open(OpenFamily::ModifiedSecant) => {
            let x0    = ask_parsed(input, out, "Initial x0: ", None)?;
            let delta = ask_parsed(
                input,
                out,
                "Delta (relative perturbation, e.g. 1e-3): ",
                Some(DEFAULT_DELTA),
            )?;
            (f, Method::ModifiedSecant { x0, delta })
        }
    };

    Ok(Request { function, method, cfg })
}
