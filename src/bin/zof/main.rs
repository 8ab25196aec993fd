//! CLI for the zof root finders

mod interactive;
mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use zof::expression::Expression;
use zof::root_finding::algorithms::{BracketFamily, OpenFamily};
use zof::root_finding::{
    bisection, fixed_point, modified_secant, newton_raphson, regula_falsi, secant, Algorithm,
    RootFindingReport, SolveCfg,
};

pub(crate) const DEFAULT_TOLERANCE: f64 = 1e-6;
pub(crate) const DEFAULT_MAX_ITER: usize = 50;
pub(crate) const DEFAULT_DELTA: f64 = 1e-3;

#[derive(Parser)]
#[command(name = "zof")]
#[command(version, about = "Find a root of f(x) with one of six iterative methods", long_about = None)]
struct Cli {
    /// Log solver parameters and outcome to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Method to run; prompts interactively when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug)]
struct Stop {
    /// Convergence tolerance for |f(x)| and the step error
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tol: f64,

    /// Iteration cap
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: usize,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bisection on the bracket [a, b]
    Bisection {
        /// f(x), e.g. "x**3 - 2*x - 5"
        #[arg(short, long)]
        f: String,
        #[arg(long, allow_negative_numbers = true)]
        a: f64,
        #[arg(long, allow_negative_numbers = true)]
        b: f64,
        #[command(flatten)]
        stop: Stop,
    },

    /// Regula falsi (false position) on the bracket [a, b]
    RegulaFalsi {
        /// f(x)
        #[arg(short, long)]
        f: String,
        #[arg(long, allow_negative_numbers = true)]
        a: f64,
        #[arg(long, allow_negative_numbers = true)]
        b: f64,
        #[command(flatten)]
        stop: Stop,
    },

    /// Secant method from two initial guesses
    Secant {
        /// f(x)
        #[arg(short, long)]
        f: String,
        #[arg(long, allow_negative_numbers = true)]
        x0: f64,
        #[arg(long, allow_negative_numbers = true)]
        x1: f64,
        #[command(flatten)]
        stop: Stop,
    },

    /// Newton-Raphson with an explicit derivative
    NewtonRaphson {
        /// f(x)
        #[arg(short, long)]
        f: String,
        /// f'(x), e.g. "3*x**2 - 2"
        #[arg(short, long)]
        df: String,
        #[arg(long, allow_negative_numbers = true)]
        x0: f64,
        #[command(flatten)]
        stop: Stop,
    },

    /// Fixed-point iteration x = g(x)
    FixedPoint {
        /// g(x), e.g. "cos(x)"
        #[arg(short, long)]
        g: String,
        #[arg(long, allow_negative_numbers = true)]
        x0: f64,
        #[command(flatten)]
        stop: Stop,
    },

    /// Modified secant with relative perturbation delta
    ModifiedSecant {
        /// f(x)
        #[arg(short, long)]
        f: String,
        #[arg(long, allow_negative_numbers = true)]
        x0: f64,
        #[arg(long, default_value_t = DEFAULT_DELTA, allow_negative_numbers = true)]
        delta: f64,
        #[command(flatten)]
        stop: Stop,
    },

    /// Prompt for the formula, method and parameters
    Interactive,
}


/// Method and its seeds, with the auxiliary formula where one is needed.
#[derive(Debug)]
pub(crate) enum Method {
    Bisection      { a: f64, b: f64 },
    RegulaFalsi    { a: f64, b: f64 },
    Secant         { x0: f64, x1: f64 },
    NewtonRaphson  { df: Expression, x0: f64 },
    FixedPoint     { x0: f64 },
    ModifiedSecant { x0: f64, delta: f64 },
}

impl Method {
    pub(crate) fn algorithm(&self) -> Algorithm {
        match self {
            Method::Bisection { .. }      => Algorithm::Bracket(BracketFamily::Bisection),
            Method::RegulaFalsi { .. }    => Algorithm::Bracket(BracketFamily::RegulaFalsi),
            Method::Secant { .. }         => Algorithm::Open(OpenFamily::Secant),
            Method::NewtonRaphson { .. }  => Algorithm::Open(OpenFamily::NewtonRaphson),
            Method::FixedPoint { .. }     => Algorithm::Open(OpenFamily::FixedPoint),
            Method::ModifiedSecant { .. } => Algorithm::Open(OpenFamily::ModifiedSecant),
        }
    }
}

/// A fully specified solve: `function` is f(x), or g(x) for fixed-point.
#[derive(Debug)]
pub(crate) struct Request {
    pub function: Expression,
    pub method:   Method,
    pub cfg:      SolveCfg,
}

impl Request {
    pub(crate) fn solve(&self) -> Result<RootFindingReport> {
        let f   = &self.function;
        let cfg = &self.cfg;
        let report = match &self.method {
            Method::Bisection { a, b }          => bisection(f, *a, *b, cfg)?,
            Method::RegulaFalsi { a, b }        => regula_falsi(f, *a, *b, cfg)?,
            Method::Secant { x0, x1 }           => secant(f, *x0, *x1, cfg)?,
            Method::NewtonRaphson { df, x0 }    => newton_raphson(f, df, *x0, cfg)?,
            Method::FixedPoint { x0 }           => fixed_point(f, *x0, cfg)?,
            Method::ModifiedSecant { x0, delta } => modified_secant(f, *x0, *delta, cfg)?,
        };

        Ok(report)
    }
}


fn parse_formula(label: &str, source: &str) -> Result<Expression> {
    Expression::parse(source).with_context(|| format!("invalid {label} `{source}`"))
}

fn build_request(command: Commands) -> Result<Request> {
    let (function, method, stop) = match command {
        Commands::Bisection { f, a, b, stop } => {
            (parse_formula("f(x)", &f)?, Method::Bisection { a, b }, stop)
        }
        Commands::RegulaFalsi { f, a, b, stop } => {
            (parse_formula("f(x)", &f)?, Method::RegulaFalsi { a, b }, stop)
        }
        Commands::Secant { f, x0, x1, stop } => {
            (parse_formula("f(x)", &f)?, Method::Secant { x0, x1 }, stop)
        }
        Commands::NewtonRaphson { f, df, x0, stop } => {
            let df = parse_formula("f'(x)", &df)?;
            (parse_formula("f(x)", &f)?, Method::NewtonRaphson { df, x0 }, stop)
        }
        Commands::FixedPoint { g, x0, stop } => {
            (parse_formula("g(x)", &g)?, Method::FixedPoint { x0 }, stop)
        }
        Commands::ModifiedSecant { f, x0, delta, stop } => {
            (parse_formula("f(x)", &f)?, Method::ModifiedSecant { x0, delta }, stop)
        }
        Commands::Interactive => {
            let stdin = std::io::stdin();
            return interactive::prompt(&mut stdin.lock(), &mut std::io::stdout());
        }
    };

    let cfg = SolveCfg::new(stop.tol, stop.max_iter)?;
    Ok(Request { function, method, cfg })
}


fn run(request: &Request) -> Result<()> {
    let algorithm = request.method.algorithm();
    info!(
        %algorithm,
        function = %request.function,
        tol = request.cfg.tolerance(),
        max_iter = request.cfg.max_iter(),
        "solving"
    );
    debug!(method = ?request.method, "seeds");

    let report = request
        .solve()
        .with_context(|| format!("{} failed", algorithm.title()))?;

    debug!(
        iterations = report.iterations(),
        evaluations = report.evaluations,
        root = report.root,
        error = report.error,
        "finished"
    );
    if !report.converged() {
        warn!(max_iter = request.cfg.max_iter(), "iteration limit reached before tolerance");
    }

    print!("{}", render::report(algorithm, &report));
    Ok(())
}


fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "zof=debug" } else { "zof=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let request = build_request(cli.command.unwrap_or(Commands::Interactive))?;

    run(&request)
}
