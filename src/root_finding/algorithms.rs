//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! grouped by whether they maintain a bracket or iterate from open guesses.


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
    RegulaFalsi,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Secant,
    NewtonRaphson,
    FixedPoint,
    ModifiedSecant,
}

impl Algorithm {
    /// All methods, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bracket(BracketFamily::Bisection),
        Algorithm::Bracket(BracketFamily::RegulaFalsi),
        Algorithm::Open(OpenFamily::Secant),
        Algorithm::Open(OpenFamily::NewtonRaphson),
        Algorithm::Open(OpenFamily::FixedPoint),
        Algorithm::Open(OpenFamily::ModifiedSecant),
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)   => "bisection",
            Algorithm::Bracket(BracketFamily::RegulaFalsi) => "regula_falsi",
            Algorithm::Open(OpenFamily::Secant)            => "secant",
            Algorithm::Open(OpenFamily::NewtonRaphson)     => "newton_raphson",
            Algorithm::Open(OpenFamily::FixedPoint)        => "fixed_point",
            Algorithm::Open(OpenFamily::ModifiedSecant)    => "modified_secant",
        }
    }

    /// Human-readable title, as shown in menus.
    pub const fn title(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)   => "Bisection",
            Algorithm::Bracket(BracketFamily::RegulaFalsi) => "Regula Falsi",
            Algorithm::Open(OpenFamily::Secant)            => "Secant",
            Algorithm::Open(OpenFamily::NewtonRaphson)     => "Newton-Raphson",
            Algorithm::Open(OpenFamily::FixedPoint)        => "Fixed Point",
            Algorithm::Open(OpenFamily::ModifiedSecant)    => "Modified Secant",
        }
    }

    /// Column names of the [`IterationRecord`](super::report::IterationRecord)
    /// variant this method produces, in [`IterationRecord::values`](super::report::IterationRecord::values) order.
    pub const fn trace_columns(self) -> &'static [&'static str] {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)   => &["i", "a", "b", "c", "f(c)", "error"],
            Algorithm::Bracket(BracketFamily::RegulaFalsi) => &["i", "a", "b", "x", "f(x)", "error"],
            Algorithm::Open(OpenFamily::Secant)            => &["i", "x0", "x1", "x2", "f(x2)", "error"],
            Algorithm::Open(OpenFamily::NewtonRaphson)     => &["i", "x", "f(x)", "f'(x)", "x_new", "error"],
            Algorithm::Open(OpenFamily::FixedPoint)        => &["i", "x", "g(x)", "error"],
            Algorithm::Open(OpenFamily::ModifiedSecant)    => &["i", "x", "f(x)", "x_new", "error"],
        }
    }

    /// Menu number (1-based) -> algorithm.
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
