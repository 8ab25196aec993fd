//! Whitelisted constants and functions, after Python's `math` module.

use std::f64::consts;


#[derive(Debug, Clone, Copy)]
pub(crate) enum Builtin {
    Unary(&'static str, fn(f64) -> f64),
    Binary(&'static str, fn(f64, f64) -> f64),
    /// `log(x)` or `log(x, base)`
    Log,
}

impl Builtin {
    pub(crate) fn name(&self) -> &'static str {
        match *self {
            Builtin::Unary(name, _) | Builtin::Binary(name, _) => name,
            Builtin::Log => "log",
        }
    }

    /// Expected argument count for `got` arguments, or `None` if `got` is fine.
    pub(crate) fn arity_mismatch(&self, got: usize) -> Option<usize> {
        match (self, got) {
            (Builtin::Unary(..), 1) | (Builtin::Binary(..), 2) | (Builtin::Log, 1 | 2) => None,
            (Builtin::Unary(..), _) => Some(1),
            (Builtin::Binary(..), _) => Some(2),
            (Builtin::Log, 0) => Some(1),
            (Builtin::Log, _) => Some(2),
        }
    }
}


pub(crate) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi"  => Some(consts::PI),
        "e"   => Some(consts::E),
        "tau" => Some(consts::TAU),
        "inf" => Some(f64::INFINITY),
        "nan" => Some(f64::NAN),
        _ => None,
    }
}


pub(crate) fn function(name: &str) -> Option<Builtin> {
    let builtin = match name {
        "sin"      => Builtin::Unary("sin", f64::sin),
        "cos"      => Builtin::Unary("cos", f64::cos),
        "tan"      => Builtin::Unary("tan", f64::tan),
        "asin"     => Builtin::Unary("asin", f64::asin),
        "acos"     => Builtin::Unary("acos", f64::acos),
        "atan"     => Builtin::Unary("atan", f64::atan),
        "sinh"     => Builtin::Unary("sinh", f64::sinh),
        "cosh"     => Builtin::Unary("cosh", f64::cosh),
        "tanh"     => Builtin::Unary("tanh", f64::tanh),
        "asinh"    => Builtin::Unary("asinh", f64::asinh),
        "acosh"    => Builtin::Unary("acosh", f64::acosh),
        "atanh"    => Builtin::Unary("atanh", f64::atanh),
        "exp"      => Builtin::Unary("exp", f64::exp),
        "expm1"    => Builtin::Unary("expm1", f64::exp_m1),
        "log10"    => Builtin::Unary("log10", f64::log10),
        "log2"     => Builtin::Unary("log2", f64::log2),
        "log1p"    => Builtin::Unary("log1p", f64::ln_1p),
        "sqrt"     => Builtin::Unary("sqrt", f64::sqrt),
        "fabs"     => Builtin::Unary("fabs", f64::abs),
        "floor"    => Builtin::Unary("floor", f64::floor),
        "ceil"     => Builtin::Unary("ceil", f64::ceil),
        "trunc"    => Builtin::Unary("trunc", f64::trunc),
        "degrees"  => Builtin::Unary("degrees", f64::to_degrees),
        "radians"  => Builtin::Unary("radians", f64::to_radians),
        "cbrt"     => Builtin::Unary("cbrt", f64::cbrt),
        "exp2"     => Builtin::Unary("exp2", f64::exp2),
        "erf"      => Builtin::Unary("erf", libm::erf),
        "erfc"     => Builtin::Unary("erfc", libm::erfc),
        "gamma"    => Builtin::Unary("gamma", libm::tgamma),
        "lgamma"   => Builtin::Unary("lgamma", libm::lgamma),
        "pow"      => Builtin::Binary("pow", f64::powf),
        "atan2"    => Builtin::Binary("atan2", f64::atan2),
        "hypot"    => Builtin::Binary("hypot", f64::hypot),
        "fmod"     => Builtin::Binary("fmod", |a, b| a % b),
        "copysign" => Builtin::Binary("copysign", f64::copysign),
        "remainder" => Builtin::Binary("remainder", libm::remainder),
        "log"      => Builtin::Log,
        _ => return None,
    };

    Some(builtin)
}
