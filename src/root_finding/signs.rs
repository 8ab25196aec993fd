//! Sign utilities for bracketing algorithms.

/// Returns `true` if the product `u * v` is strictly negative.
///
/// An exact zero (or a product that underflows to zero) does not count as a
/// sign change; the bracket update then falls through to the "keep right
/// half" branch.
#[inline]
pub(crate) fn opposite_signs(u: f64, v: f64) -> bool {
    u * v < 0.0
}
