//! Floating-point comparison.

use lt_core::Real;

/// Return `true` if `|a - b| <= n * epsilon` where `epsilon` is the
/// machine-epsilon relative to `max(|a|, |b|)`.
#[inline]
pub fn close_enough(a: Real, b: Real, n: u32) -> bool {
    if a == b {
        return true;
    }
    let eps = (a.abs().max(b.abs())) * f64::EPSILON * n as f64;
    (a - b).abs() <= eps
}
