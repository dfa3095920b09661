//! Standard normal distribution.

use lt_core::Real;
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// The standard normal cumulative distribution function Φ(x).
///
/// Evaluated as `erfc(-x/√2) / 2`, so the lower tail does not lose digits
/// to cancellation. Absolute accuracy is about `1e-11`, bounded by the
/// `statrs` `erfc` approximation.
pub fn normal_cdf(x: Real) -> Real {
    if x == 0.0 {
        return 0.5;
    }
    0.5 * erfc(-x / SQRT_2)
}
