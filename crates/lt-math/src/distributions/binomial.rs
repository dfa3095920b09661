//! Binomial distribution.
//!
//! Wraps the `statrs` crate's binomial implementation. It supplies the
//! terminal-node weights of an `n`-step lattice: node `i` is reached with
//! probability `C(n, i) pⁱ (1 − p)ⁿ⁻ⁱ`.

use lt_core::{ensure, Real, Result};
use statrs::distribution::{Binomial, Discrete};

/// Binomial distribution with `n` trials and success probability `p`.
#[derive(Debug, Clone)]
pub struct BinomialDistribution {
    dist: Binomial,
    n: u64,
}

impl BinomialDistribution {
    /// Create a binomial distribution with `n` trials and probability `p`.
    ///
    /// Zero trials is allowed and puts all mass on `k = 0`.
    pub fn new(p: Real, n: u64) -> Result<Self> {
        ensure!((0.0..=1.0).contains(&p), "p must be in [0, 1], got {p}");
        let dist = Binomial::new(p, n)
            .map_err(|e| lt_core::Error::InvalidParameter(format!("binomial({p}, {n}): {e}")))?;
        Ok(Self { dist, n })
    }

    /// Probability mass function P(X = k).
    pub fn pmf(&self, k: u64) -> Real {
        if self.n == 0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        self.dist.pmf(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn binomial_fair_coin() {
        let d = BinomialDistribution::new(0.5, 10).unwrap();
        assert_abs_diff_eq!(d.pmf(5), 252.0 / 1024.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.pmf(0), 1.0 / 1024.0, epsilon = 1e-15);
    }

    #[test]
    fn zero_trials() {
        let d = BinomialDistribution::new(0.3, 0).unwrap();
        assert_eq!(d.pmf(0), 1.0);
        assert_eq!(d.pmf(1), 0.0);
    }

    #[test]
    fn certain_outcomes() {
        let up = BinomialDistribution::new(1.0, 5).unwrap();
        assert_abs_diff_eq!(up.pmf(5), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(up.pmf(4), 0.0, epsilon = 1e-15);
        let down = BinomialDistribution::new(0.0, 5).unwrap();
        assert_abs_diff_eq!(down.pmf(0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn rejects_bad_probability() {
        assert!(BinomialDistribution::new(1.5, 3).is_err());
        assert!(BinomialDistribution::new(-0.1, 3).is_err());
        assert!(BinomialDistribution::new(Real::NAN, 3).is_err());
    }

    proptest! {
        #[test]
        fn pmf_sums_to_one(p in 0.0..=1.0_f64, n in 0u64..200) {
            let d = BinomialDistribution::new(p, n).unwrap();
            let total: Real = (0..=n).map(|k| d.pmf(k)).sum();
            prop_assert!((total - 1.0).abs() < 1e-9, "sum of PMF = {}", total);
        }

        #[test]
        fn mean_is_np(p in 0.0..=1.0_f64, n in 1u64..200) {
            let d = BinomialDistribution::new(p, n).unwrap();
            let mean: Real = (0..=n).map(|k| k as Real * d.pmf(k)).sum();
            prop_assert!((mean - n as Real * p).abs() < 1e-8, "mean = {}", mean);
        }
    }
}
