//! Binomial lattice on a forward price.
//!
//! # Overview
//!
//! * [`LatticeParameters`] — up/down factors, up-probability, per-step discount
//! * [`european`] — backward induction without early exercise
//! * [`american`] — backward induction with exercise at every node
//! * [`LatticeWorkspace`] — reusable scratch buffer
//! * [`expected_payoff`] — closed-form terminal expectation, for cross-checks
//!
//! Both valuation modules share the terminal phase: slot `i` of the
//! `n + 1`-value buffer receives `payoff(f · uⁱ · dⁿ⁻ⁱ)`.

pub mod american;
pub mod european;
pub mod parameters;
pub mod workspace;

pub use parameters::{risk_neutral_probability, LatticeParameters};
pub use workspace::LatticeWorkspace;

use lt_core::{Error, Real, Result, Size};
use lt_instruments::Payoff;
use lt_math::BinomialDistribution;
use tracing::warn;

/// Pass `value` through, or report where the lattice broke down.
#[inline]
pub(crate) fn finite(value: Real, level: Size, index: Size) -> Result<Real> {
    if value.is_finite() {
        Ok(value)
    } else {
        warn!(level, index, value, "non-finite lattice value");
        Err(Error::NonFinite {
            level,
            index,
            value,
        })
    }
}

/// Write the terminal payoffs into `buffer`, which has already been sized.
pub(crate) fn fill_terminal<P>(
    params: &LatticeParameters,
    forward: Real,
    payoff: &P,
    buffer: &mut [Real],
) -> Result<()>
where
    P: Payoff + ?Sized,
{
    let n = params.steps();
    for (i, slot) in buffer.iter_mut().enumerate() {
        *slot = finite(payoff.value(params.node_price(forward, n, i)), n, i)?;
    }
    Ok(())
}

/// European value as a direct expectation over terminal nodes:
/// `Dⁿ · Σᵢ C(n, i) pⁱ (1 − p)ⁿ⁻ⁱ · payoff(f · uⁱ · dⁿ⁻ⁱ)`.
///
/// Agrees with [`european::price`] up to rounding; it allocates nothing but
/// sums in a different order, so it is not bit-identical.
pub fn expected_payoff<P>(params: &LatticeParameters, forward: Real, payoff: &P) -> Result<Real>
where
    P: Payoff + ?Sized,
{
    parameters::check_forward(forward)?;
    let n = params.steps();
    let weights = BinomialDistribution::new(params.probability(), n as u64)?;
    let mut sum = 0.0;
    for i in 0..=n {
        let x = finite(payoff.value(params.node_price(forward, n, i)), n, i)?;
        sum += weights.pmf(i as u64) * x;
    }
    finite(params.discount().powi(n as i32) * sum, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lt_instruments::VanillaPayoff;

    #[test]
    fn terminal_fill_is_positional() {
        let params = LatticeParameters::risk_neutral(100.0, 0.3, 5).unwrap();
        let mut v = [0.0; 6];
        fill_terminal(&params, 100.0, &VanillaPayoff::Forward, &mut v).unwrap();
        for (i, &x) in v.iter().enumerate() {
            assert_eq!(x, params.node_price(100.0, 5, i));
        }
        assert!(v.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn expected_forward_is_forward() {
        let params = LatticeParameters::risk_neutral(80.0, 0.4, 120).unwrap();
        let e = expected_payoff(&params, 80.0, &VanillaPayoff::Forward).unwrap();
        assert_abs_diff_eq!(e, 80.0, epsilon = 1e-9);
    }

    #[test]
    fn expected_payoff_zero_steps() {
        let params = LatticeParameters::risk_neutral(100.0, 0.2, 0).unwrap();
        let e = expected_payoff(&params, 100.0, &VanillaPayoff::Put(110.0)).unwrap();
        assert_eq!(e, 10.0);
    }

    #[test]
    fn finite_passes_and_reports() {
        assert_eq!(finite(1.5, 0, 0), Ok(1.5));
        assert!(matches!(
            finite(Real::NAN, 3, 2),
            Err(Error::NonFinite {
                level: 3,
                index: 2,
                ..
            })
        ));
    }
}
