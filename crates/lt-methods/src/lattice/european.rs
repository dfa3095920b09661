//! European valuation: payoff at expiry only.
//!
//! The scratch buffer is filled with terminal payoffs and then collapsed in
//! place, one level per pass, from index 0 upwards:
//!
//! ```text
//! v[i] ← D · (p · v[i+1] + (1 − p) · v[i])      i = 0..level
//! ```
//!
//! Each pass reads `v[i+1]` before it is overwritten, so no second buffer
//! is needed. The loop order and grouping never change, which makes the
//! result bit-for-bit reproducible.

use super::parameters::{check_forward, steps_for, LatticeParameters};
use super::{fill_terminal, finite};
use lt_core::{Probability, Real, Result, Volatility};
use lt_instruments::Payoff;

/// European value with the risk-neutral probability.
///
/// The step count is `buffer.len() − 1`.
pub fn value<P>(forward: Real, volatility: Volatility, payoff: &P, buffer: &mut [Real]) -> Result<Real>
where
    P: Payoff + ?Sized,
{
    let steps = steps_for(buffer)?;
    let params = LatticeParameters::risk_neutral(forward, volatility, steps)?;
    price(&params, forward, payoff, buffer)
}

/// European value inducting with a caller-supplied up-probability.
pub fn valuep<P>(
    forward: Real,
    volatility: Volatility,
    probability: Probability,
    payoff: &P,
    buffer: &mut [Real],
) -> Result<Real>
where
    P: Payoff + ?Sized,
{
    let steps = steps_for(buffer)?;
    let params = LatticeParameters::with_probability(forward, volatility, steps, probability)?;
    price(&params, forward, payoff, buffer)
}

/// European value on explicit lattice parameters (including any per-step
/// discount).
#[allow(clippy::needless_range_loop)]
pub fn price<P>(
    params: &LatticeParameters,
    forward: Real,
    payoff: &P,
    buffer: &mut [Real],
) -> Result<Real>
where
    P: Payoff + ?Sized,
{
    params.check_buffer(buffer)?;
    check_forward(forward)?;
    fill_terminal(params, forward, payoff, buffer)?;

    let p = params.probability();
    let q = 1.0 - p;
    let df = params.discount();
    for level in (0..params.steps()).rev() {
        for i in 0..=level {
            buffer[i] = finite(df * (p * buffer[i + 1] + q * buffer[i]), level, i)?;
        }
    }

    Ok(buffer[0])
}
