//! American valuation: exercise allowed at every node.
//!
//! Identical to [`european`](super::european) except that each collapsed
//! node is replaced by `max(continuation, payoff(node price))`. The node
//! price is rebuilt from its lattice position and the same payoff instance
//! that produced the terminal values is used throughout.
//!
//! Without discounting the forward is a martingale and a convex payoff is
//! never worth exercising early; American and European values then agree
//! up to rounding. Early exercise pays once a per-step discount is set.

use super::parameters::{check_forward, steps_for, LatticeParameters};
use super::{fill_terminal, finite};
use lt_core::{Probability, Real, Result, Volatility};
use lt_instruments::Payoff;

/// American value with the risk-neutral probability.
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

/// American value inducting with a caller-supplied up-probability.
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

/// American value on explicit lattice parameters.
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
            // f64::max drops a NaN operand, so both sides are checked first.
            let hold = finite(df * (p * buffer[i + 1] + q * buffer[i]), level, i)?;
            let exercise = finite(payoff.value(params.node_price(forward, level, i)), level, i)?;
            buffer[i] = hold.max(exercise);
        }
    }

    finite(buffer[0], 0, 0)
}
