//! Strike-sign entry points.
//!
//! Each function takes `(f, s, k, n[, p])` where the sign of `k` selects the
//! payoff: a call struck at `k` when positive, a put struck at `−k` when
//! negative, the forward itself when zero. The step count is signed so that
//! callers holding an integer from an external source get an error, not a
//! wrap-around, for negative input. A fresh `n + 1` buffer is allocated per
//! call; use [`LatticeWorkspace`](lt_methods::LatticeWorkspace) to reuse one.

use lt_core::{ensure, Error, Probability, Real, Result, Settings, Volatility};
use lt_instruments::VanillaPayoff;
use lt_methods::lattice::{american as am, european as eu};

/// European value; risk-neutral probability.
pub fn european(f: Real, s: Volatility, k: Real, n: i64) -> Result<Real> {
    let payoff = VanillaPayoff::from_signed_strike(k)?;
    let mut buffer = scratch(n)?;
    eu::value(f, s, &payoff, &mut buffer)
}

/// European value; caller-supplied up-probability `p`.
pub fn europeanp(f: Real, s: Volatility, k: Real, n: i64, p: Probability) -> Result<Real> {
    let payoff = VanillaPayoff::from_signed_strike(k)?;
    let mut buffer = scratch(n)?;
    eu::valuep(f, s, p, &payoff, &mut buffer)
}

/// American value; risk-neutral probability.
pub fn american(f: Real, s: Volatility, k: Real, n: i64) -> Result<Real> {
    let payoff = VanillaPayoff::from_signed_strike(k)?;
    let mut buffer = scratch(n)?;
    am::value(f, s, &payoff, &mut buffer)
}

/// American value; caller-supplied up-probability `p`.
pub fn americanp(f: Real, s: Volatility, k: Real, n: i64, p: Probability) -> Result<Real> {
    let payoff = VanillaPayoff::from_signed_strike(k)?;
    let mut buffer = scratch(n)?;
    am::valuep(f, s, p, &payoff, &mut buffer)
}

fn scratch(n: i64) -> Result<Vec<Real>> {
    ensure!(n >= 0, "step count must be non-negative, got {n}");
    let requested = usize::try_from(n)
        .map_err(|_| Error::InvalidParameter(format!("{n} steps exceeds the supported lattice size")))?;
    let steps = Settings::default().resolve_steps(Some(requested))?;
    Ok(vec![0.0; steps + 1])
}
