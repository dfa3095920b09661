//! Black-76 engine for European options on a forward.
//!
//! The continuous-time limit of the binomial lattice:
//!
//! $$C = D\,[F N(d_1) - K N(d_2)]$$
//! $$P = D\,[K N(-d_2) - F N(-d_1)]$$
//!
//! where $d_{1,2} = \ln(F/K)/s \pm s/2$ and `s` is total volatility.

use lt_core::{ensure, errors::Result, DiscountFactor, Real, Volatility};
use lt_instruments::{PricingEngine, PricingResults, VanillaOptionArguments, VanillaPayoff};
use lt_math::normal_cdf;
use lt_methods::lattice::parameters::check_forward;

/// Black-76 price of a vanilla payoff.
///
/// `volatility` is total volatility (`σ√T`) and `discount` the discount
/// factor to expiry.
pub fn black_price(
    payoff: VanillaPayoff,
    forward: Real,
    volatility: Volatility,
    discount: DiscountFactor,
) -> Result<Real> {
    check_forward(forward)?;
    ensure!(
        volatility.is_finite() && volatility >= 0.0,
        "volatility must be non-negative and finite, got {volatility}"
    );
    ensure!(
        discount.is_finite() && discount > 0.0,
        "discount factor must be positive and finite, got {discount}"
    );
    payoff.validate()?;

    let (phi, strike) = match payoff {
        VanillaPayoff::Forward => return Ok(discount * forward),
        VanillaPayoff::Call(k) => (1.0, k),
        VanillaPayoff::Put(k) => (-1.0, k),
    };

    if volatility < 1e-15 || strike == 0.0 {
        let intrinsic = (phi * (forward - strike)).max(0.0);
        return Ok(discount * intrinsic);
    }

    let d1 = (forward / strike).ln() / volatility + 0.5 * volatility;
    let d2 = d1 - volatility;
    Ok(discount * phi * (forward * normal_cdf(phi * d1) - strike * normal_cdf(phi * d2)))
}

/// Closed-form engine for European vanilla options.
#[derive(Debug, Clone)]
pub struct BlackEngine {
    forward: Real,
    volatility: Volatility,
    discount: DiscountFactor,
}

impl BlackEngine {
    /// Create an undiscounted engine.
    pub fn new(forward: Real, volatility: Volatility) -> Self {
        Self {
            forward,
            volatility,
            discount: 1.0,
        }
    }

    /// Discount the price to today with `discount`.
    pub fn with_discount(mut self, discount: DiscountFactor) -> Self {
        self.discount = discount;
        self
    }
}

impl PricingEngine<VanillaOptionArguments> for BlackEngine {
    fn calculate(&self, args: &VanillaOptionArguments) -> Result<PricingResults> {
        ensure!(
            !args.exercise.allows_early_exercise(),
            "the Black engine prices European exercise only, got {}",
            args.exercise
        );
        let npv = black_price(args.payoff, self.forward, self.volatility, self.discount)?;
        Ok(PricingResults::from_npv(npv))
    }
}
