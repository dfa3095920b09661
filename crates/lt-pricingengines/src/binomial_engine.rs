//! Binomial lattice engine for vanilla options.
//!
//! Wraps the induction routines of `lt-methods` behind the
//! [`PricingEngine`] trait. The engine owns one [`LatticeWorkspace`], so
//! repeated pricing reuses the same node buffer instead of allocating.
//! Concurrent callers on a shared engine take turns on that buffer; give
//! each thread its own engine to price in parallel.

use lt_core::{
    ensure, errors::Result, Probability, Rate, Real, Settings, Size, Time, Volatility,
};
use lt_instruments::{PricingEngine, PricingResults, VanillaOptionArguments};
use lt_methods::lattice::{american, european, parameters::check_forward};
use lt_methods::{LatticeParameters, LatticeWorkspace};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Vanilla option engine on a recombining binomial lattice.
///
/// # Example
///
/// ```rust
/// use lt_instruments::{OptionType, VanillaOption};
/// use lt_pricingengines::BinomialVanillaEngine;
///
/// let engine = BinomialVanillaEngine::new(100.0, 0.2)
///     .unwrap()
///     .with_rate(0.05, 1.0)
///     .unwrap();
/// let put = VanillaOption::american(OptionType::Put, 110.0).with_steps(50);
/// let results = put.price(&engine).unwrap();
/// assert!(results.npv > 10.0);
/// ```
#[derive(Debug)]
pub struct BinomialVanillaEngine {
    forward: Real,
    volatility: Volatility,
    probability: Option<Probability>,
    discounting: Option<(Rate, Time)>,
    settings: Settings,
    workspace: Mutex<LatticeWorkspace>,
}

impl BinomialVanillaEngine {
    /// Create an engine on the given forward and total volatility, using the
    /// risk-neutral probability and no discounting.
    pub fn new(forward: Real, volatility: Volatility) -> Result<Self> {
        check_forward(forward)?;
        ensure!(
            volatility.is_finite() && volatility >= 0.0,
            "volatility must be non-negative and finite, got {volatility}"
        );
        Ok(Self {
            forward,
            volatility,
            probability: None,
            discounting: None,
            settings: Settings::default(),
            workspace: Mutex::new(LatticeWorkspace::new()),
        })
    }

    /// Induct with a fixed up-probability instead of the risk-neutral one.
    pub fn with_probability(mut self, probability: Probability) -> Result<Self> {
        ensure!(
            (0.0..=1.0).contains(&probability),
            "up-probability must lie in [0, 1], got {probability}"
        );
        self.probability = Some(probability);
        Ok(self)
    }

    /// Discount at a continuously compounded `rate` over `time` years.
    pub fn with_rate(mut self, rate: Rate, time: Time) -> Result<Self> {
        ensure!(rate.is_finite(), "rate must be finite, got {rate}");
        ensure!(
            time.is_finite() && time >= 0.0,
            "time must be non-negative and finite, got {time}"
        );
        self.discounting = Some((rate, time));
        Ok(self)
    }

    /// Replace the engine settings.
    pub fn with_settings(mut self, settings: Settings) -> Result<Self> {
        settings.validate()?;
        self.settings = settings;
        Ok(self)
    }

    /// The engine settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Lattice parameters this engine uses for `steps` steps.
    pub fn parameters(&self, steps: Size) -> Result<LatticeParameters> {
        let params = match self.probability {
            Some(p) => LatticeParameters::with_probability(self.forward, self.volatility, steps, p)?,
            None => LatticeParameters::risk_neutral(self.forward, self.volatility, steps)?,
        };
        match self.discounting {
            Some((rate, time)) => params.with_rate(rate, time),
            None => Ok(params),
        }
    }
}

impl PricingEngine<VanillaOptionArguments> for BinomialVanillaEngine {
    fn calculate(&self, args: &VanillaOptionArguments) -> Result<PricingResults> {
        args.payoff.validate()?;
        let steps = self.settings.resolve_steps(args.steps)?;
        let params = self.parameters(steps)?;

        // Buffer contents are fully rewritten per call; a poisoned lock is harmless.
        let mut workspace = self.workspace.lock().unwrap_or_else(PoisonError::into_inner);
        let buffer = workspace.levels(steps);
        let npv = if args.exercise.allows_early_exercise() {
            american::price(&params, self.forward, &args.payoff, buffer)?
        } else {
            european::price(&params, self.forward, &args.payoff, buffer)?
        };
        drop(workspace);

        debug!(
            payoff = %args.payoff,
            exercise = %args.exercise,
            steps,
            npv,
            "binomial price"
        );
        Ok(PricingResults::from_npv(npv)
            .with_result("probability", params.probability())
            .with_result("up", params.up())
            .with_result("down", params.down())
            .with_result("discount", params.discount())
            .with_result("steps", steps as Real))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lt_core::Error;
    use lt_instruments::{ExerciseType, OptionType, VanillaOption, VanillaPayoff};

    #[test]
    fn prices_match_free_functions() {
        let engine = BinomialVanillaEngine::new(100.0, 0.2).unwrap();
        let opt = VanillaOption::european(OptionType::Call, 100.0).with_steps(2);
        let r = opt.price(&engine).unwrap();
        let mut v = [0.0; 3];
        let direct = european::value(100.0, 0.2, &VanillaPayoff::Call(100.0), &mut v).unwrap();
        assert_eq!(r.npv, direct);
        assert_eq!(r.result("steps"), Some(2.0));
        assert_eq!(r.result("discount"), Some(1.0));
    }

    #[test]
    fn default_steps_come_from_settings() {
        let engine = BinomialVanillaEngine::new(100.0, 0.2)
            .unwrap()
            .with_settings(Settings::default().with_default_steps(40))
            .unwrap();
        let r = VanillaOption::european(OptionType::Put, 95.0)
            .price(&engine)
            .unwrap();
        assert_eq!(r.result("steps"), Some(40.0));
    }

    #[test]
    fn step_cap_is_enforced() {
        let engine = BinomialVanillaEngine::new(100.0, 0.2)
            .unwrap()
            .with_settings(Settings::default().with_default_steps(10).with_max_steps(100))
            .unwrap();
        let opt = VanillaOption::american(OptionType::Put, 95.0).with_steps(101);
        assert!(matches!(opt.price(&engine), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn supplied_probability_is_reported() {
        let engine = BinomialVanillaEngine::new(100.0, 0.2)
            .unwrap()
            .with_probability(0.5)
            .unwrap();
        let r = VanillaOption::new(VanillaPayoff::Forward, ExerciseType::European)
            .with_steps(10)
            .price(&engine)
            .unwrap();
        assert_eq!(r.result("probability"), Some(0.5));
        // Not a martingale under p = ½, so the forward drifts up
        assert!(r.npv > 100.0);
    }

    #[test]
    fn american_put_premium_with_discounting() {
        let engine = BinomialVanillaEngine::new(100.0, 0.2)
            .unwrap()
            .with_rate(0.05, 1.0)
            .unwrap();
        let eu = VanillaOption::european(OptionType::Put, 110.0)
            .with_steps(50)
            .price(&engine)
            .unwrap();
        let am = VanillaOption::american(OptionType::Put, 110.0)
            .with_steps(50)
            .price(&engine)
            .unwrap();
        assert!(am.npv > eu.npv);
        assert_abs_diff_eq!(
            eu.result("discount").unwrap().powi(50),
            (-0.05_f64).exp(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn invalid_construction() {
        assert!(BinomialVanillaEngine::new(0.0, 0.2).is_err());
        assert!(BinomialVanillaEngine::new(100.0, -0.2).is_err());
        let e = BinomialVanillaEngine::new(100.0, 0.2).unwrap();
        assert!(e.with_probability(1.2).is_err());
        let e = BinomialVanillaEngine::new(100.0, 0.2).unwrap();
        assert!(e.with_rate(0.05, -1.0).is_err());
    }

    #[test]
    fn negative_strike_rejected() {
        let engine = BinomialVanillaEngine::new(100.0, 0.2).unwrap();
        let opt = VanillaOption::new(VanillaPayoff::Call(-5.0), ExerciseType::European);
        assert!(opt.price(&engine).is_err());
    }
}
