//! Vanilla option instrument.

use crate::exercise::ExerciseType;
use crate::instrument::{PricingEngine, PricingResults};
use crate::payoff::{OptionType, VanillaPayoff};
use lt_core::{errors::Result, Real, Size};

/// Arguments sent to a pricing engine for a vanilla option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOptionArguments {
    /// The payoff.
    pub payoff: VanillaPayoff,
    /// The exercise style.
    pub exercise: ExerciseType,
    /// Requested lattice steps; engines fall back to their settings when `None`.
    pub steps: Option<Size>,
}

/// A plain vanilla option on a single forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption {
    payoff: VanillaPayoff,
    exercise: ExerciseType,
    steps: Option<Size>,
}

impl VanillaOption {
    /// Create a new vanilla option.
    pub fn new(payoff: VanillaPayoff, exercise: ExerciseType) -> Self {
        Self {
            payoff,
            exercise,
            steps: None,
        }
    }

    /// Convenience: create a European call/put.
    pub fn european(option_type: OptionType, strike: Real) -> Self {
        Self::new(VanillaPayoff::new(option_type, strike), ExerciseType::European)
    }

    /// Convenience: create an American call/put.
    pub fn american(option_type: OptionType, strike: Real) -> Self {
        Self::new(VanillaPayoff::new(option_type, strike), ExerciseType::American)
    }

    /// Request a specific number of lattice steps.
    pub fn with_steps(mut self, steps: Size) -> Self {
        self.steps = Some(steps);
        self
    }

    /// The payoff.
    pub fn payoff(&self) -> VanillaPayoff {
        self.payoff
    }

    /// The exercise style.
    pub fn exercise(&self) -> ExerciseType {
        self.exercise
    }

    /// Requested lattice steps, if any.
    pub fn steps(&self) -> Option<Size> {
        self.steps
    }

    /// Get the arguments for a pricing engine.
    pub fn arguments(&self) -> VanillaOptionArguments {
        VanillaOptionArguments {
            payoff: self.payoff,
            exercise: self.exercise,
            steps: self.steps,
        }
    }

    /// Price this option using the given engine.
    pub fn price(
        &self,
        engine: &dyn PricingEngine<VanillaOptionArguments>,
    ) -> Result<PricingResults> {
        engine.calculate(&self.arguments())
    }
}
