//! # lt-instruments
//!
//! Vanilla option payoffs, exercise styles, the option instrument, and the
//! pricing-engine trait.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod exercise;
pub mod instrument;
pub mod option;
pub mod payoff;

pub use exercise::ExerciseType;
pub use instrument::{PricingEngine, PricingResults};
pub use option::{VanillaOption, VanillaOptionArguments};
pub use payoff::{OptionType, Payoff, VanillaPayoff};
