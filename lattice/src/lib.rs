//! # lattice
//!
//! Fair values of European and American vanilla options on a recombining
//! binomial lattice of the underlying forward.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! the strike-sign entry points in [`functions`].
//!
//! ## Quick start
//!
//! ```rust
//! use lattice::instruments::VanillaPayoff;
//! use lattice::methods::lattice::european;
//!
//! // Scratch buffer of n + 1 values for a 2-step lattice
//! let mut buffer = [0.0; 3];
//! let v = european::value(100.0, 0.2, &VanillaPayoff::Call(100.0), &mut buffer).unwrap();
//! assert!((v - 7.059306221466547).abs() < 1e-12);
//!
//! // Same option through the signed-strike interface
//! let w = lattice::european(100.0, 0.2, 100.0, 2).unwrap();
//! assert_eq!(v, w);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, settings, and error definitions.
pub use lt_core as core;

/// Comparison helpers and probability distributions.
pub use lt_math as math;

/// Payoffs, exercise styles, the vanilla option, and engine traits.
pub use lt_instruments as instruments;

/// The binomial lattice and its backward induction.
pub use lt_methods as methods;

/// Binomial and Black-76 pricing engines.
pub use lt_pricingengines as pricingengines;

pub mod functions;

pub use functions::{american, americanp, european, europeanp};
