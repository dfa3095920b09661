//! # lt-math
//!
//! Mathematical utilities for lattice-rs: floating-point comparison and
//! the normal / binomial distributions (via `statrs`).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability distributions.
pub mod distributions;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::close_enough;
pub use distributions::{normal_cdf, BinomialDistribution};
