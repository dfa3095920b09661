//! # lt-methods
//!
//! Numerical methods for lattice-rs: the recombining binomial lattice on a
//! forward price and its backward-induction valuation.
//!
//! # Modules
//!
//! * [`lattice`] — lattice parameters, European and American induction,
//!   scratch-buffer workspace

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Binomial lattice: parameters, backward induction, workspace.
pub mod lattice;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{american, european, expected_payoff, LatticeParameters, LatticeWorkspace};
