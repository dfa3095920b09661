//! # lt-core
//!
//! Core types, settings, and error definitions for lattice-rs.
//!
//! This crate provides the building blocks shared across the workspace:
//! numeric type aliases, the error enum with its `ensure!`
//! macro, and the engine [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Engine settings (default and maximum step counts).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A volatility level expressed as a decimal.
///
/// Lattice volatilities are total (already scaled by `√T`).
pub type Volatility = Real;

/// A probability in `[0, 1]`.
pub type Probability = Real;

/// A discount factor.
pub type DiscountFactor = Real;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;
