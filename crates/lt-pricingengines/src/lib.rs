//! # lt-pricingengines
//!
//! Pricing engines for vanilla options on a forward:
//!
//! * [`BinomialVanillaEngine`] — European or American exercise on the
//!   binomial lattice
//! * [`BlackEngine`] — Black-76 closed form, the lattice's continuous limit

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod binomial_engine;
pub mod black_engine;

pub use binomial_engine::BinomialVanillaEngine;
pub use black_engine::{black_price, BlackEngine};
