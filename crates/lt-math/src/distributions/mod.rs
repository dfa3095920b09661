//! Probability distributions.
//!
//! The normal distribution backs the closed-form reference prices; the
//! binomial distribution gives the terminal weights of a lattice.

pub mod binomial;
pub mod normal;

pub use binomial::BinomialDistribution;
pub use normal::normal_cdf;
