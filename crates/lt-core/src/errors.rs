//! Error types for lattice-rs.
//!
//! A single `thiserror`-derived enum covers every failure the pricing
//! stack can report. Argument checks go through the [`ensure!`](crate::ensure)
//! macro.
//!
//! A pricing call either returns a finite price or one of these errors; it
//! never hands back a `NaN` that looks like a number.

use thiserror::Error;

/// The top-level error type used throughout lattice-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An input was outside its valid domain (negative step count,
    /// non-positive forward, probability outside `[0, 1]`, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The scratch buffer does not hold exactly `steps + 1` values.
    #[error("scratch buffer holds {found} values, expected {expected}")]
    BufferSize {
        /// Required length (`steps + 1`).
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },

    /// The lattice produced a non-finite value (overflowing move factors,
    /// a payoff returning `NaN`, ...).
    #[error("non-finite value {value} at lattice level {level}, node {index}")]
    NonFinite {
        /// Lattice level (0 is the root, `steps` is expiry).
        level: usize,
        /// Node index within the level (number of up-moves).
        index: usize,
        /// The offending value.
        value: f64,
    },
}

impl Error {
    /// `true` when the error reports a numerical breakdown rather than bad input.
    pub fn is_numerical(&self) -> bool {
        matches!(self, Error::NonFinite { .. })
    }
}

/// Shorthand `Result` type used throughout lattice-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidParameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lt_core::{ensure, errors::Error};
/// fn positive(x: f64) -> lt_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidParameter(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(steps: i64) -> Result<usize> {
        ensure!(steps >= 0, "step count must be non-negative, got {steps}");
        Ok(steps as usize)
    }

    #[test]
    fn ensure_maps_to_invalid_parameter() {
        assert_eq!(checked(3), Ok(3));
        let err = checked(-1).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidParameter("step count must be non-negative, got -1".into())
        );
        assert!(!err.is_numerical());
    }

    #[test]
    fn display_messages() {
        let e = Error::BufferSize {
            expected: 3,
            found: 2,
        };
        assert_eq!(e.to_string(), "scratch buffer holds 2 values, expected 3");

        let e = Error::NonFinite {
            level: 4,
            index: 1,
            value: f64::INFINITY,
        };
        assert_eq!(e.to_string(), "non-finite value inf at lattice level 4, node 1");
        assert!(e.is_numerical());
    }
}
