//! Option payoffs.
//!
//! A payoff maps the underlying price at an exercise node to the amount
//! received. The lattice engines accept anything implementing [`Payoff`],
//! including plain closures; [`VanillaPayoff`] covers the three shapes
//! used in practice.

use lt_core::{ensure, Real, Result};
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// A function of the underlying price evaluated at lattice nodes.
pub trait Payoff {
    /// Compute the payoff given the underlying price at exercise/expiry.
    fn value(&self, price: Real) -> Real;
}

impl<F> Payoff for F
where
    F: Fn(Real) -> Real,
{
    #[inline]
    fn value(&self, price: Real) -> Real {
        self(price)
    }
}

/// Plain vanilla payoff.
///
/// * `Call(k)` pays `max(x − k, 0)`
/// * `Put(k)` pays `max(k − x, 0)`
/// * `Forward` pays the underlying itself, `x`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VanillaPayoff {
    /// Call struck at the given level.
    Call(Real),
    /// Put struck at the given level.
    Put(Real),
    /// Linear claim on the underlying.
    Forward,
}

impl VanillaPayoff {
    /// Create a call or put payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        match option_type {
            OptionType::Call => VanillaPayoff::Call(strike),
            OptionType::Put => VanillaPayoff::Put(strike),
        }
    }

    /// Decode the signed-strike convention used by spreadsheet front ends:
    /// `k > 0` is a call struck at `k`, `k < 0` a put struck at `-k`, and
    /// `k == 0` the forward itself.
    pub fn from_signed_strike(k: Real) -> Result<Self> {
        ensure!(k.is_finite(), "strike must be finite, got {k}");
        Ok(if k > 0.0 {
            VanillaPayoff::Call(k)
        } else if k < 0.0 {
            VanillaPayoff::Put(-k)
        } else {
            VanillaPayoff::Forward
        })
    }

    /// Strike, if any.
    pub fn strike(&self) -> Option<Real> {
        match *self {
            VanillaPayoff::Call(k) | VanillaPayoff::Put(k) => Some(k),
            VanillaPayoff::Forward => None,
        }
    }

    /// Reject non-finite or negative strikes.
    pub fn validate(&self) -> Result<()> {
        if let Some(k) = self.strike() {
            ensure!(
                k.is_finite() && k >= 0.0,
                "strike must be finite and non-negative, got {k}"
            );
        }
        Ok(())
    }
}

impl Payoff for VanillaPayoff {
    #[inline]
    fn value(&self, price: Real) -> Real {
        match *self {
            VanillaPayoff::Call(k) => (price - k).max(0.0),
            VanillaPayoff::Put(k) => (k - price).max(0.0),
            VanillaPayoff::Forward => price,
        }
    }
}

impl fmt::Display for VanillaPayoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VanillaPayoff::Call(k) => write!(f, "Call @ {k}"),
            VanillaPayoff::Put(k) => write!(f, "Put @ {k}"),
            VanillaPayoff::Forward => write!(f, "Forward"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn vanilla_values() {
        assert_eq!(VanillaPayoff::Call(100.0).value(110.0), 10.0);
        assert_eq!(VanillaPayoff::Call(100.0).value(90.0), 0.0);
        assert_eq!(VanillaPayoff::Put(100.0).value(90.0), 10.0);
        assert_eq!(VanillaPayoff::Put(100.0).value(110.0), 0.0);
        assert_eq!(VanillaPayoff::Forward.value(123.5), 123.5);
    }

    #[test]
    fn signed_strike_decoding() {
        assert_eq!(
            VanillaPayoff::from_signed_strike(95.0),
            Ok(VanillaPayoff::Call(95.0))
        );
        assert_eq!(
            VanillaPayoff::from_signed_strike(-110.0),
            Ok(VanillaPayoff::Put(110.0))
        );
        assert_eq!(
            VanillaPayoff::from_signed_strike(0.0),
            Ok(VanillaPayoff::Forward)
        );
        assert!(VanillaPayoff::from_signed_strike(Real::NAN).is_err());
    }

    #[test]
    fn closures_are_payoffs() {
        let digital = |x: Real| if x > 100.0 { 1.0 } else { 0.0 };
        assert_eq!(digital.value(101.0), 1.0);
        assert_eq!(Payoff::value(&digital, 99.0), 0.0);
    }

    #[test]
    fn strike_and_type() {
        let p = VanillaPayoff::new(OptionType::Put, 80.0);
        assert_eq!(p.strike(), Some(80.0));
        assert_eq!(p, VanillaPayoff::Put(80.0));
        assert_eq!(VanillaPayoff::Forward.strike(), None);
        assert_eq!(p.to_string(), "Put @ 80");
    }

    #[test]
    fn validate_rejects_bad_strikes() {
        assert!(VanillaPayoff::Call(100.0).validate().is_ok());
        assert!(VanillaPayoff::Call(-1.0).validate().is_err());
        assert!(VanillaPayoff::Put(Real::INFINITY).validate().is_err());
        assert!(VanillaPayoff::Forward.validate().is_ok());
    }

    proptest! {
        #[test]
        fn signed_strike_selects_by_sign(k in -1e6..1e6_f64, x in 0.0..2e6_f64) {
            let payoff = VanillaPayoff::from_signed_strike(k).unwrap();
            prop_assert!(payoff.validate().is_ok());
            let expected = if k > 0.0 {
                (x - k).max(0.0)
            } else if k < 0.0 {
                (-k - x).max(0.0)
            } else {
                x
            };
            prop_assert_eq!(payoff.value(x), expected);
            prop_assert_eq!(payoff.strike(), (k != 0.0).then_some(k.abs()));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&VanillaPayoff::Put(110.0)).unwrap();
        assert_eq!(json, r#"{"Put":110.0}"#);
        let back: VanillaPayoff = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VanillaPayoff::Put(110.0));
    }
}
