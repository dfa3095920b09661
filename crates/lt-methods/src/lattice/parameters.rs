//! Lattice parameters: move factors, up-probability, and per-step discount.
//!
//! The lattice moves the forward by `u = exp(s/√n)` or `d = exp(−s/√n)` per
//! step, so the log-price after `n` steps has variance `s²` in the limit and
//! `s` is the total volatility over the option's life. The risk-neutral
//! up-probability solves `p·u + (1 − p)·d = 1`, which makes the forward a
//! martingale on the lattice.
//!
//! Node `(level, index)` is the state after `index` up-moves and
//! `level − index` down-moves, i.e. a log-distance of `(2·index − level)·dx`
//! from the forward with `dx = s/√n`. Its price is always rebuilt from that
//! position, never by walking the lattice, so rounding does not accumulate
//! across levels.

use lt_core::{
    ensure, DiscountFactor, Error, Probability, Rate, Real, Result, Size, Time, Volatility,
};
use lt_math::close_enough;
use tracing::debug;

/// Derived quantities consumed by the valuation engines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeParameters {
    steps: Size,
    dx: Real,
    up: Real,
    down: Real,
    probability: Probability,
    discount: DiscountFactor,
}

impl LatticeParameters {
    /// Derive `(u, d, p)` from forward, total volatility, and step count.
    ///
    /// `p` is the risk-neutral probability. With zero volatility or zero
    /// steps the lattice is flat and `p` is reported as ½.
    pub fn risk_neutral(forward: Real, volatility: Volatility, steps: Size) -> Result<Self> {
        let (dx, up, down) = move_factors(forward, volatility, steps)?;
        let probability = risk_neutral_probability(up, down);
        ensure!(
            (0.0..=1.0).contains(&probability),
            "volatility {volatility} with {steps} steps gives up-probability {probability}"
        );
        debug!(steps, up, down, probability, "derived risk-neutral lattice");
        Ok(Self {
            steps,
            dx,
            up,
            down,
            probability,
            discount: 1.0,
        })
    }

    /// Derive `(u, d)` as in [`risk_neutral`](Self::risk_neutral) but induct
    /// with the caller's up-probability.
    pub fn with_probability(
        forward: Real,
        volatility: Volatility,
        steps: Size,
        probability: Probability,
    ) -> Result<Self> {
        ensure!(
            (0.0..=1.0).contains(&probability),
            "up-probability must lie in [0, 1], got {probability}"
        );
        let (dx, up, down) = move_factors(forward, volatility, steps)?;
        debug!(steps, up, down, probability, "derived lattice with supplied probability");
        Ok(Self {
            steps,
            dx,
            up,
            down,
            probability,
            discount: 1.0,
        })
    }

    /// Discount every level collapse by `discount`.
    pub fn with_step_discount(mut self, discount: DiscountFactor) -> Result<Self> {
        ensure!(
            discount.is_finite() && discount > 0.0,
            "per-step discount factor must be positive and finite, got {discount}"
        );
        self.discount = discount;
        Ok(self)
    }

    /// Discount at a continuously compounded `rate` over `time` years,
    /// spread evenly across the steps.
    ///
    /// A zero-step lattice has no collapse to discount.
    pub fn with_rate(self, rate: Rate, time: Time) -> Result<Self> {
        ensure!(rate.is_finite(), "rate must be finite, got {rate}");
        ensure!(
            time.is_finite() && time >= 0.0,
            "time must be non-negative and finite, got {time}"
        );
        if self.steps == 0 {
            return Ok(self);
        }
        self.with_step_discount((-rate * time / self.steps as Real).exp())
    }

    /// Number of steps `n`.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Log-price step `dx = s/√n` (0 on a zero-step lattice).
    pub fn log_step(&self) -> Real {
        self.dx
    }

    /// Up-move factor `u`.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Down-move factor `d`.
    pub fn down(&self) -> Real {
        self.down
    }

    /// Up-probability `p` used in the induction.
    pub fn probability(&self) -> Probability {
        self.probability
    }

    /// Discount factor applied per level collapse (1 when undiscounted).
    pub fn discount(&self) -> DiscountFactor {
        self.discount
    }

    /// Required scratch-buffer length, `n + 1`.
    pub fn buffer_len(&self) -> Size {
        self.steps + 1
    }

    /// Underlying price at node `(level, index)`: `f · exp((2·index − level)·dx)`.
    ///
    /// Equal to `f · uⁱⁿᵈᵉˣ · dˡᵉᵛᵉˡ⁻ⁱⁿᵈᵉˣ`, but the up and down moves cancel
    /// in the exponent, so a node overflows only when its own price does.
    #[inline]
    pub fn node_price(&self, forward: Real, level: Size, index: Size) -> Real {
        debug_assert!(index <= level && level <= self.steps);
        let moves = 2 * index as i64 - level as i64;
        forward * (moves as Real * self.dx).exp()
    }

    /// Fail unless `buffer` holds exactly `n + 1` values.
    pub fn check_buffer(&self, buffer: &[Real]) -> Result<()> {
        if buffer.len() != self.buffer_len() {
            return Err(Error::BufferSize {
                expected: self.buffer_len(),
                found: buffer.len(),
            });
        }
        Ok(())
    }
}

/// The probability making `p·u + (1 − p)·d = 1`.
///
/// Returns ½ for a flat lattice (`u` and `d` equal to within rounding),
/// where every probability prices identically.
pub fn risk_neutral_probability(up: Real, down: Real) -> Probability {
    if close_enough(up, down, 1) {
        0.5
    } else {
        (1.0 - down) / (up - down)
    }
}

/// Step count implied by a scratch buffer of length `n + 1`.
pub fn steps_for(buffer: &[Real]) -> Result<Size> {
    match buffer.len() {
        0 => Err(Error::BufferSize {
            expected: 1,
            found: 0,
        }),
        len => Ok(len - 1),
    }
}

/// Reject forwards that are non-positive or non-finite.
pub fn check_forward(forward: Real) -> Result<()> {
    ensure!(
        forward.is_finite() && forward > 0.0,
        "forward must be positive and finite, got {forward}"
    );
    Ok(())
}

fn move_factors(forward: Real, volatility: Volatility, steps: Size) -> Result<(Real, Real, Real)> {
    check_forward(forward)?;
    ensure!(
        volatility.is_finite() && volatility >= 0.0,
        "volatility must be non-negative and finite, got {volatility}"
    );
    ensure!(
        steps <= i32::MAX as Size,
        "{steps} steps exceeds the supported lattice size"
    );
    if steps == 0 {
        return Ok((0.0, 1.0, 1.0));
    }
    let dx = volatility / (steps as Real).sqrt();
    let up = dx.exp();
    let down = (-dx).exp();
    if !up.is_finite() || down == 0.0 {
        return Err(Error::NonFinite {
            level: 1,
            index: 1,
            value: up,
        });
    }
    Ok((dx, up, down))
}
