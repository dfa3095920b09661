//! Engine settings.
//!
//! [`Settings`] is a plain value handed to pricing engines. There is no
//! process-wide instance: every engine carries its own copy, so concurrent
//! pricing never contends on shared state.

use crate::errors::Result;
use crate::{ensure, Size};

/// Step count used when an option does not ask for one.
pub const DEFAULT_STEPS: Size = 100;

/// Largest step count an engine accepts unless configured otherwise.
///
/// Pricing is `O(n²)`, so the cap bounds worst-case latency.
pub const DEFAULT_MAX_STEPS: Size = 100_000;

/// Lattice engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Number of lattice steps used when none is requested.
    pub default_steps: Size,
    /// Hard upper bound on the number of lattice steps.
    pub max_steps: Size,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_steps: DEFAULT_STEPS,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl Settings {
    /// Set the default step count.
    pub fn with_default_steps(mut self, steps: Size) -> Self {
        self.default_steps = steps;
        self
    }

    /// Set the step cap.
    pub fn with_max_steps(mut self, steps: Size) -> Self {
        self.max_steps = steps;
        self
    }

    /// Check that the settings are internally consistent.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.max_steps <= i32::MAX as Size,
            "max_steps ({}) exceeds the supported lattice size",
            self.max_steps
        );
        ensure!(
            self.default_steps <= self.max_steps,
            "default_steps ({}) exceeds max_steps ({})",
            self.default_steps,
            self.max_steps
        );
        Ok(())
    }

    /// Resolve a requested step count against these settings.
    ///
    /// `None` falls back to [`default_steps`](Self::default_steps); anything
    /// above [`max_steps`](Self::max_steps) is rejected.
    pub fn resolve_steps(&self, requested: Option<Size>) -> Result<Size> {
        let steps = requested.unwrap_or(self.default_steps);
        ensure!(
            steps <= self.max_steps,
            "{steps} steps exceeds the configured maximum of {}",
            self.max_steps
        );
        Ok(steps)
    }
}
