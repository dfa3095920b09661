//! Reusable scratch storage for backward induction.
//!
//! [`LatticeWorkspace`] owns a buffer that only ever grows. Each pricing
//! call borrows exactly `steps + 1` values from it as `&mut [Real]`; the
//! borrow ends when the call returns, on success or error alike, so the
//! storage is handed back without any cleanup step.

use lt_core::{Real, Size};

/// Pre-allocated node-value buffer shared by successive pricing calls.
///
/// Not synchronised: a workspace serves one pricing call at a time. Give
/// each thread its own.
///
/// # Examples
///
/// ```rust
/// use lt_instruments::VanillaPayoff;
/// use lt_methods::lattice::{european, LatticeWorkspace};
///
/// let mut ws = LatticeWorkspace::with_steps(200);
/// let put = VanillaPayoff::Put(95.0);
/// for n in [50, 100, 200] {
///     let v = european::value(100.0, 0.2, &put, ws.levels(n)).unwrap();
///     assert!(v > 0.0);
/// }
/// assert_eq!(ws.capacity_steps(), 200);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LatticeWorkspace {
    values: Vec<Real>,
}

impl LatticeWorkspace {
    /// Create an empty workspace; the first call allocates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workspace able to price `steps`-step lattices without
    /// reallocating.
    pub fn with_steps(steps: Size) -> Self {
        Self {
            values: vec![0.0; steps + 1],
        }
    }

    /// Largest step count served without growing.
    pub fn capacity_steps(&self) -> Size {
        self.values.len().saturating_sub(1)
    }

    /// Lend a buffer of exactly `steps + 1` values, growing if needed.
    ///
    /// Contents are whatever the previous call left behind; the engines
    /// overwrite every slot before reading it.
    pub fn levels(&mut self, steps: Size) -> &mut [Real] {
        let len = steps + 1;
        if self.values.len() < len {
            self.values.resize(len, 0.0);
        }
        &mut self.values[..len]
    }
}
