//! Option exercise styles.
//!
//! An exercise style defines *when* an option can be exercised. Lattice
//! time is measured in steps, so only the style itself is carried.

use std::fmt;

/// Type of exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExerciseType {
    /// Can only be exercised at expiry.
    #[default]
    European,
    /// Can be exercised at any lattice node up to expiry.
    American,
}

impl ExerciseType {
    /// `true` if the holder may exercise before expiry.
    pub fn allows_early_exercise(self) -> bool {
        matches!(self, ExerciseType::American)
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseType::European => write!(f, "European"),
            ExerciseType::American => write!(f, "American"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_exercise_flag() {
        assert!(!ExerciseType::European.allows_early_exercise());
        assert!(ExerciseType::American.allows_early_exercise());
        assert_eq!(ExerciseType::default(), ExerciseType::European);
    }
}
