//! Branch outcome type.
//!
//! A resolved (or predicted) conditional branch direction. Predictors return
//! an [`Outcome`] from `predict` and receive the resolved one in `train`.

use std::fmt;
use std::ops::Not;

/// Direction of a conditional branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// The branch falls through.
    #[default]
    NotTaken,
    /// The branch jumps to its target.
    Taken,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Taken`].
    #[inline(always)]
    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Taken)
    }

    /// Returns the history bit shifted into a history register (1 = taken).
    #[inline(always)]
    pub const fn bit(self) -> u64 {
        self.is_taken() as u64
    }

    /// Returns the bipolar encoding used by the perceptron (+1 taken, -1 not-taken).
    #[inline(always)]
    pub const fn signum(self) -> i32 {
        if self.is_taken() { 1 } else { -1 }
    }
}

impl From<bool> for Outcome {
    fn from(taken: bool) -> Self {
        if taken { Self::Taken } else { Self::NotTaken }
    }
}

impl From<Outcome> for bool {
    fn from(outcome: Outcome) -> Self {
        outcome.is_taken()
    }
}

impl Not for Outcome {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::Taken => Self::NotTaken,
            Self::NotTaken => Self::Taken,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Taken => write!(f, "T"),
            Self::NotTaken => write!(f, "N"),
        }
    }
}
