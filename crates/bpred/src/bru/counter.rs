//! Two-bit saturating counter.
//!
//! The prediction unit inside every table-based predictor. The counter walks
//! between four states and predicts taken in the upper two.

use crate::common::Outcome;

/// Strongly not-taken counter value.
pub const STRONGLY_NOT_TAKEN: u8 = 0;
/// Weakly not-taken counter value; every table starts here.
pub const WEAKLY_NOT_TAKEN: u8 = 1;
/// Weakly taken counter value.
pub const WEAKLY_TAKEN: u8 = 2;
/// Strongly taken counter value.
pub const STRONGLY_TAKEN: u8 = 3;

/// A 2-bit up/down counter clamped to `[0, 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SaturatingCounter(u8);

impl SaturatingCounter {
    /// Creates a counter in the weakly not-taken state.
    pub const fn new() -> Self {
        Self(WEAKLY_NOT_TAKEN)
    }

    /// Creates a counter holding `value`, clamped to the counter range.
    pub fn with_value(value: u8) -> Self {
        Self(value.min(STRONGLY_TAKEN))
    }

    /// Returns the raw counter value.
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Predicts taken in the weakly or strongly taken states.
    #[inline(always)]
    pub const fn predict(self) -> Outcome {
        if self.0 >= WEAKLY_TAKEN {
            Outcome::Taken
        } else {
            Outcome::NotTaken
        }
    }

    /// Moves one step towards strongly taken.
    #[inline(always)]
    pub const fn increment(&mut self) {
        if self.0 < STRONGLY_TAKEN {
            self.0 += 1;
        }
    }

    /// Moves one step towards strongly not-taken.
    #[inline(always)]
    pub const fn decrement(&mut self) {
        if self.0 > STRONGLY_NOT_TAKEN {
            self.0 -= 1;
        }
    }

    /// Moves one step towards the resolved outcome.
    #[inline(always)]
    pub const fn train(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Taken => self.increment(),
            Outcome::NotTaken => self.decrement(),
        }
    }
}

impl Default for SaturatingCounter {
    fn default() -> Self {
        Self::new()
    }
}
