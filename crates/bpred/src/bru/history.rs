//! Branch history shift register.
//!
//! Outcomes are shifted in at bit 0, so bit `i` holds the outcome of the
//! branch trained `i` steps ago. Only the low `width` bits are kept.

use std::fmt;

use crate::common::Outcome;

/// A shift register of the most recent branch outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRegister {
    bits: u64,
    mask: u64,
    width: usize,
}

impl HistoryRegister {
    /// Creates a cleared register holding `width` bits (at most 64).
    pub const fn new(width: usize) -> Self {
        let mask = if width >= u64::BITS as usize {
            u64::MAX
        } else {
            (1u64 << width) - 1
        };
        Self {
            bits: 0,
            mask,
            width,
        }
    }

    /// Number of significant bits.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Current history value.
    #[inline(always)]
    pub const fn value(&self) -> u64 {
        self.bits
    }

    /// Returns the outcome recorded `age` steps ago (bit `age`).
    #[inline(always)]
    pub const fn bit(&self, age: usize) -> bool {
        (self.bits >> age) & 1 != 0
    }

    /// Shifts in the newest outcome and drops bits beyond the register width.
    #[inline(always)]
    pub const fn push(&mut self, outcome: Outcome) {
        self.bits = ((self.bits << 1) | outcome.bit()) & self.mask;
    }

    /// Clears all history.
    pub const fn clear(&mut self) {
        self.bits = 0;
    }
}

// Oldest bit on the left, newest on the right.
impl fmt::Display for HistoryRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        write!(f, "{:0width$b}", self.bits, width = self.width)
    }
}
