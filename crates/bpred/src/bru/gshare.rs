//! GShare Branch Predictor.
//!
//! GShare correlates global branch history with the program counter using an XOR
//! hash. This allows the predictor to distinguish the same branch instruction
//! in different execution contexts.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `predict()`: O(1)
//!   - `train()`: O(1)
//! - **Space Complexity:** O(2^N) where N is the history length (14 bits = 4KB for 2-bit counters)
//! - **Hardware Cost:** Moderate - single PHT lookup, XOR, and counter update
//! - **Best Case:** Correlated branches where outcome depends on recent history
//! - **Worst Case:** Uncorrelated branches or history length too short/long for pattern

use tracing::debug;

use super::{BranchPredictor, counter::SaturatingCounter, history::HistoryRegister};
use crate::common::Outcome;
use crate::config::{PredictorConfig, PredictorKind};

/// GShare Predictor structure.
#[derive(Debug, Clone)]
pub struct GSharePredictor {
    /// Global History Register storing recent branch outcomes.
    ghr: HistoryRegister,
    /// Pattern History Table containing 2-bit saturating counters.
    pht: Vec<SaturatingCounter>,
    /// Mask for indexing the PHT.
    mask: usize,
}

impl GSharePredictor {
    /// Creates a new GShare Predictor with `2^ghistory_bits` counters.
    pub fn new(config: &PredictorConfig) -> Self {
        let size = config.global_entries();
        debug!(
            ghistory_bits = config.ghistory_bits,
            entries = size,
            "building gshare predictor"
        );

        Self {
            ghr: HistoryRegister::new(config.ghistory_bits),
            pht: vec![SaturatingCounter::new(); size],
            mask: size - 1,
        }
    }

    /// Calculates the index into the Pattern History Table.
    ///
    /// XORs the PC with the Global History Register and keeps the low bits.
    #[inline(always)]
    pub const fn index(&self, pc: u32) -> usize {
        (self.ghr.value() as usize ^ pc as usize) & self.mask
    }

    /// Returns the Global History Register.
    pub const fn history(&self) -> &HistoryRegister {
        &self.ghr
    }

    /// Current history value, used directly as an index by the tournament.
    #[inline(always)]
    pub(crate) const fn history_index(&self) -> usize {
        self.ghr.value() as usize & self.mask
    }

    /// Returns the counter at `idx`.
    pub fn counter(&self, idx: usize) -> SaturatingCounter {
        self.pht[idx & self.mask]
    }

    /// Returns a mutable reference to the counter at `idx`.
    pub(crate) fn counter_mut(&mut self, idx: usize) -> &mut SaturatingCounter {
        &mut self.pht[idx & self.mask]
    }

    /// Returns all counters of the Pattern History Table.
    pub fn counters(&self) -> &[SaturatingCounter] {
        &self.pht
    }

    /// Shifts the resolved outcome into the Global History Register.
    #[inline(always)]
    pub(crate) const fn push_history(&mut self, outcome: Outcome) {
        self.ghr.push(outcome);
    }
}

impl BranchPredictor for GSharePredictor {
    fn name(&self) -> &'static str {
        PredictorKind::GShare.name()
    }

    /// Predicts taken if the 2-bit counter at the hashed index is 2 or 3.
    fn predict(&self, pc: u32) -> Outcome {
        self.pht[self.index(pc)].predict()
    }

    /// Updates the 2-bit saturating counter selected by the pre-update history,
    /// then shifts the new outcome into the Global History Register.
    fn train(&mut self, pc: u32, outcome: Outcome) {
        let idx = self.index(pc);
        self.pht[idx].train(outcome);
        self.ghr.push(outcome);
    }

    fn reset(&mut self) {
        self.ghr.clear();
        self.pht.fill(SaturatingCounter::new());
    }

    fn storage_bits(&self) -> usize {
        self.ghr.width() + 2 * self.pht.len()
    }
}
