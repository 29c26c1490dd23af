//! Tournament Branch Predictor.
//!
//! A hybrid predictor that employs a meta-predictor (Choice PHT) to select
//! between a Global predictor and a Local predictor (PAg). This allows the
//! predictor to adapt to different types of branch behaviors.
//!
//! The global component is a [`GSharePredictor`] whose table is addressed by
//! the global history alone, without the PC hash. The choice table is
//! addressed the same way.

use tracing::{debug, trace};

use super::{
    BranchPredictor,
    counter::{SaturatingCounter, WEAKLY_NOT_TAKEN},
    gshare::GSharePredictor,
};
use crate::common::Outcome;
use crate::config::{PredictorConfig, PredictorKind};

/// Tournament Predictor structure.
#[derive(Debug, Clone)]
pub struct TournamentPredictor {
    /// Global component; owns the Global History Register and global PHT.
    global: GSharePredictor,

    /// Local History Table storing history patterns per branch.
    local_history_table: Vec<u32>,
    /// Mask for indexing the Local History Table.
    local_hist_mask: usize,
    /// Width of each local history pattern.
    local_hist_bits: usize,

    /// Local Pattern History Table indexed by local history patterns.
    local_pht: Vec<SaturatingCounter>,
    /// Mask for indexing the Local PHT (and for truncating local histories).
    local_pred_mask: usize,

    /// Choice Prediction Table (2-bit counters).
    /// Selects between Global (0,1) and Local (2,3) predictors.
    choice_pht: Vec<SaturatingCounter>,
}

impl TournamentPredictor {
    /// Creates a new Tournament Predictor based on the provided configuration.
    pub fn new(config: &PredictorConfig) -> Self {
        let global = GSharePredictor::new(config);
        let local_hist_size = config.local_history_entries();
        let local_pred_size = config.local_pattern_entries();
        debug!(
            local_history_entries = local_hist_size,
            local_pattern_entries = local_pred_size,
            choice_entries = config.global_entries(),
            "building tournament predictor"
        );

        Self {
            global,

            local_history_table: vec![0; local_hist_size],
            local_hist_mask: local_hist_size - 1,
            local_hist_bits: config.lhistory_bits,

            local_pht: vec![SaturatingCounter::new(); local_pred_size],
            local_pred_mask: local_pred_size - 1,

            choice_pht: vec![SaturatingCounter::new(); config.global_entries()],
        }
    }

    /// Returns the embedded global component.
    pub const fn global(&self) -> &GSharePredictor {
        &self.global
    }

    /// Returns the embedded global component for training it on its own.
    pub(crate) const fn global_mut(&mut self) -> &mut GSharePredictor {
        &mut self.global
    }

    /// Retrieves the prediction from the Global component.
    ///
    /// Indexed by the current global history only.
    pub fn global_prediction(&self) -> Outcome {
        self.global.counter(self.global.history_index()).predict()
    }

    /// Retrieves the prediction from the Local component.
    pub fn local_prediction(&self, pc: u32) -> Outcome {
        self.local_pht[self.local_pattern_index(pc)].predict()
    }

    /// Returns the choice counter for the current global history.
    pub fn choice(&self) -> SaturatingCounter {
        self.choice_pht[self.global.history_index()]
    }

    /// Overwrites the choice counter for the current global history.
    pub fn set_choice(&mut self, counter: SaturatingCounter) {
        let idx = self.global.history_index();
        self.choice_pht[idx] = counter;
    }

    /// Returns the local history pattern recorded for `pc`.
    pub fn local_history(&self, pc: u32) -> u32 {
        self.local_history_table[pc as usize & self.local_hist_mask]
    }

    /// Returns the local PHT counter selected by `pattern`.
    pub fn local_counter(&self, pattern: u32) -> SaturatingCounter {
        self.local_pht[pattern as usize & self.local_pred_mask]
    }

    /// Returns all counters of the Local PHT.
    pub fn local_counters(&self) -> &[SaturatingCounter] {
        &self.local_pht
    }

    /// Returns all counters of the Choice PHT.
    pub fn choice_counters(&self) -> &[SaturatingCounter] {
        &self.choice_pht
    }

    fn local_pattern_index(&self, pc: u32) -> usize {
        self.local_history(pc) as usize & self.local_pred_mask
    }
}

impl BranchPredictor for TournamentPredictor {
    fn name(&self) -> &'static str {
        PredictorKind::Tournament.name()
    }

    /// Uses the Choice PHT to decide which component's prediction to return:
    /// global while the choice counter is not-taken, local otherwise.
    fn predict(&self, pc: u32) -> Outcome {
        if self.choice().value() <= WEAKLY_NOT_TAKEN {
            self.global_prediction()
        } else {
            self.local_prediction(pc)
        }
    }

    /// Updates the Choice PHT when the components disagree, then trains both
    /// component tables, and finally advances both histories. Every index is
    /// formed from the pre-update histories.
    fn train(&mut self, pc: u32, outcome: Outcome) {
        let g_idx = self.global.history_index();
        let lh_idx = pc as usize & self.local_hist_mask;
        let pattern = self.local_history_table[lh_idx];
        let l_idx = pattern as usize & self.local_pred_mask;

        let global_pred = self.global.counter(g_idx).predict();
        let local_pred = self.local_pht[l_idx].predict();

        if global_pred != local_pred {
            let choice = &mut self.choice_pht[g_idx];
            if global_pred == outcome {
                choice.decrement();
            } else {
                choice.increment();
            }
            trace!(pc, %outcome, choice = choice.value(), "tournament choice moved");
        }

        self.global.counter_mut(g_idx).train(outcome);
        self.local_pht[l_idx].train(outcome);

        self.global.push_history(outcome);
        self.local_history_table[lh_idx] =
            ((pattern << 1) | outcome.bit() as u32) & (self.local_pred_mask as u32);
    }

    fn reset(&mut self) {
        self.global.reset();
        self.local_history_table.fill(0);
        self.local_pht.fill(SaturatingCounter::new());
        self.choice_pht.fill(SaturatingCounter::new());
    }

    fn storage_bits(&self) -> usize {
        self.global.storage_bits()
            + self.local_history_table.len() * self.local_hist_bits
            + 2 * self.local_pht.len()
            + 2 * self.choice_pht.len()
    }
}
