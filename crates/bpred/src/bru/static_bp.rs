//! Static Branch Predictor.
//!
//! Implements an "Always Taken" prediction policy. It keeps no state, so
//! training is a no-op.

use super::BranchPredictor;
use crate::common::Outcome;
use crate::config::PredictorKind;

/// Static Branch Predictor structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPredictor;

impl StaticPredictor {
    /// Creates a new Static Predictor.
    pub const fn new() -> Self {
        Self
    }
}

impl BranchPredictor for StaticPredictor {
    fn name(&self) -> &'static str {
        PredictorKind::Static.name()
    }

    /// Always predicts taken.
    fn predict(&self, _pc: u32) -> Outcome {
        Outcome::Taken
    }

    /// Ignores the outcome; there is no history to update.
    fn train(&mut self, _pc: u32, _outcome: Outcome) {}

    fn reset(&mut self) {}

    fn storage_bits(&self) -> usize {
        0
    }
}
