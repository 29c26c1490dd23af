//! Shared helpers for predictor tests.

/// Predict/train replay harness.
pub mod harness;

use bpred_core::{BranchPredictor, Outcome, PredictorConfig, PredictorKind};

pub use harness::BranchHarness;

/// Builds a configuration for `kind` with explicit table widths.
pub fn config(kind: PredictorKind, ghist: usize, lhist: usize, index: usize) -> PredictorConfig {
    PredictorConfig {
        ghistory_bits: ghist,
        lhistory_bits: lhist,
        pc_index_bits: index,
        ..PredictorConfig::for_kind(kind)
    }
}

/// Train a predictor by feeding `n` iterations of the same branch outcome.
pub fn train<P: BranchPredictor>(bp: &mut P, pc: u32, outcome: Outcome, n: usize) {
    for _ in 0..n {
        bp.train(pc, outcome);
    }
}

/// Turns a list of `(pc, taken)` pairs into predictor inputs.
pub fn branches(raw: &[(u32, bool)]) -> Vec<(u32, Outcome)> {
    raw.iter().map(|&(pc, taken)| (pc, Outcome::from(taken))).collect()
}
