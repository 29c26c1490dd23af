//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait that every prediction
//! family and the dispatching [`Predictor`](super::Predictor) implement.

use crate::common::Outcome;

/// Trait for branch direction prediction algorithms.
///
/// A trace driver calls [`predict`](Self::predict) once per conditional
/// branch and then [`train`](Self::train) with the resolved outcome of that
/// same branch, before moving on to the next one.
pub trait BranchPredictor {
    /// Name reported by trace drivers.
    fn name(&self) -> &'static str;

    /// Predicts the direction of the branch at `pc`.
    ///
    /// Never mutates predictor state: calling it twice in a row returns the
    /// same outcome.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the branch instruction
    fn predict(&self, pc: u32) -> Outcome;

    /// Updates the predictor with the resolved outcome of the branch at `pc`.
    ///
    /// Must be called exactly once per prediction; a second call for the same
    /// branch applies the update twice.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the branch instruction
    /// * `outcome` - Whether the branch was actually taken
    fn train(&mut self, pc: u32, outcome: Outcome);

    /// Restores the state the predictor had right after construction.
    fn reset(&mut self);

    /// Storage cost of the predictor's tables and registers, in bits.
    fn storage_bits(&self) -> usize;
}
