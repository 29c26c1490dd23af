//! Perceptron Branch Predictor.
//!
//! Uses a single-layer perceptron to predict branch direction. Instead of
//! saturating counters, it uses a table of weight vectors. The prediction is
//! the sign of the dot product of the weights and the bipolar history vector.
//!
//! See "Dynamic Branch Prediction with Perceptrons" (Jiménez and Lin, 2001).

use tracing::{debug, trace};

use super::{BranchPredictor, history::HistoryRegister};
use crate::common::Outcome;
use crate::config::{PerceptronConfig, PredictorKind};

/// Context captured by a perceptron lookup and consumed by training.
///
/// The default value (row 0, zero output, not-taken) is the context seen by
/// a perceptron that is trained without ever having been asked to predict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerceptronPrediction {
    /// Row of the weight table that produced the output.
    pub index: usize,
    /// Perceptron output (bias plus dot product).
    pub output: i32,
    /// Predicted direction (taken iff `output > 0`).
    pub outcome: Outcome,
}

/// Perceptron Predictor structure.
#[derive(Debug, Clone)]
pub struct PerceptronPredictor {
    /// Global History Register.
    ghr: HistoryRegister,
    /// Table of weights (flattened); each row is `[bias, w0, w1, ...]`.
    table: Vec<i8>,
    /// Length of the history vector.
    history_length: usize,
    /// Number of rows in the table.
    entries: usize,
    /// Size of a single row in the table (history length + bias).
    row_size: usize,
    /// Width of each weight, for storage accounting.
    weight_bits: usize,
    /// Training threshold (theta).
    threshold: f64,
    /// Smallest weight value.
    min_weight: i8,
    /// Largest weight value.
    max_weight: i8,
}

impl PerceptronPredictor {
    /// Creates a new Perceptron Predictor based on configuration.
    pub fn new(config: &PerceptronConfig) -> Self {
        let entries = config.entries();
        let row_size = config.history_length + 1;
        let threshold = config.threshold();
        debug!(
            history_length = config.history_length,
            entries,
            threshold,
            "building perceptron predictor"
        );

        Self {
            ghr: HistoryRegister::new(config.history_length),
            table: vec![0; entries * row_size],
            history_length: config.history_length,
            entries,
            row_size,
            weight_bits: config.bits_per_weight,
            threshold,
            min_weight: config.min_weight(),
            max_weight: config.max_weight(),
        }
    }

    /// Selects the table row for a PC.
    #[inline(always)]
    pub const fn index(&self, pc: u32) -> usize {
        pc as usize % self.entries
    }

    /// Computes the perceptron output for `pc` and returns the full context
    /// needed to train on the resolved outcome.
    pub fn lookup(&self, pc: u32) -> PerceptronPrediction {
        let index = self.index(pc);
        let output = self.output(index);
        PerceptronPrediction {
            index,
            output,
            outcome: Outcome::from(output > 0),
        }
    }

    /// Trains the row recorded in `prediction` on the resolved outcome, then
    /// shifts the outcome into the Global History Register.
    ///
    /// Weights only move after a misprediction or when `|output|` is within
    /// the training threshold.
    pub fn train_with(&mut self, prediction: &PerceptronPrediction, outcome: Outcome) {
        let miss = prediction.outcome != outcome;
        let weak = f64::from(prediction.output).abs() <= self.threshold;

        if miss || weak {
            trace!(
                index = prediction.index,
                output = prediction.output,
                miss,
                "training perceptron row"
            );
            let base = prediction.index * self.row_size;
            let t = outcome.signum();

            self.table[base] = self.clamp_weight(self.table[base] as i32 + t);

            for i in 0..self.history_length {
                let agree = self.ghr.bit(i) == outcome.is_taken();
                let w_idx = base + 1 + i;
                let step = if agree { 1 } else { -1 };
                self.table[w_idx] = self.clamp_weight(self.table[w_idx] as i32 + step);
            }
        }

        self.ghr.push(outcome);
    }

    /// Returns the Global History Register.
    pub const fn history(&self) -> &HistoryRegister {
        &self.ghr
    }

    /// Number of rows in the weight table.
    pub const fn entries(&self) -> usize {
        self.entries
    }

    /// Training threshold (theta).
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Bias weight of row `index`.
    pub fn bias(&self, index: usize) -> i8 {
        self.table[index * self.row_size]
    }

    /// History weights of row `index`, oldest-bit weight last.
    pub fn weights(&self, index: usize) -> &[i8] {
        let base = index * self.row_size;
        &self.table[base + 1..base + self.row_size]
    }

    /// Computes the perceptron output (dot product) for a given row.
    ///
    /// Sums the bias weight and the product of history bits and weights.
    fn output(&self, row_idx: usize) -> i32 {
        let base = row_idx * self.row_size;
        let mut y = self.table[base] as i32;

        for i in 0..self.history_length {
            let x = if self.ghr.bit(i) { 1 } else { -1 };
            y += (self.table[base + 1 + i] as i32) * x;
        }
        y
    }

    /// Clamps a weight value to the configured signed range.
    fn clamp_weight(&self, v: i32) -> i8 {
        v.clamp(self.min_weight as i32, self.max_weight as i32) as i8
    }
}

impl BranchPredictor for PerceptronPredictor {
    fn name(&self) -> &'static str {
        PredictorKind::Perceptron.name()
    }

    /// Predicts taken if the perceptron output is strictly positive.
    fn predict(&self, pc: u32) -> Outcome {
        self.lookup(pc).outcome
    }

    /// Recomputes the lookup from the pre-update state, which is what the
    /// preceding [`predict`](BranchPredictor::predict) saw, and trains on it.
    fn train(&mut self, pc: u32, outcome: Outcome) {
        let prediction = self.lookup(pc);
        self.train_with(&prediction, outcome);
    }

    fn reset(&mut self) {
        self.ghr.clear();
        self.table.fill(0);
    }

    fn storage_bits(&self) -> usize {
        self.table.len() * self.weight_bits + self.ghr.width()
    }
}
