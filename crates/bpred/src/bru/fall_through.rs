//! Fall-through compatibility predictor.
//!
//! Reproduces dispatch through a `switch` whose cases lack `break`: selecting
//! gshare also builds and trains the tournament and perceptron predictors, and
//! selecting tournament also trains the perceptron. Only the selected family
//! produces predictions.
//!
//! The gshare and tournament paths share one Global History Register and one
//! global PHT, so a gshare training step advances the history before the
//! tournament step reads it. The perceptron is never asked to predict in this
//! mode, so it always trains against the zeroed [`PerceptronPrediction`].

use super::{
    BranchPredictor,
    perceptron::{PerceptronPrediction, PerceptronPredictor},
    tournament::TournamentPredictor,
};
use crate::common::Outcome;
use crate::config::{PredictorConfig, PredictorKind};

/// Gshare or tournament predictor trained together with every family below it.
#[derive(Debug, Clone)]
pub struct FallThroughPredictor {
    /// Family whose prediction is returned.
    active: PredictorKind,
    /// Tournament predictor; its global component doubles as the gshare predictor.
    tournament: TournamentPredictor,
    /// Perceptron trained on every step.
    perceptron: PerceptronPredictor,
}

impl FallThroughPredictor {
    /// Creates the chain for `config.predictor`, which must be gshare or tournament.
    pub(crate) fn new(config: &PredictorConfig) -> Self {
        debug_assert!(matches!(
            config.predictor,
            PredictorKind::GShare | PredictorKind::Tournament
        ));
        Self {
            active: config.predictor,
            tournament: TournamentPredictor::new(config),
            perceptron: PerceptronPredictor::new(&config.perceptron),
        }
    }

    /// Family whose prediction is returned.
    pub const fn active(&self) -> PredictorKind {
        self.active
    }

    /// Tournament predictor (and, through it, the shared gshare state).
    pub const fn tournament(&self) -> &TournamentPredictor {
        &self.tournament
    }

    /// Perceptron trained alongside the active family.
    pub const fn perceptron(&self) -> &PerceptronPredictor {
        &self.perceptron
    }
}

impl BranchPredictor for FallThroughPredictor {
    fn name(&self) -> &'static str {
        self.active.name()
    }

    fn predict(&self, pc: u32) -> Outcome {
        match self.active {
            PredictorKind::GShare => self.tournament.global().predict(pc),
            _ => self.tournament.predict(pc),
        }
    }

    fn train(&mut self, pc: u32, outcome: Outcome) {
        if self.active == PredictorKind::GShare {
            self.tournament.global_mut().train(pc, outcome);
        }
        self.tournament.train(pc, outcome);
        self.perceptron
            .train_with(&PerceptronPrediction::default(), outcome);
    }

    fn reset(&mut self) {
        self.tournament.reset();
        self.perceptron.reset();
    }

    fn storage_bits(&self) -> usize {
        self.tournament.storage_bits() + self.perceptron.storage_bits()
    }
}
