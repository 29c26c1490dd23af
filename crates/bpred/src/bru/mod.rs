//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the direction predictors (static, gshare,
//! tournament and perceptron), the primitives they are built from, and the
//! [`Predictor`] enum that dispatches to the configured family.

pub use self::branch_predictor::BranchPredictor;

/// Branch predictor trait and common functionality.
pub mod branch_predictor;

/// Two-bit saturating counter.
pub mod counter;

/// Fall-through compatibility chain (gshare -> tournament -> perceptron).
pub mod fall_through;

/// Global history branch predictor (gshare algorithm).
pub mod gshare;

/// Branch history shift register.
pub mod history;

/// Perceptron-based neural branch predictor.
pub mod perceptron;

/// Static branch predictor (always taken).
pub mod static_bp;

/// Tournament branch predictor (combines local and global predictors).
pub mod tournament;

use tracing::debug;

use self::{
    fall_through::FallThroughPredictor, gshare::GSharePredictor,
    perceptron::PerceptronPredictor, static_bp::StaticPredictor,
    tournament::TournamentPredictor,
};
use crate::common::{ConfigError, Outcome};
use crate::config::{PredictorConfig, PredictorKind};

/// Enum wrapper for static dispatch of Branch Predictors.
///
/// Exactly one family is held, selected at construction. This avoids vtable
/// lookups in the per-branch predict/train loop.
#[derive(Debug, Clone)]
pub enum Predictor {
    /// Always-taken predictor.
    Static(StaticPredictor),
    /// Gshare predictor.
    GShare(GSharePredictor),
    /// Tournament predictor.
    Tournament(TournamentPredictor),
    /// Perceptron predictor.
    Perceptron(PerceptronPredictor),
    /// Gshare or tournament trained together with the families below it.
    FallThrough(FallThroughPredictor),
}

impl Predictor {
    /// Creates a new branch predictor based on configuration.
    ///
    /// Validates the configuration, then allocates the tables of the selected
    /// family only (or the whole chain below it in fall-through mode).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a width used by the selected family is out
    /// of range.
    pub fn new(config: &PredictorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            predictor = %config.predictor,
            fall_through = config.fall_through,
            "initializing branch predictor"
        );

        let bp = match config.predictor {
            PredictorKind::Static => Self::Static(StaticPredictor::new()),
            PredictorKind::Perceptron => {
                Self::Perceptron(PerceptronPredictor::new(&config.perceptron))
            }
            PredictorKind::GShare | PredictorKind::Tournament if config.fall_through => {
                Self::FallThrough(FallThroughPredictor::new(config))
            }
            PredictorKind::GShare => Self::GShare(GSharePredictor::new(config)),
            PredictorKind::Tournament => Self::Tournament(TournamentPredictor::new(config)),
        };
        Ok(bp)
    }

    /// Returns the configured predictor family.
    pub const fn kind(&self) -> PredictorKind {
        match self {
            Self::Static(_) => PredictorKind::Static,
            Self::GShare(_) => PredictorKind::GShare,
            Self::Tournament(_) => PredictorKind::Tournament,
            Self::Perceptron(_) => PredictorKind::Perceptron,
            Self::FallThrough(bp) => bp.active(),
        }
    }
}

impl BranchPredictor for Predictor {
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Predicts whether the branch at the given PC will be taken.
    #[inline(always)]
    fn predict(&self, pc: u32) -> Outcome {
        match self {
            Self::Static(bp) => bp.predict(pc),
            Self::GShare(bp) => bp.predict(pc),
            Self::Tournament(bp) => bp.predict(pc),
            Self::Perceptron(bp) => bp.predict(pc),
            Self::FallThrough(bp) => bp.predict(pc),
        }
    }

    /// Updates the branch predictor with the actual outcome of a branch.
    #[inline(always)]
    fn train(&mut self, pc: u32, outcome: Outcome) {
        match self {
            Self::Static(bp) => bp.train(pc, outcome),
            Self::GShare(bp) => bp.train(pc, outcome),
            Self::Tournament(bp) => bp.train(pc, outcome),
            Self::Perceptron(bp) => bp.train(pc, outcome),
            Self::FallThrough(bp) => bp.train(pc, outcome),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Static(bp) => bp.reset(),
            Self::GShare(bp) => bp.reset(),
            Self::Tournament(bp) => bp.reset(),
            Self::Perceptron(bp) => bp.reset(),
            Self::FallThrough(bp) => bp.reset(),
        }
    }

    fn storage_bits(&self) -> usize {
        match self {
            Self::Static(bp) => bp.storage_bits(),
            Self::GShare(bp) => bp.storage_bits(),
            Self::Tournament(bp) => bp.storage_bits(),
            Self::Perceptron(bp) => bp.storage_bits(),
            Self::FallThrough(bp) => bp.storage_bits(),
        }
    }
}
