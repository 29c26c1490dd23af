//! Branch direction predictor library.
//!
//! This crate implements trace-driven conditional branch predictors with the following:
//! 1. **Primitives:** 2-bit saturating counters and history shift registers.
//! 2. **Predictors:** Static (always taken), gshare, tournament, and perceptron.
//! 3. **Dispatch:** A [`Predictor`] enum selected once from a [`PredictorConfig`].
//! 4. **Configuration:** JSON and option-string parsing with range validation.
//!
//! The caller drives the predictor: one `predict` per conditional branch,
//! followed by one `train` with the resolved outcome.
//!
//! ```
//! use bpred_core::{BranchPredictor, Outcome, Predictor, PredictorConfig};
//!
//! let config: PredictorConfig = "gshare:10".parse().unwrap();
//! let mut bp = Predictor::new(&config).unwrap();
//! let guess = bp.predict(0x0040_1a2c);
//! assert_eq!(guess, Outcome::NotTaken);
//! bp.train(0x0040_1a2c, Outcome::Taken);
//! ```

/// Branch predictors and their building blocks.
pub mod bru;
/// Common types (outcome, errors).
pub mod common;
/// Predictor configuration (defaults, enums, validation).
pub mod config;

/// Interface implemented by every predictor family.
pub use crate::bru::BranchPredictor;
/// Configured predictor; construct with `Predictor::new`.
pub use crate::bru::Predictor;
/// Branch direction and configuration errors.
pub use crate::common::{ConfigError, Outcome};
/// Root configuration type; use `PredictorConfig::default()` or parse one.
pub use crate::config::{PredictorConfig, PredictorKind};
