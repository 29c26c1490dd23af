//! Configuration error definitions.
//!
//! Prediction and training are total over well-formed inputs, so the only
//! failure point in this crate is building a predictor. Every error here is
//! raised while parsing or validating a [`PredictorConfig`](crate::config::PredictorConfig).

use thiserror::Error;

/// Errors raised when a predictor configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A table width is outside the supported range.
    ///
    /// Table sizes are `2^bits`, so widths are capped to keep allocations sane.
    #[error("{field} must be between 1 and {max} bits, got {value}")]
    TableBits {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied by the caller.
        value: usize,
        /// Largest accepted width.
        max: usize,
    },

    /// The perceptron history length cannot be held in its history register.
    #[error("perceptron history length must be between 1 and {max}, got {value}")]
    HistoryLength {
        /// Value supplied by the caller.
        value: usize,
        /// Largest accepted history length.
        max: usize,
    },

    /// The perceptron weight width does not fit an `i8` weight.
    #[error("perceptron weights must be between 2 and 8 bits wide, got {0}")]
    WeightBits(usize),

    /// The perceptron storage budget cannot hold a single weight row.
    #[error("perceptron budget of {budget} bits holds no rows of {row_bits} bits")]
    EmptyPerceptronTable {
        /// Storage budget in bits.
        budget: usize,
        /// Bits needed by one row (bias plus weights).
        row_bits: usize,
    },

    /// A predictor name was not recognised.
    #[error("unknown predictor type '{0}'")]
    UnknownPredictor(String),

    /// A predictor option string was malformed.
    #[error("invalid predictor option '{option}': {reason}")]
    InvalidOption {
        /// The option string as given.
        option: String,
        /// What was wrong with it.
        reason: String,
    },

    /// JSON configuration could not be deserialized.
    #[error("failed to parse predictor configuration: {0}")]
    Json(#[from] serde_json::Error),
}
