//! Common types shared by every predictor family.
//!
//! This module provides:
//! 1. **Outcome:** The taken/not-taken direction passed through every API.
//! 2. **Error Handling:** Configuration errors raised when building a predictor.

/// Configuration error types.
pub mod error;

/// Branch outcome type.
pub mod outcome;

pub use error::ConfigError;
pub use outcome::Outcome;
