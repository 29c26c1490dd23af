//! Configuration system for the branch predictors.
//!
//! This module defines the configuration structures used to parameterize a
//! [`Predictor`](crate::bru::Predictor). It provides:
//! 1. **Defaults:** Baseline table widths and perceptron budget.
//! 2. **Structures:** The root [`PredictorConfig`] and the nested [`PerceptronConfig`].
//! 3. **Parsing:** JSON deserialization and the `name:bits:bits:bits` option syntax
//!    used by trace drivers (`gshare:13`, `tournament:9:10:10`, `custom`).
//! 4. **Validation:** Range checks applied before any table is allocated.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the predictors.
///
/// These values define the baseline configuration when a field is not
/// explicitly overridden in JSON or on the command line.
mod defaults {
    /// Default global history width (16K-entry global table).
    pub const GHISTORY_BITS: usize = 14;

    /// Default local history width (1K-entry local pattern table).
    pub const LHISTORY_BITS: usize = 10;

    /// Default number of PC bits indexing the local history table (1K entries).
    pub const PC_INDEX_BITS: usize = 10;

    /// Default perceptron global history length (one weight per bit).
    pub const PERCEPTRON_HISTORY: usize = 32;

    /// Default perceptron storage budget in bits (64 Kibit).
    pub const PERCEPTRON_BUDGET_BITS: usize = 64 * 1024;

    /// Default perceptron weight width in bits.
    pub const PERCEPTRON_WEIGHT_BITS: usize = 8;
}

/// Largest accepted width for any `2^bits`-entry table.
pub const MAX_TABLE_BITS: usize = 24;

/// Largest accepted perceptron history length (width of its history register).
pub const MAX_PERCEPTRON_HISTORY: usize = 64;

/// Largest accepted perceptron weight width (weights are stored as `i8`).
pub const MAX_WEIGHT_BITS: usize = 8;

/// Branch prediction algorithm types.
///
/// Exactly one family is active per predictor instance, selected at
/// construction and fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PredictorKind {
    /// Static predictor (always predict taken).
    #[default]
    Static,
    /// Global history predictor (gshare).
    #[serde(alias = "Gshare")]
    GShare,
    /// Tournament predictor combining local and global predictors.
    Tournament,
    /// Perceptron-based predictor.
    #[serde(alias = "Custom")]
    Perceptron,
}

impl PredictorKind {
    /// Every predictor family, in naming-table order.
    pub const ALL: [Self; 4] = [Self::Static, Self::GShare, Self::Tournament, Self::Perceptron];

    /// Returns the display name reported by trace drivers.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::GShare => "Gshare",
            Self::Tournament => "Tournament",
            Self::Perceptron => "Custom",
        }
    }
}

impl fmt::Display for PredictorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PredictorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "gshare" => Ok(Self::GShare),
            "tournament" => Ok(Self::Tournament),
            "custom" | "perceptron" => Ok(Self::Perceptron),
            _ => Err(ConfigError::UnknownPredictor(s.to_string())),
        }
    }
}

/// Root configuration structure for a predictor instance.
///
/// # Examples
///
/// Using the trace driver option syntax:
///
/// ```
/// use bpred_core::config::{PredictorConfig, PredictorKind};
///
/// let config: PredictorConfig = "tournament:9:10:10".parse().unwrap();
/// assert_eq!(config.predictor, PredictorKind::Tournament);
/// assert_eq!(config.ghistory_bits, 9);
/// assert_eq!(config.lhistory_bits, 10);
/// assert_eq!(config.pc_index_bits, 10);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use bpred_core::config::{PredictorConfig, PredictorKind};
///
/// let config = PredictorConfig::from_json(r#"{ "predictor": "Gshare", "ghistory_bits": 12 }"#).unwrap();
/// assert_eq!(config.predictor, PredictorKind::GShare);
/// assert_eq!(config.ghistory_bits, 12);
/// assert_eq!(config.perceptron.history_length, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictorConfig {
    /// Predictor family
    #[serde(default)]
    pub predictor: PredictorKind,

    /// Global history width; also sizes the global and chooser tables
    #[serde(default = "PredictorConfig::default_ghistory")]
    pub ghistory_bits: usize,

    /// Local history width; also sizes the local pattern table
    #[serde(default = "PredictorConfig::default_lhistory")]
    pub lhistory_bits: usize,

    /// Number of PC bits indexing the local history table
    #[serde(default = "PredictorConfig::default_pc_index")]
    pub pc_index_bits: usize,

    /// Perceptron predictor configuration
    #[serde(default)]
    pub perceptron: PerceptronConfig,

    /// Train every family below the configured one, as a `switch` without `break` would.
    #[serde(default)]
    pub fall_through: bool,
}

impl PredictorConfig {
    /// Returns the default global history width.
    fn default_ghistory() -> usize {
        defaults::GHISTORY_BITS
    }

    /// Returns the default local history width.
    fn default_lhistory() -> usize {
        defaults::LHISTORY_BITS
    }

    /// Returns the default PC index width.
    fn default_pc_index() -> usize {
        defaults::PC_INDEX_BITS
    }

    /// Creates a default configuration for the given predictor family.
    pub fn for_kind(predictor: PredictorKind) -> Self {
        Self {
            predictor,
            ..Self::default()
        }
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, or the validation
    /// error for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of entries in the global pattern and chooser tables.
    pub const fn global_entries(&self) -> usize {
        1 << self.ghistory_bits
    }

    /// Number of entries in the local pattern table.
    pub const fn local_pattern_entries(&self) -> usize {
        1 << self.lhistory_bits
    }

    /// Number of entries in the local history table.
    pub const fn local_history_entries(&self) -> usize {
        1 << self.pc_index_bits
    }

    /// Checks every field the configured family (and, in fall-through mode,
    /// every family trained alongside it) will use.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fall_through = self.fall_through;
        match self.predictor {
            PredictorKind::Static => Ok(()),
            PredictorKind::GShare if !fall_through => self.validate_global(),
            PredictorKind::GShare | PredictorKind::Tournament => {
                self.validate_global()?;
                check_table_bits("lhistory_bits", self.lhistory_bits)?;
                check_table_bits("pc_index_bits", self.pc_index_bits)?;
                if fall_through {
                    self.perceptron.validate()?;
                }
                Ok(())
            }
            PredictorKind::Perceptron => self.perceptron.validate(),
        }
    }

    fn validate_global(&self) -> Result<(), ConfigError> {
        check_table_bits("ghistory_bits", self.ghistory_bits)
    }
}

impl Default for PredictorConfig {
    /// Creates a default configuration.
    ///
    /// Uses the static predictor with the default history widths, so switching
    /// `predictor` alone yields a usable configuration for any family.
    fn default() -> Self {
        Self {
            predictor: PredictorKind::default(),
            ghistory_bits: defaults::GHISTORY_BITS,
            lhistory_bits: defaults::LHISTORY_BITS,
            pc_index_bits: defaults::PC_INDEX_BITS,
            perceptron: PerceptronConfig::default(),
            fall_through: false,
        }
    }
}

impl FromStr for PredictorConfig {
    type Err = ConfigError;

    /// Parses `static`, `gshare:<ghist>`, `tournament:<ghist>:<lhist>:<index>`
    /// or `custom` (also `perceptron`). A leading `--` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let option = s.trim();
        let body = option.strip_prefix("--").unwrap_or(option);
        let mut parts = body.split(':');
        let kind: PredictorKind = parts.next().unwrap_or_default().parse()?;
        let widths = parts
            .map(|p| parse_width(option, p))
            .collect::<Result<Vec<_>, _>>()?;

        let mut config = Self::for_kind(kind);
        match (kind, widths.as_slice()) {
            (PredictorKind::Static | PredictorKind::Perceptron, []) => {}
            (PredictorKind::GShare, [g]) => config.ghistory_bits = *g,
            (PredictorKind::Tournament, [g, l, i]) => {
                config.ghistory_bits = *g;
                config.lhistory_bits = *l;
                config.pc_index_bits = *i;
            }
            (_, found) => {
                let expected = match kind {
                    PredictorKind::Static | PredictorKind::Perceptron => 0,
                    PredictorKind::GShare => 1,
                    PredictorKind::Tournament => 3,
                };
                return Err(ConfigError::InvalidOption {
                    option: option.to_string(),
                    reason: format!(
                        "{kind} takes {expected} width argument(s), got {}",
                        found.len()
                    ),
                });
            }
        }
        config.validate()?;
        Ok(config)
    }
}

/// Perceptron branch predictor configuration.
///
/// The number of table rows is derived from the storage budget: each row holds
/// one bias and `history_length` weights of `bits_per_weight` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PerceptronConfig {
    /// Global history length (number of weights per row)
    #[serde(default = "PerceptronConfig::default_history")]
    pub history_length: usize,

    /// Storage budget for the weight table, in bits
    #[serde(default = "PerceptronConfig::default_budget")]
    pub budget_bits: usize,

    /// Width of each weight, in bits
    #[serde(default = "PerceptronConfig::default_weight_bits")]
    pub bits_per_weight: usize,
}

impl PerceptronConfig {
    /// Coefficient used to calculate the training threshold.
    const THETA_COEFF: f64 = 1.93;
    /// Bias used to calculate the training threshold.
    const THETA_BIAS: f64 = 14.0;

    /// Returns the default perceptron global history length.
    fn default_history() -> usize {
        defaults::PERCEPTRON_HISTORY
    }

    /// Returns the default perceptron storage budget.
    fn default_budget() -> usize {
        defaults::PERCEPTRON_BUDGET_BITS
    }

    /// Returns the default perceptron weight width.
    fn default_weight_bits() -> usize {
        defaults::PERCEPTRON_WEIGHT_BITS
    }

    /// Bits occupied by one row (bias plus weights).
    pub const fn row_bits(&self) -> usize {
        (self.history_length + 1) * self.bits_per_weight
    }

    /// Number of rows that fit in the storage budget.
    pub const fn entries(&self) -> usize {
        self.budget_bits / self.row_bits()
    }

    /// Training threshold: `1.93 * history_length + 14`.
    pub fn threshold(&self) -> f64 {
        Self::THETA_COEFF * (self.history_length as f64) + Self::THETA_BIAS
    }

    /// Largest representable weight.
    pub const fn max_weight(&self) -> i8 {
        ((1i16 << (self.bits_per_weight - 1)) - 1) as i8
    }

    /// Smallest representable weight.
    pub const fn min_weight(&self) -> i8 {
        (-(1i16 << (self.bits_per_weight - 1))) as i8
    }

    /// Checks history length, weight width and budget.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_length == 0 || self.history_length > MAX_PERCEPTRON_HISTORY {
            return Err(ConfigError::HistoryLength {
                value: self.history_length,
                max: MAX_PERCEPTRON_HISTORY,
            });
        }
        if !(2..=MAX_WEIGHT_BITS).contains(&self.bits_per_weight) {
            return Err(ConfigError::WeightBits(self.bits_per_weight));
        }
        if self.entries() == 0 {
            return Err(ConfigError::EmptyPerceptronTable {
                budget: self.budget_bits,
                row_bits: self.row_bits(),
            });
        }
        Ok(())
    }
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        Self {
            history_length: defaults::PERCEPTRON_HISTORY,
            budget_bits: defaults::PERCEPTRON_BUDGET_BITS,
            bits_per_weight: defaults::PERCEPTRON_WEIGHT_BITS,
        }
    }
}

fn check_table_bits(field: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 || value > MAX_TABLE_BITS {
        return Err(ConfigError::TableBits {
            field,
            value,
            max: MAX_TABLE_BITS,
        });
    }
    Ok(())
}

fn parse_width(option: &str, part: &str) -> Result<usize, ConfigError> {
    part.parse().map_err(|_| ConfigError::InvalidOption {
        option: option.to_string(),
        reason: format!("'{part}' is not a bit width"),
    })
}
