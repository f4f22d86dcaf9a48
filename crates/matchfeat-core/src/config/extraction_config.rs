//! Extraction configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;
use crate::types::{DerivedSuffix, FxHashSet};

/// Configuration for the word-pair feature extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Reinterpret unpaired scores as `1 - pred`. Default: true.
    pub complementary: Option<bool>,
    /// Paired iff `pred >= pos_threshold` and no sentinel. Default: 0.40.
    pub pos_threshold: Option<f64>,
    /// Fill for structurally absent groups, in [0, 1]. Default: 0.5.
    pub null_value: Option<f64>,
    /// Placeholder word meaning "no counterpart". Default: `[UNP]`.
    pub sentinel: Option<String>,
    /// Unpaired groups the derived features compare against.
    /// Empty means all five.
    #[serde(default)]
    pub derived_suffixes: Vec<DerivedSuffix>,
    /// Reduce per-pair statistics on the rayon pool. Default: false.
    pub parallel: Option<bool>,
}

impl ExtractionConfig {
    pub fn effective_complementary(&self) -> bool {
        self.complementary.unwrap_or(constants::DEFAULT_COMPLEMENTARY)
    }

    pub fn effective_pos_threshold(&self) -> f64 {
        self.pos_threshold.unwrap_or(constants::DEFAULT_POS_THRESHOLD)
    }

    pub fn effective_null_value(&self) -> f64 {
        self.null_value.unwrap_or(constants::DEFAULT_NULL_VALUE)
    }

    pub fn effective_sentinel(&self) -> &str {
        self.sentinel
            .as_deref()
            .unwrap_or(constants::DEFAULT_SENTINEL)
    }

    pub fn effective_derived_suffixes(&self) -> Vec<DerivedSuffix> {
        if self.derived_suffixes.is_empty() {
            DerivedSuffix::ALL.to_vec()
        } else {
            self.derived_suffixes.clone()
        }
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    /// Validate the configured values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(threshold) = self.pos_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "extraction.pos_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(null_value) = self.null_value {
            // Same range as `pred`, so the filled groups keep `perc` within (0, 1).
            if !(0.0..=1.0).contains(&null_value) {
                return Err(ConfigError::ValidationFailed {
                    field: "extraction.null_value".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(ref sentinel) = self.sentinel {
            if sentinel.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "extraction.sentinel".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        let mut seen = FxHashSet::default();
        for suffix in &self.derived_suffixes {
            if !seen.insert(*suffix) {
                return Err(ConfigError::ValidationFailed {
                    field: "extraction.derived_suffixes".to_string(),
                    message: format!("duplicate suffix {suffix:?}"),
                });
            }
        }
        Ok(())
    }
}
