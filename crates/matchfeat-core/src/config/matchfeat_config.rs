//! Top-level matchfeat configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ExtractionConfig;
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`MATCHFEAT_*`)
/// 3. Project config (`matchfeat.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MatchfeatConfig {
    pub extraction: ExtractionConfig,
}

/// Caller-supplied overrides, e.g. from a training script's flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub complementary: Option<bool>,
    pub pos_threshold: Option<f64>,
    pub null_value: Option<f64>,
    pub sentinel: Option<String>,
    pub parallel: Option<bool>,
}

impl MatchfeatConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(constants::CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &MatchfeatConfig) -> Result<(), ConfigError> {
        config.extraction.validate()
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut MatchfeatConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MatchfeatConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut MatchfeatConfig, other: &MatchfeatConfig) {
        let (base, other) = (&mut base.extraction, &other.extraction);
        if other.complementary.is_some() {
            base.complementary = other.complementary;
        }
        if other.pos_threshold.is_some() {
            base.pos_threshold = other.pos_threshold;
        }
        if other.null_value.is_some() {
            base.null_value = other.null_value;
        }
        if other.sentinel.is_some() {
            base.sentinel = other.sentinel.clone();
        }
        if !other.derived_suffixes.is_empty() {
            base.derived_suffixes = other.derived_suffixes.clone();
        }
        if other.parallel.is_some() {
            base.parallel = other.parallel;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut MatchfeatConfig) {
        let extraction = &mut config.extraction;
        if let Ok(val) = std::env::var("MATCHFEAT_COMPLEMENTARY") {
            if let Ok(v) = val.parse::<bool>() {
                extraction.complementary = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MATCHFEAT_POS_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                extraction.pos_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MATCHFEAT_NULL_VALUE") {
            if let Ok(v) = val.parse::<f64>() {
                extraction.null_value = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MATCHFEAT_SENTINEL") {
            extraction.sentinel = Some(val);
        }
        if let Ok(val) = std::env::var("MATCHFEAT_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                extraction.parallel = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut MatchfeatConfig, overrides: &ConfigOverrides) {
        let extraction = &mut config.extraction;
        if let Some(v) = overrides.complementary {
            extraction.complementary = Some(v);
        }
        if let Some(v) = overrides.pos_threshold {
            extraction.pos_threshold = Some(v);
        }
        if let Some(v) = overrides.null_value {
            extraction.null_value = Some(v);
        }
        if let Some(ref v) = overrides.sentinel {
            extraction.sentinel = Some(v.clone());
        }
        if let Some(v) = overrides.parallel {
            extraction.parallel = Some(v);
        }
    }
}
