//! Feature extraction errors.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, InputError};

/// Errors that can occur while building the feature table.
/// Aggregates input and config errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Two intermediate tables carry the same column. Column suffixes are
    /// disjoint per table, so this is a naming bug, never resolved silently.
    #[error("Join conflict: column {column} present on both sides")]
    JoinConflict { column: String },

    #[error("Missing feature column: {column}")]
    MissingFeature { column: String },

    #[error("Shape mismatch: {what} has {found} values, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Pair ids of a table must be strictly increasing.
    #[error("Pair ids not strictly increasing at position {position}")]
    InvalidPairIndex { position: usize },
}

impl ErrorCode for FeatureError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::JoinConflict { .. } => error_code::JOIN_CONFLICT,
            Self::MissingFeature { .. } => error_code::MISSING_FEATURE,
            Self::ShapeMismatch { .. } => error_code::SHAPE_MISMATCH,
            Self::InvalidPairIndex { .. } => error_code::INVALID_PAIR_INDEX,
        }
    }
}

/// Convenience alias for results in the extraction pipeline.
pub type FeatureResult<T> = Result<T, FeatureError>;
