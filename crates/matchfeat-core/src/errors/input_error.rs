//! Input table errors. All of these are fatal: no partial output.

use super::error_code::{self, ErrorCode};

/// Errors raised while turning a raw table into word-pair rows.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Type mismatch in column {column} at row {row}: expected {expected}, found {found}")]
    TypeMismatch {
        column: String,
        row: usize,
        expected: &'static str,
        found: String,
    },

    #[error("Pair identifiers are not mutually orderable: row {row} mixes integer and string ids")]
    MixedPairIdKinds { row: usize },

    #[error("Row {row} has {found} cells, header has {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl ErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingColumn { .. } => error_code::MISSING_COLUMN,
            Self::TypeMismatch { .. } | Self::MixedPairIdKinds { .. } => {
                error_code::TYPE_MISMATCH
            }
            Self::RowWidth { .. } => error_code::INPUT_ERROR,
        }
    }
}
