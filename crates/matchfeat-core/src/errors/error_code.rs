//! ErrorCode trait for structured error reporting.

/// Stable, machine-readable error codes.
/// Every error enum implements this so callers across a language boundary
/// can match on the code instead of the message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "INPUT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const MISSING_COLUMN: &str = "MISSING_COLUMN";
pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
pub const JOIN_CONFLICT: &str = "JOIN_CONFLICT";
pub const MISSING_FEATURE: &str = "MISSING_FEATURE";
pub const SHAPE_MISMATCH: &str = "SHAPE_MISMATCH";
pub const INVALID_PAIR_INDEX: &str = "INVALID_PAIR_INDEX";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
