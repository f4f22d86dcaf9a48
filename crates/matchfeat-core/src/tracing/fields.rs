//! Structured span field names used across matchfeat.

/// Input word-pair rows in a run.
pub const ROWS: &str = "rows";

/// Distinct pair identifiers in a run.
pub const PAIRS: &str = "pairs";

/// Output feature columns.
pub const COLUMNS: &str = "columns";

/// Pipeline wall time in milliseconds.
pub const EXTRACT_TIME_MS: &str = "extract_time_ms";
