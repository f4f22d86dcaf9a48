//! Shared constants for the matchfeat feature extractor.

/// Placeholder word meaning "no counterpart on this side".
pub const DEFAULT_SENTINEL: &str = "[UNP]";

/// Default score at or above which a word pair counts as paired.
pub const DEFAULT_POS_THRESHOLD: f64 = 0.40;

/// Default fill for structurally absent groups.
pub const DEFAULT_NULL_VALUE: f64 = 0.5;

/// Default for the complementary (`1 - pred`) transform on unpaired groups.
pub const DEFAULT_COMPLEMENTARY: bool = true;

/// Smoothing term for percentage features.
pub const PERC_EPSILON: f64 = 1e-9;

/// Fill applied to any value still undefined after derived features.
pub const TERMINAL_FILL: f64 = 0.0;

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "matchfeat.toml";

/// Required input column: pair identifier.
pub const COL_ID: &str = "id";

/// Required input column: left word.
pub const COL_LEFT_WORD: &str = "left_word";

/// Required input column: right word.
pub const COL_RIGHT_WORD: &str = "right_word";

/// Required input column: prediction score.
pub const COL_PRED: &str = "pred";

