//! Pair identifier for untyped (ingested) input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier grouping all word-level rows of one candidate record pair.
///
/// Ingested tables carry either integer or string ids. Ordering is total:
/// integers sort before strings, although ingestion rejects tables that mix
/// the two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PairId {
    Int(i64),
    Text(String),
}

impl PairId {
    /// Short name of the id kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Text(_) => "string",
        }
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PairId {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for PairId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PairId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
