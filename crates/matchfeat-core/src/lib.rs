//! # matchfeat-core
//!
//! Foundation crate for the matchfeat feature extractor.
//! Defines the input row types, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{ExtractionConfig, MatchfeatConfig};
pub use errors::{ConfigError, FeatureError, InputError};
pub use types::{PairId, WordPairScore};
