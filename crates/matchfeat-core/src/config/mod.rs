//! Configuration system for matchfeat.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod extraction_config;
pub mod matchfeat_config;

pub use extraction_config::ExtractionConfig;
pub use matchfeat_config::{ConfigOverrides, MatchfeatConfig};
