//! # matchfeat-extract
//!
//! Aggregates word-level match scores between a left and a right record into
//! a fixed-width feature vector per record pair, for a downstream
//! entity-resolution classifier.
//!
//! ## Pipeline
//!
//! ```text
//! word pairs → AggregationEngine (5 tables) → outer join
//!            → DerivedFeatureComputer → FeatureTable
//! ```
//!
//! ## Quick Example
//!
//! ```rust
//! use matchfeat_core::WordPairScore;
//! use matchfeat_extract::FeatureExtractor;
//!
//! let scores = vec![
//!     WordPairScore::new(1, "acme", "acme", 0.95),
//!     WordPairScore::new(1, "corp", "[UNP]", 0.10),
//! ];
//! let table = FeatureExtractor::with_defaults().extract(&scores).unwrap();
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.value(&1, "count_paired"), Some(1.0));
//! ```

pub mod aggregation;
pub mod derived;
pub mod ingest;
pub mod pipeline;
pub mod schema;
pub mod statistics;
pub mod table;

pub use aggregation::{compute_min_max_features, AggregatedTables, AggregationEngine, SidePivot};
pub use derived::DerivedFeatureComputer;
pub use ingest::{parse_word_pairs, RawTable};
pub use pipeline::{ExtractionDiagnostics, FeatureExtractor};
pub use schema::FeatureSchema;
pub use statistics::StatisticSet;
pub use table::FeatureTable;
