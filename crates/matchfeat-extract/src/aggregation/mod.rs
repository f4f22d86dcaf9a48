//! Aggregation engine: word-pair rows → five per-pair statistic tables.
//!
//! Rows are grouped once by pair id into per-category score buckets, reduced
//! to statistic sets, and only then materialized as tables. Each table has
//! its own fill policy for absent groups.

pub mod buckets;
pub mod engine;
pub mod side;

pub use buckets::{CategoryCoverage, PairBuckets};
pub use engine::{AggregatedTables, AggregationEngine};
pub use side::{compute_min_max_features, SidePivot};
