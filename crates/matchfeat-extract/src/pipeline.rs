//! Top-level extraction pipeline.
//!
//! raw word-pair rows → five statistic tables → outer-join merge →
//! derived features → final table in schema order.

use std::fmt;
use std::time::Instant;

use matchfeat_core::config::ExtractionConfig;
use matchfeat_core::errors::FeatureResult;
use matchfeat_core::tracing::fields;
use matchfeat_core::types::{PairId, StatKind, WordPairScore};
use tracing::{field, info_span};

use crate::aggregation::{AggregationEngine, CategoryCoverage};
use crate::derived::DerivedFeatureComputer;
use crate::ingest::{self, RawTable};
use crate::schema::FeatureSchema;
use crate::table::FeatureTable;

/// Converts word-level match scores into one feature row per pair.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    engine: AggregationEngine,
    derived: DerivedFeatureComputer,
    schema: FeatureSchema,
}

impl FeatureExtractor {
    /// Create an extractor after validating `config`.
    pub fn new(config: ExtractionConfig) -> FeatureResult<Self> {
        config.validate()?;
        Ok(Self::build(&config))
    }

    /// Create an extractor with default configuration.
    pub fn with_defaults() -> Self {
        Self::build(&ExtractionConfig::default())
    }

    fn build(config: &ExtractionConfig) -> Self {
        let suffixes = config.effective_derived_suffixes();
        Self {
            engine: AggregationEngine::new(config),
            derived: DerivedFeatureComputer::new(StatKind::ALL.to_vec(), suffixes.clone()),
            schema: FeatureSchema::for_suffixes(&suffixes),
        }
    }

    /// The output column set. Identical for every input.
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Run the full pipeline over typed rows.
    pub fn extract<K>(&self, scores: &[WordPairScore<K>]) -> FeatureResult<FeatureTable<K>>
    where
        K: Ord + Clone + Send + Sync,
    {
        self.extract_with_diagnostics(scores).map(|(table, _)| table)
    }

    /// Ingest a raw table, then run the full pipeline.
    pub fn extract_raw(&self, table: &RawTable) -> FeatureResult<FeatureTable<PairId>> {
        let scores = ingest::parse_word_pairs(table)?;
        self.extract(&scores)
    }

    /// Run the full pipeline and report what the input covered.
    pub fn extract_with_diagnostics<K>(
        &self,
        scores: &[WordPairScore<K>],
    ) -> FeatureResult<(FeatureTable<K>, ExtractionDiagnostics)>
    where
        K: Ord + Clone + Send + Sync,
    {
        let start = Instant::now();
        let span = info_span!(
            "extract_features",
            rows = scores.len(),
            pairs = field::Empty,
            columns = field::Empty,
            extract_time_ms = field::Empty,
        );
        let _guard = span.enter();

        let tables = self.engine.aggregate(scores)?;
        let coverage = tables.coverage;
        let merged = tables.merge(self.engine.null_value())?;
        let derived = self.derived.derive(merged)?;
        let table = derived.select(self.schema.columns())?;

        span.record(fields::PAIRS, table.len());
        span.record(fields::COLUMNS, table.width());
        span.record(fields::EXTRACT_TIME_MS, start.elapsed().as_millis() as u64);

        let diagnostics = ExtractionDiagnostics {
            pairs: table.len(),
            columns: table.width(),
            coverage,
        };
        tracing::info!(%diagnostics, "feature extraction complete");
        Ok((table, diagnostics))
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionDiagnostics {
    /// Output rows (distinct pair ids).
    pub pairs: usize,
    /// Output columns.
    pub columns: usize,
    /// Input row counts per category.
    pub coverage: CategoryCoverage,
}

impl ExtractionDiagnostics {
    /// Categories with no rows anywhere in the input.
    pub fn absent_categories(&self) -> Vec<&'static str> {
        let c = &self.coverage;
        [
            ("paired", c.paired),
            ("unpaired_exclusive", c.exclusive),
            ("unpaired_both", c.both),
            ("unpaired_left", c.left),
            ("unpaired_right", c.right),
        ]
        .into_iter()
        .filter(|&(_, n)| n == 0)
        .map(|(name, _)| name)
        .collect()
    }
}

impl fmt::Display for ExtractionDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.coverage;
        write!(
            f,
            "ExtractionDiagnostics {{ rows={}, pairs={}, columns={}, ",
            c.rows, self.pairs, self.columns,
        )?;
        write!(
            f,
            "paired={}, exclusive={} (left={}, right={}), both={} }}",
            c.paired, c.exclusive, c.left, c.right, c.both,
        )
    }
}
