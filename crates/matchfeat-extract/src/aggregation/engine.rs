//! Builds the five intermediate per-pair statistic tables and merges them.

use matchfeat_core::config::ExtractionConfig;
use matchfeat_core::errors::FeatureResult;
use matchfeat_core::types::{StatGroup, WordPairScore};
use tracing::{debug, warn};

use super::buckets::{self, CategoryCoverage, Classifier, PairStatistics};
use super::side::SidePivot;
use crate::schema::group_columns;
use crate::statistics::StatisticSet;
use crate::table::FeatureTable;

/// Groups word-pair rows by pair id and computes statistic tables.
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    threshold: f64,
    complementary: bool,
    null_value: f64,
    sentinel: String,
    parallel: bool,
}

/// The five intermediate tables, each keyed by pair id.
#[derive(Debug, Clone)]
pub struct AggregatedTables<K> {
    /// `<stat>_all` over raw `pred`, every pair.
    pub all_stat: FeatureTable<K>,
    /// `<stat>_paired` over raw `pred`, pairs with paired rows only.
    pub paired_stat: FeatureTable<K>,
    /// `<stat>_unpaired_exclusive` / `<stat>_unpaired_both`, pairs with
    /// unpaired rows; absent categories are `null_value`.
    pub unpaired_stat: FeatureTable<K>,
    /// `<stat>_unpaired` without category split, every pair; gaps are 0.
    pub unpaired_stat_full: FeatureTable<K>,
    /// Side pivot plus min/max-unpairing, pairs with sentinel rows.
    pub side_stat: FeatureTable<K>,
    /// Row counts per category.
    pub coverage: CategoryCoverage,
}

impl AggregationEngine {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            threshold: config.effective_pos_threshold(),
            complementary: config.effective_complementary(),
            null_value: config.effective_null_value(),
            sentinel: config.effective_sentinel().to_string(),
            parallel: config.effective_parallel(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&ExtractionConfig::default())
    }

    pub fn null_value(&self) -> f64 {
        self.null_value
    }

    /// Compute the five statistic tables for `scores`.
    pub fn aggregate<K>(&self, scores: &[WordPairScore<K>]) -> FeatureResult<AggregatedTables<K>>
    where
        K: Ord + Clone + Send + Sync,
    {
        let classifier = Classifier {
            threshold: self.threshold,
            complementary: self.complementary,
            sentinel: &self.sentinel,
        };
        let (groups, coverage) = buckets::group_by_pair(scores, classifier);
        debug!(
            rows = coverage.rows,
            pairs = groups.len(),
            paired = coverage.paired,
            exclusive = coverage.exclusive,
            both = coverage.both,
            left = coverage.left,
            right = coverage.right,
            "grouped word pairs"
        );
        if coverage.rows > 0 {
            if coverage.exclusive == 0 {
                warn!("no exclusive unpaired rows in input, synthesizing null columns");
            }
            if coverage.both == 0 {
                warn!("no below-threshold unpaired rows in input, synthesizing null columns");
            }
        }

        let pairs = buckets::reduce(groups, self.parallel);

        Ok(AggregatedTables {
            all_stat: self.all_table(&pairs)?,
            paired_stat: self.paired_table(&pairs)?,
            unpaired_stat: self.unpaired_table(&pairs)?,
            unpaired_stat_full: self.unpaired_full_table(&pairs)?,
            side_stat: self.side_table(&pairs)?,
            coverage,
        })
    }

    fn all_table<K: Ord + Clone>(
        &self,
        pairs: &[(K, PairStatistics)],
    ) -> FeatureResult<FeatureTable<K>> {
        let rows = pairs
            .iter()
            .map(|(id, stats)| (id.clone(), stats.all.as_array().to_vec()))
            .collect();
        FeatureTable::from_rows(group_columns(StatGroup::All), rows)
    }

    fn paired_table<K: Ord + Clone>(
        &self,
        pairs: &[(K, PairStatistics)],
    ) -> FeatureResult<FeatureTable<K>> {
        let rows = pairs
            .iter()
            .filter_map(|(id, stats)| {
                stats
                    .paired
                    .map(|paired| (id.clone(), paired.as_array().to_vec()))
            })
            .collect();
        FeatureTable::from_rows(group_columns(StatGroup::Paired), rows)
    }

    /// Exclusivity split. A category with no rows anywhere yields the same
    /// `null_value` columns as a single pair lacking it.
    fn unpaired_table<K: Ord + Clone>(
        &self,
        pairs: &[(K, PairStatistics)],
    ) -> FeatureResult<FeatureTable<K>> {
        let fill = |stats: Option<StatisticSet>| {
            stats.map_or(StatisticSet::filled(self.null_value), |s| {
                s.fill_nan(self.null_value)
            })
        };

        let mut columns = group_columns(StatGroup::UnpairedExclusive);
        columns.extend(group_columns(StatGroup::UnpairedBoth));
        let rows = pairs
            .iter()
            .filter(|(_, stats)| stats.unpaired.is_some())
            .map(|(id, stats)| {
                let mut values = fill(stats.exclusive).as_array().to_vec();
                values.extend_from_slice(fill(stats.both).as_array());
                (id.clone(), values)
            })
            .collect();
        FeatureTable::from_rows(columns, rows)
    }

    /// Overall unpaired statistics. A pair with no unpaired rows carries no
    /// unpaired signal, so its values are 0 rather than `null_value`.
    fn unpaired_full_table<K: Ord + Clone>(
        &self,
        pairs: &[(K, PairStatistics)],
    ) -> FeatureResult<FeatureTable<K>> {
        let rows = pairs
            .iter()
            .map(|(id, stats)| {
                let values = stats
                    .unpaired
                    .map_or(StatisticSet::filled(0.0), |s| s.fill_nan(0.0));
                (id.clone(), values.as_array().to_vec())
            })
            .collect();
        FeatureTable::from_rows(group_columns(StatGroup::Unpaired), rows)
    }

    fn side_table<K: Ord + Clone>(
        &self,
        pairs: &[(K, PairStatistics)],
    ) -> FeatureResult<FeatureTable<K>> {
        let pivot = SidePivot::from_pairs(
            pairs
                .iter()
                .map(|(id, stats)| (id, stats.left.as_ref(), stats.right.as_ref())),
            self.null_value,
        )?;
        if !pivot.ids().is_empty() && (pivot.left().is_none() || pivot.right().is_none()) {
            warn!(
                left_present = pivot.left().is_some(),
                right_present = pivot.right().is_some(),
                "sentinel rows on one side only, imputing the other side"
            );
        }
        pivot.to_table(self.null_value)
    }
}

impl<K: Ord + Clone> AggregatedTables<K> {
    /// Outer-join all five tables on pair id, sorted ascending. Gaps and any
    /// remaining NaN statistic become `null_value`.
    pub fn merge(&self, null_value: f64) -> FeatureResult<FeatureTable<K>> {
        let merged = self
            .paired_stat
            .outer_join(&self.unpaired_stat_full, null_value)?
            .outer_join(&self.unpaired_stat, null_value)?
            .outer_join(&self.all_stat, null_value)?
            .outer_join(&self.side_stat, null_value)?;
        Ok(merged.fill_nan(null_value))
    }
}
