//! Derived features: paired vs. unpaired differences and ratios.

use matchfeat_core::constants::{PERC_EPSILON, TERMINAL_FILL};
use matchfeat_core::errors::{FeatureError, FeatureResult};
use matchfeat_core::types::{DerivedKind, DerivedSuffix, StatGroup, StatKind};

use crate::table::FeatureTable;

/// Adds `<stat>_diff<suffix>` and `<stat>_perc<suffix>` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFeatureComputer {
    stats: Vec<StatKind>,
    suffixes: Vec<DerivedSuffix>,
}

impl Default for DerivedFeatureComputer {
    /// All seven statistics against the exclusive, overall, and both groups.
    fn default() -> Self {
        Self::new(StatKind::ALL.to_vec(), DerivedSuffix::BASIC.to_vec())
    }
}

impl DerivedFeatureComputer {
    pub fn new(stats: Vec<StatKind>, suffixes: Vec<DerivedSuffix>) -> Self {
        Self { stats, suffixes }
    }

    pub fn suffixes(&self) -> &[DerivedSuffix] {
        &self.suffixes
    }

    /// Append every derived column, then replace any NaN left in the table
    /// with 0 (no evidence for that feature).
    ///
    /// Needs `<stat>_paired` and `<stat>_unpaired<suffix>` for every
    /// configured stat and suffix.
    pub fn derive<K>(&self, mut table: FeatureTable<K>) -> FeatureResult<FeatureTable<K>> {
        for &stat in &self.stats {
            let paired = required_column(&table, StatGroup::Paired.column(stat))?;
            for &suffix in &self.suffixes {
                let unpaired = required_column(&table, suffix.group().column(stat))?;

                let (diffs, percs): (Vec<f64>, Vec<f64>) = paired
                    .iter()
                    .zip(&unpaired)
                    .map(|(&p, &u)| (diff(p, u), perc(p, u)))
                    .unzip();

                table.push_column(DerivedKind::Diff.column(stat, suffix), diffs)?;
                table.push_column(DerivedKind::Perc.column(stat, suffix), percs)?;
            }
        }
        Ok(table.fill_nan(TERMINAL_FILL))
    }
}

/// paired − unpaired.
pub fn diff(paired: f64, unpaired: f64) -> f64 {
    paired - unpaired
}

/// (paired + ε) / (paired + unpaired + 2ε); 0.5 when both are 0.
pub fn perc(paired: f64, unpaired: f64) -> f64 {
    (paired + PERC_EPSILON) / (paired + unpaired + 2.0 * PERC_EPSILON)
}

fn required_column<K>(table: &FeatureTable<K>, name: String) -> FeatureResult<Vec<f64>> {
    match table.column(&name) {
        Some(values) => Ok(values.to_vec()),
        None => Err(FeatureError::MissingFeature { column: name }),
    }
}
