//! Fixed output schema.
//!
//! The column set depends only on the configured derived suffixes, never on
//! which categories happen to be populated in the data.

use matchfeat_core::types::{DerivedKind, DerivedSuffix, StatGroup, StatKind};

/// Every column of the final feature table, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Vec<String>,
    suffixes: Vec<DerivedSuffix>,
}

impl FeatureSchema {
    /// Base columns for every group, then `diff`/`perc` per stat per suffix.
    pub fn for_suffixes(suffixes: &[DerivedSuffix]) -> Self {
        let mut columns = base_columns();
        columns.extend(derived_columns(&StatKind::ALL, suffixes));
        Self {
            columns,
            suffixes: suffixes.to_vec(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn suffixes(&self) -> &[DerivedSuffix] {
        &self.suffixes
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

/// `<stat><group suffix>` for all seven statistics.
pub fn group_columns(group: StatGroup) -> Vec<String> {
    StatKind::ALL.iter().map(|&stat| group.column(stat)).collect()
}

/// All base statistic columns in [`StatGroup::ALL`] order.
pub fn base_columns() -> Vec<String> {
    StatGroup::ALL
        .iter()
        .flat_map(|&group| group_columns(group))
        .collect()
}

/// Derived columns: per stat, per suffix, `diff` then `perc`.
pub fn derived_columns(stats: &[StatKind], suffixes: &[DerivedSuffix]) -> Vec<String> {
    let mut columns = Vec::with_capacity(stats.len() * suffixes.len() * 2);
    for &stat in stats {
        for &suffix in suffixes {
            for kind in DerivedKind::ALL {
                columns.push(kind.column(stat, suffix));
            }
        }
    }
    columns
}
