//! Feature vocabulary: statistic kinds, score groups, and derived suffixes.
//!
//! Every output column name is built from these enums, so the full column
//! set is known before any data is seen.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven summary statistics computed per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Mean,
    Sum,
    Count,
    Min,
    Max,
    /// max − min.
    Range,
    Median,
}

impl StatKind {
    pub const ALL: [StatKind; 7] = [
        Self::Mean,
        Self::Sum,
        Self::Count,
        Self::Min,
        Self::Max,
        Self::Range,
        Self::Median,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Sum => "sum",
            Self::Count => "count",
            Self::Min => "min",
            Self::Max => "max",
            Self::Range => "range",
            Self::Median => "median",
        }
    }

    /// Position in [`StatKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A group of scores a [`StatKind`] is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatGroup {
    All,
    Paired,
    /// Every non-paired row, no category split.
    Unpaired,
    UnpairedExclusive,
    UnpairedBoth,
    UnpairedLeft,
    UnpairedRight,
    /// Elementwise min of the left and right side statistics.
    UnpairedMin,
    /// Elementwise max of the left and right side statistics.
    UnpairedMax,
}

impl StatGroup {
    /// Output order of the base column blocks.
    pub const ALL: [StatGroup; 9] = [
        Self::Paired,
        Self::Unpaired,
        Self::UnpairedExclusive,
        Self::UnpairedBoth,
        Self::All,
        Self::UnpairedLeft,
        Self::UnpairedRight,
        Self::UnpairedMin,
        Self::UnpairedMax,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Self::All => "_all",
            Self::Paired => "_paired",
            Self::Unpaired => "_unpaired",
            Self::UnpairedExclusive => "_unpaired_exclusive",
            Self::UnpairedBoth => "_unpaired_both",
            Self::UnpairedLeft => "_unpaired_left",
            Self::UnpairedRight => "_unpaired_right",
            Self::UnpairedMin => "_unpaired_min",
            Self::UnpairedMax => "_unpaired_max",
        }
    }

    /// Column name for `stat` over this group, e.g. `mean_unpaired_both`.
    pub fn column(self, stat: StatKind) -> String {
        format!("{}{}", stat.name(), self.suffix())
    }
}

/// Which unpaired group a derived feature compares the paired group against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivedSuffix {
    Exclusive,
    /// The overall unpaired group; its suffix is empty.
    Overall,
    Both,
    Min,
    Max,
}

impl DerivedSuffix {
    /// Suffix set used by a bare derived-feature call.
    pub const BASIC: [DerivedSuffix; 3] = [Self::Exclusive, Self::Overall, Self::Both];

    /// Suffix set including the side-symmetrized groups.
    pub const ALL: [DerivedSuffix; 5] = [
        Self::Exclusive,
        Self::Overall,
        Self::Both,
        Self::Min,
        Self::Max,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Exclusive => "_exclusive",
            Self::Overall => "",
            Self::Both => "_both",
            Self::Min => "_min",
            Self::Max => "_max",
        }
    }

    /// The unpaired group this suffix reads from.
    pub fn group(self) -> StatGroup {
        match self {
            Self::Exclusive => StatGroup::UnpairedExclusive,
            Self::Overall => StatGroup::Unpaired,
            Self::Both => StatGroup::UnpairedBoth,
            Self::Min => StatGroup::UnpairedMin,
            Self::Max => StatGroup::UnpairedMax,
        }
    }
}

/// Derived feature kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivedKind {
    /// paired − unpaired.
    Diff,
    /// (paired + ε) / (paired + unpaired + 2ε).
    Perc,
}

impl DerivedKind {
    pub const ALL: [DerivedKind; 2] = [Self::Diff, Self::Perc];

    pub fn name(self) -> &'static str {
        match self {
            Self::Diff => "diff",
            Self::Perc => "perc",
        }
    }

    /// Column name, e.g. `mean_perc_exclusive` or `sum_diff`.
    pub fn column(self, stat: StatKind, suffix: DerivedSuffix) -> String {
        format!("{}_{}{}", stat.name(), self.name(), suffix.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_index_matches_all_order() {
        for (i, stat) in StatKind::ALL.iter().enumerate() {
            assert_eq!(stat.index(), i);
        }
    }

    #[test]
    fn test_column_names() {
        assert_eq!(StatGroup::UnpairedBoth.column(StatKind::Mean), "mean_unpaired_both");
        assert_eq!(StatGroup::All.column(StatKind::Range), "range_all");
        assert_eq!(
            DerivedKind::Perc.column(StatKind::Sum, DerivedSuffix::Overall),
            "sum_perc"
        );
        assert_eq!(
            DerivedKind::Diff.column(StatKind::Count, DerivedSuffix::Min),
            "count_diff_min"
        );
    }

    #[test]
    fn test_suffix_group_is_base_column() {
        for suffix in DerivedSuffix::ALL {
            let expected = format!("mean_unpaired{}", suffix.suffix());
            assert_eq!(suffix.group().column(StatKind::Mean), expected);
        }
    }
}
