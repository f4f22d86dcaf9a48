//! Side statistics and min/max-unpairing.
//!
//! A pair may have sentinel rows on only one side. The min/max features
//! must stay defined and comparable across all pairs regardless of which
//! side carries the excess, so missing sides are imputed before taking the
//! elementwise min and max.

use matchfeat_core::errors::{FeatureError, FeatureResult};
use matchfeat_core::types::{StatGroup, StatKind};
use tracing::debug;

use crate::schema::group_columns;
use crate::statistics::StatisticSet;
use crate::table::FeatureTable;

/// Statistics of sentinel rows pivoted by side, one row per pair that has
/// at least one sentinel row.
///
/// A side is `None` when no pair in the input has rows on that side, i.e.
/// its columns would be absent from the pivot. A present side holds a
/// value for every pair, already filled with the null value where that
/// pair lacks rows on the side.
#[derive(Debug, Clone, PartialEq)]
pub struct SidePivot<K> {
    ids: Vec<K>,
    left: Option<Vec<StatisticSet>>,
    right: Option<Vec<StatisticSet>>,
}

impl<K: Ord + Clone> SidePivot<K> {
    /// `ids` must be strictly increasing; present sides must match its length.
    pub fn new(
        ids: Vec<K>,
        left: Option<Vec<StatisticSet>>,
        right: Option<Vec<StatisticSet>>,
    ) -> FeatureResult<Self> {
        if let Some(position) = ids.windows(2).position(|w| w[0] >= w[1]) {
            return Err(FeatureError::InvalidPairIndex {
                position: position + 1,
            });
        }
        for side in [&left, &right].into_iter().flatten() {
            if side.len() != ids.len() {
                return Err(FeatureError::ShapeMismatch {
                    what: "side",
                    expected: ids.len(),
                    found: side.len(),
                });
            }
        }
        Ok(Self { ids, left, right })
    }

    /// Pivot per-pair `(id, left, right)` statistics.
    ///
    /// Pairs with neither side are dropped. NaN statistics and missing
    /// sides of present pairs become `null_value`.
    pub fn from_pairs<'a, I>(pairs: I, null_value: f64) -> FeatureResult<Self>
    where
        K: 'a,
        I: IntoIterator<Item = (&'a K, Option<&'a StatisticSet>, Option<&'a StatisticSet>)>,
    {
        let mut ids = Vec::new();
        let mut left = Vec::new();
        let mut right = Vec::new();
        let (mut any_left, mut any_right) = (false, false);

        for (id, l, r) in pairs {
            if l.is_none() && r.is_none() {
                continue;
            }
            any_left |= l.is_some();
            any_right |= r.is_some();
            ids.push(id.clone());
            left.push(fill_side(l, null_value));
            right.push(fill_side(r, null_value));
        }

        Self::new(ids, any_left.then_some(left), any_right.then_some(right))
    }

    pub fn ids(&self) -> &[K] {
        &self.ids
    }

    pub fn left(&self) -> Option<&[StatisticSet]> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&[StatisticSet]> {
        self.right.as_deref()
    }

    /// The side table: `<stat>_unpaired_left`, `<stat>_unpaired_right` as
    /// pivoted (absent sides are `null_value`), then the min/max columns.
    pub fn to_table(&self, null_value: f64) -> FeatureResult<FeatureTable<K>> {
        let null_side = vec![StatisticSet::filled(null_value); self.ids.len()];
        let left = self.left.as_ref().unwrap_or(&null_side);
        let right = self.right.as_ref().unwrap_or(&null_side);

        let mut columns = group_columns(StatGroup::UnpairedLeft);
        columns.extend(group_columns(StatGroup::UnpairedRight));
        let rows = self
            .ids
            .iter()
            .zip(left.iter().zip(right))
            .map(|(id, (l, r))| {
                let mut values = l.as_array().to_vec();
                values.extend_from_slice(r.as_array());
                (id.clone(), values)
            })
            .collect();

        let sides = FeatureTable::from_rows(columns, rows)?;
        sides.outer_join(&compute_min_max_features(self, null_value)?, null_value)
    }
}

fn fill_side(stats: Option<&StatisticSet>, null_value: f64) -> StatisticSet {
    stats.map_or(StatisticSet::filled(null_value), |s| s.fill_nan(null_value))
}

/// `<stat>_unpaired_min` / `<stat>_unpaired_max` for every statistic.
///
/// - Both sides absent: both are synthesized as `null_value`.
/// - One side absent: it takes the present side's values, so min == max.
/// - Both present: elementwise min and max.
pub fn compute_min_max_features<K: Ord + Clone>(
    pivot: &SidePivot<K>,
    null_value: f64,
) -> FeatureResult<FeatureTable<K>> {
    let synthesized;
    let (left, right) = match (pivot.left(), pivot.right()) {
        (Some(l), Some(r)) => (l, r),
        (Some(present), None) | (None, Some(present)) => {
            debug!(
                missing = if pivot.left.is_none() { "left" } else { "right" },
                "side absent across input, copying present side"
            );
            (present, present)
        }
        (None, None) => {
            synthesized = vec![StatisticSet::filled(null_value); pivot.ids.len()];
            (synthesized.as_slice(), synthesized.as_slice())
        }
    };

    let mut columns = Vec::with_capacity(2 * StatKind::ALL.len());
    for stat in StatKind::ALL {
        columns.push(StatGroup::UnpairedMin.column(stat));
        columns.push(StatGroup::UnpairedMax.column(stat));
    }

    let rows = pivot
        .ids
        .iter()
        .zip(left.iter().zip(right))
        .map(|(id, (l, r))| {
            let lo = l.elementwise_min(r);
            let hi = l.elementwise_max(r);
            let values = StatKind::ALL
                .iter()
                .flat_map(|&stat| [lo.get(stat), hi.get(stat)])
                .collect();
            (id.clone(), values)
        })
        .collect();

    FeatureTable::from_rows(columns, rows)
}
