//! Group word-pair rows by pair id into per-category score buckets.

use std::collections::BTreeMap;

use matchfeat_core::types::{Category, Side, WordPairScore};
use rayon::prelude::*;

use crate::statistics::StatisticSet;

/// Scores of one pair, split by category.
///
/// `all` and `paired` hold raw `pred`; every unpaired bucket holds the
/// (possibly complementary) transformed score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairBuckets {
    pub all: Vec<f64>,
    pub paired: Vec<f64>,
    pub unpaired: Vec<f64>,
    pub exclusive: Vec<f64>,
    pub both: Vec<f64>,
    pub left: Vec<f64>,
    pub right: Vec<f64>,
}

/// Row counts per category across the whole input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCoverage {
    pub rows: usize,
    pub paired: usize,
    pub exclusive: usize,
    pub both: usize,
    pub left: usize,
    pub right: usize,
}

/// Classification inputs shared by every row.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    pub threshold: f64,
    pub complementary: bool,
    pub sentinel: &'a str,
}

impl Classifier<'_> {
    fn transform(&self, pred: f64) -> f64 {
        if self.complementary {
            1.0 - pred
        } else {
            pred
        }
    }
}

/// Group `scores` by pair id. The map iterates in ascending id order.
pub fn group_by_pair<K: Ord + Clone>(
    scores: &[WordPairScore<K>],
    classifier: Classifier<'_>,
) -> (BTreeMap<K, PairBuckets>, CategoryCoverage) {
    let mut groups: BTreeMap<K, PairBuckets> = BTreeMap::new();
    let mut coverage = CategoryCoverage {
        rows: scores.len(),
        ..Default::default()
    };

    for row in scores {
        let bucket = groups.entry(row.pair_id.clone()).or_default();
        bucket.all.push(row.pred);

        match row.category(classifier.threshold, classifier.sentinel) {
            Category::Paired => {
                bucket.paired.push(row.pred);
                coverage.paired += 1;
            }
            Category::UnpairedExclusive(side) => {
                let comp = classifier.transform(row.pred);
                bucket.unpaired.push(comp);
                bucket.exclusive.push(comp);
                coverage.exclusive += 1;
                match side {
                    Side::Left => {
                        bucket.left.push(comp);
                        coverage.left += 1;
                    }
                    Side::Right => {
                        bucket.right.push(comp);
                        coverage.right += 1;
                    }
                }
            }
            Category::UnpairedBoth => {
                let comp = classifier.transform(row.pred);
                bucket.unpaired.push(comp);
                bucket.both.push(comp);
                coverage.both += 1;
            }
        }
    }

    (groups, coverage)
}

/// Statistic sets of one pair. `None` means the pair has no rows in that group.
#[derive(Debug, Clone, PartialEq)]
pub struct PairStatistics {
    pub all: StatisticSet,
    pub paired: Option<StatisticSet>,
    pub unpaired: Option<StatisticSet>,
    pub exclusive: Option<StatisticSet>,
    pub both: Option<StatisticSet>,
    pub left: Option<StatisticSet>,
    pub right: Option<StatisticSet>,
}

impl PairStatistics {
    pub fn from_buckets(buckets: &PairBuckets) -> Self {
        Self {
            all: StatisticSet::compute(&buckets.all),
            paired: non_empty(&buckets.paired),
            unpaired: non_empty(&buckets.unpaired),
            exclusive: non_empty(&buckets.exclusive),
            both: non_empty(&buckets.both),
            left: non_empty(&buckets.left),
            right: non_empty(&buckets.right),
        }
    }
}

fn non_empty(scores: &[f64]) -> Option<StatisticSet> {
    (!scores.is_empty()).then(|| StatisticSet::compute(scores))
}

/// Reduce every pair's buckets, optionally on the rayon pool.
/// Output order follows the map's id order either way.
pub fn reduce<K>(groups: BTreeMap<K, PairBuckets>, parallel: bool) -> Vec<(K, PairStatistics)>
where
    K: Ord + Send + Sync,
{
    let groups: Vec<(K, PairBuckets)> = groups.into_iter().collect();
    if parallel {
        groups
            .into_par_iter()
            .map(|(id, buckets)| {
                let stats = PairStatistics::from_buckets(&buckets);
                (id, stats)
            })
            .collect()
    } else {
        groups
            .into_iter()
            .map(|(id, buckets)| {
                let stats = PairStatistics::from_buckets(&buckets);
                (id, stats)
            })
            .collect()
    }
}
