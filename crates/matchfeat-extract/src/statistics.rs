//! The seven summary statistics over a group of scores.
//!
//! NaN scores are skipped by every statistic. A group whose scores are all
//! NaN has `count = 0`, `sum = 0`, and NaN for the rest; the owning table's
//! fill policy decides what that becomes in the output.

use matchfeat_core::types::StatKind;
use statrs::statistics::{Data, Median};

/// mean, sum, count, min, max, range, median, indexed by [`StatKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticSet {
    values: [f64; 7],
}

impl StatisticSet {
    /// Compute all seven statistics over `scores`, skipping NaN.
    pub fn compute(scores: &[f64]) -> Self {
        let valid: Vec<f64> = scores.iter().copied().filter(|v| !v.is_nan()).collect();
        if valid.is_empty() {
            return Self {
                values: [f64::NAN, 0.0, 0.0, f64::NAN, f64::NAN, f64::NAN, f64::NAN],
            };
        }

        let count = valid.len() as f64;
        let sum: f64 = valid.iter().sum();
        let min = valid.iter().copied().fold(f64::INFINITY, f64::min);
        let max = valid.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let median = Data::new(valid).median();

        Self {
            values: [sum / count, sum, count, min, max, max - min, median],
        }
    }

    /// Every statistic set to `value`.
    pub fn filled(value: f64) -> Self {
        Self { values: [value; 7] }
    }

    pub fn get(&self, stat: StatKind) -> f64 {
        self.values[stat.index()]
    }

    /// Replace NaN statistics with `value`.
    pub fn fill_nan(mut self, value: f64) -> Self {
        for v in &mut self.values {
            if v.is_nan() {
                *v = value;
            }
        }
        self
    }

    /// Elementwise minimum. Ties and incomparable pairs take `other`.
    pub fn elementwise_min(&self, other: &Self) -> Self {
        let mut values = other.values;
        for (out, &mine) in values.iter_mut().zip(&self.values) {
            if mine < *out {
                *out = mine;
            }
        }
        Self { values }
    }

    /// Elementwise maximum. Ties and incomparable pairs take `other`.
    pub fn elementwise_max(&self, other: &Self) -> Self {
        let mut values = other.values;
        for (out, &mine) in values.iter_mut().zip(&self.values) {
            if mine > *out {
                *out = mine;
            }
        }
        Self { values }
    }

    /// Values in [`StatKind::ALL`] order.
    pub fn as_array(&self) -> &[f64; 7] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_basic_statistics() {
        let s = StatisticSet::compute(&[0.2, 0.8, 0.5]);
        assert!(approx(s.get(StatKind::Mean), 0.5));
        assert!(approx(s.get(StatKind::Sum), 1.5));
        assert!(approx(s.get(StatKind::Count), 3.0));
        assert!(approx(s.get(StatKind::Min), 0.2));
        assert!(approx(s.get(StatKind::Max), 0.8));
        assert!(approx(s.get(StatKind::Range), 0.6));
        assert!(approx(s.get(StatKind::Median), 0.5));
    }

    #[test]
    fn test_even_median_averages_middle_pair() {
        let s = StatisticSet::compute(&[0.1, 0.4, 0.2, 0.9]);
        assert!(approx(s.get(StatKind::Median), 0.3));
    }

    #[test]
    fn test_nan_skipped() {
        let s = StatisticSet::compute(&[0.4, f64::NAN, 0.6]);
        assert!(approx(s.get(StatKind::Count), 2.0));
        assert!(approx(s.get(StatKind::Mean), 0.5));
    }

    #[test]
    fn test_all_nan_group() {
        let s = StatisticSet::compute(&[f64::NAN, f64::NAN]);
        assert_eq!(s.get(StatKind::Count), 0.0);
        assert_eq!(s.get(StatKind::Sum), 0.0);
        assert!(s.get(StatKind::Mean).is_nan());
        assert!(s.get(StatKind::Median).is_nan());

        let filled = s.fill_nan(0.5);
        assert_eq!(filled.get(StatKind::Mean), 0.5);
        assert_eq!(filled.get(StatKind::Count), 0.0);
    }

    #[test]
    fn test_elementwise_min_max() {
        let a = StatisticSet::compute(&[0.1, 0.3]);
        let b = StatisticSet::filled(0.25);
        let lo = a.elementwise_min(&b);
        let hi = a.elementwise_max(&b);
        assert!(approx(lo.get(StatKind::Mean), 0.2));
        assert!(approx(lo.get(StatKind::Count), 0.25));
        assert!(approx(hi.get(StatKind::Count), 2.0));
        assert!(approx(hi.get(StatKind::Max), 0.3));
    }
}
