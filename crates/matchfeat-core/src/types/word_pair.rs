//! Word-pair score rows and their derived categories.

use serde::{Deserialize, Serialize};

/// One word-level match score between a left and a right record.
///
/// Either word may be the sentinel literal, meaning the other side's word has
/// no counterpart. `pred` is a probability in [0, 1]; NaN marks a missing score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordPairScore<K> {
    pub pair_id: K,
    pub left_word: String,
    pub right_word: String,
    pub pred: f64,
}

impl<K> WordPairScore<K> {
    pub fn new(
        pair_id: K,
        left_word: impl Into<String>,
        right_word: impl Into<String>,
        pred: f64,
    ) -> Self {
        Self {
            pair_id,
            left_word: left_word.into(),
            right_word: right_word.into(),
            pred,
        }
    }

    /// Which side (if any) holds the sentinel. Left wins when both do.
    pub fn sentinel_side(&self, sentinel: &str) -> Option<Side> {
        if self.left_word == sentinel {
            Some(Side::Left)
        } else if self.right_word == sentinel {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Classify this row against `threshold`.
    ///
    /// Paired requires a real word on both sides and `pred >= threshold`,
    /// so a NaN score is never paired.
    pub fn category(&self, threshold: f64, sentinel: &str) -> Category {
        match self.sentinel_side(sentinel) {
            Some(side) => Category::UnpairedExclusive(side),
            None if self.pred >= threshold => Category::Paired,
            None => Category::UnpairedBoth,
        }
    }

    /// Same row with the left and right words exchanged.
    pub fn swapped(&self) -> Self
    where
        K: Clone,
    {
        Self {
            pair_id: self.pair_id.clone(),
            left_word: self.right_word.clone(),
            right_word: self.left_word.clone(),
            pred: self.pred,
        }
    }
}

/// Side of a record pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Derived category of a word-pair row. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Paired,
    /// Exactly one side is the sentinel; the side tag names which.
    UnpairedExclusive(Side),
    /// Both words are real but scored below threshold.
    UnpairedBoth,
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNP: &str = "[UNP]";

    #[test]
    fn test_paired_at_threshold() {
        let row = WordPairScore::new(1, "cat", "cat", 0.40);
        assert_eq!(row.category(0.40, UNP), Category::Paired);
    }

    #[test]
    fn test_below_threshold_is_both() {
        let row = WordPairScore::new(1, "cat", "dog", 0.39);
        assert_eq!(row.category(0.40, UNP), Category::UnpairedBoth);
    }

    #[test]
    fn test_sentinel_is_exclusive_even_with_high_score() {
        let row = WordPairScore::new(1, "cat", UNP, 0.99);
        assert_eq!(
            row.category(0.40, UNP),
            Category::UnpairedExclusive(Side::Right)
        );
        let row = WordPairScore::new(1, UNP, "cat", 0.99);
        assert_eq!(
            row.category(0.40, UNP),
            Category::UnpairedExclusive(Side::Left)
        );
    }

    #[test]
    fn test_nan_score_is_never_paired() {
        let row = WordPairScore::new(1, "cat", "cat", f64::NAN);
        assert_eq!(row.category(0.40, UNP), Category::UnpairedBoth);
    }

    #[test]
    fn test_swapped_flips_sentinel_side() {
        let row = WordPairScore::new(3, "cat", UNP, 0.2);
        assert_eq!(row.swapped().sentinel_side(UNP), Some(Side::Left));
    }
}
