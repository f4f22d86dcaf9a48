use std::collections::BTreeSet;

use matchfeat_core::config::ExtractionConfig;
use matchfeat_core::types::{StatGroup, WordPairScore};
use matchfeat_extract::schema::group_columns;
use matchfeat_extract::{FeatureExtractor, FeatureTable};
use proptest::prelude::*;

const UNP: &str = "[UNP]";
const WORDS: [&str; 4] = ["acme", "corp", "global", "inc"];

/// Row layouts: 0 = left sentinel, 1 = right sentinel, 2 = two words,
/// 3 = sentinel on both sides.
const LEFT_SENTINEL: u8 = 0;
const RIGHT_SENTINEL: u8 = 1;
const BOTH_SENTINEL: u8 = 3;

/// Rows of up to 8 pairs; `layouts` bounds the layout codes drawn.
fn rows_with_layouts(layouts: u8) -> impl Strategy<Value = Vec<WordPairScore<i64>>> {
    prop::collection::vec(
        (0i64..8, 0u8..layouts, 0usize..4, 0usize..4, 0.0f64..=1.0),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(id, layout, l, r, pred)| match layout {
                LEFT_SENTINEL => WordPairScore::new(id, UNP, WORDS[r], pred),
                RIGHT_SENTINEL => WordPairScore::new(id, WORDS[l], UNP, pred),
                BOTH_SENTINEL => WordPairScore::new(id, UNP, UNP, pred),
                _ => WordPairScore::new(id, WORDS[l], WORDS[r], pred),
            })
            .collect()
    })
}

fn rows_strategy() -> impl Strategy<Value = Vec<WordPairScore<i64>>> {
    rows_with_layouts(BOTH_SENTINEL + 1)
}

/// A row with the sentinel on both sides is always a left-side row, so
/// swapping words does not mirror it. Side symmetry only holds without it.
fn mirrorable_rows() -> impl Strategy<Value = Vec<WordPairScore<i64>>> {
    rows_with_layouts(BOTH_SENTINEL)
}

fn extractor(parallel: bool) -> FeatureExtractor {
    FeatureExtractor::new(ExtractionConfig {
        parallel: Some(parallel),
        ..Default::default()
    })
    .unwrap()
}

fn bits(table: &FeatureTable<i64>) -> Vec<(i64, Vec<u64>)> {
    table
        .rows()
        .map(|(id, row)| (*id, row.iter().map(|v| v.to_bits()).collect()))
        .collect()
}

fn column_bits(table: &FeatureTable<i64>, column: &str) -> Vec<u64> {
    table
        .column(column)
        .unwrap()
        .iter()
        .map(|v| v.to_bits())
        .collect()
}

fn assert_perc_in_unit_interval(table: &FeatureTable<i64>) -> Result<(), TestCaseError> {
    for column in table.columns().iter().filter(|c| c.contains("_perc")) {
        for &v in table.column(column).unwrap() {
            prop_assert!(v > 0.0 && v < 1.0, "{} = {}", column, v);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn one_row_per_input_pair(scores in rows_strategy()) {
        let table = FeatureExtractor::with_defaults().extract(&scores).unwrap();
        let expected: Vec<i64> = scores
            .iter()
            .map(|s| s.pair_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(table.ids(), expected.as_slice());
    }

    #[test]
    fn columns_independent_of_input(scores in rows_strategy()) {
        let extractor = FeatureExtractor::with_defaults();
        let table = extractor.extract(&scores).unwrap();
        prop_assert_eq!(table.columns(), extractor.schema().columns());
    }

    #[test]
    fn output_has_no_nan(scores in rows_strategy()) {
        let table = FeatureExtractor::with_defaults().extract(&scores).unwrap();
        for (_, row) in table.rows() {
            prop_assert!(row.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn min_max_symmetric_under_side_swap(scores in mirrorable_rows()) {
        let extractor = FeatureExtractor::with_defaults();
        let swapped: Vec<_> = scores.iter().map(WordPairScore::swapped).collect();
        let a = extractor.extract(&scores).unwrap();
        let b = extractor.extract(&swapped).unwrap();

        for group in [StatGroup::UnpairedMin, StatGroup::UnpairedMax] {
            for column in group_columns(group) {
                let lhs = column_bits(&a, &column);
                let rhs = column_bits(&b, &column);
                prop_assert_eq!(lhs, rhs, "{} changed under swap", column);
            }
        }
        prop_assert_eq!(
            a.column("mean_unpaired_left").unwrap(),
            b.column("mean_unpaired_right").unwrap()
        );
    }

    #[test]
    fn perc_strictly_between_zero_and_one(scores in rows_strategy()) {
        let table = FeatureExtractor::with_defaults().extract(&scores).unwrap();
        assert_perc_in_unit_interval(&table)?;
    }

    #[test]
    fn perc_bounded_for_any_valid_null_value(
        scores in rows_strategy(),
        null_value in 0.0f64..=1.0,
    ) {
        let extractor = FeatureExtractor::new(ExtractionConfig {
            null_value: Some(null_value),
            ..Default::default()
        })
        .unwrap();
        let table = extractor.extract(&scores).unwrap();
        assert_perc_in_unit_interval(&table)?;
    }

    #[test]
    fn extraction_is_deterministic(scores in rows_strategy()) {
        let extractor = FeatureExtractor::with_defaults();
        let first = extractor.extract(&scores).unwrap();
        let second = extractor.extract(&scores).unwrap();
        prop_assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn parallel_matches_sequential(scores in rows_strategy()) {
        let sequential = extractor(false).extract(&scores).unwrap();
        let parallel = extractor(true).extract(&scores).unwrap();
        prop_assert_eq!(bits(&sequential), bits(&parallel));
    }
}
