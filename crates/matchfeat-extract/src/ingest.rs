//! Raw table ingestion.
//!
//! Turns a loosely typed, column-named table into [`WordPairScore`] rows.
//! Required columns are checked before any row is read, so a table with
//! zero rows still reports a missing column.

use matchfeat_core::constants::{COL_ID, COL_LEFT_WORD, COL_PRED, COL_RIGHT_WORD};
use matchfeat_core::errors::InputError;
use matchfeat_core::types::{PairId, WordPairScore};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A generic table: a header and rows of JSON cells.
/// Extra columns are carried but ignored by ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

impl RawTable {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Positions of the required columns within a [`RawTable`] header.
struct ColumnPositions {
    id: usize,
    left_word: usize,
    right_word: usize,
    pred: usize,
}

impl ColumnPositions {
    fn resolve(table: &RawTable) -> Result<Self, InputError> {
        let position = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| InputError::MissingColumn {
                    column: name.to_string(),
                })
        };
        Ok(Self {
            id: position(COL_ID)?,
            left_word: position(COL_LEFT_WORD)?,
            right_word: position(COL_RIGHT_WORD)?,
            pred: position(COL_PRED)?,
        })
    }
}

/// Convert every row of `table` into a typed word-pair score.
///
/// - `id`: integer (or integral float) or string; all rows the same kind.
/// - `left_word`, `right_word`: strings.
/// - `pred`: number, or `null` for a missing score (becomes NaN).
pub fn parse_word_pairs(table: &RawTable) -> Result<Vec<WordPairScore<PairId>>, InputError> {
    let positions = ColumnPositions::resolve(table)?;
    let width = table.columns.len();

    let mut first_kind: Option<&'static str> = None;
    let mut out = Vec::with_capacity(table.rows.len());
    for (row_idx, row) in table.rows.iter().enumerate() {
        if row.len() != width {
            return Err(InputError::RowWidth {
                row: row_idx,
                expected: width,
                found: row.len(),
            });
        }

        let pair_id = parse_pair_id(&row[positions.id], row_idx)?;
        match first_kind {
            None => first_kind = Some(pair_id.kind()),
            Some(kind) if kind != pair_id.kind() => {
                return Err(InputError::MixedPairIdKinds { row: row_idx });
            }
            Some(_) => {}
        }

        out.push(WordPairScore {
            pair_id,
            left_word: parse_word(&row[positions.left_word], COL_LEFT_WORD, row_idx)?,
            right_word: parse_word(&row[positions.right_word], COL_RIGHT_WORD, row_idx)?,
            pred: parse_pred(&row[positions.pred], row_idx)?,
        });
    }
    Ok(out)
}

fn parse_pair_id(value: &Value, row: usize) -> Result<PairId, InputError> {
    match value {
        Value::String(s) => Ok(PairId::Text(s.clone())),
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                return Ok(PairId::Int(v));
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(PairId::Int(f as i64))
                }
                _ => Err(mismatch(COL_ID, row, "integer or string", value)),
            }
        }
        other => Err(mismatch(COL_ID, row, "integer or string", other)),
    }
}

fn parse_word(value: &Value, column: &str, row: usize) -> Result<String, InputError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(mismatch(column, row, "string", other)),
    }
}

fn parse_pred(value: &Value, row: usize) -> Result<f64, InputError> {
    match value {
        Value::Null => Ok(f64::NAN),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| mismatch(COL_PRED, row, "number", value)),
        other => Err(mismatch(COL_PRED, row, "number", other)),
    }
}

fn mismatch(column: &str, row: usize, expected: &'static str, found: &Value) -> InputError {
    InputError::TypeMismatch {
        column: column.to_string(),
        row,
        expected,
        found: json_kind(found).to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
