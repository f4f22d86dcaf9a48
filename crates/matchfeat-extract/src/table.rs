//! Per-pair feature table.
//!
//! One row per pair identifier, sorted ascending, column-major `f64` storage.
//! Every stage takes a table by reference and returns a new one.

use std::cmp::Ordering;

use matchfeat_core::errors::{FeatureError, FeatureResult};
use matchfeat_core::types::FxHashMap;
use serde::Serialize;

/// A table of named `f64` columns indexed by a sorted, unique pair id.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable<K> {
    ids: Vec<K>,
    columns: Vec<String>,
    lookup: FxHashMap<String, usize>,
    data: Vec<Vec<f64>>,
}

impl<K: Ord + Clone> FeatureTable<K> {
    /// A table with no rows and the given columns.
    pub fn empty(columns: Vec<String>) -> FeatureResult<Self> {
        Self::from_rows(columns, Vec::new())
    }

    /// Build from `(id, row)` pairs. Rows are sorted by id.
    ///
    /// Every row must have one value per column and ids must be unique.
    pub fn from_rows(columns: Vec<String>, mut rows: Vec<(K, Vec<f64>)>) -> FeatureResult<Self> {
        let lookup = build_lookup(&columns)?;
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        if let Some(position) = rows.windows(2).position(|w| w[0].0 == w[1].0) {
            return Err(FeatureError::InvalidPairIndex {
                position: position + 1,
            });
        }

        let mut data = vec![Vec::with_capacity(rows.len()); columns.len()];
        let mut ids = Vec::with_capacity(rows.len());
        for (id, row) in rows {
            if row.len() != columns.len() {
                return Err(FeatureError::ShapeMismatch {
                    what: "row",
                    expected: columns.len(),
                    found: row.len(),
                });
            }
            for (col, value) in data.iter_mut().zip(row) {
                col.push(value);
            }
            ids.push(id);
        }

        Ok(Self {
            ids,
            columns,
            lookup,
            data,
        })
    }

    /// Union of both id sets, sorted. Gaps on either side become `fill`.
    ///
    /// Column names must be disjoint: a shared name is a [`FeatureError::JoinConflict`].
    pub fn outer_join(&self, other: &Self, fill: f64) -> FeatureResult<Self> {
        if let Some(column) = other.columns.iter().find(|c| self.lookup.contains_key(*c)) {
            return Err(FeatureError::JoinConflict {
                column: column.clone(),
            });
        }

        let mut ids = Vec::with_capacity(self.ids.len().max(other.ids.len()));
        // (row in self, row in other)
        let mut sources: Vec<(Option<usize>, Option<usize>)> = Vec::with_capacity(ids.capacity());
        let (mut i, mut j) = (0, 0);
        while i < self.ids.len() || j < other.ids.len() {
            let ordering = match (self.ids.get(i), other.ids.get(j)) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(_), None) => Ordering::Less,
                _ => Ordering::Greater,
            };
            match ordering {
                Ordering::Less => {
                    ids.push(self.ids[i].clone());
                    sources.push((Some(i), None));
                    i += 1;
                }
                Ordering::Greater => {
                    ids.push(other.ids[j].clone());
                    sources.push((None, Some(j)));
                    j += 1;
                }
                Ordering::Equal => {
                    ids.push(self.ids[i].clone());
                    sources.push((Some(i), Some(j)));
                    i += 1;
                    j += 1;
                }
            }
        }

        let mut columns = self.columns.clone();
        columns.extend(other.columns.iter().cloned());
        let mut data = Vec::with_capacity(columns.len());
        for col in &self.data {
            data.push(
                sources
                    .iter()
                    .map(|(row, _)| row.map_or(fill, |r| col[r]))
                    .collect(),
            );
        }
        for col in &other.data {
            data.push(
                sources
                    .iter()
                    .map(|(_, row)| row.map_or(fill, |r| col[r]))
                    .collect(),
            );
        }

        Ok(Self {
            ids,
            lookup: build_lookup(&columns)?,
            columns,
            data,
        })
    }

    /// Reorder (or narrow) to exactly `columns`.
    pub fn select(&self, columns: &[String]) -> FeatureResult<Self> {
        let data = columns
            .iter()
            .map(|name| {
                self.column(name)
                    .map(<[f64]>::to_vec)
                    .ok_or_else(|| FeatureError::MissingFeature {
                        column: name.clone(),
                    })
            })
            .collect::<FeatureResult<Vec<_>>>()?;
        Ok(Self {
            ids: self.ids.clone(),
            lookup: build_lookup(columns)?,
            columns: columns.to_vec(),
            data,
        })
    }

    /// Value at `(id, column)`.
    pub fn value(&self, id: &K, column: &str) -> Option<f64> {
        let row = self.ids.binary_search(id).ok()?;
        self.column(column).map(|col| col[row])
    }

    /// All values of `id` in column order.
    pub fn row(&self, id: &K) -> Option<Vec<f64>> {
        let row = self.ids.binary_search(id).ok()?;
        Some(self.data.iter().map(|col| col[row]).collect())
    }
}

impl<K> FeatureTable<K> {
    /// Append a column. One value per row; the name must be new.
    pub fn push_column(&mut self, name: String, values: Vec<f64>) -> FeatureResult<()> {
        if self.lookup.contains_key(&name) {
            return Err(FeatureError::JoinConflict { column: name });
        }
        if values.len() != self.ids.len() {
            return Err(FeatureError::ShapeMismatch {
                what: "column",
                expected: self.ids.len(),
                found: values.len(),
            });
        }
        self.lookup.insert(name.clone(), self.columns.len());
        self.columns.push(name);
        self.data.push(values);
        Ok(())
    }

    /// Replace every NaN in the table with `value`.
    pub fn fill_nan(mut self, value: f64) -> Self {
        for v in self.data.iter_mut().flatten() {
            if v.is_nan() {
                *v = value;
            }
        }
        self
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.lookup.get(name).map(|&idx| self.data[idx].as_slice())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    pub fn ids(&self) -> &[K] {
        &self.ids
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Iterate rows as `(id, values in column order)`.
    pub fn rows(&self) -> impl Iterator<Item = (&K, Vec<f64>)> + '_ {
        self.ids
            .iter()
            .enumerate()
            .map(move |(row, id)| (id, self.data.iter().map(|col| col[row]).collect()))
    }
}

impl<K: Serialize> FeatureTable<K> {
    /// JSON records, one object per row with the pair id under `"id"`.
    /// Non-finite values serialize as `null`.
    pub fn to_records(&self) -> serde_json::Result<Vec<serde_json::Value>> {
        let mut records = Vec::with_capacity(self.ids.len());
        for (row, id) in self.ids.iter().enumerate() {
            let mut record = serde_json::Map::with_capacity(self.columns.len() + 1);
            record.insert("id".to_string(), serde_json::to_value(id)?);
            for (name, col) in self.columns.iter().zip(&self.data) {
                record.insert(name.clone(), serde_json::Value::from(col[row]));
            }
            records.push(serde_json::Value::Object(record));
        }
        Ok(records)
    }
}

fn build_lookup(columns: &[String]) -> FeatureResult<FxHashMap<String, usize>> {
    let mut lookup = FxHashMap::default();
    lookup.reserve(columns.len());
    for (idx, name) in columns.iter().enumerate() {
        if lookup.insert(name.clone(), idx).is_some() {
            return Err(FeatureError::JoinConflict {
                column: name.clone(),
            });
        }
    }
    Ok(lookup)
}
