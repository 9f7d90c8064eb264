//! The frame: an ordered index plus named columns of equal length.

use crate::error::{FrameError, Result};
use crate::scalar::Scalar;
use std::fmt;

/// Column identifier: a flat name, or a two-level (group, leaf) pair used
/// for hierarchical table headers. Only two levels are supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnKey {
    Flat(String),
    Grouped { group: String, leaf: String },
}

impl ColumnKey {
    pub fn flat(name: impl Into<String>) -> Self {
        ColumnKey::Flat(name.into())
    }

    pub fn grouped(group: impl Into<String>, leaf: impl Into<String>) -> Self {
        ColumnKey::Grouped {
            group: group.into(),
            leaf: leaf.into(),
        }
    }

    /// The label used when the column is serialized or displayed flat.
    pub fn label(&self) -> String {
        match self {
            ColumnKey::Flat(name) => name.clone(),
            ColumnKey::Grouped { group, leaf } => format!("{group} / {leaf}"),
        }
    }

    /// The bottom-level label (the whole name for flat keys).
    pub fn leaf(&self) -> &str {
        match self {
            ColumnKey::Flat(name) => name,
            ColumnKey::Grouped { leaf, .. } => leaf,
        }
    }

    /// The top-level group label, if this key is grouped.
    pub fn group(&self) -> Option<&str> {
        match self {
            ColumnKey::Flat(_) => None,
            ColumnKey::Grouped { group, .. } => Some(group),
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<&str> for ColumnKey {
    fn from(name: &str) -> Self {
        ColumnKey::Flat(name.to_string())
    }
}

impl From<String> for ColumnKey {
    fn from(name: String) -> Self {
        ColumnKey::Flat(name)
    }
}

impl From<(&str, &str)> for ColumnKey {
    fn from((group, leaf): (&str, &str)) -> Self {
        ColumnKey::grouped(group, leaf)
    }
}

/// The row-key sequence of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    name: Option<String>,
    values: Vec<Scalar>,
}

impl Index {
    pub fn named(name: impl Into<String>, values: Vec<Scalar>) -> Self {
        Index {
            name: Some(name.into()),
            values,
        }
    }

    pub fn unnamed(values: Vec<Scalar>) -> Self {
        Index { name: None, values }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when the index is timestamp-typed: non-empty and every entry is
    /// a timestamp.
    pub fn is_timestamp(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(Scalar::is_timestamp)
    }
}

/// A named column of cell values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    key: ColumnKey,
    values: Vec<Scalar>,
}

impl Column {
    pub fn new(key: impl Into<ColumnKey>, values: Vec<Scalar>) -> Self {
        Column {
            key: key.into(),
            values,
        }
    }

    pub fn key(&self) -> &ColumnKey {
        &self.key
    }

    pub fn values(&self) -> &[Scalar] {
        &self.values
    }
}

/// An immutable table: ordered index plus ordered columns of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    index: Index,
    columns: Vec<Column>,
}

impl Frame {
    /// Build a frame, validating that every column matches the index length
    /// and that no column key repeats.
    pub fn new(index: Index, columns: Vec<Column>) -> Result<Self> {
        let expected = index.len();
        for column in &columns {
            if column.values.len() != expected {
                return Err(FrameError::LengthMismatch {
                    column: column.key.label(),
                    expected,
                    actual: column.values.len(),
                });
            }
        }
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.key == column.key) {
                return Err(FrameError::DuplicateColumn {
                    column: column.key.label(),
                });
            }
        }
        Ok(Frame { index, columns })
    }

    /// Single-column convenience constructor (a "series").
    pub fn series(index: Index, column: Column) -> Result<Self> {
        Frame::new(index, vec![column])
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_keys(&self) -> impl Iterator<Item = &ColumnKey> {
        self.columns.iter().map(Column::key)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether the frame's index is timestamp-typed.
    pub fn has_timestamp_index(&self) -> bool {
        self.index.is_timestamp()
    }

    /// Whether every column uses a two-level key (hierarchical headers).
    pub fn has_grouped_columns(&self) -> bool {
        !self.columns.is_empty()
            && self
                .columns
                .iter()
                .all(|c| matches!(c.key, ColumnKey::Grouped { .. }))
    }

    /// Cell values of row `i`, in column order.
    pub fn row(&self, i: usize) -> Vec<&Scalar> {
        self.columns.iter().map(|c| &c.values[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ints(values: &[i64]) -> Vec<Scalar> {
        values.iter().copied().map(Scalar::Int).collect()
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = Frame::new(
            Index::unnamed(ints(&[1, 2, 3])),
            vec![Column::new("a", ints(&[1, 2]))],
        )
        .unwrap_err();
        assert_eq!(
            err,
            FrameError::LengthMismatch {
                column: "a".to_string(),
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn duplicate_column_is_rejected() {
        let err = Frame::new(
            Index::unnamed(ints(&[1])),
            vec![
                Column::new("a", ints(&[1])),
                Column::new("a", ints(&[2])),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, FrameError::DuplicateColumn { .. }));
    }

    #[test]
    fn timestamp_index_detection() {
        let ts = |d| Scalar::Timestamp(Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap());
        let frame = Frame::new(
            Index::named("t", vec![ts(1), ts(2)]),
            vec![Column::new("v", ints(&[10, 20]))],
        )
        .unwrap();
        assert!(frame.has_timestamp_index());

        let mixed = Frame::new(
            Index::named("t", vec![ts(1), Scalar::Int(2)]),
            vec![Column::new("v", ints(&[10, 20]))],
        )
        .unwrap();
        assert!(!mixed.has_timestamp_index());

        let empty = Frame::new(Index::unnamed(vec![]), vec![Column::new("v", vec![])]).unwrap();
        assert!(!empty.has_timestamp_index());
    }

    #[test]
    fn grouped_column_detection() {
        let frame = Frame::new(
            Index::unnamed(ints(&[1])),
            vec![
                Column::new(("X", "a"), ints(&[1])),
                Column::new(("Y", "b"), ints(&[2])),
            ],
        )
        .unwrap();
        assert!(frame.has_grouped_columns());
        assert_eq!(frame.columns()[0].key().label(), "X / a");
    }
}
