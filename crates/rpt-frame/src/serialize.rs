//! Column-oriented JSON serialization of a frame.
//!
//! The output is the `df` payload of a plot specification: one column for
//! the index (first), then one per data column in frame order. A
//! single-column frame therefore yields exactly two serialized columns.

use crate::frame::Frame;
use crate::scalar::Scalar;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One serialized column: an optional name and JSON-safe values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedColumn {
    pub name: Option<String>,
    pub values: Vec<Value>,
}

/// Convert a frame to its column-oriented JSON-safe form. Length invariants
/// are guaranteed by [`Frame::new`], so this is total.
pub fn serialize_frame(frame: &Frame) -> Vec<SerializedColumn> {
    let mut columns = Vec::with_capacity(frame.column_count() + 1);
    columns.push(SerializedColumn {
        name: frame.index().name().map(str::to_string),
        values: frame.index().values().iter().map(Scalar::to_json).collect(),
    });
    for column in frame.columns() {
        columns.push(SerializedColumn {
            name: Some(column.key().label()),
            values: column.values().iter().map(Scalar::to_json).collect(),
        });
    }
    columns
}
