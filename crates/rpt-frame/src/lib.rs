//! Tabular dataset model shared by the plot and table generators.
//!
//! A [`Frame`] is an in-memory table: an ordered index plus named columns of
//! equal length. Cell values are [`Scalar`]s drawn from a closed set of kinds
//! (integer, float, bool, string, timestamp, null). The frame is immutable
//! once constructed; downstream consumers derive serialized copies from it.
//!
//! [`serialize_frame`] converts a frame into the column-oriented JSON-safe
//! form embedded in plot specifications:
//!
//! ```
//! use rpt_frame::{Column, Frame, Index, Scalar, serialize_frame};
//!
//! let frame = Frame::new(
//!     Index::named("day", vec![Scalar::from("mon"), Scalar::from("tue")]),
//!     vec![Column::new("sales", vec![Scalar::from(10.5), Scalar::from(12.0)])],
//! ).unwrap();
//!
//! let columns = serialize_frame(&frame);
//! assert_eq!(columns.len(), 2); // index first, then the data column
//! ```

pub mod error;
pub mod frame;
pub mod scalar;
pub mod serialize;

pub use error::{FrameError, Result};
pub use frame::{Column, ColumnKey, Frame, Index};
pub use scalar::Scalar;
pub use serialize::{serialize_frame, SerializedColumn};
