//! Semantic HTML tables from frames.
//!
//! [`render_table`] produces a self-contained `<table>` fragment with
//! `<thead>`, `<tbody>`, and an optional `<tfoot>` (the last row promoted
//! to a footer on request). Per-column display formatting resolves through
//! an override-precedence chain: exact column override, wildcard override,
//! built-in default.
//!
//! ```
//! use rpt_frame::{Column, Frame, Index, Scalar};
//! use rpt_table::{render_table, FormatOverride, FormatOverrides, TableOptions};
//!
//! let frame = Frame::series(
//!     Index::named("region", vec![Scalar::from("north")]),
//!     Column::new("sales", vec![Scalar::from(1234.5)]),
//! ).unwrap();
//!
//! let options = TableOptions::new()
//!     .formats(FormatOverrides::new().wildcard(FormatOverride::new().decimal_places(1)));
//! let html = render_table(&frame, &options).unwrap();
//! assert!(html.contains("1,234.5"));
//! ```

pub mod error;
pub mod format;
pub mod group;
pub mod render;

pub use error::{Result, TableError};
pub use format::{format_number, Align, CellFormat, FormatOverride, FormatOverrides};
pub use group::group_runs;
pub use render::{frequency_table, render_table, TableOptions};
