//! Declarative plot specifications for the client-side chart renderer.
//!
//! A [`PlotBuilder`] turns frames into [`PlotSpec`]s: JSON-serializable
//! structures carrying the serialized data columns, the chart type, axis
//! labels, and whitelisted design extensions. The builder owns the plot-ID
//! counter; each report-building session gets its own builder, and the
//! external finalization step calls [`PlotBuilder::reset_ids`] after saving.
//!
//! # Example
//!
//! ```
//! use rpt_frame::{Column, Frame, Index, Scalar};
//! use rpt_plot::{PlotBuilder, PlotOptions};
//!
//! let frame = Frame::series(
//!     Index::named("month", vec![Scalar::from("jan"), Scalar::from("feb")]),
//!     Column::new("revenue", vec![Scalar::from(10.0), Scalar::from(14.0)]),
//! ).unwrap();
//!
//! let mut builder = PlotBuilder::new();
//! let spec = builder
//!     .line(frame, PlotOptions::new().title("Revenue"))
//!     .unwrap();
//! assert_eq!(spec.id, "plot1");
//! ```

pub mod builder;
pub mod chart;
pub mod design;
pub mod error;
pub mod spec;

pub use builder::{MultiSeries, PlotBuilder, PlotIdAllocator, PlotOptions};
pub use chart::ChartKind;
pub use design::{design_whitelist, Design, DesignKey, SeriesCustom, COMPOSITE_WHITELIST};
pub use error::{PlotError, Result};
pub use spec::{AxisKind, AxisLabel, Orientation, PlotSpec, SeriesSpec};
