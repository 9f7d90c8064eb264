//! Error types for plot specification building.

use thiserror::Error;

/// Result type for plot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Validation failures raised while assembling a plot specification. None
/// are recovered internally; a failed build produces nothing.
#[derive(Error, Debug)]
pub enum PlotError {
    /// The X axis is timestamp-typed but a contributing frame is not.
    #[error("typeX is timestamp but dataset '{series}' has a non-timestamp index")]
    TimestampMismatch { series: String },

    /// Design customization used keys outside the chart type's whitelist.
    #[error("unexpected design keys {given:?} for chart type '{chart}'; allowed keys are {allowed:?}")]
    UnexpectedDesignKeys {
        chart: String,
        given: Vec<String>,
        allowed: Vec<String>,
    },

    /// Per-series customization supplied with a series count other than one.
    #[error("per-series customization requires exactly one data series, got {series_count}")]
    MalformedCustomization { series_count: usize },

    /// A timestamp X axis was declared for a plot with no data series.
    #[error("typeX is timestamp but the plot has no data series")]
    EmptyPlot,

    /// Structural error propagated from the frame layer.
    #[error(transparent)]
    Frame(#[from] rpt_frame::FrameError),
}
