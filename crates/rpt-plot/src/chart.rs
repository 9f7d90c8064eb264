//! Chart type tags understood by the renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart type carried in each data series of a plot specification. The
/// serialized form is the renderer's wire tag (`stackedBar`, `ohlc`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Bar,
    StackedBar,
    OverlayBar,
    Scatter,
    Box,
    Histogram,
    Pie,
    Ohlc,
    Sankey,
    ContinuousErrorBars,
}

impl ChartKind {
    /// The renderer wire tag for this chart type.
    pub fn wire_name(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::StackedBar => "stackedBar",
            ChartKind::OverlayBar => "overlayBar",
            ChartKind::Scatter => "scatter",
            ChartKind::Box => "box",
            ChartKind::Histogram => "histogram",
            ChartKind::Pie => "pie",
            ChartKind::Ohlc => "ohlc",
            ChartKind::Sankey => "sankey",
            ChartKind::ContinuousErrorBars => "continuousErrorBars",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tag_matches_wire_name() {
        for kind in [
            ChartKind::Line,
            ChartKind::StackedBar,
            ChartKind::OverlayBar,
            ChartKind::Ohlc,
            ChartKind::ContinuousErrorBars,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::from(kind.wire_name()));
        }
    }
}
