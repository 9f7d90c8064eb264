//! Design extensions and their per-chart-type whitelists.
//!
//! Callers customize a plot through an explicit record of named optional
//! fields ([`Design`]); each field's payload is an opaque JSON value passed
//! through to the renderer. Which fields a chart type accepts is declared in
//! one enum-keyed table ([`design_whitelist`]), and validation rejects any
//! populated field outside that set.

use crate::chart::ChartKind;
use crate::error::{PlotError, Result};
use serde::Serialize;
use serde_json::Value;

/// Names of the design extension fields a chart type may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignKey {
    Layout,
    Markers,
    Widths,
    Opacities,
    Lines,
    Margin,
}

impl DesignKey {
    pub fn name(&self) -> &'static str {
        match self {
            DesignKey::Layout => "layout",
            DesignKey::Markers => "markers",
            DesignKey::Widths => "widths",
            DesignKey::Opacities => "opacities",
            DesignKey::Lines => "lines",
            DesignKey::Margin => "margin",
        }
    }
}

/// Whitelist for composite ("multi") plots, which mix chart types per
/// series and accept the union of the single-type lists.
pub const COMPOSITE_WHITELIST: &[DesignKey] = &[
    DesignKey::Layout,
    DesignKey::Lines,
    DesignKey::Markers,
    DesignKey::Opacities,
    DesignKey::Widths,
];

/// The design keys accepted by a chart type.
pub fn design_whitelist(kind: ChartKind) -> &'static [DesignKey] {
    match kind {
        ChartKind::Line => &[DesignKey::Layout, DesignKey::Lines],
        ChartKind::Bar | ChartKind::StackedBar => {
            &[DesignKey::Layout, DesignKey::Markers, DesignKey::Widths]
        }
        ChartKind::OverlayBar => &[
            DesignKey::Layout,
            DesignKey::Markers,
            DesignKey::Opacities,
            DesignKey::Widths,
        ],
        ChartKind::Scatter | ChartKind::Pie => {
            &[DesignKey::Layout, DesignKey::Margin, DesignKey::Markers]
        }
        ChartKind::Box | ChartKind::Histogram => &[DesignKey::Layout, DesignKey::Markers],
        ChartKind::Ohlc => &[DesignKey::Layout, DesignKey::Lines],
        ChartKind::Sankey | ChartKind::ContinuousErrorBars => &[DesignKey::Layout],
    }
}

/// Renderer design extensions: one named optional field per [`DesignKey`],
/// each carrying an opaque JSON payload. Flattened into the plot spec JSON.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Design {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widths: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacities: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Value>,
}

impl Design {
    pub fn new() -> Self {
        Design::default()
    }

    pub fn with_layout(mut self, value: Value) -> Self {
        self.layout = Some(value);
        self
    }

    pub fn with_markers(mut self, value: Value) -> Self {
        self.markers = Some(value);
        self
    }

    pub fn with_widths(mut self, value: Value) -> Self {
        self.widths = Some(value);
        self
    }

    pub fn with_opacities(mut self, value: Value) -> Self {
        self.opacities = Some(value);
        self
    }

    pub fn with_lines(mut self, value: Value) -> Self {
        self.lines = Some(value);
        self
    }

    pub fn with_margin(mut self, value: Value) -> Self {
        self.margin = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.populated_keys().is_empty()
    }

    /// The keys whose fields are set.
    pub fn populated_keys(&self) -> Vec<DesignKey> {
        let mut keys = Vec::new();
        if self.layout.is_some() {
            keys.push(DesignKey::Layout);
        }
        if self.markers.is_some() {
            keys.push(DesignKey::Markers);
        }
        if self.widths.is_some() {
            keys.push(DesignKey::Widths);
        }
        if self.opacities.is_some() {
            keys.push(DesignKey::Opacities);
        }
        if self.lines.is_some() {
            keys.push(DesignKey::Lines);
        }
        if self.margin.is_some() {
            keys.push(DesignKey::Margin);
        }
        keys
    }

    /// Check that every populated field is in `allowed`; the error names
    /// both the offending keys and the allowed set.
    pub fn validate(&self, chart: &str, allowed: &[DesignKey]) -> Result<()> {
        let offending: Vec<String> = self
            .populated_keys()
            .into_iter()
            .filter(|k| !allowed.contains(k))
            .map(|k| k.name().to_string())
            .collect();
        if offending.is_empty() {
            Ok(())
        } else {
            Err(PlotError::UnexpectedDesignKeys {
                chart: chart.to_string(),
                given: offending,
                allowed: allowed.iter().map(|k| k.name().to_string()).collect(),
            })
        }
    }
}

/// Per-series customization: static attributes applied to the whole series,
/// and per-point attributes iterated alongside the data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeriesCustom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_to_iterate: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_static: Option<Value>,
}

impl SeriesCustom {
    pub fn new() -> Self {
        SeriesCustom::default()
    }

    pub fn with_iterated(mut self, value: Value) -> Self {
        self.data_to_iterate = Some(value);
        self
    }

    pub fn with_static(mut self, value: Value) -> Self {
        self.data_static = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whitelist_violation_names_both_sets() {
        let design = Design::new().with_opacities(json!([0.5]));
        let err = design
            .validate("bar", design_whitelist(ChartKind::Bar))
            .unwrap_err();
        match err {
            PlotError::UnexpectedDesignKeys {
                chart,
                given,
                allowed,
            } => {
                assert_eq!(chart, "bar");
                assert_eq!(given, vec!["opacities"]);
                assert_eq!(allowed, vec!["layout", "markers", "widths"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn subset_designs_pass() {
        let design = Design::new()
            .with_layout(json!({"barmode": "group"}))
            .with_widths(json!([0.4]));
        design
            .validate("bar", design_whitelist(ChartKind::Bar))
            .unwrap();
    }

    #[test]
    fn empty_design_is_always_valid() {
        Design::new()
            .validate("sankey", design_whitelist(ChartKind::Sankey))
            .unwrap();
    }
}
