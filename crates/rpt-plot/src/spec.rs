//! The plot specification wire structures.
//!
//! These serialize to the JSON contract consumed by the client-side
//! renderer: `{id, data: [{df, type, ...}], typeX, title?, x?, y?, y2?}`
//! plus flattened design extension fields. Optional fields are omitted when
//! unset so the output stays minimal and stable.

use crate::chart::ChartKind;
use crate::design::Design;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// X-axis type: plain or timestamp-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    None,
    Timestamp,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::None => f.write_str("none"),
            AxisKind::Timestamp => f.write_str("timestamp"),
        }
    }
}

/// Axis label wrapper, serialized as `{"label": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub label: String,
}

impl AxisLabel {
    pub fn new(label: impl Into<String>) -> Self {
        AxisLabel {
            label: label.into(),
        }
    }
}

/// Bar/box/sankey orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "v")]
    Vertical,
    #[serde(rename = "h")]
    Horizontal,
}

impl Orientation {
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// One data series of a plot: serialized columns plus chart-specific fields.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesSpec {
    pub df: Vec<rpt_frame::SerializedColumn>,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Plot this series against the secondary (right) y axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y2: Option<bool>,
    #[serde(rename = "errorBars", skip_serializing_if = "Option::is_none")]
    pub error_bars: Option<Value>,
    /// Donut hole fraction for pie charts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    /// Grouping labels for box plots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Value>,
    #[serde(rename = "linkLabels", skip_serializing_if = "Option::is_none")]
    pub link_labels: Option<Vec<String>>,
    /// Fill color for continuous error bands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_to_iterate: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_static: Option<Value>,
}

impl SeriesSpec {
    /// A bare series with only data and a chart type.
    pub fn new(df: Vec<rpt_frame::SerializedColumn>, kind: ChartKind) -> Self {
        SeriesSpec {
            df,
            kind,
            orientation: None,
            y2: None,
            error_bars: None,
            hole: None,
            groups: None,
            link_labels: None,
            fillcolor: None,
            data_to_iterate: None,
            data_static: None,
        }
    }
}

/// The complete plot specification handed to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct PlotSpec {
    pub id: String,
    pub data: Vec<SeriesSpec>,
    #[serde(rename = "typeX")]
    pub type_x: AxisKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y2: Option<AxisLabel>,
    /// Sankey node styling, carried at the top level of the spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<Value>,
    #[serde(flatten)]
    pub design: Design,
}

impl PlotSpec {
    /// Serialize to the JSON value embedded in the report document.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_fields_are_omitted() {
        let spec = PlotSpec {
            id: "plot1".to_string(),
            data: vec![SeriesSpec::new(vec![], ChartKind::Line)],
            type_x: AxisKind::None,
            title: None,
            x: None,
            y: None,
            y2: None,
            node: None,
            design: Design::default(),
        };
        let json = spec.to_json();
        assert_eq!(json["typeX"], json!("none"));
        assert_eq!(json["data"][0]["type"], json!("line"));
        assert!(json.get("title").is_none());
        assert!(json.get("layout").is_none());
        assert!(json["data"][0].get("orientation").is_none());
    }

    #[test]
    fn design_fields_flatten_into_spec() {
        let spec = PlotSpec {
            id: "plot2".to_string(),
            data: vec![],
            type_x: AxisKind::Timestamp,
            title: Some("t".to_string()),
            x: Some(AxisLabel::new("time")),
            y: None,
            y2: None,
            node: None,
            design: Design::new().with_layout(json!({"barmode": "stack"})),
        };
        let json = spec.to_json();
        assert_eq!(json["layout"], json!({"barmode": "stack"}));
        assert_eq!(json["x"], json!({"label": "time"}));
        assert_eq!(json["typeX"], json!("timestamp"));
    }
}
