//! Plot specification assembly.
//!
//! `PlotBuilder` owns the plot-ID counter for one report-building session.
//! Every public chart constructor funnels through the same assembly path:
//! allocate an ID, check timestamp consistency across the contributing
//! frames, serialize each frame, validate the design against the chart
//! type's whitelist, then merge labels and design into the final spec.

use crate::chart::ChartKind;
use crate::design::{design_whitelist, Design, DesignKey, SeriesCustom, COMPOSITE_WHITELIST};
use crate::error::{PlotError, Result};
use crate::spec::{AxisKind, AxisLabel, Orientation, PlotSpec, SeriesSpec};
use rpt_frame::{serialize_frame, Frame};
use serde_json::Value;
use tracing::debug;

/// Monotonic plot-ID source, owned by a builder instance rather than shared
/// process-wide. IDs are `plot1`, `plot2`, ... and `reset` restores the
/// sequence to its initial value.
#[derive(Debug, Clone)]
pub struct PlotIdAllocator {
    next: u64,
}

impl PlotIdAllocator {
    pub fn new() -> Self {
        PlotIdAllocator { next: 1 }
    }

    /// Hand out the next ID and advance the counter.
    pub fn allocate(&mut self) -> String {
        let id = format!("plot{}", self.next);
        self.next += 1;
        id
    }

    /// Restore the sequence to its initial value. Called by the report
    /// finalization step after the document is saved.
    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for PlotIdAllocator {
    fn default() -> Self {
        PlotIdAllocator::new()
    }
}

/// Labels, axis declaration, design extensions, and per-series
/// customization for a plot call.
#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub y2_label: Option<String>,
    /// Pre-declare the X axis as timestamp-typed. Every contributing frame
    /// must then have a timestamp index.
    pub time_x: bool,
    pub design: Design,
    /// Customization for the single data series of the plot. Rejected when
    /// the call produces a series count other than one.
    pub custom: Option<SeriesCustom>,
}

impl PlotOptions {
    pub fn new() -> Self {
        PlotOptions::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn y2_label(mut self, label: impl Into<String>) -> Self {
        self.y2_label = Some(label.into());
        self
    }

    pub fn time_x(mut self) -> Self {
        self.time_x = true;
        self
    }

    pub fn design(mut self, design: Design) -> Self {
        self.design = design;
        self
    }

    pub fn custom(mut self, custom: SeriesCustom) -> Self {
        self.custom = Some(custom);
        self
    }
}

/// One series of a composite plot: its frame, chart type, optional
/// secondary-axis flag, and optional customization.
#[derive(Debug, Clone)]
pub struct MultiSeries {
    pub frame: Frame,
    pub kind: ChartKind,
    pub y2: Option<bool>,
    pub custom: Option<SeriesCustom>,
}

impl MultiSeries {
    pub fn new(frame: Frame, kind: ChartKind) -> Self {
        MultiSeries {
            frame,
            kind,
            y2: None,
            custom: None,
        }
    }

    pub fn on_y2(mut self) -> Self {
        self.y2 = Some(true);
        self
    }

    pub fn custom(mut self, custom: SeriesCustom) -> Self {
        self.custom = Some(custom);
        self
    }
}

/// A series before serialization: the frame plus its chart-specific fields.
struct SeriesDraft {
    frame: Frame,
    kind: ChartKind,
    orientation: Option<Orientation>,
    y2: Option<bool>,
    error_bars: Option<Value>,
    hole: Option<f64>,
    groups: Option<Value>,
    link_labels: Option<Vec<String>>,
    fillcolor: Option<String>,
    custom: Option<SeriesCustom>,
}

impl SeriesDraft {
    fn new(frame: Frame, kind: ChartKind) -> Self {
        SeriesDraft {
            frame,
            kind,
            orientation: None,
            y2: None,
            error_bars: None,
            hole: None,
            groups: None,
            link_labels: None,
            fillcolor: None,
            custom: None,
        }
    }
}

/// Builds plot specifications for one report session.
#[derive(Debug, Default)]
pub struct PlotBuilder {
    ids: PlotIdAllocator,
}

impl PlotBuilder {
    pub fn new() -> Self {
        PlotBuilder {
            ids: PlotIdAllocator::new(),
        }
    }

    /// Restart plot numbering; invoked when a report is finalized.
    pub fn reset_ids(&mut self) {
        self.ids.reset();
    }

    /// Generic entry point: one chart type applied to every frame.
    pub fn build(
        &mut self,
        kind: ChartKind,
        frames: Vec<Frame>,
        options: PlotOptions,
    ) -> Result<PlotSpec> {
        let drafts = frames
            .into_iter()
            .map(|f| SeriesDraft::new(f, kind))
            .collect();
        self.assemble(drafts, kind.wire_name(), design_whitelist(kind), options, None)
    }

    /// Line plot; the index forms the x axis.
    pub fn line(&mut self, frame: Frame, options: PlotOptions) -> Result<PlotSpec> {
        self.build(ChartKind::Line, vec![frame], options)
    }

    /// Bar chart, optionally stacked and/or horizontal.
    pub fn bar(
        &mut self,
        frame: Frame,
        stacked: bool,
        horizontal: bool,
        options: PlotOptions,
    ) -> Result<PlotSpec> {
        let kind = if stacked {
            ChartKind::StackedBar
        } else {
            ChartKind::Bar
        };
        let mut draft = SeriesDraft::new(frame, kind);
        draft.orientation = Some(Orientation::from_horizontal(horizontal));
        self.assemble(
            vec![draft],
            kind.wire_name(),
            design_whitelist(kind),
            options,
            None,
        )
    }

    /// Overlay bar chart: series drawn over each other rather than grouped.
    pub fn overlay_bar(
        &mut self,
        frame: Frame,
        horizontal: bool,
        options: PlotOptions,
    ) -> Result<PlotSpec> {
        let kind = ChartKind::OverlayBar;
        let mut draft = SeriesDraft::new(frame, kind);
        draft.orientation = Some(Orientation::from_horizontal(horizontal));
        self.assemble(
            vec![draft],
            kind.wire_name(),
            design_whitelist(kind),
            options,
            None,
        )
    }

    /// Box plot with optional group labels.
    pub fn box_plot(
        &mut self,
        frame: Frame,
        groups: Option<Value>,
        horizontal: bool,
        options: PlotOptions,
    ) -> Result<PlotSpec> {
        let kind = ChartKind::Box;
        let mut draft = SeriesDraft::new(frame, kind);
        draft.orientation = Some(Orientation::from_horizontal(horizontal));
        draft.groups = groups;
        self.assemble(
            vec![draft],
            kind.wire_name(),
            design_whitelist(kind),
            options,
            None,
        )
    }

    pub fn histogram(&mut self, frame: Frame, options: PlotOptions) -> Result<PlotSpec> {
        self.build(ChartKind::Histogram, vec![frame], options)
    }

    /// Pie chart; `hole` in (0, 1] cuts out a donut center.
    pub fn pie(&mut self, frame: Frame, hole: Option<f64>, options: PlotOptions) -> Result<PlotSpec> {
        let kind = ChartKind::Pie;
        let mut draft = SeriesDraft::new(frame, kind);
        draft.hole = hole;
        self.assemble(
            vec![draft],
            kind.wire_name(),
            design_whitelist(kind),
            options,
            None,
        )
    }

    pub fn scatter(&mut self, frame: Frame, options: PlotOptions) -> Result<PlotSpec> {
        self.build(ChartKind::Scatter, vec![frame], options)
    }

    /// Open-high-low-close plot; the frame is expected to carry the four
    /// price columns.
    pub fn ohlc(&mut self, frame: Frame, options: PlotOptions) -> Result<PlotSpec> {
        self.build(ChartKind::Ohlc, vec![frame], options)
    }

    /// Sankey flow diagram with optional node styling and link labels.
    pub fn sankey(
        &mut self,
        frame: Frame,
        node: Option<Value>,
        link_labels: Vec<String>,
        horizontal: bool,
        options: PlotOptions,
    ) -> Result<PlotSpec> {
        let kind = ChartKind::Sankey;
        let mut draft = SeriesDraft::new(frame, kind);
        draft.orientation = Some(Orientation::from_horizontal(horizontal));
        draft.link_labels = Some(link_labels);
        self.assemble(
            vec![draft],
            kind.wire_name(),
            design_whitelist(kind),
            options,
            node,
        )
    }

    /// Scatter with error bars around each point.
    pub fn error_bars(
        &mut self,
        frame: Frame,
        symmetric: bool,
        options: PlotOptions,
    ) -> Result<PlotSpec> {
        let kind = ChartKind::Scatter;
        let mut draft = SeriesDraft::new(frame, kind);
        draft.error_bars = Some(serde_json::json!({ "symmetric": symmetric }));
        self.assemble(
            vec![draft],
            kind.wire_name(),
            design_whitelist(kind),
            options,
            None,
        )
    }

    /// Continuous error band around a line.
    pub fn error_line(
        &mut self,
        frame: Frame,
        fillcolor: Option<String>,
        options: PlotOptions,
    ) -> Result<PlotSpec> {
        let kind = ChartKind::ContinuousErrorBars;
        let mut draft = SeriesDraft::new(frame, kind);
        draft.fillcolor =
            Some(fillcolor.unwrap_or_else(|| "rgba(0,100,80,0.2)".to_string()));
        self.assemble(
            vec![draft],
            kind.wire_name(),
            design_whitelist(kind),
            options,
            None,
        )
    }

    /// Composite plot mixing chart types per series. Customization is
    /// supplied per series and validated independently; `options.custom`
    /// follows the single-series rule.
    pub fn multi(&mut self, series: Vec<MultiSeries>, options: PlotOptions) -> Result<PlotSpec> {
        let drafts = series
            .into_iter()
            .map(|s| {
                let mut draft = SeriesDraft::new(s.frame, s.kind);
                draft.y2 = s.y2;
                draft.custom = s.custom;
                draft
            })
            .collect();
        self.assemble(drafts, "multi", COMPOSITE_WHITELIST, options, None)
    }

    fn assemble(
        &mut self,
        mut drafts: Vec<SeriesDraft>,
        chart: &str,
        whitelist: &[DesignKey],
        options: PlotOptions,
        node: Option<Value>,
    ) -> Result<PlotSpec> {
        // A declared timestamp axis over an empty data list is a structural
        // error, not vacuous consistency.
        if options.time_x && drafts.is_empty() {
            return Err(PlotError::EmptyPlot);
        }

        // Timestamp consistency: declared implies every frame, otherwise
        // inferred from any frame.
        let mut time_x = options.time_x;
        for draft in &drafts {
            let time_frame = draft.frame.has_timestamp_index();
            if options.time_x && !time_frame {
                return Err(PlotError::TimestampMismatch {
                    series: draft
                        .frame
                        .column_keys()
                        .next()
                        .map(|k| k.label())
                        .unwrap_or_else(|| "<unnamed>".to_string()),
                });
            }
            time_x = time_x || time_frame;
        }

        options.design.validate(chart, whitelist)?;

        if let Some(custom) = options.custom {
            if drafts.len() != 1 {
                return Err(PlotError::MalformedCustomization {
                    series_count: drafts.len(),
                });
            }
            drafts[0].custom = Some(custom);
        }

        let data: Vec<SeriesSpec> = drafts
            .into_iter()
            .map(|draft| {
                let mut series = SeriesSpec::new(serialize_frame(&draft.frame), draft.kind);
                series.orientation = draft.orientation;
                series.y2 = draft.y2;
                series.error_bars = draft.error_bars;
                series.hole = draft.hole;
                series.groups = draft.groups;
                series.link_labels = draft.link_labels;
                series.fillcolor = draft.fillcolor;
                if let Some(custom) = draft.custom {
                    series.data_to_iterate = custom.data_to_iterate;
                    series.data_static = custom.data_static;
                }
                series
            })
            .collect();

        let spec = PlotSpec {
            id: self.ids.allocate(),
            data,
            type_x: if time_x {
                AxisKind::Timestamp
            } else {
                AxisKind::None
            },
            title: options.title,
            x: options.x_label.map(AxisLabel::new),
            y: options.y_label.map(AxisLabel::new),
            y2: options.y2_label.map(AxisLabel::new),
            node,
            design: options.design,
        };
        debug!(id = %spec.id, chart, series = spec.data.len(), "plot spec assembled");
        Ok(spec)
    }
}
