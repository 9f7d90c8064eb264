//! HTML table generation.

use crate::error::{Result, TableError};
use crate::format::{Align, FormatOverrides};
use crate::group::group_runs;
use rpt_frame::{ColumnKey, Frame, Scalar};
use std::fmt::Write;
use tracing::debug;

/// Row count above which a sortable table gets a fixed display height for
/// internal scrolling.
const SCROLL_ROW_THRESHOLD: usize = 15;
const SCROLL_HEIGHT_PX: u32 = 600;

/// Rendering options for one table.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Mark columns sortable and use the interactive table style.
    pub sortable: bool,
    /// Render the final row inside `<tfoot>` instead of `<tbody>`.
    pub last_row_is_footer: bool,
    /// Per-column formatting overrides.
    pub formats: FormatOverrides,
}

impl TableOptions {
    pub fn new() -> Self {
        TableOptions::default()
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn last_row_is_footer(mut self) -> Self {
        self.last_row_is_footer = true;
        self
    }

    pub fn formats(mut self, formats: FormatOverrides) -> Self {
        self.formats = formats;
        self
    }
}

/// Render a frame as a semantic HTML `<table>` fragment.
pub fn render_table(frame: &Frame, options: &TableOptions) -> Result<String> {
    let row_count = frame.row_count();
    if options.last_row_is_footer && row_count == 0 {
        return Err(TableError::EmptyFooter);
    }

    let thead = render_header(frame, options);

    let mut body_rows = String::new();
    let mut tfoot = String::new();
    for i in 0..row_count {
        let mut cells = String::new();
        for (key, value) in frame.column_keys().zip(frame.row(i)) {
            cells.push_str(&render_cell(key, value, options));
        }
        if options.last_row_is_footer && i == row_count - 1 {
            tfoot = format!("<tfoot><tr>{cells}</tr></tfoot>");
        } else {
            let _ = write!(body_rows, "<tr>{cells}</tr>");
        }
    }
    let tbody = format!("<tbody>{body_rows}</tbody>");

    // Sortable tables use the interactive striped style; large ones scroll
    // inside a fixed height.
    let table_attrs = if options.sortable {
        if row_count > SCROLL_ROW_THRESHOLD {
            format!(
                r#" class="bs-table" data-striped="true" data-height="{SCROLL_HEIGHT_PX}""#
            )
        } else {
            r#" class="bs-table" data-striped="true""#.to_string()
        }
    } else {
        r#" class="table-striped""#.to_string()
    };

    let html = format!("<table{table_attrs}>{thead}{tbody}{tfoot}</table>");
    debug!(
        rows = row_count,
        columns = frame.column_count(),
        sortable = options.sortable,
        "table rendered"
    );
    Ok(html)
}

fn render_header(frame: &Frame, options: &TableOptions) -> String {
    let keys: Vec<&ColumnKey> = frame.column_keys().collect();

    let mut leaf_cells = String::new();
    for key in &keys {
        let align_right = options.formats.resolve(key).align == Align::Right;
        let leaf = escape_html(key.leaf());
        let cell = match (align_right, options.sortable && !frame.has_grouped_columns()) {
            (true, true) => {
                format!(r#"<th class="alignRight" data-sortable="true">{leaf}</th>"#)
            }
            (true, false) => format!(r#"<th class="alignRight">{leaf}</th>"#),
            (false, true) => format!(r#"<th data-sortable="true">{leaf}</th>"#),
            (false, false) => format!("<th>{leaf}</th>"),
        };
        leaf_cells.push_str(&cell);
    }

    if frame.has_grouped_columns() {
        // Spanning top-level row: consecutive equal groups merge, and the
        // colspans sum to the column count.
        let groups: Vec<&str> = keys.iter().map(|k| k.group().unwrap_or_default()).collect();
        let mut group_cells = String::new();
        for (group, span) in group_runs(&groups) {
            let label = escape_html(group);
            let _ = write!(
                group_cells,
                r#"<th colspan="{span}" class="centered">{label}</th>"#
            );
        }
        format!("<thead><tr>{group_cells}</tr><tr>{leaf_cells}</tr></thead>")
    } else {
        format!("<thead><tr>{leaf_cells}</tr></thead>")
    }
}

fn render_cell(key: &ColumnKey, value: &Scalar, options: &TableOptions) -> String {
    let format = options.formats.resolve(key);
    let text = match value.as_f64() {
        Some(n) => crate::format::format_number(n, format.decimal_places, format.commas),
        None => escape_html(&value.display_text()),
    };
    if format.align == Align::Right {
        format!(r#"<td class="alignRight">{text}</td>"#)
    } else {
        format!("<td>{text}</td>")
    }
}

/// Render a two-column frequency table (item, count), sorted by descending
/// count and truncated to `max_items`.
pub fn frequency_table(counts: &[(String, u64)], name: &str, max_items: usize) -> String {
    let mut items: Vec<&(String, u64)> = counts.iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
    items.truncate(max_items);

    let header = format!(
        "<thead><tr><th>{}</th><th>Count</th></tr></thead>",
        escape_html(name)
    );
    let mut rows = String::new();
    for (key, count) in items {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{count}</td></tr>",
            escape_html(key)
        );
    }
    format!(r#"<table class="table-striped">{header}<tbody>{rows}</tbody></table>"#)
}

/// Minimal HTML escaping for text nodes and attribute values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
