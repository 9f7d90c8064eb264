//! Per-column display formatting and its override-resolution chain.

use rpt_frame::ColumnKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

/// Fully resolved formatting for one column. Every attribute has a value;
/// resolution never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellFormat {
    pub align: Align,
    pub decimal_places: usize,
    pub commas: bool,
    /// Fixed column width in pixels. Carried through resolution but not yet
    /// emitted by the renderer.
    pub width: Option<u32>,
}

impl Default for CellFormat {
    fn default() -> Self {
        CellFormat {
            align: Align::Right,
            decimal_places: 2,
            commas: true,
            width: None,
        }
    }
}

/// A partial formatting record: unset attributes fall through to the next
/// link of the resolution chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOverride {
    pub align: Option<Align>,
    pub decimal_places: Option<usize>,
    pub commas: Option<bool>,
    pub width: Option<u32>,
}

impl FormatOverride {
    pub fn new() -> Self {
        FormatOverride::default()
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn decimal_places(mut self, places: usize) -> Self {
        self.decimal_places = Some(places);
        self
    }

    pub fn commas(mut self, commas: bool) -> Self {
        self.commas = Some(commas);
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }
}

/// Column format overrides: exact per-column records plus an optional
/// wildcard record. Resolution precedence for each attribute is exact
/// override, then wildcard, then the built-in default.
#[derive(Debug, Clone, Default)]
pub struct FormatOverrides {
    columns: HashMap<ColumnKey, FormatOverride>,
    wildcard: Option<FormatOverride>,
}

impl FormatOverrides {
    pub fn new() -> Self {
        FormatOverrides::default()
    }

    /// Add an override for one column.
    pub fn column(mut self, key: impl Into<ColumnKey>, format: FormatOverride) -> Self {
        self.columns.insert(key.into(), format);
        self
    }

    /// Add the wildcard (`*`) override applied to columns without an exact
    /// match.
    pub fn wildcard(mut self, format: FormatOverride) -> Self {
        self.wildcard = Some(format);
        self
    }

    /// Resolve the full format for a column against the built-in defaults.
    pub fn resolve(&self, key: &ColumnKey) -> CellFormat {
        self.resolve_with(key, CellFormat::default())
    }

    /// Resolve the full format for a column against caller-supplied
    /// defaults. Total: every attribute has a default.
    pub fn resolve_with(&self, key: &ColumnKey, defaults: CellFormat) -> CellFormat {
        let exact = self.columns.get(key);
        let wild = self.wildcard.as_ref();

        fn pick<T: Copy>(
            exact: Option<&FormatOverride>,
            wild: Option<&FormatOverride>,
            field: impl Fn(&FormatOverride) -> Option<T>,
            default: T,
        ) -> T {
            exact
                .and_then(&field)
                .or_else(|| wild.and_then(&field))
                .unwrap_or(default)
        }

        CellFormat {
            align: pick(exact, wild, |o| o.align, defaults.align),
            decimal_places: pick(exact, wild, |o| o.decimal_places, defaults.decimal_places),
            commas: pick(exact, wild, |o| o.commas, defaults.commas),
            width: pick(exact, wild, |o| o.width.map(Some), defaults.width),
        }
    }
}

/// Render a number with a fixed decimal count and optional thousands
/// separators: `1234.5` with two places and commas becomes `"1,234.50"`.
pub fn format_number(value: f64, decimal_places: usize, commas: bool) -> String {
    let fixed = format!("{value:.decimal_places$}");
    if !commas {
        return fixed;
    }

    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_precedence() {
        let overrides = FormatOverrides::new()
            .wildcard(FormatOverride::new().decimal_places(1))
            .column("colA", FormatOverride::new().decimal_places(3));

        let col_a = ColumnKey::flat("colA");
        let col_b = ColumnKey::flat("colB");
        assert_eq!(overrides.resolve(&col_a).decimal_places, 3);
        assert_eq!(overrides.resolve(&col_b).decimal_places, 1);

        let bare = FormatOverrides::new();
        assert_eq!(bare.resolve(&col_b).decimal_places, 2);
    }

    #[test]
    fn unset_attributes_fall_through_independently() {
        let overrides = FormatOverrides::new()
            .wildcard(FormatOverride::new().align(Align::Left))
            .column("n", FormatOverride::new().commas(false));

        let resolved = overrides.resolve(&ColumnKey::flat("n"));
        assert_eq!(resolved.align, Align::Left); // from wildcard
        assert!(!resolved.commas); // from exact
        assert_eq!(resolved.decimal_places, 2); // default
    }

    #[test]
    fn grouped_keys_resolve_exactly() {
        let overrides = FormatOverrides::new()
            .column(("Q1", "sales"), FormatOverride::new().decimal_places(0));
        assert_eq!(
            overrides.resolve(&ColumnKey::grouped("Q1", "sales")).decimal_places,
            0
        );
        assert_eq!(
            overrides.resolve(&ColumnKey::grouped("Q2", "sales")).decimal_places,
            2
        );
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(1234.5, 2, true), "1,234.50");
        assert_eq!(format_number(1234.5, 2, false), "1234.50");
        assert_eq!(format_number(-1234567.891, 1, true), "-1,234,567.9");
        assert_eq!(format_number(0.5, 3, true), "0.500");
        assert_eq!(format_number(999.0, 0, true), "999");
        assert_eq!(format_number(1000.0, 0, true), "1,000");
    }
}
