//! Cell values.
//!
//! `Scalar` is a closed tagged set: numeric-ness is decided by variant
//! inspection, never by capability probing. Booleans and strings are not
//! numeric even though they support some arithmetic-looking operations.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::fmt;

/// A single cell value in a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Timestamp(DateTime<Utc>),
    Null,
}

impl Scalar {
    /// True for the numeric kinds (`Int`, `Float`) only.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Scalar::Int(_) | Scalar::Float(_))
    }

    /// True for `Timestamp` values.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, Scalar::Timestamp(_))
    }

    /// Numeric reading of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(i) => Some(*i as f64),
            Scalar::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// JSON-safe rendering: timestamps become ISO-8601 strings, nulls become
    /// JSON null. Non-finite floats have no JSON number form and also map to
    /// null.
    pub fn to_json(&self) -> Value {
        match self {
            Scalar::Int(i) => Value::from(*i),
            Scalar::Float(f) if f.is_finite() => Value::from(*f),
            Scalar::Float(_) => Value::Null,
            Scalar::Bool(b) => Value::from(*b),
            Scalar::Str(s) => Value::from(s.as_str()),
            Scalar::Timestamp(ts) => Value::from(iso8601(ts)),
            Scalar::Null => Value::Null,
        }
    }

    /// Plain-text rendering used for unformatted table cells.
    pub fn display_text(&self) -> String {
        match self {
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Str(s) => s.clone(),
            Scalar::Timestamp(ts) => iso8601(ts),
            Scalar::Null => String::new(),
        }
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
fn iso8601(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(v: DateTime<Utc>) -> Self {
        Scalar::Timestamp(v)
    }
}

impl<T> From<Option<T>> for Scalar
where
    Scalar: From<T>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Scalar::from(v),
            None => Scalar::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn numeric_kinds_are_closed() {
        assert!(Scalar::Int(3).is_numeric());
        assert!(Scalar::Float(3.5).is_numeric());
        assert!(!Scalar::Bool(true).is_numeric());
        assert!(!Scalar::from("3").is_numeric());
        assert!(!Scalar::Null.is_numeric());
    }

    #[test]
    fn timestamp_renders_iso8601() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        assert_eq!(
            Scalar::Timestamp(ts).to_json(),
            Value::from("2024-03-15T09:30:00.000Z")
        );
    }

    #[test]
    fn non_finite_floats_become_null() {
        assert_eq!(Scalar::Float(f64::NAN).to_json(), Value::Null);
        assert_eq!(Scalar::Float(f64::INFINITY).to_json(), Value::Null);
    }

    #[test]
    fn option_maps_to_null() {
        assert_eq!(Scalar::from(None::<f64>), Scalar::Null);
        assert_eq!(Scalar::from(Some(2.0)), Scalar::Float(2.0));
    }
}
