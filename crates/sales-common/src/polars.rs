//! Polars `AnyValue` conversion helpers.

use polars::prelude::{AnyValue, DataFrame};

/// Converts a Polars `AnyValue` to its textual form.
///
/// `Null` becomes the empty string and floats are printed without trailing
/// zeros, so a price of `12.50` round-trips through a text column as `12.5`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use sales_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Float64(12.0)), "12");
/// assert_eq!(any_to_string(AnyValue::String("cod")), "cod");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Converts `AnyValue` to trimmed text, returning `None` for null or blank cells.
pub fn any_to_string_non_empty(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Reads a cell by column name and row index.
///
/// A missing column reads as `None`, the same as a null cell.
pub fn cell_string(df: &DataFrame, column: &str, idx: usize) -> Option<String> {
    let series = df.column(column).ok()?;
    any_to_string_non_empty(series.get(idx).unwrap_or(AnyValue::Null))
}

/// Formats a floating-point number without trailing zeros.
///
/// # Examples
///
/// ```
/// use sales_common::format_numeric;
///
/// assert_eq!(format_numeric(15.0), "15");
/// assert_eq!(format_numeric(15.50), "15.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Converts an `AnyValue` to a finite `f64`.
///
/// Text cells are parsed; NaN and infinities count as absent.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    let number = match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

/// Parses trimmed text as a finite `f64`, returning `None` otherwise.
///
/// Rust accepts `"NaN"` and `"inf"` as floats; a bronze cell holding either
/// is treated as unparsable.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
