//! Numeric coercion of bronze cells.

use sales_common::parse_f64;
use sales_model::RawValue;

fn finite_number(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(v) if v.is_finite() => Some(*v),
        RawValue::Text(text) => parse_f64(text),
        _ => None,
    }
}

/// Parses a monetary cell (unit price or total price).
pub fn parse_price(value: &RawValue) -> Option<f64> {
    finite_number(value)
}

/// Parses a quantity; only whole numbers are accepted, so `"3.0"` is `3`
/// but `"2.5"` is absent.
pub fn parse_quantity(value: &RawValue) -> Option<i64> {
    let number = finite_number(value)?;
    if number.fract() != 0.0 || number.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(number as i64)
}

/// Parses a delivery lag in days. Negative lags are absent.
///
/// Fractional lags are kept here; they are truncated after imputation.
pub fn parse_delivery_period(value: &RawValue) -> Option<f64> {
    finite_number(value).filter(|days| *days >= 0.0)
}

/// Truncates a resolved lag to whole days.
pub fn whole_days(days: f64) -> Option<i64> {
    if !days.is_finite() || days < 0.0 || days >= i64::MAX as f64 {
        return None;
    }
    Some(days.trunc() as i64)
}
