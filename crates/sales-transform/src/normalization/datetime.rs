//! Purchase date parsing and delivery date arithmetic.
//!
//! Bronze feeds carry US-style `MM/DD/YYYY` dates; tables written by this
//! pipeline use ISO `YYYY-MM-DD`. Both are accepted. Delivery lag is whole
//! calendar days with no timezone handling.

use chrono::{Days, NaiveDate};
use sales_model::RawValue;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parses a purchase date cell. Numbers and unparseable text are absent.
pub fn parse_purchase_date(value: &RawValue) -> Option<NaiveDate> {
    match value {
        RawValue::Date(date) => Some(*date),
        RawValue::Text(text) => parse_date_text(text),
        RawValue::Number(_) | RawValue::Missing => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Delivery date = purchase date + `days` calendar days.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use sales_transform::normalization::datetime::add_delivery_days;
///
/// let purchased = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
/// let delivered = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(add_delivery_days(purchased, 3), Some(delivered));
/// assert_eq!(add_delivery_days(purchased, -1), None);
/// ```
pub fn add_delivery_days(purchase_date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let days = u64::try_from(days).ok()?;
    purchase_date.checked_add_days(Days::new(days))
}
