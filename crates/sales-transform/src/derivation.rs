//! Derived fields computed once their inputs are resolved.

use crate::normalization::{add_delivery_days, whole_days};
use crate::typed::TypedRecord;

/// Delivery date for one record, if both inputs are present.
pub fn delivery_date(record: &TypedRecord) -> Option<chrono::NaiveDate> {
    let purchased = record.purchase_date?;
    let days = record.delivery_period.and_then(whole_days)?;
    add_delivery_days(purchased, days)
}

/// Set `delivery_date` on every record whose inputs are resolved.
///
/// Records missing either input are left without a date and fall through to
/// rejection at admission. Returns the number of dates derived.
pub fn derive_delivery_dates(records: &mut [TypedRecord]) -> usize {
    let mut derived = 0;
    for record in records.iter_mut() {
        record.delivery_date = delivery_date(record);
        if record.delivery_date.is_some() {
            derived += 1;
        }
    }
    derived
}
