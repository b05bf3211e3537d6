//! Record admission: the last cleaning stage.
//!
//! First every record still missing a required field is rejected with
//! `MISSING_REQUIRED_FIELD`. Then the survivors are deduplicated by order id:
//! the first record in batch order (ascending order id, ties in input order)
//! is admitted and every later one is rejected with `DUPLICATE_ORDER_ID`.

use std::collections::BTreeSet;

use sales_model::{CleanRecord, RejectedRecord};
use tracing::debug;

use crate::typed::TypedRecord;

/// Split records into admitted silver records and rejections.
pub fn filter_required(records: Vec<TypedRecord>) -> (Vec<CleanRecord>, Vec<RejectedRecord>) {
    let mut admitted = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();
    for record in records {
        let order_id = record.order_id;
        let cust_id = record.cust_id.clone();
        match record.into_clean() {
            Ok(clean) => admitted.push(clean),
            Err(missing) => {
                debug!(?order_id, missing = missing.len(), "missing required fields");
                rejected.push(RejectedRecord::missing(order_id, cust_id, missing));
            }
        }
    }
    (admitted, rejected)
}

/// Keep the first record per order id; report the rest as duplicates.
pub fn dedupe_by_order_id(records: Vec<CleanRecord>) -> (Vec<CleanRecord>, Vec<RejectedRecord>) {
    let mut seen = BTreeSet::new();
    let mut kept = Vec::with_capacity(records.len());
    let mut duplicates = Vec::new();
    for record in records {
        if seen.insert(record.order_id) {
            kept.push(record);
        } else {
            duplicates.push(RejectedRecord::duplicate(
                record.order_id,
                Some(record.cust_id),
            ));
        }
    }
    (kept, duplicates)
}

/// Required-field filter followed by dedupe.
///
/// Rejections are ordered missing-field rejections first, then duplicates,
/// each in batch order.
pub fn admit(records: Vec<TypedRecord>) -> (Vec<CleanRecord>, Vec<RejectedRecord>) {
    let (admitted, mut rejected) = filter_required(records);
    let (kept, duplicates) = dedupe_by_order_id(admitted);
    rejected.extend(duplicates);
    (kept, rejected)
}
