//! The bronze → silver cleaning pipeline.
//!
//! # Ordering
//!
//! The batch is stably sorted by order id (absent ids last, ties in input
//! order) before any other work. Peer means, directional fill and dedupe all
//! read the batch in that order, so cleaning the same input twice yields the
//! same output bit for bit, regardless of how the input was ordered.
//!
//! # Example
//!
//! ```
//! use sales_model::{CleaningOptions, RawRecord};
//! use sales_transform::clean_batch;
//!
//! let outcome = clean_batch(&[RawRecord::default()], &CleaningOptions::default());
//! // No product peers and no lag: dropped before admission, not rejected.
//! assert!(outcome.accepted.is_empty());
//! assert!(outcome.rejected.is_empty());
//! assert_eq!(outcome.report.dropped_missing_lag, vec![None]);
//! ```

use std::time::Instant;

use sales_model::{CleaningOptions, CleaningOutcome, CleaningReport, RawRecord, RejectionReason};
use tracing::{debug, info, info_span, warn};

use crate::admission::admit;
use crate::coercion::coerce_batch;
use crate::derivation::derive_delivery_dates;
use crate::imputation::impute;
use crate::normalization::{CanonicalStats, canonicalize_record};

/// Stable sort by order id with absent ids last.
pub fn sort_by_order_id(batch: &[RawRecord]) -> Vec<&RawRecord> {
    let mut ordered: Vec<&RawRecord> = batch.iter().collect();
    ordered.sort_by_key(|record| (record.order_id.is_none(), record.order_id));
    ordered
}

/// Clean one bronze batch into silver records and rejections.
pub fn clean_batch(batch: &[RawRecord], options: &CleaningOptions) -> CleaningOutcome {
    let span = info_span!("clean_batch", input_records = batch.len());
    let _guard = span.enter();
    let start = Instant::now();

    let mut report = CleaningReport {
        input_records: batch.len(),
        ..CleaningReport::default()
    };

    let ordered = sort_by_order_id(batch);
    let typed = info_span!("coerce").in_scope(|| coerce_batch(ordered, &mut report));
    debug!(
        coercion_failures = report.total_coercion_failures(),
        "type coercion complete"
    );

    let mut records = info_span!("impute").in_scope(|| impute(typed, &mut report));
    if !report.dropped_missing_lag.is_empty() {
        warn!(
            dropped = report.dropped_missing_lag.len(),
            "records dropped: delivery lag could not be inferred"
        );
    }
    debug!(
        imputed_prices = report.imputed_prices,
        imputed_delivery_periods = report.imputed_delivery_periods,
        recomputed_totals = report.recomputed_totals,
        filled = report.total_filled(),
        "imputation complete"
    );

    report.derived_delivery_dates =
        info_span!("derive").in_scope(|| derive_delivery_dates(&mut records));

    let mut canonical = CanonicalStats::default();
    info_span!("canonicalize").in_scope(|| {
        for record in &mut records {
            canonicalize_record(record, options, &mut canonical, &mut report);
        }
    });
    for (field, values) in &report.unmapped_labels {
        warn!(
            field = %field,
            distinct = values.len(),
            "values not in canonical vocabulary passed through"
        );
    }
    debug!(
        mapped = canonical.mapped,
        unmapped = canonical.unmapped,
        "canonicalization complete"
    );

    let (accepted, rejected) = info_span!("admit").in_scope(|| admit(records));

    let mut outcome = CleaningOutcome {
        accepted,
        rejected,
        report,
    };
    outcome.report.rejected_missing = outcome.rejected_count(RejectionReason::MissingRequiredField);
    outcome.report.rejected_duplicates = outcome.rejected_count(RejectionReason::DuplicateOrderId);
    outcome.report.accepted_records = outcome.accepted.len();

    info!(
        accepted = outcome.report.accepted_records,
        rejected_missing = outcome.report.rejected_missing,
        rejected_duplicates = outcome.report.rejected_duplicates,
        dropped_missing_lag = outcome.report.dropped_missing_lag.len(),
        duration_ms = start.elapsed().as_millis(),
        "silver cleaning complete"
    );
    outcome
}
