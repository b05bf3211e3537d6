//! Cleaning outcome and per-stage counters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::SalesField;
use crate::record::CleanRecord;
use crate::rejection::{RejectedRecord, RejectionReason};

/// Counters describing what each cleaning stage did to a batch.
///
/// Records dropped for an unresolvable delivery lag appear only here
/// (`dropped_missing_lag`), never in the rejection set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub input_records: usize,
    /// Fields that held a value which could not be coerced, per field.
    pub coercion_failures: BTreeMap<SalesField, usize>,
    pub imputed_prices: usize,
    pub imputed_delivery_periods: usize,
    /// Order ids of records discarded because no delivery lag could be inferred.
    pub dropped_missing_lag: Vec<Option<i64>>,
    pub recomputed_totals: usize,
    /// Directionally filled cells, per field.
    pub filled_fields: BTreeMap<SalesField, usize>,
    pub derived_delivery_dates: usize,
    /// Values with no vocabulary entry, keyed by field then normalized value.
    pub unmapped_labels: BTreeMap<SalesField, BTreeMap<String, usize>>,
    pub rejected_missing: usize,
    pub rejected_duplicates: usize,
    pub accepted_records: usize,
}

impl CleaningReport {
    pub fn record_coercion_failure(&mut self, field: SalesField) {
        *self.coercion_failures.entry(field).or_default() += 1;
    }

    pub fn record_fill(&mut self, field: SalesField, count: usize) {
        if count > 0 {
            *self.filled_fields.entry(field).or_default() += count;
        }
    }

    pub fn record_unmapped(&mut self, field: SalesField, value: &str) {
        *self
            .unmapped_labels
            .entry(field)
            .or_default()
            .entry(value.to_string())
            .or_default() += 1;
    }

    pub fn total_coercion_failures(&self) -> usize {
        self.coercion_failures.values().sum()
    }

    pub fn total_filled(&self) -> usize {
        self.filled_fields.values().sum()
    }
}

/// Result of cleaning one bronze batch: Output A, Output B and the counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningOutcome {
    pub accepted: Vec<CleanRecord>,
    pub rejected: Vec<RejectedRecord>,
    pub report: CleaningReport,
}

impl CleaningOutcome {
    pub fn rejected_count(&self, reason: RejectionReason) -> usize {
        self.rejected.iter().filter(|r| r.reason == reason).count()
    }
}
