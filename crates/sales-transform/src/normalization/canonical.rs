//! Canonicalization of categorical fields.
//!
//! Runs after imputation so that directionally filled categories are
//! normalized too. Values missing from the synonym table pass through in
//! trimmed, lowercased form and are counted so the gap stays visible.

use sales_model::{Canonical, CleaningOptions, CleaningReport, SalesField, Vocabulary};

use crate::typed::TypedRecord;

/// Counts from one canonicalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanonicalStats {
    pub mapped: usize,
    pub unmapped: usize,
}

fn canonicalize_slot(
    slot: &mut Option<String>,
    vocabulary: &Vocabulary,
    field: SalesField,
    stats: &mut CanonicalStats,
    report: &mut CleaningReport,
) {
    let Some(raw) = slot.as_deref() else {
        return;
    };
    *slot = match vocabulary.canonicalize(raw) {
        Some(Canonical::Mapped(label)) => {
            stats.mapped += 1;
            Some(label)
        }
        Some(Canonical::Unmapped(value)) => {
            stats.unmapped += 1;
            report.record_unmapped(field, &value);
            Some(value)
        }
        None => None,
    };
}

/// Canonicalize payment method and product category of one record.
pub fn canonicalize_record(
    record: &mut TypedRecord,
    options: &CleaningOptions,
    stats: &mut CanonicalStats,
    report: &mut CleaningReport,
) {
    canonicalize_slot(
        &mut record.payment_method,
        &options.payment_methods,
        SalesField::PaymentMethod,
        stats,
        report,
    );
    canonicalize_slot(
        &mut record.product_category,
        &options.product_categories,
        SalesField::ProductCategory,
        stats,
        report,
    );
}
