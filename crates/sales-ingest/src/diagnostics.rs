//! Bronze data-quality diagnostics.
//!
//! Nothing here repairs a record. The counts are logged at ingest so defects
//! are visible before the cleaning stage decides what to do with them.

use std::collections::{BTreeMap, BTreeSet};

use sales_common::parse_f64;
use sales_model::{RawRecord, RawValue, SalesField};
use tracing::{info, warn};

/// Data-quality findings for one bronze batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BronzeDiagnostics {
    pub rows: usize,
    /// Missing cells per field; fields with none are omitted.
    pub missing: BTreeMap<SalesField, usize>,
    /// Order ids that occur more than once.
    pub duplicate_order_ids: Vec<i64>,
    /// Present but non-numeric price cells per price field.
    pub non_numeric: BTreeMap<SalesField, usize>,
    pub blank_delivery_periods: usize,
}

fn is_missing(record: &RawRecord, field: SalesField) -> bool {
    match field {
        SalesField::OrderId => record.order_id.is_none(),
        SalesField::CustId => record.cust_id.is_none(),
        SalesField::FirstName => record.first_name.is_none(),
        SalesField::LastName => record.last_name.is_none(),
        SalesField::Gender => record.gender.is_none(),
        SalesField::Email => record.email.is_none(),
        SalesField::ProductId => record.product_id.is_none(),
        SalesField::ProductName => record.product_name.is_none(),
        SalesField::ProductCategory => record.product_category.is_none(),
        SalesField::ProductPrice => record.product_price.is_missing(),
        SalesField::QuantitySold => record.quantity_sold.is_missing(),
        SalesField::PurchaseDate => record.purchase_date.is_missing(),
        SalesField::DeliveryPeriod => record.delivery_period.is_missing(),
        SalesField::PaymentMethod => record.payment_method.is_none(),
        SalesField::ShippingAddress => record.shipping_address.is_none(),
        SalesField::TotalPrice => record.total_price.is_missing(),
        SalesField::DeliveryDate => false,
    }
}

fn is_non_numeric(value: &RawValue) -> bool {
    match value {
        RawValue::Text(text) => parse_f64(text).is_none(),
        RawValue::Number(number) => !number.is_finite(),
        RawValue::Date(_) => true,
        RawValue::Missing => false,
    }
}

impl BronzeDiagnostics {
    /// Inspects a batch.
    pub fn inspect(records: &[RawRecord]) -> Self {
        let mut diagnostics = Self {
            rows: records.len(),
            ..Self::default()
        };
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();

        for record in records {
            for field in SalesField::BRONZE {
                if is_missing(record, field) {
                    *diagnostics.missing.entry(field).or_default() += 1;
                }
            }
            if let Some(order_id) = record.order_id
                && !seen.insert(order_id)
            {
                duplicates.insert(order_id);
            }
            for (field, value) in [
                (SalesField::ProductPrice, &record.product_price),
                (SalesField::TotalPrice, &record.total_price),
            ] {
                if is_non_numeric(value) {
                    *diagnostics.non_numeric.entry(field).or_default() += 1;
                }
            }
            if record.delivery_period.is_missing() {
                diagnostics.blank_delivery_periods += 1;
            }
        }

        diagnostics.duplicate_order_ids = duplicates.into_iter().collect();
        diagnostics
    }

    /// True when no defect was found.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.duplicate_order_ids.is_empty() && self.non_numeric.is_empty()
    }

    /// Emits the findings through `tracing`.
    pub fn log(&self) {
        if self.is_clean() {
            info!(rows = self.rows, "bronze batch has no data-quality findings");
            return;
        }
        for (field, count) in &self.missing {
            warn!(field = %field, count, "missing values in bronze batch");
        }
        if !self.duplicate_order_ids.is_empty() {
            warn!(
                count = self.duplicate_order_ids.len(),
                order_ids = ?self.duplicate_order_ids,
                "duplicate order ids in bronze batch"
            );
        }
        for (field, count) in &self.non_numeric {
            warn!(field = %field, count, "non-numeric values in bronze batch");
        }
        if self.blank_delivery_periods > 0 {
            warn!(
                count = self.blank_delivery_periods,
                "rows with blank delivery_period"
            );
        }
    }
}
