//! Type coercion: the first cleaning stage.
//!
//! Parses the loosely typed bronze cells (prices, quantity, purchase date,
//! delivery lag) into typed values. A cell that holds something but cannot be
//! parsed becomes absent and is counted as a coercion failure; nothing is
//! raised and no record is dropped here.

use sales_model::{CleaningReport, RawRecord, RawValue, SalesField};

use crate::normalization::{
    parse_delivery_period, parse_price, parse_purchase_date, parse_quantity,
};
use crate::typed::TypedRecord;

fn coerce<T>(
    value: &RawValue,
    field: SalesField,
    parse: impl Fn(&RawValue) -> Option<T>,
    report: &mut CleaningReport,
) -> Option<T> {
    let parsed = parse(value);
    if parsed.is_none() && !value.is_missing() {
        report.record_coercion_failure(field);
    }
    parsed
}

/// Trimmed descriptive text; blank and whitespace-only cells are absent.
fn descriptive(value: Option<&String>) -> Option<String> {
    value
        .map(String::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Coerce one bronze record.
pub fn coerce_record(raw: &RawRecord, report: &mut CleaningReport) -> TypedRecord {
    TypedRecord {
        order_id: raw.order_id,
        cust_id: descriptive(raw.cust_id.as_ref()),
        first_name: descriptive(raw.first_name.as_ref()),
        last_name: descriptive(raw.last_name.as_ref()),
        gender: descriptive(raw.gender.as_ref()),
        email: descriptive(raw.email.as_ref()),
        product_id: descriptive(raw.product_id.as_ref()),
        product_name: descriptive(raw.product_name.as_ref()),
        product_category: descriptive(raw.product_category.as_ref()),
        product_price: coerce(&raw.product_price, SalesField::ProductPrice, parse_price, report),
        quantity_sold: coerce(
            &raw.quantity_sold,
            SalesField::QuantitySold,
            parse_quantity,
            report,
        ),
        purchase_date: coerce(
            &raw.purchase_date,
            SalesField::PurchaseDate,
            parse_purchase_date,
            report,
        ),
        delivery_period: coerce(
            &raw.delivery_period,
            SalesField::DeliveryPeriod,
            parse_delivery_period,
            report,
        ),
        payment_method: descriptive(raw.payment_method.as_ref()),
        shipping_address: descriptive(raw.shipping_address.as_ref()),
        total_price: coerce(&raw.total_price, SalesField::TotalPrice, parse_price, report),
        delivery_date: None,
    }
}

/// Coerce a batch, preserving order.
pub fn coerce_batch<'a>(
    batch: impl IntoIterator<Item = &'a RawRecord>,
    report: &mut CleaningReport,
) -> Vec<TypedRecord> {
    batch
        .into_iter()
        .map(|raw| coerce_record(raw, report))
        .collect()
}
