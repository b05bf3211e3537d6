//! Conversion between bronze frames and [`RawRecord`]s.

use std::collections::BTreeMap;

use polars::prelude::*;
use sales_common::cell_string;
use sales_model::{RawRecord, RawValue, SalesField};
use tracing::debug;

use crate::error::Result;

/// Maps a source header onto a bronze field.
///
/// Index columns written by spreadsheet exports (`Unnamed: 0`, blank headers)
/// are ignored and the source's `id` column is the customer id.
pub fn source_field(header: &str) -> Option<SalesField> {
    let key = header.trim_start_matches('\u{feff}').trim().to_ascii_lowercase();
    if key.is_empty() || key.starts_with("unnamed") {
        return None;
    }
    if key == "id" {
        return Some(SalesField::CustId);
    }
    SalesField::from_column(&key)
}

/// First source column for each recognised field.
fn resolve_columns(df: &DataFrame) -> BTreeMap<SalesField, String> {
    let mut columns = BTreeMap::new();
    for name in df.get_column_names() {
        match source_field(name.as_str()) {
            Some(field) => {
                columns
                    .entry(field)
                    .or_insert_with(|| name.as_str().to_string());
            }
            None => debug!(column = name.as_str(), "ignoring source column"),
        }
    }
    columns
}

/// Converts a text frame into raw records, one per row.
///
/// Unknown columns are ignored and absent columns read as missing. An
/// `order_id` that is not an integer reads as absent.
pub fn frame_to_records(df: &DataFrame) -> Vec<RawRecord> {
    let columns = resolve_columns(df);
    let text = |field: SalesField, idx: usize| {
        columns
            .get(&field)
            .and_then(|name| cell_string(df, name, idx))
    };
    let cell = |field: SalesField, idx: usize| RawValue::from_text(text(field, idx).as_deref());

    (0..df.height())
        .map(|idx| RawRecord {
            order_id: text(SalesField::OrderId, idx).and_then(|id| id.parse().ok()),
            cust_id: text(SalesField::CustId, idx),
            first_name: text(SalesField::FirstName, idx),
            last_name: text(SalesField::LastName, idx),
            gender: text(SalesField::Gender, idx),
            email: text(SalesField::Email, idx),
            product_id: text(SalesField::ProductId, idx),
            product_name: text(SalesField::ProductName, idx),
            product_category: text(SalesField::ProductCategory, idx),
            product_price: cell(SalesField::ProductPrice, idx),
            quantity_sold: cell(SalesField::QuantitySold, idx),
            purchase_date: cell(SalesField::PurchaseDate, idx),
            delivery_period: cell(SalesField::DeliveryPeriod, idx),
            payment_method: text(SalesField::PaymentMethod, idx),
            shipping_address: text(SalesField::ShippingAddress, idx),
            total_price: cell(SalesField::TotalPrice, idx),
        })
        .collect()
}

fn bronze_text(record: &RawRecord, field: SalesField) -> Option<String> {
    match field {
        SalesField::OrderId => record.order_id.map(|id| id.to_string()),
        SalesField::CustId => record.cust_id.clone(),
        SalesField::FirstName => record.first_name.clone(),
        SalesField::LastName => record.last_name.clone(),
        SalesField::Gender => record.gender.clone(),
        SalesField::Email => record.email.clone(),
        SalesField::ProductId => record.product_id.clone(),
        SalesField::ProductName => record.product_name.clone(),
        SalesField::ProductCategory => record.product_category.clone(),
        SalesField::ProductPrice => record.product_price.to_text(),
        SalesField::QuantitySold => record.quantity_sold.to_text(),
        SalesField::PurchaseDate => record.purchase_date.to_text(),
        SalesField::DeliveryPeriod => record.delivery_period.to_text(),
        SalesField::PaymentMethod => record.payment_method.clone(),
        SalesField::ShippingAddress => record.shipping_address.clone(),
        SalesField::TotalPrice => record.total_price.to_text(),
        SalesField::DeliveryDate => None,
    }
}

/// Builds the bronze text frame, columns in bronze order.
pub fn records_to_frame(records: &[RawRecord]) -> Result<DataFrame> {
    let columns: Vec<Column> = SalesField::BRONZE
        .iter()
        .map(|field| {
            let values: Vec<Option<String>> = records
                .iter()
                .map(|record| bronze_text(record, *field))
                .collect();
            Series::new(field.as_str().into(), values).into_column()
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// Numbers a batch sequentially after `current_max`, replacing any incoming id.
///
/// Returns the new maximum.
pub fn assign_order_ids(records: &mut [RawRecord], current_max: i64) -> i64 {
    let mut next = current_max;
    for record in records.iter_mut() {
        next += 1;
        record.order_id = Some(next);
    }
    next
}
