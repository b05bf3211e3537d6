//! Record sets as Polars frames.

use chrono::NaiveDate;
use polars::prelude::*;
use sales_common::any_to_string;
use sales_model::{CleanRecord, RejectedRecord, SalesField};

use crate::error::Result;

fn text_column(field: SalesField, records: &[CleanRecord], value: fn(&CleanRecord) -> &str) -> Column {
    let values: Vec<&str> = records.iter().map(value).collect();
    Series::new(field.as_str().into(), values).into_column()
}

fn int_column(field: SalesField, records: &[CleanRecord], value: fn(&CleanRecord) -> i64) -> Column {
    let values: Vec<i64> = records.iter().map(value).collect();
    Series::new(field.as_str().into(), values).into_column()
}

fn float_column(field: SalesField, records: &[CleanRecord], value: fn(&CleanRecord) -> f64) -> Column {
    let values: Vec<f64> = records.iter().map(value).collect();
    Series::new(field.as_str().into(), values).into_column()
}

fn date_column(
    field: SalesField,
    records: &[CleanRecord],
    value: fn(&CleanRecord) -> NaiveDate,
) -> Column {
    let values: Vec<String> = records
        .iter()
        .map(|record| value(record).format("%Y-%m-%d").to_string())
        .collect();
    Series::new(field.as_str().into(), values).into_column()
}

/// Builds the silver frame, columns in silver order.
///
/// Dates are ISO `YYYY-MM-DD` text.
pub fn clean_frame(records: &[CleanRecord]) -> Result<DataFrame> {
    let columns = vec![
        int_column(SalesField::OrderId, records, |r| r.order_id),
        text_column(SalesField::CustId, records, |r| r.cust_id.as_str()),
        text_column(SalesField::FirstName, records, |r| r.first_name.as_str()),
        text_column(SalesField::LastName, records, |r| r.last_name.as_str()),
        text_column(SalesField::Gender, records, |r| r.gender.as_str()),
        text_column(SalesField::Email, records, |r| r.email.as_str()),
        text_column(SalesField::ProductId, records, |r| r.product_id.as_str()),
        text_column(SalesField::ProductName, records, |r| r.product_name.as_str()),
        text_column(SalesField::ProductCategory, records, |r| r.product_category.as_str()),
        float_column(SalesField::ProductPrice, records, |r| r.product_price),
        int_column(SalesField::QuantitySold, records, |r| r.quantity_sold),
        date_column(SalesField::PurchaseDate, records, |r| r.purchase_date),
        int_column(SalesField::DeliveryPeriod, records, |r| r.delivery_period),
        text_column(SalesField::PaymentMethod, records, |r| r.payment_method.as_str()),
        text_column(SalesField::ShippingAddress, records, |r| r.shipping_address.as_str()),
        float_column(SalesField::TotalPrice, records, |r| r.total_price),
        date_column(SalesField::DeliveryDate, records, |r| r.delivery_date),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Builds the rejection frame: `order_id, cust_id, reason, missing_fields`.
pub fn rejections_frame(rejected: &[RejectedRecord]) -> Result<DataFrame> {
    let order_ids: Vec<Option<i64>> = rejected.iter().map(|r| r.order_id).collect();
    let cust_ids: Vec<Option<&str>> = rejected.iter().map(|r| r.cust_id.as_deref()).collect();
    let reasons: Vec<&str> = rejected.iter().map(|r| r.reason.code()).collect();
    let missing: Vec<String> = rejected
        .iter()
        .map(RejectedRecord::missing_fields_label)
        .collect();
    Ok(DataFrame::new(vec![
        Series::new("order_id".into(), order_ids).into_column(),
        Series::new("cust_id".into(), cust_ids).into_column(),
        Series::new("reason".into(), reasons).into_column(),
        Series::new("missing_fields".into(), missing).into_column(),
    ])?)
}

/// Renders every cell as text, row by row, for console tables.
pub fn frame_rows(df: &DataFrame) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row = df
            .get_columns()
            .iter()
            .map(|column| column.get(idx).map(any_to_string))
            .collect::<PolarsResult<Vec<String>>>()?;
        rows.push(row);
    }
    Ok(rows)
}
