//! Bronze and silver sales records.
//!
//! A [`RawRecord`] is one purchase event exactly as ingested: nothing about
//! it is guaranteed. A [`CleanRecord`] is the same event after every repair
//! pass, with all required fields present and typed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A loosely typed bronze cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    /// Blank, null, or not supplied.
    #[default]
    Missing,
    /// Text as it appeared in the source.
    Text(String),
    /// Already numeric.
    Number(f64),
    /// Already a calendar date.
    Date(NaiveDate),
}

impl RawValue {
    /// Builds a cell from optional text, treating blank text as missing.
    pub fn from_text(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(text) if !text.is_empty() => Self::Text(text.to_string()),
            _ => Self::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Text form of the cell as stored in the bronze table.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Text(text) => Some(text.clone()),
            Self::Number(value) => Some(value.to_string()),
            Self::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::from_text(Some(value))
    }
}

impl From<NaiveDate> for RawValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// One purchase event as ingested into the bronze table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Assigned by the bronze stage; unique and increasing across batches.
    pub order_id: Option<i64>,
    pub cust_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub product_category: Option<String>,
    pub product_price: RawValue,
    pub quantity_sold: RawValue,
    pub purchase_date: RawValue,
    /// Days between purchase and delivery.
    pub delivery_period: RawValue,
    pub payment_method: Option<String>,
    pub shipping_address: Option<String>,
    pub total_price: RawValue,
}

/// A silver record: every required field present and typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub order_id: i64,
    pub cust_id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub email: String,
    pub product_id: String,
    pub product_name: String,
    pub product_category: String,
    pub product_price: f64,
    pub quantity_sold: i64,
    pub purchase_date: NaiveDate,
    /// Whole days, never negative.
    pub delivery_period: i64,
    pub payment_method: String,
    pub shipping_address: String,
    pub total_price: f64,
    /// `purchase_date + delivery_period` days.
    pub delivery_date: NaiveDate,
}

impl From<&CleanRecord> for RawRecord {
    /// Feeds a silver record back in as bronze input.
    ///
    /// The derived delivery date is dropped; cleaning recomputes it.
    fn from(record: &CleanRecord) -> Self {
        Self {
            order_id: Some(record.order_id),
            cust_id: Some(record.cust_id.clone()),
            first_name: Some(record.first_name.clone()),
            last_name: Some(record.last_name.clone()),
            gender: Some(record.gender.clone()),
            email: Some(record.email.clone()),
            product_id: Some(record.product_id.clone()),
            product_name: Some(record.product_name.clone()),
            product_category: Some(record.product_category.clone()),
            product_price: RawValue::Number(record.product_price),
            quantity_sold: RawValue::Number(record.quantity_sold as f64),
            purchase_date: RawValue::Date(record.purchase_date),
            delivery_period: RawValue::Number(record.delivery_period as f64),
            payment_method: Some(record.payment_method.clone()),
            shipping_address: Some(record.shipping_address.clone()),
            total_price: RawValue::Number(record.total_price),
        }
    }
}
