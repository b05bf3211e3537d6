//! Shared fixtures for cleaning tests.
#![allow(dead_code)]

use sales_model::{RawRecord, RawValue};

/// A fully populated bronze record.
pub fn complete_raw(order_id: i64, cust_id: &str) -> RawRecord {
    RawRecord {
        order_id: Some(order_id),
        cust_id: Some(cust_id.to_string()),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        gender: Some("Female".to_string()),
        email: Some(format!("{}@example.com", cust_id.to_lowercase())),
        product_id: Some("P-100".to_string()),
        product_name: Some("Desk Lamp".to_string()),
        product_category: Some("Electronics".to_string()),
        product_price: RawValue::from("10"),
        quantity_sold: RawValue::from("2"),
        purchase_date: RawValue::from("03/01/2024"),
        delivery_period: RawValue::from("4"),
        payment_method: Some("credit_card".to_string()),
        shipping_address: Some("12 Analytical Way".to_string()),
        total_price: RawValue::from("20"),
    }
}
