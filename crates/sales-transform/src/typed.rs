//! The working record passed between cleaning stages.

use chrono::NaiveDate;
use sales_model::{CleanRecord, SalesField};

use crate::normalization::whole_days;

/// A record after type coercion: every loosely typed cell is now either a
/// typed value or `None`.
///
/// Stages mutate these in place; [`TypedRecord::into_clean`] is the single
/// exit to a [`CleanRecord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedRecord {
    pub order_id: Option<i64>,
    pub cust_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub product_category: Option<String>,
    pub product_price: Option<f64>,
    pub quantity_sold: Option<i64>,
    pub purchase_date: Option<NaiveDate>,
    /// Days; fractional until truncated by the lag pass.
    pub delivery_period: Option<f64>,
    pub payment_method: Option<String>,
    pub shipping_address: Option<String>,
    pub total_price: Option<f64>,
    pub delivery_date: Option<NaiveDate>,
}

fn require<T>(value: Option<T>, field: SalesField, missing: &mut Vec<SalesField>) -> Option<T> {
    if value.is_none() {
        missing.push(field);
    }
    value
}

impl TypedRecord {
    /// Text slot for a descriptive field; `None` for typed fields.
    pub fn text(&self, field: SalesField) -> Option<&Option<String>> {
        match field {
            SalesField::CustId => Some(&self.cust_id),
            SalesField::FirstName => Some(&self.first_name),
            SalesField::LastName => Some(&self.last_name),
            SalesField::Gender => Some(&self.gender),
            SalesField::Email => Some(&self.email),
            SalesField::ProductId => Some(&self.product_id),
            SalesField::ProductName => Some(&self.product_name),
            SalesField::ProductCategory => Some(&self.product_category),
            SalesField::PaymentMethod => Some(&self.payment_method),
            SalesField::ShippingAddress => Some(&self.shipping_address),
            _ => None,
        }
    }

    /// Mutable text slot for a descriptive field; `None` for typed fields.
    pub fn text_mut(&mut self, field: SalesField) -> Option<&mut Option<String>> {
        match field {
            SalesField::CustId => Some(&mut self.cust_id),
            SalesField::FirstName => Some(&mut self.first_name),
            SalesField::LastName => Some(&mut self.last_name),
            SalesField::Gender => Some(&mut self.gender),
            SalesField::Email => Some(&mut self.email),
            SalesField::ProductId => Some(&mut self.product_id),
            SalesField::ProductName => Some(&mut self.product_name),
            SalesField::ProductCategory => Some(&mut self.product_category),
            SalesField::PaymentMethod => Some(&mut self.payment_method),
            SalesField::ShippingAddress => Some(&mut self.shipping_address),
            _ => None,
        }
    }

    /// Converts to a silver record, or lists every required field still absent.
    pub fn into_clean(self) -> Result<CleanRecord, Vec<SalesField>> {
        let mut missing = Vec::new();
        let m = &mut missing;
        let fields = (
            require(self.order_id, SalesField::OrderId, m),
            require(self.cust_id, SalesField::CustId, m),
            require(self.first_name, SalesField::FirstName, m),
            require(self.last_name, SalesField::LastName, m),
            require(self.gender, SalesField::Gender, m),
            require(self.email, SalesField::Email, m),
            require(self.product_id, SalesField::ProductId, m),
            require(self.product_name, SalesField::ProductName, m),
            require(self.product_category, SalesField::ProductCategory, m),
            require(self.product_price, SalesField::ProductPrice, m),
            require(self.quantity_sold, SalesField::QuantitySold, m),
            require(self.purchase_date, SalesField::PurchaseDate, m),
            require(
                self.delivery_period.and_then(whole_days),
                SalesField::DeliveryPeriod,
                m,
            ),
            require(self.payment_method, SalesField::PaymentMethod, m),
            require(self.shipping_address, SalesField::ShippingAddress, m),
            require(self.total_price, SalesField::TotalPrice, m),
            require(self.delivery_date, SalesField::DeliveryDate, m),
        );
        let (
            Some(order_id),
            Some(cust_id),
            Some(first_name),
            Some(last_name),
            Some(gender),
            Some(email),
            Some(product_id),
            Some(product_name),
            Some(product_category),
            Some(product_price),
            Some(quantity_sold),
            Some(purchase_date),
            Some(delivery_period),
            Some(payment_method),
            Some(shipping_address),
            Some(total_price),
            Some(delivery_date),
        ) = fields
        else {
            return Err(missing);
        };
        Ok(CleanRecord {
            order_id,
            cust_id,
            first_name,
            last_name,
            gender,
            email,
            product_id,
            product_name,
            product_category,
            product_price,
            quantity_sold,
            purchase_date,
            delivery_period,
            payment_method,
            shipping_address,
            total_price,
            delivery_date,
        })
    }
}
