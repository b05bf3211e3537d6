//! Column names of the sales table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A column of the bronze/silver sales table.
///
/// The string form is the column header used in every persisted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesField {
    OrderId,
    CustId,
    FirstName,
    LastName,
    Gender,
    Email,
    ProductId,
    ProductName,
    ProductCategory,
    ProductPrice,
    QuantitySold,
    PurchaseDate,
    DeliveryPeriod,
    PaymentMethod,
    ShippingAddress,
    TotalPrice,
    DeliveryDate,
}

impl SalesField {
    /// Bronze column order.
    pub const BRONZE: [SalesField; 16] = [
        Self::OrderId,
        Self::CustId,
        Self::FirstName,
        Self::LastName,
        Self::Gender,
        Self::Email,
        Self::ProductId,
        Self::ProductName,
        Self::ProductCategory,
        Self::ProductPrice,
        Self::QuantitySold,
        Self::PurchaseDate,
        Self::DeliveryPeriod,
        Self::PaymentMethod,
        Self::ShippingAddress,
        Self::TotalPrice,
    ];

    /// Customer descriptive fields filled within a customer group.
    pub const CUSTOMER_DESCRIPTIVE: [SalesField; 4] =
        [Self::FirstName, Self::LastName, Self::Gender, Self::Email];

    /// Product descriptive fields filled within a product group.
    pub const PRODUCT_DESCRIPTIVE: [SalesField; 2] = [Self::ProductName, Self::ProductCategory];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OrderId => "order_id",
            Self::CustId => "cust_id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Gender => "gender",
            Self::Email => "email",
            Self::ProductId => "product_id",
            Self::ProductName => "product_name",
            Self::ProductCategory => "product_category",
            Self::ProductPrice => "product_price",
            Self::QuantitySold => "quantity_sold",
            Self::PurchaseDate => "purchase_date",
            Self::DeliveryPeriod => "delivery_period",
            Self::PaymentMethod => "payment_method",
            Self::ShippingAddress => "shipping_address",
            Self::TotalPrice => "total_price",
            Self::DeliveryDate => "delivery_date",
        }
    }

    /// Looks up a bronze column by its header, ignoring case and padding.
    pub fn from_column(name: &str) -> Option<SalesField> {
        let key = name.trim().to_ascii_lowercase();
        Self::BRONZE.into_iter().find(|field| field.as_str() == key)
    }

    /// Silver column order: bronze columns followed by the derived delivery date.
    pub fn silver() -> impl Iterator<Item = SalesField> {
        Self::BRONZE.into_iter().chain(std::iter::once(Self::DeliveryDate))
    }
}

impl fmt::Display for SalesField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
