//! Value-level normalization used by the cleaning stages.
//!
//! - **numeric**: price, quantity and delivery-lag parsing
//! - **datetime**: purchase date parsing and delivery date arithmetic
//! - **canonical**: categorical synonym lookup

pub mod canonical;
pub mod datetime;
pub mod numeric;

pub use canonical::{canonicalize_record, CanonicalStats};
pub use datetime::{add_delivery_days, parse_purchase_date};
pub use numeric::{parse_delivery_period, parse_price, parse_quantity, whole_days};
