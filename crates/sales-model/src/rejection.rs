//! Output B: records refused by the admission filter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::SalesField;

/// Why a record was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionReason {
    /// A required field was still absent after every repair pass.
    MissingRequiredField,
    /// Another record with the same order id was admitted first.
    DuplicateOrderId,
}

impl RejectionReason {
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::DuplicateOrderId => "DUPLICATE_ORDER_ID",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Identity of a rejected record plus the reason, for manual triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRecord {
    pub order_id: Option<i64>,
    pub cust_id: Option<String>,
    pub reason: RejectionReason,
    /// Required fields that were absent; empty for duplicates.
    #[serde(default)]
    pub missing_fields: Vec<SalesField>,
}

impl RejectedRecord {
    pub fn missing(
        order_id: Option<i64>,
        cust_id: Option<String>,
        missing_fields: Vec<SalesField>,
    ) -> Self {
        Self {
            order_id,
            cust_id,
            reason: RejectionReason::MissingRequiredField,
            missing_fields,
        }
    }

    pub fn duplicate(order_id: i64, cust_id: Option<String>) -> Self {
        Self {
            order_id: Some(order_id),
            cust_id,
            reason: RejectionReason::DuplicateOrderId,
            missing_fields: Vec::new(),
        }
    }

    /// Missing field names joined with `;`, as written to the rejection table.
    pub fn missing_fields_label(&self) -> String {
        self.missing_fields
            .iter()
            .copied()
            .map(SalesField::as_str)
            .collect::<Vec<_>>()
            .join(";")
    }
}
