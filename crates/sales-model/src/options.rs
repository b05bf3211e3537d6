//! Configuration options for silver cleaning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vocabulary::Vocabulary;

/// Options controlling the cleaning core.
///
/// Everything else about cleaning (pass order, required fields, the
/// first-wins duplicate policy) is fixed behavior, not configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningOptions {
    /// Synonym table for `payment_method`.
    #[serde(default = "Vocabulary::payment_methods")]
    pub payment_methods: Vocabulary,

    /// Synonym table for `product_category`.
    #[serde(default = "Vocabulary::product_categories")]
    pub product_categories: Vocabulary,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            payment_methods: Vocabulary::payment_methods(),
            product_categories: Vocabulary::product_categories(),
        }
    }
}

impl CleaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payment_methods(mut self, vocabulary: Vocabulary) -> Self {
        self.payment_methods = vocabulary;
        self
    }

    pub fn with_product_categories(mut self, vocabulary: Vocabulary) -> Self {
        self.product_categories = vocabulary;
        self
    }

    /// Load options from a JSON file. Omitted tables keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
