//! Canonical vocabularies for categorical sales fields.
//!
//! A vocabulary is a small controlled terminology: a set of canonical labels
//! plus a synonym table mapping known variant spellings to one of them.
//!
//! ## Lookup rules
//!
//! - Input and table keys are compared after trimming and lowercasing.
//! - A canonical label always maps to itself.
//! - A value found in neither the labels nor the synonyms passes through in
//!   its trimmed, lowercased form and is reported as unmapped. There is no
//!   fuzzy matching.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Trim and case-fold a categorical value.
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Result of looking a value up in a [`Vocabulary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Canonical {
    /// The value is a canonical label or one of its synonyms.
    Mapped(String),
    /// Unknown variant, passed through normalized.
    Unmapped(String),
}

impl Canonical {
    pub fn into_value(self) -> String {
        match self {
            Self::Mapped(value) | Self::Unmapped(value) => value,
        }
    }
}

/// Canonical labels and their known synonyms.
///
/// Tables read from JSON are rebuilt through [`Vocabulary::add_term`], so keys
/// and labels written in any case or spacing are normalized on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VocabularyDef")]
pub struct Vocabulary {
    /// Human-readable name (e.g. "payment method").
    pub name: String,

    /// Synonym lookup: normalized variant -> canonical label.
    /// Every canonical label is also present as its own key.
    synonyms: BTreeMap<String, String>,
}

/// Wire form of a [`Vocabulary`] as written in a config file.
#[derive(Deserialize)]
struct VocabularyDef {
    #[serde(default)]
    name: String,
    #[serde(default)]
    synonyms: BTreeMap<String, String>,
}

impl From<VocabularyDef> for Vocabulary {
    fn from(def: VocabularyDef) -> Self {
        let mut vocabulary = Self::new(def.name);
        for (variant, label) in &def.synonyms {
            if normalize_key(label).is_empty() {
                continue;
            }
            vocabulary.add_term(label, [variant]);
        }
        vocabulary
    }
}

impl Vocabulary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            synonyms: BTreeMap::new(),
        }
    }

    /// Add a canonical label with its variant spellings.
    pub fn with_term<I, S>(mut self, label: &str, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_term(label, synonyms);
        self
    }

    /// Add a canonical label with its variant spellings.
    ///
    /// Later entries win when two labels claim the same variant.
    pub fn add_term<I, S>(&mut self, label: &str, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let canonical = normalize_key(label);
        for synonym in synonyms {
            let key = normalize_key(synonym.as_ref());
            if !key.is_empty() {
                self.synonyms.insert(key, canonical.clone());
            }
        }
        self.synonyms.insert(canonical.clone(), canonical);
    }

    /// Distinct canonical labels, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.synonyms.values().map(String::as_str).collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    /// Whether the normalized value is a known label or synonym.
    pub fn is_known(&self, value: &str) -> bool {
        self.synonyms.contains_key(&normalize_key(value))
    }

    /// Look up a raw value; `None` when it is blank after trimming.
    pub fn canonicalize(&self, raw: &str) -> Option<Canonical> {
        let key = normalize_key(raw);
        if key.is_empty() {
            return None;
        }
        Some(match self.synonyms.get(&key) {
            Some(label) => Canonical::Mapped(label.clone()),
            None => Canonical::Unmapped(key),
        })
    }

    /// Payment methods seen in the bronze feed.
    pub fn payment_methods() -> Self {
        Self::new("payment method")
            .with_term("cash", ["cod", "cash "])
            .with_term("credit", ["credit_card"])
            .with_term("wallet", ["paypal", "apple pay"])
    }

    /// Product categories seen in the bronze feed.
    pub fn product_categories() -> Self {
        Self::new("product category")
            .with_term("snacks", ["food & snacks", "food - snacks"])
            .with_term("electronics", ["electrnics", "electronics "])
            .with_term("clothing", ["clothing "])
    }
}
