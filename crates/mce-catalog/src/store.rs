//! The immutable reference catalog.
//!
//! The catalog is read once at startup. Every top-level key is optional: a
//! missing category is an empty list, while an unreadable or malformed file
//! is an error the caller treats as fatal.

use std::collections::BTreeSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, info, warn};

use mce_model::RecordId;

use crate::error::CatalogError;

/// A selectable catalog row. Only the id and label matter to an entry;
/// any other fields in the file are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub id: RecordId,
    pub label: String,
}

impl CatalogEntry {
    pub fn new(id: impl Into<RecordId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    author: Vec<CatalogEntry>,
    #[serde(default)]
    unit: Vec<CatalogEntry>,
    #[serde(default)]
    variable: Vec<CatalogEntry>,
    #[serde(default)]
    license: Vec<CatalogEntry>,
    #[serde(default)]
    keywords: IndexMap<String, String>,
}

impl ReferenceData {
    /// Load the catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let data = Self::parse(&text).map_err(|e| CatalogError::json(path, e))?;
        info!(
            path = %path.display(),
            authors = data.author.len(),
            units = data.unit.len(),
            variables = data.variable.len(),
            licenses = data.license.len(),
            keywords = data.keywords.len(),
            "catalog loaded"
        );
        Ok(data)
    }

    /// Parse catalog JSON text.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let data: Self = serde_json::from_str(text)?;
        data.warn_duplicate_labels();
        Ok(data)
    }

    pub fn authors(&self) -> &[CatalogEntry] {
        &self.author
    }

    pub fn units(&self) -> &[CatalogEntry] {
        &self.unit
    }

    pub fn variables(&self) -> &[CatalogEntry] {
        &self.variable
    }

    pub fn licenses(&self) -> &[CatalogEntry] {
        &self.license
    }

    /// Keyword vocabulary, key to display label, in file order.
    pub fn keywords(&self) -> &IndexMap<String, String> {
        &self.keywords
    }

    pub fn license_label(&self, id: &RecordId) -> Option<&str> {
        self.license
            .iter()
            .find(|entry| &entry.id == id)
            .map(|entry| entry.label.as_str())
    }

    pub fn keyword_label(&self, key: &str) -> Option<&str> {
        self.keywords.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.author.is_empty()
            && self.unit.is_empty()
            && self.variable.is_empty()
            && self.license.is_empty()
            && self.keywords.is_empty()
    }

    fn warn_duplicate_labels(&self) {
        let lists = [
            ("author", &self.author),
            ("unit", &self.unit),
            ("variable", &self.variable),
            ("license", &self.license),
        ];
        for (category, entries) in lists {
            let mut seen = BTreeSet::new();
            for entry in entries {
                if !seen.insert(entry.label.as_str()) {
                    warn!(category, label = %entry.label, "duplicate label in catalog");
                }
            }
            debug!(category, count = entries.len(), "catalog category parsed");
        }
    }
}
