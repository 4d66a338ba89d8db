//! Entities that can be referenced from an entry.
//!
//! Each entity derives a display label used by selection lists. The label is
//! never serialized; it only exists to map a selection back to its record.

use serde::{Deserialize, Serialize};

use crate::resolved::Resolved;

/// Derives the display label of an entity.
pub trait Labeled {
    fn label(&self) -> String;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
    /// Full organisation name including department and group.
    pub affiliation: String,
    /// Only the affiliated organisation, without department and group.
    pub organisation_name: String,
}

impl Labeled for Author {
    fn label(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub symbol: String,
    /// SI equivalent; empty when none is known.
    #[serde(default)]
    pub si: String,
}

impl Labeled for Unit {
    fn label(&self) -> String {
        format!("{} [{}]", self.name, self.symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub symbol: String,
    pub column_names: Vec<String>,
    pub unit: Resolved<Unit>,
}

impl Labeled for Variable {
    fn label(&self) -> String {
        format!("{} [{}]", self.name, self.symbol)
    }
}

/// Split a comma-separated column name input into its ordered parts.
///
/// Surrounding whitespace is trimmed and empty segments are dropped, so
/// `"a, b,,c"` yields `["a", "b", "c"]`.
pub fn split_column_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_keep_order() {
        assert_eq!(
            split_column_names("tair, tair_min,tair_max"),
            vec!["tair", "tair_min", "tair_max"]
        );
    }

    #[test]
    fn blank_column_input_is_empty() {
        assert!(split_column_names(" , ").is_empty());
    }
}
