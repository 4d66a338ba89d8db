//! Form inputs collected by the session.

use serde::{Deserialize, Serialize};

use mce_model::{Author, Location, RecordId, Unit};

/// Input of the "add author" sub-form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub organisation_name: String,
}

impl From<AuthorForm> for Author {
    fn from(form: AuthorForm) -> Self {
        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            affiliation: form.affiliation,
            organisation_name: form.organisation_name,
        }
    }
}

/// Input of the "add unit" sub-form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    /// Left blank when no SI equivalent is known.
    #[serde(default)]
    pub si: String,
}

impl From<UnitForm> for Unit {
    fn from(form: UnitForm) -> Self {
        Self {
            name: form.name,
            symbol: form.symbol,
            si: form.si,
        }
    }
}

/// Input of the "add variable" sub-form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    /// Comma-separated export column names.
    #[serde(default)]
    pub column_names: String,
    /// Label of the selected unit; the first unit when unset.
    #[serde(default)]
    pub unit: Option<String>,
}

/// Current values of the main form.
///
/// Unset selections fall back to the first available option at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainForm {
    pub title: String,
    pub abstract_text: String,
    pub external_id: String,
    pub author: Option<String>,
    pub coauthors: Vec<String>,
    pub variable: Option<String>,
    pub license: Option<RecordId>,
    pub location: Location,
    pub embargo: bool,
    pub keywords: Vec<String>,
}
