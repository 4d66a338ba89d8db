use serde::{Deserialize, Serialize};

use crate::detail::DetailRow;
use crate::entity::{Author, Variable};
use crate::ids::RecordId;
use crate::location::Location;
use crate::resolved::Resolved;

/// License reference of an entry. Licenses only ever come from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRef {
    pub id: Option<RecordId>,
}

/// The finished entry, in the field order the cataloging API expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryRecord {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub external_id: String,
    pub location: Location,
    pub embargo: bool,
    pub license: LicenseRef,
    pub keywords: Vec<String>,
    pub author: Resolved<Author>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub coauthors: Vec<Resolved<Author>>,
    pub variable: Resolved<Variable>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<DetailRow>,
}
