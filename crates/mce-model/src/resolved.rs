use serde::{Deserialize, Serialize};

use crate::ids::RecordId;

/// A record as it appears in an entry: either a reference to a catalog row
/// or the full inline definition of a record created during the session.
///
/// References serialize as exactly `{"id": ...}`; inline records serialize
/// as the bare field set of `T`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Resolved<T> {
    Reference { id: RecordId },
    Inline(T),
}

impl<T> Resolved<T> {
    pub fn reference(id: impl Into<RecordId>) -> Self {
        Self::Reference { id: id.into() }
    }

    pub fn id(&self) -> Option<&RecordId> {
        match self {
            Self::Reference { id } => Some(id),
            Self::Inline(_) => None,
        }
    }

    pub fn inline(&self) -> Option<&T> {
        match self {
            Self::Reference { .. } => None,
            Self::Inline(record) => Some(record),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference { .. })
    }
}
