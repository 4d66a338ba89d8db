//! Recorded user actions.
//!
//! A rendering host turns button presses and field edits into actions; the
//! command-line driver reads them from a JSON list. Each action maps to one
//! builder method.

use serde::{Deserialize, Serialize};
use tracing::trace;

use mce_model::{DetailType, RecordId};

use crate::builder::SessionEntryBuilder;
use crate::error::Result;
use crate::forms::{AuthorForm, UnitForm, VariableForm};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    AddAuthor,
    AddUnit,
    AddVariable,
    BackToMain,
    SaveAuthor(AuthorForm),
    SaveUnit(UnitForm),
    SaveVariable(VariableForm),
    SetTitle {
        title: String,
    },
    SetAbstract {
        text: String,
    },
    SetExternalId {
        external_id: String,
    },
    SelectAuthor {
        label: String,
    },
    SelectCoauthors {
        labels: Vec<String>,
    },
    SelectVariable {
        label: String,
    },
    SelectLicense {
        id: RecordId,
    },
    SetLocation {
        longitude: f64,
        latitude: f64,
    },
    SetEmbargo {
        embargo: bool,
    },
    SelectKeywords {
        keys: Vec<String>,
    },
    AddDetailRow,
    RemoveDetails,
    SetDetailKey {
        index: usize,
        key: String,
    },
    SetDetailType {
        index: usize,
        #[serde(rename = "type")]
        kind: DetailType,
    },
    SetDetailValue {
        index: usize,
        value: String,
    },
    Create,
}

impl SessionAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddAuthor => "add_author",
            Self::AddUnit => "add_unit",
            Self::AddVariable => "add_variable",
            Self::BackToMain => "back_to_main",
            Self::SaveAuthor(_) => "save_author",
            Self::SaveUnit(_) => "save_unit",
            Self::SaveVariable(_) => "save_variable",
            Self::SetTitle { .. } => "set_title",
            Self::SetAbstract { .. } => "set_abstract",
            Self::SetExternalId { .. } => "set_external_id",
            Self::SelectAuthor { .. } => "select_author",
            Self::SelectCoauthors { .. } => "select_coauthors",
            Self::SelectVariable { .. } => "select_variable",
            Self::SelectLicense { .. } => "select_license",
            Self::SetLocation { .. } => "set_location",
            Self::SetEmbargo { .. } => "set_embargo",
            Self::SelectKeywords { .. } => "select_keywords",
            Self::AddDetailRow => "add_detail_row",
            Self::RemoveDetails => "remove_details",
            Self::SetDetailKey { .. } => "set_detail_key",
            Self::SetDetailType { .. } => "set_detail_type",
            Self::SetDetailValue { .. } => "set_detail_value",
            Self::Create => "create",
        }
    }
}

impl SessionEntryBuilder<'_> {
    /// Apply one recorded action.
    pub fn apply(&mut self, action: SessionAction) -> Result<()> {
        trace!(action = action.name(), phase = %self.phase(), "applying action");
        match action {
            SessionAction::AddAuthor => self.open_author_form(),
            SessionAction::AddUnit => self.open_unit_form(),
            SessionAction::AddVariable => self.open_variable_form(),
            SessionAction::BackToMain => self.back_to_main(),
            SessionAction::SaveAuthor(form) => self.save_author(form).map(|_| ()),
            SessionAction::SaveUnit(form) => self.save_unit(form).map(|_| ()),
            SessionAction::SaveVariable(form) => self.save_variable(form).map(|_| ()),
            SessionAction::SetTitle { title } => self.set_title(title),
            SessionAction::SetAbstract { text } => self.set_abstract(text),
            SessionAction::SetExternalId { external_id } => self.set_external_id(external_id),
            SessionAction::SelectAuthor { label } => self.select_author(&label),
            SessionAction::SelectCoauthors { labels } => self.select_coauthors(labels),
            SessionAction::SelectVariable { label } => self.select_variable(&label),
            SessionAction::SelectLicense { id } => self.select_license(id),
            SessionAction::SetLocation {
                longitude,
                latitude,
            } => self.set_location(longitude, latitude),
            SessionAction::SetEmbargo { embargo } => self.set_embargo(embargo),
            SessionAction::SelectKeywords { keys } => self.select_keywords(keys),
            SessionAction::AddDetailRow => self.add_detail_row().map(|_| ()),
            SessionAction::RemoveDetails => self.remove_details(),
            SessionAction::SetDetailKey { index, key } => self.set_detail_key(index, key),
            SessionAction::SetDetailType { index, kind } => self.set_detail_type(index, kind),
            SessionAction::SetDetailValue { index, value } => {
                self.set_detail_value(index, &value)
            }
            SessionAction::Create => self.submit().map(|_| ()),
        }
    }
}
