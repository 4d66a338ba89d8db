//! The per-session entry builder.
//!
//! A builder borrows the read-only catalog and owns everything the user adds
//! during one session. Every method is one user action: it checks that the
//! action is allowed in the current phase, applies at most one transition,
//! and returns.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use mce_catalog::{CatalogEntry, ReferenceData};
use mce_model::{
    Author, DetailRow, DetailType, DetailValue, EntryRecord, Labeled, Location, RecordId, Unit,
    Variable, split_column_names,
};

use crate::assembly::{assemble_entry, select};
use crate::error::{Result, SessionError};
use crate::forms::{AuthorForm, MainForm, UnitForm, VariableForm};
use crate::phase::EditPhase;
use crate::selection::SelectionList;

#[derive(Debug, Clone)]
pub struct SessionEntryBuilder<'a> {
    catalog: &'a ReferenceData,
    phase: EditPhase,
    authors: Vec<Author>,
    units: Vec<Unit>,
    variables: Vec<Variable>,
    details: Vec<DetailRow>,
    form: MainForm,
    record: Option<EntryRecord>,
    today: NaiveDate,
}

impl<'a> SessionEntryBuilder<'a> {
    pub fn new(catalog: &'a ReferenceData) -> Self {
        Self {
            catalog,
            phase: EditPhase::Main,
            authors: Vec::new(),
            units: Vec::new(),
            variables: Vec::new(),
            details: Vec::new(),
            form: MainForm::default(),
            record: None,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Fix the date used as default for date details.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn catalog(&self) -> &'a ReferenceData {
        self.catalog
    }

    pub fn form(&self) -> &MainForm {
        &self.form
    }

    pub fn details(&self) -> &[DetailRow] {
        &self.details
    }

    pub fn session_authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn session_units(&self) -> &[Unit] {
        &self.units
    }

    pub fn session_variables(&self) -> &[Variable] {
        &self.variables
    }

    // =========================================================================
    // Selection lists
    // =========================================================================

    pub fn author_choices(&self) -> SelectionList<Author> {
        SelectionList::merge(self.catalog.authors(), &self.authors)
    }

    pub fn unit_choices(&self) -> SelectionList<Unit> {
        SelectionList::merge(self.catalog.units(), &self.units)
    }

    pub fn variable_choices(&self) -> SelectionList<Variable> {
        SelectionList::merge(self.catalog.variables(), &self.variables)
    }

    /// Co-author options: every author label except the current first author.
    pub fn coauthor_options(&self) -> Vec<String> {
        let authors = self.author_choices();
        let first = self.effective_author(&authors);
        authors
            .labels()
            .filter(|label| Some(*label) != first.as_deref())
            .map(str::to_string)
            .collect()
    }

    pub fn license_options(&self) -> &'a [CatalogEntry] {
        self.catalog.licenses()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn open_author_form(&mut self) -> Result<()> {
        self.navigate(EditPhase::AddAuthor, "add an author")
    }

    pub fn open_unit_form(&mut self) -> Result<()> {
        self.navigate(EditPhase::AddUnit, "add a unit")
    }

    pub fn open_variable_form(&mut self) -> Result<()> {
        self.navigate(EditPhase::AddVariable, "add a variable")
    }

    /// Leave a sub-form without saving. A no-op in `Main`.
    pub fn back_to_main(&mut self) -> Result<()> {
        self.navigate(EditPhase::Main, "go back to the main form")
    }

    fn navigate(&mut self, target: EditPhase, action: &'static str) -> Result<()> {
        match self.phase {
            EditPhase::Finishing => Err(SessionError::InvalidTransition {
                action,
                from: self.phase,
            }),
            EditPhase::Main
            | EditPhase::AddAuthor
            | EditPhase::AddUnit
            | EditPhase::AddVariable => {
                self.transition(target);
                Ok(())
            }
        }
    }

    fn transition(&mut self, target: EditPhase) {
        if self.phase != target {
            debug!(from = %self.phase, to = %target, "edit phase changed");
        }
        self.phase = target;
    }

    fn require(&self, expected: EditPhase, action: &'static str) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    // =========================================================================
    // Sub-form submissions
    // =========================================================================

    /// Append a session author and return to the main form.
    pub fn save_author(&mut self, form: AuthorForm) -> Result<String> {
        self.require(EditPhase::AddAuthor, "save an author")?;
        let author = Author::from(form);
        let label = author.label();
        warn_on_collision("author", &label, &self.author_choices());
        self.authors.push(author);
        info!(label = %label, "session author added");
        self.transition(EditPhase::Main);
        Ok(label)
    }

    /// Append a session unit and return to the main form.
    pub fn save_unit(&mut self, form: UnitForm) -> Result<String> {
        self.require(EditPhase::AddUnit, "save a unit")?;
        let unit = Unit::from(form);
        let label = unit.label();
        warn_on_collision("unit", &label, &self.unit_choices());
        self.units.push(unit);
        info!(label = %label, "session unit added");
        self.transition(EditPhase::Main);
        Ok(label)
    }

    /// Append a session variable and return to the main form.
    ///
    /// The unit is resolved against the merged unit list at save time.
    pub fn save_variable(&mut self, form: VariableForm) -> Result<String> {
        self.require(EditPhase::AddVariable, "save a variable")?;
        let units = self.unit_choices();
        let unit = select(&units, form.unit.as_deref(), "unit")?.record.clone();
        let variable = Variable {
            name: form.name,
            symbol: form.symbol,
            column_names: split_column_names(&form.column_names),
            unit,
        };
        let label = variable.label();
        warn_on_collision("variable", &label, &self.variable_choices());
        self.variables.push(variable);
        info!(label = %label, "session variable added");
        self.transition(EditPhase::Main);
        Ok(label)
    }

    // =========================================================================
    // Main form
    // =========================================================================

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.require(EditPhase::Main, "edit the title")?;
        self.form.title = title.into();
        Ok(())
    }

    pub fn set_abstract(&mut self, text: impl Into<String>) -> Result<()> {
        self.require(EditPhase::Main, "edit the abstract")?;
        self.form.abstract_text = text.into();
        Ok(())
    }

    pub fn set_external_id(&mut self, external_id: impl Into<String>) -> Result<()> {
        self.require(EditPhase::Main, "edit the external id")?;
        self.form.external_id = external_id.into();
        Ok(())
    }

    /// Select the first author. A co-author with the same label is dropped.
    pub fn select_author(&mut self, label: &str) -> Result<()> {
        self.require(EditPhase::Main, "select an author")?;
        if !self.author_choices().contains(label) {
            return Err(SessionError::UnknownLabel {
                field: "author",
                label: label.to_string(),
            });
        }
        self.form.coauthors.retain(|coauthor| coauthor != label);
        self.form.author = Some(label.to_string());
        Ok(())
    }

    pub fn select_coauthors<I, S>(&mut self, labels: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.require(EditPhase::Main, "select co-authors")?;
        let options = self.coauthor_options();
        let mut selected: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            if !options.contains(&label) {
                return Err(SessionError::UnknownLabel {
                    field: "co-author",
                    label,
                });
            }
            if !selected.contains(&label) {
                selected.push(label);
            }
        }
        self.form.coauthors = selected;
        Ok(())
    }

    pub fn select_variable(&mut self, label: &str) -> Result<()> {
        self.require(EditPhase::Main, "select a variable")?;
        if !self.variable_choices().contains(label) {
            return Err(SessionError::UnknownLabel {
                field: "variable",
                label: label.to_string(),
            });
        }
        self.form.variable = Some(label.to_string());
        Ok(())
    }

    pub fn select_license(&mut self, id: RecordId) -> Result<()> {
        self.require(EditPhase::Main, "select a license")?;
        if self.catalog.license_label(&id).is_none() {
            return Err(SessionError::UnknownLicense(id));
        }
        self.form.license = Some(id);
        Ok(())
    }

    pub fn set_location(&mut self, longitude: f64, latitude: f64) -> Result<()> {
        self.require(EditPhase::Main, "edit the location")?;
        self.form.location = Location::new(longitude, latitude)?;
        Ok(())
    }

    pub fn set_embargo(&mut self, embargo: bool) -> Result<()> {
        self.require(EditPhase::Main, "edit the embargo")?;
        self.form.embargo = embargo;
        Ok(())
    }

    /// Replace the keyword selection. Keys must exist in the vocabulary.
    pub fn select_keywords<I, S>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.require(EditPhase::Main, "select keywords")?;
        let mut selected: Vec<String> = Vec::new();
        for key in keys {
            let key = key.into();
            if self.catalog.keyword_label(&key).is_none() {
                return Err(SessionError::UnknownKeyword(key));
            }
            if !selected.contains(&key) {
                selected.push(key);
            }
        }
        self.form.keywords = selected;
        Ok(())
    }

    // =========================================================================
    // Details
    // =========================================================================

    /// Append an empty string row and return its index.
    pub fn add_detail_row(&mut self) -> Result<usize> {
        self.require(EditPhase::Main, "add a detail row")?;
        self.details.push(DetailRow::default());
        Ok(self.details.len() - 1)
    }

    pub fn remove_details(&mut self) -> Result<()> {
        self.require(EditPhase::Main, "remove details")?;
        debug!(rows = self.details.len(), "details cleared");
        self.details.clear();
        Ok(())
    }

    pub fn set_detail_key(&mut self, index: usize, key: impl Into<String>) -> Result<()> {
        self.require(EditPhase::Main, "edit a detail key")?;
        self.detail_mut(index)?.key = key.into();
        Ok(())
    }

    /// Change a row's type. The previous value is not converted; see
    /// [`DetailValue::reset_for`].
    pub fn set_detail_type(&mut self, index: usize, kind: DetailType) -> Result<()> {
        self.require(EditPhase::Main, "change a detail type")?;
        let today = self.today;
        let row = self.detail_mut(index)?;
        row.value = DetailValue::reset_for(kind, &row.value, today);
        Ok(())
    }

    /// Coerce raw input to the row's current type and store it.
    pub fn set_detail_value(&mut self, index: usize, raw: &str) -> Result<()> {
        self.require(EditPhase::Main, "edit a detail value")?;
        let row = self.detail_mut(index)?;
        row.value = DetailValue::parse(row.detail_type(), raw)?;
        Ok(())
    }

    fn detail_mut(&mut self, index: usize) -> Result<&mut DetailRow> {
        let len = self.details.len();
        self.details
            .get_mut(index)
            .ok_or(SessionError::DetailIndex { index, len })
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Assemble and freeze the entry, then move to `Finishing`.
    pub fn submit(&mut self) -> Result<&EntryRecord> {
        self.require(EditPhase::Main, "create the entry")?;
        let record = assemble_entry(
            &self.author_choices(),
            &self.variable_choices(),
            self.catalog.licenses(),
            &self.form,
            &self.details,
        )?;
        info!(
            title = %record.title,
            coauthors = record.coauthors.len(),
            details = record.details.len(),
            keywords = record.keywords.len(),
            "entry created"
        );
        self.transition(EditPhase::Finishing);
        Ok(&*self.record.insert(record))
    }

    /// The frozen record. Only available in `Finishing`.
    pub fn record(&self) -> Result<&EntryRecord> {
        self.require(EditPhase::Finishing, "preview the entry")?;
        self.record.as_ref().ok_or(SessionError::LostState)
    }

    fn effective_author(&self, authors: &SelectionList<Author>) -> Option<String> {
        match &self.form.author {
            Some(label) => Some(label.clone()),
            None => authors.first().map(|choice| choice.label.clone()),
        }
    }
}

fn warn_on_collision<T>(category: &'static str, label: &str, existing: &SelectionList<T>) {
    if existing.contains(label) {
        warn!(
            category,
            label,
            "label already in use; selections resolve to the first match"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ReferenceData {
        ReferenceData::parse(
            r#"{
                "author": [{ "id": 1, "label": "A B" }],
                "variable": [{ "id": 4, "label": "air temperature [Ta]" }]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn finishing_without_record_reports_lost_state() {
        let catalog = catalog();
        let mut builder = SessionEntryBuilder::new(&catalog);
        builder.phase = EditPhase::Finishing;

        assert_eq!(builder.record().unwrap_err(), SessionError::LostState);
        assert_eq!(
            builder.record().unwrap_err().to_string(),
            "entry data got lost in the session"
        );
    }

    #[test]
    fn record_is_unavailable_before_submit() {
        let catalog = catalog();
        let builder = SessionEntryBuilder::new(&catalog);
        assert!(matches!(
            builder.record(),
            Err(SessionError::WrongPhase {
                phase: EditPhase::Main,
                ..
            })
        ));
    }

    #[test]
    fn detail_type_switch_discards_value() {
        let catalog = catalog();
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let mut builder = SessionEntryBuilder::new(&catalog).with_today(today);
        let row = builder.add_detail_row().unwrap();
        builder.set_detail_type(row, DetailType::Float).unwrap();
        builder.set_detail_value(row, "3.5").unwrap();

        builder.set_detail_type(row, DetailType::Integer).unwrap();
        assert_eq!(builder.details()[row].value, DetailValue::Integer(42));

        builder.set_detail_type(row, DetailType::Float).unwrap();
        assert_eq!(builder.details()[row].value, DetailValue::Float(42.5));

        builder.set_detail_type(row, DetailType::Date).unwrap();
        assert_eq!(builder.details()[row].value, DetailValue::Date(today));
    }
}
