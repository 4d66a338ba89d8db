//! Entry record assembly.

use std::collections::BTreeSet;

use mce_catalog::CatalogEntry;
use mce_model::{Author, DetailRow, EntryRecord, LicenseRef, Variable};

use crate::error::{Result, SessionError};
use crate::forms::MainForm;
use crate::selection::{Choice, SelectionList};

/// Build the final record from the merged selection lists and form values.
///
/// Either every selection resolves and a complete record is returned, or an
/// error is returned and nothing is built.
pub fn assemble_entry(
    authors: &SelectionList<Author>,
    variables: &SelectionList<Variable>,
    licenses: &[CatalogEntry],
    form: &MainForm,
    details: &[DetailRow],
) -> Result<EntryRecord> {
    let author = select(authors, form.author.as_deref(), "author")?;
    let variable = select(variables, form.variable.as_deref(), "variable")?;

    // merged-list order; each label once, never the first author
    let mut emitted = BTreeSet::new();
    let mut coauthors = Vec::new();
    for choice in authors.choices() {
        if choice.label == author.label || !form.coauthors.contains(&choice.label) {
            continue;
        }
        if emitted.insert(choice.label.as_str()) {
            coauthors.push(choice.record.clone());
        }
    }

    let license = LicenseRef {
        id: form
            .license
            .clone()
            .or_else(|| licenses.first().map(|entry| entry.id.clone())),
    };

    Ok(EntryRecord {
        title: form.title.clone(),
        abstract_text: form.abstract_text.clone(),
        external_id: form.external_id.clone(),
        location: form.location,
        embargo: form.embargo,
        license,
        keywords: form.keywords.clone(),
        author: author.record.clone(),
        coauthors,
        variable: variable.record.clone(),
        details: details.to_vec(),
    })
}

/// Resolve an explicit selection, or fall back to the first option.
pub(crate) fn select<'l, T>(
    list: &'l SelectionList<T>,
    label: Option<&str>,
    field: &'static str,
) -> Result<&'l Choice<T>> {
    match label {
        Some(label) => list.resolve(label).ok_or_else(|| SessionError::UnknownLabel {
            field,
            label: label.to_string(),
        }),
        None => list.first().ok_or(SessionError::EmptySelection { field }),
    }
}
