//! Selection lists merging catalog rows with session-added records.

use std::collections::BTreeSet;

use mce_catalog::CatalogEntry;
use mce_model::{Labeled, Resolved};

/// One option of a selection list.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub record: Resolved<T>,
}

/// Catalog rows followed by session-added records, each in original order.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionList<T> {
    choices: Vec<Choice<T>>,
}

impl<T: Labeled + Clone> SelectionList<T> {
    pub fn merge(reference: &[CatalogEntry], session: &[T]) -> Self {
        let choices = reference
            .iter()
            .map(|entry| Choice {
                label: entry.label.clone(),
                record: Resolved::Reference {
                    id: entry.id.clone(),
                },
            })
            .chain(session.iter().map(|record| Choice {
                label: record.label(),
                record: Resolved::Inline(record.clone()),
            }))
            .collect();
        Self { choices }
    }
}

impl<T> SelectionList<T> {
    pub fn choices(&self) -> &[Choice<T>] {
        &self.choices
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(|choice| choice.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn first(&self) -> Option<&Choice<T>> {
        self.choices.first()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.resolve(label).is_some()
    }

    /// First choice whose label matches exactly. Catalog rows precede
    /// session records, so a colliding catalog label shadows the session one.
    pub fn resolve(&self, label: &str) -> Option<&Choice<T>> {
        self.choices.iter().find(|choice| choice.label == label)
    }

    /// Labels that occur more than once, in first-occurrence order.
    pub fn duplicate_labels(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut duplicates = Vec::new();
        for label in self.labels() {
            if !seen.insert(label) && !duplicates.contains(&label) {
                duplicates.push(label);
            }
        }
        duplicates
    }
}
