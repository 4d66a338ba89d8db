//! Metacatalog entry projections.
//!
//! This crate renders a finished entry for display or hand-off:
//!
//! - **JSON**: the record as the cataloging API ingests it
//! - **Python**: a snippet that loads the JSON through the metacatalog API
//!
//! Rendering never mutates the record; the same record always renders to
//! the same text.

mod error;
mod format;
mod json;
mod python;

pub use error::{OutputError, Result};
pub use format::OutputFormat;
pub use json::{to_json_compact, to_json_pretty};
pub use python::{PythonSnippetOptions, generate_python_snippet};

use mce_model::EntryRecord;

/// Render a record in the requested format. `python` only applies to the
/// snippet projection.
pub fn render(
    record: &EntryRecord,
    format: OutputFormat,
    python: &PythonSnippetOptions,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json_pretty(record),
        OutputFormat::Python => generate_python_snippet(record, python),
    }
}
