//! JSON projection.

use mce_model::EntryRecord;

use crate::error::Result;

/// Indented JSON for display and files.
pub fn to_json_pretty(record: &EntryRecord) -> Result<String> {
    let mut text = serde_json::to_string_pretty(record)?;
    text.push('\n');
    Ok(text)
}

/// Single-line JSON, as embedded in generated code.
pub fn to_json_compact(record: &EntryRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}
