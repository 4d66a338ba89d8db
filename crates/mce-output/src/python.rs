//! Python snippet projection.
//!
//! The snippet shows how the metacatalog Python API consumes the entry. The
//! JSON is embedded in a raw triple-quoted string, so its escapes reach
//! `json.loads` untouched.

use std::fmt::Write;

use mce_model::EntryRecord;

use crate::error::Result;
use crate::json::to_json_compact;

/// Options for the generated Python snippet.
#[derive(Debug, Clone, Default)]
pub struct PythonSnippetOptions {
    /// Connection string passed to `api.connect_database`. The API's default
    /// connection is used when unset.
    pub connection: Option<String>,
}

pub fn generate_python_snippet(
    record: &EntryRecord,
    options: &PythonSnippetOptions,
) -> Result<String> {
    let json = to_json_compact(record)?;
    let connect_args = match &options.connection {
        Some(connection) => serde_json::to_string(connection)?,
        None => String::new(),
    };

    let mut code = String::new();
    writeln!(code, "from metacatalog import api")?;
    writeln!(code, "from metacatalog.models import Entry")?;
    writeln!(code, "import json")?;
    writeln!(code)?;
    writeln!(code, "session = api.connect_database({connect_args})")?;
    writeln!(code, r#"json_content = json.loads(r"""{json}""")"#)?;
    writeln!(code, "entry = Entry.from_json(json_content, session=session)")?;
    Ok(code)
}
