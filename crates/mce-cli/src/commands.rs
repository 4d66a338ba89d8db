use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use mce_catalog::{ReferenceData, resolve_catalog_path};
use mce_cli::replay::{load_actions, replay};
use mce_output::{PythonSnippetOptions, render};

use crate::cli::CreateArgs;
use crate::summary::{print_catalog, print_entry_summary};

/// Load the catalog once; failure here stops the process.
pub fn load_catalog(explicit: Option<&Path>) -> Result<ReferenceData> {
    let path = resolve_catalog_path(explicit);
    ReferenceData::load(&path).context("load reference catalog")
}

pub fn run_catalog(catalog: &ReferenceData) -> Result<()> {
    print_catalog(catalog);
    Ok(())
}

pub fn run_create(catalog: &ReferenceData, args: &CreateArgs) -> Result<()> {
    let actions = load_actions(&args.actions)?;
    let record = replay(catalog, actions)?;

    let options = PythonSnippetOptions {
        connection: args.connection.clone(),
    };
    let text = render(&record, args.format, &options)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("write entry: {}", path.display()))?;
            info!(path = %path.display(), format = %args.format, "entry written");
            print_entry_summary(&record, catalog);
            eprintln!("Entry: {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
