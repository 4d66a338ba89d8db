//! Replay of recorded session actions.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use mce_catalog::ReferenceData;
use mce_model::EntryRecord;
use mce_session::{EditPhase, SessionAction, SessionEntryBuilder};

/// Read a JSON array of session actions.
pub fn load_actions(path: &Path) -> Result<Vec<SessionAction>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read actions: {}", path.display()))?;
    parse_actions(&text).with_context(|| format!("parse actions: {}", path.display()))
}

pub fn parse_actions(text: &str) -> Result<Vec<SessionAction>> {
    Ok(serde_json::from_str(text)?)
}

/// Run the actions against a fresh session and return the finished entry.
///
/// The first rejected action aborts the replay. The session must end in
/// the finishing phase.
pub fn replay(catalog: &ReferenceData, actions: Vec<SessionAction>) -> Result<EntryRecord> {
    let span = info_span!("session", actions = actions.len());
    let _guard = span.enter();

    let mut builder = SessionEntryBuilder::new(catalog);
    for (position, action) in actions.into_iter().enumerate() {
        let name = action.name();
        if let Err(error) = builder.apply(action) {
            warn!(step = position + 1, action = name, %error, "action rejected");
            return Err(error).with_context(|| format!("action #{} ({name})", position + 1));
        }
    }

    if builder.phase() != EditPhase::Finishing {
        anyhow::bail!(
            "session ended in {} mode; add a \"create\" action to finish the entry",
            builder.phase()
        );
    }
    let record = builder.record().context("read finished entry")?.clone();
    info!(title = %record.title, "session replayed");
    Ok(record)
}
