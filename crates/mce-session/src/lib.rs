//! Session-scoped builder for metacatalog entries.
//!
//! - [`SessionEntryBuilder`]: the edit-phase state machine and session lists
//! - [`SelectionList`]: catalog rows merged with session-added records
//! - [`assemble_entry`]: resolution of selections into an [`EntryRecord`]
//! - [`SessionAction`]: serializable user actions replayed against a builder
//!
//! [`EntryRecord`]: mce_model::EntryRecord

mod action;
mod assembly;
mod builder;
mod error;
mod forms;
mod phase;
mod selection;

pub use action::SessionAction;
pub use assembly::assemble_entry;
pub use builder::SessionEntryBuilder;
pub use error::{Result, SessionError};
pub use forms::{AuthorForm, MainForm, UnitForm, VariableForm};
pub use phase::EditPhase;
pub use selection::{Choice, SelectionList};
