use thiserror::Error;

use mce_model::{ModelError, RecordId};

use crate::phase::EditPhase;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("entry data got lost in the session")]
    LostState,
    #[error("cannot {action} from {from} mode")]
    InvalidTransition {
        action: &'static str,
        from: EditPhase,
    },
    #[error("cannot {action} while in {phase} mode")]
    WrongPhase {
        action: &'static str,
        phase: EditPhase,
    },
    #[error("no {field} labeled {label:?}")]
    UnknownLabel { field: &'static str, label: String },
    #[error("no {field} available to select")]
    EmptySelection { field: &'static str },
    #[error("unknown license id {0}")]
    UnknownLicense(RecordId),
    #[error("unknown keyword {0:?}")]
    UnknownKeyword(String),
    #[error("detail row {index} does not exist ({len} rows)")]
    DetailIndex { index: usize, len: usize },
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
