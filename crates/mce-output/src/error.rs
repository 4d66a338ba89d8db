use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to serialize entry: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write snippet: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, OutputError>;
