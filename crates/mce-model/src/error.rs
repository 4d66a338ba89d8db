use thiserror::Error;

use crate::detail::DetailType;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("cannot read {raw:?} as {kind}: {message}")]
    InvalidDetailValue {
        kind: DetailType,
        raw: String,
        message: String,
    },
    #[error("unknown detail type: {0}")]
    UnknownDetailType(String),
    #[error("{axis} {value} is outside [{min}, {max}]")]
    CoordinateOutOfRange {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
