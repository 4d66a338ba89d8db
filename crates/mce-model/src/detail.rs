//! Free-form key/value details attached to an entry.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::location::format_decimal;

/// Default value of a freshly typed float detail.
pub const DEFAULT_FLOAT: f64 = 42.5;
/// Default value of a freshly typed integer detail.
pub const DEFAULT_INTEGER: i64 = 42;
/// ISO date format accepted and emitted for date details.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Type tag selected for a detail row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailType {
    #[default]
    String,
    Float,
    Integer,
    Date,
    Boolean,
}

impl DetailType {
    /// All types in the order the type selector lists them.
    pub const fn all() -> &'static [DetailType] {
        &[
            Self::String,
            Self::Float,
            Self::Integer,
            Self::Date,
            Self::Boolean,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Date => "date",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for DetailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownDetailType(s.to_string()))
    }
}

/// A detail value, already coerced to its type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DetailValue {
    String(String),
    Float(f64),
    Integer(i64),
    Date(NaiveDate),
    Boolean(bool),
}

impl Default for DetailValue {
    fn default() -> Self {
        Self::String(String::new())
    }
}

impl DetailValue {
    /// The value a row takes when its type is switched to `kind`.
    ///
    /// Switching to `string` keeps the textual rendering of the previous
    /// value; every other type starts over from its default.
    pub fn reset_for(kind: DetailType, previous: &DetailValue, today: NaiveDate) -> Self {
        if previous.detail_type() == kind {
            return previous.clone();
        }
        match kind {
            DetailType::String => Self::String(previous.to_string()),
            DetailType::Float => Self::Float(DEFAULT_FLOAT),
            DetailType::Integer => Self::Integer(DEFAULT_INTEGER),
            DetailType::Date => Self::Date(today),
            DetailType::Boolean => Self::Boolean(false),
        }
    }

    /// Coerce raw input text into a value of `kind`.
    pub fn parse(kind: DetailType, raw: &str) -> Result<Self> {
        let invalid = |message: String| ModelError::InvalidDetailValue {
            kind,
            raw: raw.to_string(),
            message,
        };
        let trimmed = raw.trim();
        match kind {
            DetailType::String => Ok(Self::String(raw.to_string())),
            DetailType::Float => {
                let value: f64 = trimmed.parse().map_err(|e| invalid(format!("{e}")))?;
                if !value.is_finite() {
                    return Err(invalid("value must be finite".to_string()));
                }
                Ok(Self::Float(value))
            }
            DetailType::Integer => trimmed
                .parse()
                .map(Self::Integer)
                .map_err(|e| invalid(format!("{e}"))),
            DetailType::Date => NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .map(Self::Date)
                .map_err(|e| invalid(format!("{e}"))),
            DetailType::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(Self::Boolean(true)),
                "false" | "no" | "0" => Ok(Self::Boolean(false)),
                _ => Err(invalid("expected true or false".to_string())),
            },
        }
    }

    pub fn detail_type(&self) -> DetailType {
        match self {
            Self::String(_) => DetailType::String,
            Self::Float(_) => DetailType::Float,
            Self::Integer(_) => DetailType::Integer,
            Self::Date(_) => DetailType::Date,
            Self::Boolean(_) => DetailType::Boolean,
        }
    }
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Float(value) => f.write_str(&format_decimal(*value)),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Date(value) => write!(f, "{}", value.format(DATE_FORMAT)),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}

/// One key/value row of the details section.
///
/// The selected type is carried by the value itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailRow {
    pub key: String,
    pub value: DetailValue,
}

impl DetailRow {
    pub fn new(key: impl Into<String>, value: DetailValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn detail_type(&self) -> DetailType {
        self.value.detail_type()
    }
}
