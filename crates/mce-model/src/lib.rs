pub mod detail;
pub mod entity;
pub mod entry;
pub mod error;
pub mod ids;
pub mod location;
pub mod resolved;

pub use detail::{DetailRow, DetailType, DetailValue};
pub use entity::{Author, Labeled, Unit, Variable, split_column_names};
pub use entry::{EntryRecord, LicenseRef};
pub use error::{ModelError, Result};
pub use ids::RecordId;
pub use location::{Location, format_decimal};
pub use resolved::Resolved;
