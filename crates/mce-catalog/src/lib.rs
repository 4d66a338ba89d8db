#![deny(unsafe_code)]

pub mod error;
pub mod paths;
pub mod store;

pub use crate::error::CatalogError;
pub use crate::paths::{CATALOG_ENV_VAR, default_catalog_path, resolve_catalog_path};
pub use crate::store::{CatalogEntry, ReferenceData};

/// Load the catalog from its default location.
pub fn load_default_catalog() -> Result<ReferenceData, CatalogError> {
    ReferenceData::load(&default_catalog_path())
}
