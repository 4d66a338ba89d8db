//! Catalog file path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the catalog file.
pub const CATALOG_ENV_VAR: &str = "METACATALOG_BASE_DATA";

/// File name of the bundled catalog.
pub const CATALOG_FILE_NAME: &str = "BASE_DATA.json";

/// Get the default catalog file.
///
/// Resolution order:
/// 1. `METACATALOG_BASE_DATA` environment variable
/// 2. `data/BASE_DATA.json` relative to workspace root
pub fn default_catalog_path() -> PathBuf {
    if let Ok(path) = std::env::var(CATALOG_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(CATALOG_FILE_NAME)
}

/// An explicit path wins over the default resolution.
pub fn resolve_catalog_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(default_catalog_path, Path::to_path_buf)
}
