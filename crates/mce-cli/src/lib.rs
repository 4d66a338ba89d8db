//! CLI library components for the metacatalog entry builder.

pub mod logging;
pub mod replay;
