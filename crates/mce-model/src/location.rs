use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{ModelError, Result};

/// Spatial reference of every emitted location (WGS84).
pub const SRID: u32 = 4326;

pub const DEFAULT_LONGITUDE: f64 = 8.415447;
pub const DEFAULT_LATITUDE: f64 = 49.010113;

/// A WGS84 point. Serializes as an EWKT string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    longitude: f64,
    latitude: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            longitude: DEFAULT_LONGITUDE,
            latitude: DEFAULT_LATITUDE,
        }
    }
}

impl Location {
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        check_range("longitude", longitude, 180.0)?;
        check_range("latitude", latitude, 90.0)?;
        Ok(Self {
            longitude,
            latitude,
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Render as `SRID=4326;POINT (<lon> <lat>)`.
    pub fn to_ewkt(&self) -> String {
        format!(
            "SRID={SRID};POINT ({} {})",
            format_decimal(self.longitude),
            format_decimal(self.latitude)
        )
    }
}

/// Shortest round-trip digits in positional notation, never an exponent.
/// Whole numbers keep a trailing `.0`.
pub fn format_decimal(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && value.fract() == 0.0 {
        format!("{text}.0")
    } else {
        text
    }
}

fn check_range(axis: &'static str, value: f64, bound: f64) -> Result<()> {
    if value.is_finite() && (-bound..=bound).contains(&value) {
        return Ok(());
    }
    Err(ModelError::CoordinateOutOfRange {
        axis,
        value,
        min: -bound,
        max: bound,
    })
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ewkt())
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_ewkt())
    }
}
