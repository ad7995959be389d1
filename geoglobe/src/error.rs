//! Error types used by the crate.

use geoglobe_types::GeoError;
use thiserror::Error;

/// Geoglobe error type.
#[derive(Debug, Error)]
pub enum GlobeError {
    /// Latitude or longitude is out of range or not a finite number.
    #[error("invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate {
        /// Latitude of the rejected point.
        lat: f64,
        /// Longitude of the rejected point.
        lon: f64,
    },
    /// Sphere radius (including an altitude offset) is not a finite positive number.
    #[error("invalid sphere radius: {0}")]
    InvalidRadius(f64),
    /// Interpolation parameter is outside `[0, 1]`.
    #[error("interpolation parameter out of range: {0}")]
    InvalidInterpolation(f64),
    /// Unknown distance unit name.
    #[error("unknown distance unit: {0}")]
    UnknownUnit(String),
    /// Not enough waypoints or sample points to build a route.
    #[error("invalid route: {0}")]
    InvalidRoute(String),
    /// Not enough footprint vertices or non-positive extrusion height.
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),
    /// Configuration values are inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Item not found.
    #[error("item not found")]
    NotFound,
    /// Error decoding input records.
    #[error("failed to decode data: {0}")]
    Decoding(#[from] serde_json::Error),
    /// Error reading input records from the FS.
    #[error("failed to read file: {0}")]
    FsIo(#[from] std::io::Error),
}

impl From<GeoError> for GlobeError {
    fn from(value: GeoError) -> Self {
        match value {
            GeoError::InvalidCoordinate { lat, lon } => Self::InvalidCoordinate { lat, lon },
            GeoError::InvalidRadius(radius) => Self::InvalidRadius(radius),
            GeoError::InvalidInterpolation(t) => Self::InvalidInterpolation(t),
            GeoError::UnknownUnit(unit) => Self::UnknownUnit(unit),
        }
    }
}
