//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Latitude is outside `[-90, 90]`, longitude is outside `[-180, 180]`, or one of them is not a finite number.
    #[error("invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate {
        /// Latitude of the rejected point.
        lat: f64,
        /// Longitude of the rejected point.
        lon: f64,
    },
    /// Sphere radius must be a finite positive number.
    #[error("invalid sphere radius: {0}")]
    InvalidRadius(f64),
    /// Interpolation parameter must be in `[0, 1]`.
    #[error("interpolation parameter out of range: {0}")]
    InvalidInterpolation(f64),
    /// Distance unit name is not one of `km`, `mi` or `nm`.
    #[error("unknown distance unit: {0}")]
    UnknownUnit(String),
}
