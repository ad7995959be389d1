//! Traits of points given by geographic coordinates.

use crate::error::GeoError;
use num_traits::{Float, One};

/// Point on the surface of a sphere, given by latitude and longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Central angle between two points in radians, computed with the haversine formula.
    fn central_angle(&self, other: &impl GeoPoint<Num = Self::Num>) -> Self::Num {
        let two = Self::Num::one() + Self::Num::one();
        let dlat = other.lat_rad() - self.lat_rad();
        let dlon = other.lon_rad() - self.lon_rad();

        let h = (dlat / two).sin().powi(2)
            + self.lat_rad().cos() * other.lat_rad().cos() * (dlon / two).sin().powi(2);

        // Rounding can push `h` slightly above 1 for antipodal points.
        two * h.min(Self::Num::one()).sqrt().asin()
    }
}

/// Geo point that can be constructed from latitude and longitude.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;
}

/// Checks that latitude is in `[-90, 90]` and longitude is in `[-180, 180]`.
///
/// Every public operation of the crate that consumes a geo point calls this before doing any trigonometry.
pub fn validate(point: &impl GeoPoint<Num = f64>) -> Result<(), GeoError> {
    let (lat, lon) = (point.lat(), point.lon());
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        Err(GeoError::InvalidCoordinate { lat, lon })
    }
}
