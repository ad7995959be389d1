//! Geo point stored as latitude and longitude in degrees.

use crate::error::GeoError;
use crate::geo::traits::point::{validate, GeoPoint, NewGeoPoint};
use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

/// 2d point on the surface of a celestial body.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint2d {
    /// Creates a point, checking that the coordinates are in the valid range.
    pub fn try_latlon(lat: f64, lon: f64) -> Result<Self, GeoError> {
        let point = Self { lat, lon };
        validate(&point)?;
        Ok(point)
    }
}

impl From<(f64, f64)> for GeoPoint2d {
    /// Converts `(lat, lon)` tuple into a point.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use geoglobe_types::geo::GeoPoint;
/// use geoglobe_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::geo::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn try_latlon() {
        let point = GeoPoint2d::try_latlon(55.0, -106.0).unwrap();
        assert_eq!(point.lat(), 55.0);
        assert_eq!(point.lon(), -106.0);

        assert_matches!(
            GeoPoint2d::try_latlon(-91.0, 0.0),
            Err(GeoError::InvalidCoordinate { .. })
        );
    }

    #[test]
    fn deserialize() {
        let point: GeoPoint2d = serde_json::from_str(r#"{"lat": 51.5074, "lon": -0.1278}"#).unwrap();
        assert_eq!(point, latlon!(51.5074, -0.1278));
    }
}
