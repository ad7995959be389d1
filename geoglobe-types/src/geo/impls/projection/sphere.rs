use crate::cartesian::{CartesianPoint3d, Point3d};
use crate::error::GeoError;
use crate::geo::impls::point::GeoPoint2d;
use crate::geo::traits::point::{validate, GeoPoint, NewGeoPoint};
use crate::geo::traits::projection::Projection;

/// Projects geographic coordinates onto (or above) a sphere centered at the scene origin.
///
/// The scene frame is right-handed: `x` points forward (to `0°N 0°E`), `y` to the right (`0°N 90°E`) and
/// `z` up (to the north pole).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SphereProjection {
    radius: f64,
}

impl SphereProjection {
    /// Creates a projection onto a sphere of the given radius in scene units.
    pub fn new(radius: f64) -> Result<Self, GeoError> {
        check_radius(radius)?;
        Ok(Self { radius })
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Projects the point onto the sphere.
    pub fn forward(&self, point: &impl GeoPoint<Num = f64>) -> Result<Point3d, GeoError> {
        forward(point, self.radius)
    }
}

impl Default for SphereProjection {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl Projection for SphereProjection {
    type InPoint = GeoPoint2d;
    type OutPoint = Point3d;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        forward(input, self.radius).ok()
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        Some(inverse(input))
    }
}

fn check_radius(radius: f64) -> Result<(), GeoError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(GeoError::InvalidRadius(radius))
    }
}

/// Converts a geo point into a cartesian point on the sphere of the given `radius`.
pub fn forward(point: &impl GeoPoint<Num = f64>, radius: f64) -> Result<Point3d, GeoError> {
    validate(point)?;
    check_radius(radius)?;

    let (lat, lon) = (point.lat_rad(), point.lon_rad());
    Ok(Point3d::new(
        radius * lat.cos() * lon.cos(),
        radius * lat.cos() * lon.sin(),
        radius * lat.sin(),
    ))
}

/// Converts a cartesian point back to geographic coordinates. Distance from the origin is ignored.
///
/// The center of the sphere has no geographic meaning; it is converted into `(0, 0)`.
pub fn inverse(point: &impl CartesianPoint3d<Num = f64>) -> GeoPoint2d {
    let r = point.magnitude();
    if r == 0.0 {
        return GeoPoint2d::latlon(0.0, 0.0);
    }

    let lat = (point.z() / r).clamp(-1.0, 1.0).asin().to_degrees();
    let lon = point.y().atan2(point.x()).to_degrees();

    GeoPoint2d::latlon(lat, lon)
}
