//! Set of geo functions shared by the feature modules of the globe.
//!
//! Builders and modules do not call the math of `geoglobe-types` directly. They receive a [`GeoCapabilities`]
//! implementation instead, so a different body model (or an instrumented one in tests) can be plugged in without
//! touching them.

use geoglobe_types::cartesian::Point3d;
use geoglobe_types::geo::{self, DistanceUnit, GeoPoint2d};
use geoglobe_types::GeoError;

/// Coordinate, interpolation and distance functions used to build globe geometry.
pub trait GeoCapabilities {
    /// Converts a geo point into a point on the sphere of the given radius.
    fn forward(&self, point: &GeoPoint2d, radius: f64) -> Result<Point3d, GeoError>;
    /// Converts a point of the scene back into geographic coordinates.
    fn inverse(&self, point: &Point3d) -> GeoPoint2d;
    /// `count` evenly spaced points of the great-circle arc from `a` to `b`, both ends included.
    fn sample_arc(&self, a: &GeoPoint2d, b: &GeoPoint2d, count: usize) -> Result<Vec<GeoPoint2d>, GeoError>;
    /// Great-circle distance between the points.
    fn distance(&self, a: &GeoPoint2d, b: &GeoPoint2d, unit: DistanceUnit) -> Result<f64, GeoError>;
}

/// Capabilities of a perfect sphere, delegating to [`geoglobe_types::geo`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SphereCapabilities;

impl GeoCapabilities for SphereCapabilities {
    fn forward(&self, point: &GeoPoint2d, radius: f64) -> Result<Point3d, GeoError> {
        geo::forward(point, radius)
    }

    fn inverse(&self, point: &Point3d) -> GeoPoint2d {
        geo::inverse(point)
    }

    fn sample_arc(&self, a: &GeoPoint2d, b: &GeoPoint2d, count: usize) -> Result<Vec<GeoPoint2d>, GeoError> {
        geo::interpolation::sample_arc(a, b, count)
    }

    fn distance(&self, a: &GeoPoint2d, b: &GeoPoint2d, unit: DistanceUnit) -> Result<f64, GeoError> {
        geo::distance(a, b, unit)
    }
}

impl<T: GeoCapabilities + ?Sized> GeoCapabilities for &T {
    fn forward(&self, point: &GeoPoint2d, radius: f64) -> Result<Point3d, GeoError> {
        (**self).forward(point, radius)
    }

    fn inverse(&self, point: &Point3d) -> GeoPoint2d {
        (**self).inverse(point)
    }

    fn sample_arc(&self, a: &GeoPoint2d, b: &GeoPoint2d, count: usize) -> Result<Vec<GeoPoint2d>, GeoError> {
        (**self).sample_arc(a, b, count)
    }

    fn distance(&self, a: &GeoPoint2d, b: &GeoPoint2d, unit: DistanceUnit) -> Result<f64, GeoError> {
        (**self).distance(a, b, unit)
    }
}
