//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]) and their conversion into the
//! cartesian space of the globe (see [`SphereProjection`]).

mod datum;
pub mod distance;
pub mod impls;
pub mod interpolation;
mod traits;

pub use datum::Datum;
pub use distance::{distance, DistanceUnit};
pub use impls::point::GeoPoint2d;
pub use impls::projection::{forward, inverse, SphereProjection};
pub use interpolation::interpolate;
pub use traits::point::{validate, GeoPoint, NewGeoPoint};
pub use traits::projection::Projection;
