//! Point types and pure algorithms used by the `geoglobe` engine.
//!
//! The crate works with two coordinate spaces:
//! * geographic coordinates (latitude and longitude in degrees), see [`geo::GeoPoint`] and [`geo::GeoPoint2d`];
//! * cartesian 3d coordinates of the globe scene, see [`cartesian::CartesianPoint3d`] and [`cartesian::Point3d`].
//!
//! Conversion between the two is done by the [`geo::SphereProjection`]. Great-circle distance and spherical
//! interpolation between geographic points live in [`geo::distance`] and [`geo::interpolation`] modules.

pub mod cartesian;
pub mod contour;
pub mod error;
pub mod geo;
pub mod impls;

pub use contour::Contour;
pub use error::GeoError;
