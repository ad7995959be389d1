//! Implementations for the projections used by the globe.
mod sphere;

pub use sphere::{forward, inverse, SphereProjection};
