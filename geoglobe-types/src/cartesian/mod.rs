//! Types and functions on points in the cartesian space of the globe scene.

mod impls;
mod traits;

pub use impls::Point3d;
pub use traits::*;
