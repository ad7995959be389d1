//! Simple implementations of the geometry traits.

mod contour;

pub use contour::{ClosedContour, Contour};
