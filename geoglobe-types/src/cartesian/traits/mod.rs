mod cartesian_point;

pub use cartesian_point::{CartesianPoint3d, NewCartesianPoint3d};
