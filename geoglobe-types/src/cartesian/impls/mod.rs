use nalgebra::{Point3, Scalar};
use num_traits::Float;

use crate::cartesian::traits::{CartesianPoint3d, NewCartesianPoint3d};

/// Point of the globe scene in `f64` coordinates.
pub type Point3d = Point3<f64>;

impl<Num: Float + Scalar> CartesianPoint3d for Point3<Num> {
    type Num = Num;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }

    fn z(&self) -> Self::Num {
        self.z
    }
}

impl<Num: Float + Scalar> NewCartesianPoint3d<Num> for Point3<Num> {
    fn new(x: Num, y: Num, z: Num) -> Self {
        Point3::new(x, y, z)
    }
}
