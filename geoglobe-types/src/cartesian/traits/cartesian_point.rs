use nalgebra::{Scalar, Vector3};
use num_traits::Float;

/// Point in 3-dimensional cartesian space.
pub trait CartesianPoint3d {
    /// Numeric type used to represent coordinates.
    type Num: Float + Scalar;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;
    /// Z coordinate.
    fn z(&self) -> Self::Num;

    /// Vector from the `other` point to this one.
    fn sub(&self, other: &impl CartesianPoint3d<Num = Self::Num>) -> Vector3<Self::Num> {
        Vector3::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }

    /// Distance from the origin of the coordinate space.
    fn magnitude(&self) -> Self::Num {
        (self.x() * self.x() + self.y() * self.y() + self.z() * self.z()).sqrt()
    }

    /// Squared distance between two points.
    fn distance_sq(&self, other: &impl CartesianPoint3d<Num = Self::Num>) -> Self::Num {
        let v = self.sub(other);
        v.x * v.x + v.y * v.y + v.z * v.z
    }

    /// Distance between two points.
    fn distance(&self, other: &impl CartesianPoint3d<Num = Self::Num>) -> Self::Num {
        self.distance_sq(other).sqrt()
    }
}

/// Cartesian point that can be constructed from its coordinates.
pub trait NewCartesianPoint3d<Num = f64>: CartesianPoint3d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num, z: Num) -> Self;
}
