/// Conversion of points between two coordinate spaces.
pub trait Projection {
    /// Type of the input point.
    type InPoint;
    /// Type of the output point.
    type OutPoint;

    /// Converts the input point into the output space. Returns `None` if the point cannot be projected.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Converts the point back from the output space.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}
