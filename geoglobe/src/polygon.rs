//! Wireframe geometry of polygons extruded radially from the globe surface.

use geoglobe_types::cartesian::Point3d;
use geoglobe_types::geo::GeoPoint2d;
use geoglobe_types::impls::ClosedContour;
use geoglobe_types::Contour;
use serde::Serialize;

use crate::capabilities::{GeoCapabilities, SphereCapabilities};
use crate::error::GlobeError;

/// Minimal number of vertices of a polygon footprint.
pub const MIN_FOOTPRINT_VERTICES: usize = 3;

/// Wireframe of a prism standing on the globe surface.
///
/// Both rings are materialized as closed loops: they contain every footprint vertex in input order followed by a
/// copy of the first one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtrudedPolygon {
    base_ring: Vec<Point3d>,
    top_ring: Vec<Point3d>,
    vertical_edges: Vec<(Point3d, Point3d)>,
}

impl ExtrudedPolygon {
    /// Ring on the base sphere, `vertex_count + 1` points long.
    pub fn base_ring(&self) -> &[Point3d] {
        &self.base_ring
    }

    /// Ring on the raised sphere, `vertex_count + 1` points long.
    pub fn top_ring(&self) -> &[Point3d] {
        &self.top_ring
    }

    /// `(base[i], top[i])` pair for every footprint vertex.
    pub fn vertical_edges(&self) -> &[(Point3d, Point3d)] {
        &self.vertical_edges
    }

    /// Number of vertices of the footprint.
    pub fn vertex_count(&self) -> usize {
        self.vertical_edges.len()
    }
}

/// Builds [`ExtrudedPolygon`]s from geographic footprints.
#[derive(Debug, Default, Clone)]
pub struct PolygonExtruder<C = SphereCapabilities> {
    capabilities: C,
}

impl PolygonExtruder {
    /// Creates an extruder over a perfect sphere.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: GeoCapabilities> PolygonExtruder<C> {
    /// Creates an extruder that uses the given geo functions.
    pub fn with_capabilities(capabilities: C) -> Self {
        Self { capabilities }
    }

    /// Extrudes the implicitly closed `footprint` from `base_radius` up by `extrusion_height`.
    pub fn extrude(
        &self,
        footprint: &[GeoPoint2d],
        base_radius: f64,
        extrusion_height: f64,
    ) -> Result<ExtrudedPolygon, GlobeError> {
        if footprint.len() < MIN_FOOTPRINT_VERTICES {
            return Err(GlobeError::InvalidPolygon(format!(
                "footprint needs at least {MIN_FOOTPRINT_VERTICES} vertices, got {}",
                footprint.len()
            )));
        }

        if extrusion_height.is_nan() || extrusion_height <= 0.0 {
            return Err(GlobeError::InvalidPolygon(format!(
                "extrusion height must be positive, got {extrusion_height}"
            )));
        }

        let top_radius = base_radius + extrusion_height;
        let mut base = Vec::with_capacity(footprint.len());
        let mut top = Vec::with_capacity(footprint.len());
        for vertex in footprint {
            base.push(self.capabilities.forward(vertex, base_radius)?);
            top.push(self.capabilities.forward(vertex, top_radius)?);
        }

        let vertical_edges = base.iter().copied().zip(top.iter().copied()).collect();

        Ok(ExtrudedPolygon {
            base_ring: close_ring(base),
            top_ring: close_ring(top),
            vertical_edges,
        })
    }
}

fn close_ring(points: Vec<Point3d>) -> Vec<Point3d> {
    ClosedContour::new(points)
        .iter_points_closing()
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geoglobe_types::cartesian::CartesianPoint3d;
    use geoglobe_types::latlon;

    fn footprint() -> Vec<GeoPoint2d> {
        vec![
            latlon!(45.0, -100.0),
            latlon!(45.0, -95.0),
            latlon!(40.0, -95.0),
            latlon!(40.0, -100.0),
        ]
    }

    #[test]
    fn extrusion_shape() {
        let polygon = PolygonExtruder::new().extrude(&footprint(), 1.0, 0.2).unwrap();

        assert_eq!(polygon.base_ring().len(), 5);
        assert_eq!(polygon.top_ring().len(), 5);
        assert_eq!(polygon.vertical_edges().len(), 4);
        assert_eq!(polygon.vertex_count(), 4);

        assert_eq!(polygon.base_ring()[0], polygon.base_ring()[4]);
        assert_eq!(polygon.top_ring()[0], polygon.top_ring()[4]);
    }

    #[test]
    fn rings_are_on_their_spheres() {
        let polygon = PolygonExtruder::new().extrude(&footprint(), 1.0, 0.2).unwrap();

        for point in polygon.base_ring() {
            assert_abs_diff_eq!(point.magnitude(), 1.0, epsilon = 1e-12);
        }
        for point in polygon.top_ring() {
            assert_abs_diff_eq!(point.magnitude(), 1.2, epsilon = 1e-12);
        }
        for (i, (base, top)) in polygon.vertical_edges().iter().enumerate() {
            assert_eq!(*base, polygon.base_ring()[i]);
            assert_eq!(*top, polygon.top_ring()[i]);
            // Edges are radial: top is the base point scaled.
            assert_abs_diff_eq!(base.coords * 1.2, top.coords, epsilon = 1e-12);
        }
    }

    #[test]
    fn triangle_is_the_smallest_footprint() {
        let footprint = &footprint()[..3];
        let polygon = PolygonExtruder::new().extrude(footprint, 1.0, 0.1).unwrap();
        assert_eq!(polygon.base_ring().len(), 4);

        assert_matches!(
            PolygonExtruder::new().extrude(&footprint[..2], 1.0, 0.1),
            Err(GlobeError::InvalidPolygon(_))
        );
    }

    #[test]
    fn height_must_be_positive() {
        let extruder = PolygonExtruder::new();
        assert_matches!(
            extruder.extrude(&footprint(), 1.0, 0.0),
            Err(GlobeError::InvalidPolygon(_))
        );
        assert_matches!(
            extruder.extrude(&footprint(), 1.0, -0.2),
            Err(GlobeError::InvalidPolygon(_))
        );
        assert_matches!(
            extruder.extrude(&footprint(), 1.0, f64::NAN),
            Err(GlobeError::InvalidPolygon(_))
        );
    }

    #[test]
    fn invalid_vertex_or_radius() {
        let extruder = PolygonExtruder::new();
        let mut vertices = footprint();
        vertices[2] = latlon!(40.0, 195.0);
        assert_matches!(
            extruder.extrude(&vertices, 1.0, 0.2),
            Err(GlobeError::InvalidCoordinate { .. })
        );

        assert_matches!(
            extruder.extrude(&footprint(), -1.0, 0.2),
            Err(GlobeError::InvalidRadius(_))
        );
    }
}
