//! Polyline geometry of routes across the globe.

use geoglobe_types::cartesian::Point3d;
use geoglobe_types::geo::GeoPoint2d;
use serde::{Deserialize, Serialize};

use crate::capabilities::{GeoCapabilities, SphereCapabilities};
use crate::error::GlobeError;
use crate::style::LineStyle;

/// Minimal number of waypoints of a route, and of sample points of a great-circle route.
pub const MIN_ROUTE_POINTS: usize = 2;

/// Named sequence of waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Name of the route.
    pub name: String,
    /// Waypoints in travel order.
    pub waypoints: Vec<GeoPoint2d>,
    /// Style of the route line. Routes without a style are drawn with the default route style of the globe.
    #[serde(default)]
    pub style: Option<LineStyle>,
}

impl Route {
    /// Creates a route without its own style.
    pub fn new(name: impl Into<String>, waypoints: Vec<GeoPoint2d>) -> Self {
        Self {
            name: name.into(),
            waypoints,
            style: None,
        }
    }

    /// Sets the style of the route.
    pub fn with_style(self, style: LineStyle) -> Self {
        Self {
            style: Some(style),
            ..self
        }
    }
}

/// Converts waypoints into polylines floating above the globe surface.
#[derive(Debug, Clone)]
pub struct RouteBuilder<C = SphereCapabilities> {
    sphere_radius: f64,
    capabilities: C,
}

impl RouteBuilder {
    /// Creates a builder for a globe of the given radius.
    pub fn new(sphere_radius: f64) -> Result<Self, GlobeError> {
        Self::with_capabilities(sphere_radius, SphereCapabilities)
    }
}

impl<C: GeoCapabilities> RouteBuilder<C> {
    /// Creates a builder that uses the given geo functions.
    pub fn with_capabilities(sphere_radius: f64, capabilities: C) -> Result<Self, GlobeError> {
        if !(sphere_radius.is_finite() && sphere_radius > 0.0) {
            return Err(GlobeError::InvalidRadius(sphere_radius));
        }

        Ok(Self {
            sphere_radius,
            capabilities,
        })
    }

    /// Radius of the globe.
    pub fn sphere_radius(&self) -> f64 {
        self.sphere_radius
    }

    /// Geo functions used by the builder.
    pub fn capabilities(&self) -> &C {
        &self.capabilities
    }

    /// Projects every waypoint to `sphere_radius + radius_offset`, keeping their order.
    ///
    /// The points are not interpolated, so consecutive points are connected by straight chords.
    pub fn build_polyline(
        &self,
        waypoints: &[GeoPoint2d],
        radius_offset: f64,
    ) -> Result<Vec<Point3d>, GlobeError> {
        if waypoints.len() < MIN_ROUTE_POINTS {
            return Err(GlobeError::InvalidRoute(format!(
                "route needs at least {MIN_ROUTE_POINTS} waypoints, got {}",
                waypoints.len()
            )));
        }

        let radius = self.sphere_radius + radius_offset;
        Ok(waypoints
            .iter()
            .map(|point| self.capabilities.forward(point, radius))
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Samples `num_points` points of the great-circle arc from `start` to `end` and projects them to
    /// `sphere_radius + radius_offset`.
    ///
    /// The first point is the projection of `start` and the last one is the projection of `end`.
    pub fn build_great_circle_route(
        &self,
        start: &GeoPoint2d,
        end: &GeoPoint2d,
        radius_offset: f64,
        num_points: usize,
    ) -> Result<Vec<Point3d>, GlobeError> {
        if num_points < MIN_ROUTE_POINTS {
            return Err(GlobeError::InvalidRoute(format!(
                "great-circle route needs at least {MIN_ROUTE_POINTS} points, got {num_points}"
            )));
        }

        let samples = self.capabilities.sample_arc(start, end, num_points)?;
        self.build_polyline(&samples, radius_offset)
    }

    /// Builds the polyline of a named route.
    pub fn build_route(&self, route: &Route, radius_offset: f64) -> Result<Vec<Point3d>, GlobeError> {
        self.build_polyline(&route.waypoints, radius_offset)
    }
}
