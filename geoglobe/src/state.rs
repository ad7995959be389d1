//! Composed state of a globe: attached routes, polygons and placemarks.
//!
//! Every piece of geometry attached to the [`GlobeState`] is identified by a [`GeometryHandle`]. The renderer keeps
//! the handle and calls [`GlobeState::detach`] to remove the geometry; the state never references renderer objects.

use std::collections::BTreeMap;

use geoglobe_types::cartesian::Point3d;
use geoglobe_types::geo::{DistanceUnit, GeoPoint2d};
use log::{debug, warn};
use serde::Serialize;

use crate::capabilities::{GeoCapabilities, SphereCapabilities};
use crate::config::{FriendRecord, FriendsFile, GlobeConfig, TravelRecord, TravelsFile};
use crate::error::GlobeError;
use crate::placemark::{
    NewPlacemark, Placemark, PlacemarkId, PlacemarkRegistry, CATEGORY_FRIEND, CATEGORY_PHOTO,
    GROUP_TRAVELS,
};
use crate::polygon::{ExtrudedPolygon, PolygonExtruder};
use crate::route::{Route, RouteBuilder};
use crate::style::{LineStyle, MarkerStyle, PolygonStyle};
use crate::Color;

/// Identifier of geometry attached to a [`GlobeState`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GeometryHandle(u64);

/// Geometry snapshot with its style, ready to be turned into render primitives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderItem {
    /// Polyline.
    Line {
        /// Points of the line in order.
        points: Vec<Point3d>,
        /// Line style.
        style: LineStyle,
    },
    /// Set of point markers.
    Markers {
        /// Marker positions.
        points: Vec<Point3d>,
        /// Marker style.
        style: MarkerStyle,
    },
    /// Wireframe of an extruded polygon.
    Extruded {
        /// Polygon geometry.
        polygon: ExtrudedPolygon,
        /// Polygon style.
        style: PolygonStyle,
    },
}

/// Route attached to the globe.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedRoute {
    /// Name of the route.
    pub name: String,
    /// Geographic points the geometry was built from.
    pub waypoints: Vec<GeoPoint2d>,
    /// Rendered geometry.
    pub item: RenderItem,
}

/// Result of a distance measurement between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// First point.
    pub from: GeoPoint2d,
    /// Second point.
    pub to: GeoPoint2d,
    /// Great-circle distance between the points.
    pub distance: f64,
    /// Unit of the distance.
    pub unit: DistanceUnit,
    /// Handle of the measurement line.
    pub handle: GeometryHandle,
}

/// Routes, flight paths and measurement lines.
#[derive(Debug, Clone)]
pub struct RouteModule<C = SphereCapabilities> {
    builder: RouteBuilder<C>,
    offset: f64,
    default_style: LineStyle,
    routes: BTreeMap<GeometryHandle, AttachedRoute>,
}

impl<C: GeoCapabilities> RouteModule<C> {
    fn new(config: &GlobeConfig, capabilities: C) -> Result<Self, GlobeError> {
        Ok(Self {
            builder: RouteBuilder::with_capabilities(config.sphere_radius, capabilities)?,
            offset: config.route_offset,
            default_style: LineStyle {
                width: config.route_width,
                ..LineStyle::default()
            },
            routes: BTreeMap::new(),
        })
    }

    fn build(&self, route: &Route) -> Result<AttachedRoute, GlobeError> {
        let points = self.builder.build_route(route, self.offset)?;
        Ok(AttachedRoute {
            name: route.name.clone(),
            waypoints: route.waypoints.clone(),
            item: RenderItem::Line {
                points,
                style: route.style.unwrap_or(self.default_style),
            },
        })
    }

    fn build_great_circle(
        &self,
        name: &str,
        start: &GeoPoint2d,
        end: &GeoPoint2d,
        num_points: usize,
        style: LineStyle,
    ) -> Result<AttachedRoute, GlobeError> {
        let points = self
            .builder
            .build_great_circle_route(start, end, self.offset, num_points)?;
        Ok(AttachedRoute {
            name: name.to_string(),
            waypoints: vec![*start, *end],
            item: RenderItem::Line { points, style },
        })
    }

    /// Style of routes that do not set their own: cyan line of the configured route width.
    pub fn default_style(&self) -> LineStyle {
        self.default_style
    }

    /// Returns the route attached with the handle.
    pub fn get(&self, handle: GeometryHandle) -> Option<&AttachedRoute> {
        self.routes.get(&handle)
    }

    /// Iterates over attached routes in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = (GeometryHandle, &AttachedRoute)> {
        self.routes.iter().map(|(handle, route)| (*handle, route))
    }

    /// Number of attached routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are attached.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Extruded polygons.
#[derive(Debug, Clone)]
pub struct PolygonModule<C = SphereCapabilities> {
    extruder: PolygonExtruder<C>,
    base_radius: f64,
    polygons: BTreeMap<GeometryHandle, RenderItem>,
}

impl<C: GeoCapabilities> PolygonModule<C> {
    fn new(config: &GlobeConfig, capabilities: C) -> Self {
        Self {
            extruder: PolygonExtruder::with_capabilities(capabilities),
            base_radius: config.sphere_radius,
            polygons: BTreeMap::new(),
        }
    }

    fn build(
        &self,
        footprint: &[GeoPoint2d],
        extrusion_height: f64,
        style: PolygonStyle,
    ) -> Result<RenderItem, GlobeError> {
        let polygon = self
            .extruder
            .extrude(footprint, self.base_radius, extrusion_height)?;
        Ok(RenderItem::Extruded { polygon, style })
    }

    /// Returns the polygon attached with the handle.
    pub fn get(&self, handle: GeometryHandle) -> Option<&RenderItem> {
        self.polygons.get(&handle)
    }

    /// Iterates over attached polygons in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = (GeometryHandle, &RenderItem)> {
        self.polygons.iter().map(|(handle, item)| (*handle, item))
    }

    /// Number of attached polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns true if no polygons are attached.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

/// Placemarks and their marker geometry.
#[derive(Debug, Clone)]
pub struct PlacemarkModule<C = SphereCapabilities> {
    registry: PlacemarkRegistry,
    capabilities: C,
    config: GlobeConfig,
}

impl<C: GeoCapabilities> PlacemarkModule<C> {
    fn new(config: &GlobeConfig, capabilities: C) -> Self {
        Self {
            registry: PlacemarkRegistry::new(),
            capabilities,
            config: config.clone(),
        }
    }

    /// Registry holding the placemarks.
    pub fn registry(&self) -> &PlacemarkRegistry {
        &self.registry
    }

    /// Mutable access to the registry.
    pub fn registry_mut(&mut self) -> &mut PlacemarkRegistry {
        &mut self.registry
    }

    /// Adds a friend placemark, raised above the surface by the friend offset.
    pub fn add_friend(&mut self, record: &FriendRecord) -> Result<Placemark, GlobeError> {
        self.registry.insert(
            NewPlacemark::new(&record.name, record.position())
                .with_category(CATEGORY_FRIEND)
                .with_group(&record.group)
                .with_color(&record.color)
                .with_metadata("city", &record.city)
                .with_metadata("photo", &record.photo),
        )
    }

    /// Adds a travel photo placemark, raised above the surface by the photo offset.
    pub fn add_travel(&mut self, record: &TravelRecord) -> Result<Placemark, GlobeError> {
        let name = if record.title.is_empty() {
            &record.photo
        } else {
            &record.title
        };

        self.registry.insert(
            NewPlacemark::new(name, record.position())
                .with_category(CATEGORY_PHOTO)
                .with_group(GROUP_TRAVELS)
                .with_color("cyan")
                .with_metadata("photo", &record.photo)
                .with_metadata("title", &record.title)
                .with_metadata("description", &record.description)
                .with_metadata("date", &record.date),
        )
    }

    fn offset(&self, placemark: &Placemark) -> f64 {
        match placemark.category() {
            CATEGORY_FRIEND => self.config.friend_offset,
            CATEGORY_PHOTO => self.config.photo_offset,
            _ => 0.0,
        }
    }

    fn marker_style(&self, placemark: &Placemark) -> MarkerStyle {
        match placemark.category() {
            CATEGORY_FRIEND => MarkerStyle::disc(placemark.color(), self.config.friend_marker_size),
            CATEGORY_PHOTO => {
                MarkerStyle::billboard(placemark.color(), self.config.photo_marker_size)
            }
            _ => MarkerStyle::disc(placemark.color(), self.config.placemark_size),
        }
    }

    /// Scene position of the placemark marker.
    pub fn position_of(&self, id: PlacemarkId) -> Result<Point3d, GlobeError> {
        let placemark = self.registry.get(id).ok_or(GlobeError::NotFound)?;
        let radius = self.config.sphere_radius + self.offset(placemark);

        Ok(self.capabilities.forward(&placemark.position(), radius)?)
    }

    /// Marker of every placemark of a visible group, in insertion order.
    pub fn render_items(&self) -> Result<Vec<(PlacemarkId, RenderItem)>, GlobeError> {
        self.registry
            .iter_visible()
            .map(|placemark| -> Result<_, GlobeError> {
                let radius = self.config.sphere_radius + self.offset(placemark);
                let point = self.capabilities.forward(&placemark.position(), radius)?;
                Ok((
                    placemark.id(),
                    RenderItem::Markers {
                        points: vec![point],
                        style: self.marker_style(placemark),
                    },
                ))
            })
            .collect()
    }
}

/// Pure data of a globe scene, composed of independent feature modules sharing one set of geo functions.
#[derive(Debug, Clone)]
pub struct GlobeState<C = SphereCapabilities> {
    config: GlobeConfig,
    next_handle: u64,
    routes: RouteModule<C>,
    polygons: PolygonModule<C>,
    placemarks: PlacemarkModule<C>,
}

impl GlobeState {
    /// Creates an empty globe over a perfect sphere.
    pub fn new(config: GlobeConfig) -> Result<Self, GlobeError> {
        Self::with_capabilities(config, SphereCapabilities)
    }
}

impl<C: GeoCapabilities + Clone> GlobeState<C> {
    /// Creates an empty globe whose modules use the given geo functions.
    pub fn with_capabilities(config: GlobeConfig, capabilities: C) -> Result<Self, GlobeError> {
        config.validate()?;

        Ok(Self {
            routes: RouteModule::new(&config, capabilities.clone())?,
            polygons: PolygonModule::new(&config, capabilities.clone()),
            placemarks: PlacemarkModule::new(&config, capabilities),
            next_handle: 0,
            config,
        })
    }
}

impl<C: GeoCapabilities> GlobeState<C> {
    /// Configuration of the globe.
    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    /// Attached routes.
    pub fn routes(&self) -> &RouteModule<C> {
        &self.routes
    }

    /// Attached polygons.
    pub fn polygons(&self) -> &PolygonModule<C> {
        &self.polygons
    }

    /// Placemarks.
    pub fn placemarks(&self) -> &PlacemarkModule<C> {
        &self.placemarks
    }

    /// Mutable access to placemarks.
    pub fn placemarks_mut(&mut self) -> &mut PlacemarkModule<C> {
        &mut self.placemarks
    }

    /// Geographic coordinates of a scene point, such as the point under the cursor. The point does not need to lie
    /// on the globe surface.
    pub fn geo_position(&self, point: &Point3d) -> GeoPoint2d {
        self.routes.builder.capabilities().inverse(point)
    }

    fn allocate_handle(&mut self) -> GeometryHandle {
        let handle = GeometryHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn attach_route(&mut self, route: AttachedRoute) -> GeometryHandle {
        let handle = self.allocate_handle();
        debug!("Attached route '{}' as {handle:?}", route.name);
        self.routes.routes.insert(handle, route);
        handle
    }

    /// Attaches a route through the waypoints, connected by straight chords.
    pub fn add_route(&mut self, route: &Route) -> Result<GeometryHandle, GlobeError> {
        let attached = self.routes.build(route)?;
        Ok(self.attach_route(attached))
    }

    /// Attaches a route following the great circle from `start` to `end`.
    pub fn add_great_circle_route(
        &mut self,
        start: &GeoPoint2d,
        end: &GeoPoint2d,
        style: LineStyle,
    ) -> Result<GeometryHandle, GlobeError> {
        let attached = self.routes.build_great_circle(
            "Great circle",
            start,
            end,
            self.config.great_circle_points,
            style,
        )?;
        Ok(self.attach_route(attached))
    }

    /// Attaches a flight path: a red great-circle route drawn with the flight line width.
    pub fn add_flight_path(
        &mut self,
        start: &GeoPoint2d,
        end: &GeoPoint2d,
    ) -> Result<GeometryHandle, GlobeError> {
        let style = LineStyle::new(Color::RED, self.config.flight_width);
        let attached = self.routes.build_great_circle(
            "Flight",
            start,
            end,
            self.config.great_circle_points,
            style,
        )?;
        Ok(self.attach_route(attached))
    }

    /// Measures the distance between two points and attaches a yellow line between them.
    pub fn measure(
        &mut self,
        from: &GeoPoint2d,
        to: &GeoPoint2d,
        unit: DistanceUnit,
    ) -> Result<Measurement, GlobeError> {
        let distance = self.routes.builder.capabilities().distance(from, to, unit)?;
        let route = Route::new("Measurement", vec![*from, *to])
            .with_style(LineStyle::new(Color::YELLOW, self.config.measurement_width));
        let attached = self.routes.build(&route)?;
        let handle = self.attach_route(attached);

        Ok(Measurement {
            from: *from,
            to: *to,
            distance,
            unit,
            handle,
        })
    }

    /// Attaches a polygon extruded by the configured height with the default style.
    pub fn add_polygon(&mut self, footprint: &[GeoPoint2d]) -> Result<GeometryHandle, GlobeError> {
        self.add_polygon_with(footprint, self.config.extrusion_height, PolygonStyle::default())
    }

    /// Attaches a polygon with custom extrusion height and style.
    pub fn add_polygon_with(
        &mut self,
        footprint: &[GeoPoint2d],
        extrusion_height: f64,
        style: PolygonStyle,
    ) -> Result<GeometryHandle, GlobeError> {
        let item = self.polygons.build(footprint, extrusion_height, style)?;
        let handle = self.allocate_handle();
        debug!("Attached polygon of {} vertices as {handle:?}", footprint.len());
        self.polygons.polygons.insert(handle, item);

        Ok(handle)
    }

    /// Adds friend placemarks from the records. Records with invalid coordinates are skipped.
    ///
    /// Returns the number of added placemarks.
    pub fn load_friends(&mut self, file: &FriendsFile) -> usize {
        let mut added = 0;
        for record in &file.friends {
            match self.placemarks.add_friend(record) {
                Ok(_) => added += 1,
                Err(err) => warn!("Skipping friend '{}': {err}", record.name),
            }
        }

        debug!("Added {added} of {} friends", file.friends.len());
        added
    }

    /// Adds travel photo placemarks from the records. Records with invalid coordinates are skipped.
    ///
    /// Returns the number of added placemarks.
    pub fn load_travels(&mut self, file: &TravelsFile) -> usize {
        let mut added = 0;
        for record in &file.travels {
            match self.placemarks.add_travel(record) {
                Ok(_) => added += 1,
                Err(err) => warn!("Skipping travel photo '{}': {err}", record.photo),
            }
        }

        debug!("Added {added} of {} travel photos", file.travels.len());
        added
    }

    /// Removes the geometry attached with the handle and returns it.
    pub fn detach(&mut self, handle: GeometryHandle) -> Result<RenderItem, GlobeError> {
        let item = if let Some(route) = self.routes.routes.remove(&handle) {
            route.item
        } else {
            self.polygons
                .polygons
                .remove(&handle)
                .ok_or(GlobeError::NotFound)?
        };

        debug!("Detached {handle:?}");
        Ok(item)
    }

    /// Detaches all routes, flight paths and measurements. Returns their handles.
    pub fn clear_routes(&mut self) -> Vec<GeometryHandle> {
        let handles: Vec<_> = self.routes.routes.keys().copied().collect();
        self.routes.routes.clear();
        debug!("Detached {} routes", handles.len());

        handles
    }

    /// Snapshot of all attached geometry and visible placemark markers.
    pub fn render_items(&self) -> Result<Vec<RenderItem>, GlobeError> {
        let mut items: Vec<RenderItem> = self
            .polygons
            .iter()
            .map(|(_, item)| item.clone())
            .chain(self.routes.iter().map(|(_, route)| route.item.clone()))
            .collect();
        items.extend(
            self.placemarks
                .render_items()?
                .into_iter()
                .map(|(_, item)| item),
        );

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geoglobe_types::cartesian::CartesianPoint3d;
    use geoglobe_types::latlon;

    fn new_york() -> GeoPoint2d {
        latlon!(40.7128, -74.0060)
    }

    fn london() -> GeoPoint2d {
        latlon!(51.5074, -0.1278)
    }

    fn state() -> GlobeState {
        GlobeState::new(GlobeConfig::default()).unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GlobeConfig {
            sphere_radius: 0.0,
            ..Default::default()
        };
        assert_matches!(GlobeState::new(config), Err(GlobeError::InvalidRadius(_)));

        let config = GlobeConfig {
            great_circle_points: 1,
            ..Default::default()
        };
        assert_matches!(GlobeState::new(config), Err(GlobeError::Config(_)));
    }

    #[test]
    fn route_is_attached_and_detached() {
        let mut state = state();
        let route = Route::new("Trip", vec![new_york(), london(), latlon!(48.8566, 2.3522)]);
        let handle = state.add_route(&route).unwrap();

        assert_eq!(state.routes().len(), 1);
        assert_eq!(state.routes().get(handle).unwrap().name, "Trip");

        let item = state.detach(handle).unwrap();
        assert_matches!(item, RenderItem::Line { points, style } => {
            assert_eq!(points.len(), 3);
            assert_eq!(style, LineStyle::default());
            for point in points {
                assert_abs_diff_eq!(point.magnitude(), 1.02, epsilon = 1e-9);
            }
        });

        assert!(state.routes().is_empty());
        assert_matches!(state.detach(handle), Err(GlobeError::NotFound));
    }

    #[test]
    fn route_width_applies_to_routes_without_style() {
        let config = GlobeConfig {
            route_width: 7.0,
            ..Default::default()
        };
        let mut state = GlobeState::new(config).unwrap();
        assert_eq!(state.routes().default_style(), LineStyle::new(Color::CYAN, 7.0));

        let plain = state
            .add_route(&Route::new("Plain", vec![new_york(), london()]))
            .unwrap();
        assert_matches!(state.detach(plain), Ok(RenderItem::Line { style, .. }) => {
            assert_eq!(style.color, Color::CYAN);
            assert_abs_diff_eq!(style.width, 7.0);
        });

        let styled = state
            .add_route(
                &Route::new("Styled", vec![new_york(), london()])
                    .with_style(LineStyle::new(Color::PINK, 2.0)),
            )
            .unwrap();
        assert_matches!(state.detach(styled), Ok(RenderItem::Line { style, .. }) => {
            assert_eq!(style, LineStyle::new(Color::PINK, 2.0));
        });
    }

    #[test]
    fn geo_position_of_scene_points() {
        let state = state();
        assert_abs_diff_eq!(
            state.geo_position(&Point3d::new(0.0, 2.0, 0.0)),
            latlon!(0.0, 90.0),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            state.geo_position(&Point3d::new(0.0, 0.0, 0.0)),
            latlon!(0.0, 0.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn invalid_route_does_not_consume_handle() {
        let mut state = state();
        assert_matches!(
            state.add_route(&Route::new("Short", vec![new_york()])),
            Err(GlobeError::InvalidRoute(_))
        );
        assert!(state.routes().is_empty());

        let handle = state.add_route(&Route::new("Ok", vec![new_york(), london()])).unwrap();
        assert_eq!(handle, GeometryHandle(0));
    }

    #[test]
    fn flight_path_is_red_great_circle() {
        let mut state = state();
        let handle = state.add_flight_path(&new_york(), &london()).unwrap();

        let route = state.routes().get(handle).unwrap();
        assert_eq!(route.waypoints, vec![new_york(), london()]);
        assert_matches!(&route.item, RenderItem::Line { points, style } => {
            assert_eq!(points.len(), 50);
            assert_eq!(style.color, Color::RED);
            assert_abs_diff_eq!(style.width, 5.0);
        });
    }

    #[test]
    fn great_circle_route_uses_configured_point_count() {
        let config = GlobeConfig {
            great_circle_points: 10,
            ..Default::default()
        };
        let mut state = GlobeState::new(config).unwrap();
        let handle = state
            .add_great_circle_route(&new_york(), &london(), LineStyle::default())
            .unwrap();

        assert_matches!(state.detach(handle), Ok(RenderItem::Line { points, .. }) => {
            assert_eq!(points.len(), 10);
        });
    }

    #[test]
    fn measure_returns_distance_and_line() {
        let mut state = state();
        let measurement = state
            .measure(&new_york(), &london(), DistanceUnit::Kilometers)
            .unwrap();

        assert_abs_diff_eq!(measurement.distance, 5570.0, epsilon = 55.7);
        assert_eq!(measurement.unit, DistanceUnit::Kilometers);

        let route = state.routes().get(measurement.handle).unwrap();
        assert_matches!(&route.item, RenderItem::Line { points, style } => {
            assert_eq!(points.len(), 2);
            assert_eq!(style.color, Color::YELLOW);
            assert_abs_diff_eq!(style.width, 4.0);
        });
    }

    #[test]
    fn measure_rejects_invalid_points() {
        let mut state = state();
        assert_matches!(
            state.measure(&latlon!(91.0, 0.0), &london(), DistanceUnit::Miles),
            Err(GlobeError::InvalidCoordinate { .. })
        );
        assert!(state.routes().is_empty());
    }

    #[test]
    fn clear_routes_detaches_all_routes() {
        let mut state = state();
        let first = state.add_flight_path(&new_york(), &london()).unwrap();
        let second = state
            .measure(&new_york(), &london(), DistanceUnit::NauticalMiles)
            .unwrap()
            .handle;
        let polygon = state
            .add_polygon(&[latlon!(0.0, 0.0), latlon!(0.0, 10.0), latlon!(10.0, 0.0)])
            .unwrap();

        assert_eq!(state.clear_routes(), vec![first, second]);
        assert!(state.routes().is_empty());
        assert_eq!(state.polygons().len(), 1);
        assert!(state.polygons().get(polygon).is_some());
    }

    #[test]
    fn polygon_is_attached_with_default_style() {
        let mut state = state();
        let footprint = [
            latlon!(0.0, 0.0),
            latlon!(0.0, 10.0),
            latlon!(10.0, 10.0),
            latlon!(10.0, 0.0),
        ];
        let handle = state.add_polygon(&footprint).unwrap();

        assert_matches!(state.detach(handle), Ok(RenderItem::Extruded { polygon, style }) => {
            assert_eq!(polygon.vertex_count(), 4);
            assert_eq!(polygon.base_ring().len(), 5);
            assert_abs_diff_eq!(polygon.top_ring()[0].magnitude(), 1.2, epsilon = 1e-9);
            assert_eq!(style, PolygonStyle::default());
        });
        assert!(state.polygons().is_empty());
    }

    #[test]
    fn polygon_with_custom_height() {
        let mut state = state();
        let footprint = [latlon!(0.0, 0.0), latlon!(0.0, 10.0), latlon!(10.0, 0.0)];
        let handle = state
            .add_polygon_with(&footprint, 0.5, PolygonStyle::default())
            .unwrap();

        assert_matches!(state.polygons().get(handle), Some(RenderItem::Extruded { polygon, .. }) => {
            assert_abs_diff_eq!(polygon.top_ring()[1].magnitude(), 1.5, epsilon = 1e-9);
        });

        assert_matches!(
            state.add_polygon_with(&footprint, 0.0, PolygonStyle::default()),
            Err(GlobeError::InvalidPolygon(_))
        );
        assert_matches!(
            state.add_polygon(&footprint[..2]),
            Err(GlobeError::InvalidPolygon(_))
        );
    }

    #[test]
    fn load_friends_skips_invalid_records() {
        let friends = FriendsFile::from_json(
            r#"{"friends": [
                {"name": "Alice", "city": "Paris", "latitude": 48.8566, "longitude": 2.3522, "color": "red"},
                {"name": "Broken", "latitude": 120.0, "longitude": 0.0},
                {"name": "Bob", "latitude": 35.6762, "longitude": 139.6503, "group": "Work"}
            ]}"#,
        )
        .unwrap();

        let mut state = state();
        assert_eq!(state.load_friends(&friends), 2);

        let registry = state.placemarks().registry();
        assert_eq!(registry.len(), 2);

        let alice = registry.list_by_group("friends")[0];
        assert_eq!(alice.category(), CATEGORY_FRIEND);
        assert_eq!(alice.color(), Color::RED);
        assert_eq!(alice.metadata().get("city").map(String::as_str), Some("Paris"));
        assert!(!alice.metadata().contains_key("photo"));

        let bob = registry.list_by_group("work")[0];
        assert_eq!(bob.color(), Color::YELLOW);
    }

    #[test]
    fn travel_photos_are_cyan_billboards() {
        let travels = TravelsFile::from_json(
            r#"{"travels": [
                {"photo": "/photos/rome.jpg", "latitude": 41.9028, "longitude": 12.4964, "title": "Rome"},
                {"photo": "/photos/nowhere.jpg", "latitude": 0.0, "longitude": 200.0}
            ]}"#,
        )
        .unwrap();

        let mut state = state();
        assert_eq!(state.load_travels(&travels), 1);

        let placemarks = state.placemarks();
        let rome = placemarks.registry().list_by_group(GROUP_TRAVELS)[0];
        assert_eq!(rome.name(), "Rome");
        assert_eq!(rome.category(), CATEGORY_PHOTO);
        assert_eq!(rome.color(), Color::CYAN);

        let position = placemarks.position_of(rome.id()).unwrap();
        assert_abs_diff_eq!(position.magnitude(), 1.1, epsilon = 1e-9);

        let items = placemarks.render_items().unwrap();
        assert_matches!(&items[..], [(id, RenderItem::Markers { points, style })] => {
            assert_eq!(*id, rome.id());
            assert_eq!(points, &vec![position]);
            assert_eq!(*style, MarkerStyle::billboard(Color::CYAN, 20.0));
        });
    }

    #[test]
    fn friend_markers_float_above_surface() {
        let mut state = state();
        let friend = state
            .placemarks_mut()
            .add_friend(&FriendRecord {
                name: "Alice".into(),
                city: String::new(),
                latitude: 0.0,
                longitude: 90.0,
                photo: String::new(),
                color: "green".into(),
                group: "friends".into(),
            })
            .unwrap();

        let position = state.placemarks().position_of(friend.id()).unwrap();
        assert_abs_diff_eq!(position.x(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(position.y(), 1.05, epsilon = 1e-9);
        assert_abs_diff_eq!(position.z(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn plain_placemarks_sit_on_surface() {
        let mut state = state();
        let placemark = state
            .placemarks_mut()
            .registry_mut()
            .add("Home", "family", latlon!(0.0, 0.0), None, Default::default())
            .unwrap();

        let position = state.placemarks().position_of(placemark.id()).unwrap();
        assert_abs_diff_eq!(position.magnitude(), 1.0, epsilon = 1e-9);

        let items = state.placemarks().render_items().unwrap();
        assert_matches!(&items[0].1, RenderItem::Markers { style, .. } => {
            assert_eq!(*style, MarkerStyle::disc(Color::RED, 15.0));
        });
    }

    #[test]
    fn hidden_groups_are_not_rendered() {
        let mut state = state();
        let registry = state.placemarks_mut().registry_mut();
        registry
            .add("A", "friends", latlon!(10.0, 10.0), None, Default::default())
            .unwrap();
        registry
            .add("B", "work", latlon!(20.0, 20.0), None, Default::default())
            .unwrap();
        registry.set_group_visible("Work", false);

        let items = state.render_items().unwrap();
        assert_eq!(items.len(), 1);

        state
            .placemarks_mut()
            .registry_mut()
            .set_group_visible("work", true);
        assert_eq!(state.render_items().unwrap().len(), 2);
    }

    #[test]
    fn position_of_unknown_placemark() {
        let mut state = state();
        let placemark = state
            .placemarks_mut()
            .registry_mut()
            .add("A", "friends", latlon!(10.0, 10.0), None, Default::default())
            .unwrap();
        state
            .placemarks_mut()
            .registry_mut()
            .remove(placemark.id())
            .unwrap();

        assert_matches!(
            state.placemarks().position_of(placemark.id()),
            Err(GlobeError::NotFound)
        );
    }

    #[test]
    fn render_items_contain_all_geometry() {
        let mut state = state();
        state.add_flight_path(&new_york(), &london()).unwrap();
        state
            .add_polygon(&[latlon!(0.0, 0.0), latlon!(0.0, 10.0), latlon!(10.0, 0.0)])
            .unwrap();
        state
            .placemarks_mut()
            .registry_mut()
            .add("A", "friends", london(), Some("magenta"), Default::default())
            .unwrap();

        let items = state.render_items().unwrap();
        assert_eq!(items.len(), 3);
        assert_matches!(items[0], RenderItem::Extruded { .. });
        assert_matches!(items[1], RenderItem::Line { .. });
        assert_matches!(items[2], RenderItem::Markers { .. });
    }
}
