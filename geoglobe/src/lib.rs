//! Geoglobe is a geometry engine for an interactive 3d globe. It turns geographic data (routes, flight paths,
//! extruded polygons and placemarks) into 3d points and render-ready descriptors, without depending on any
//! rendering backend.
//!
//! # Quick start
//!
//! ```no_run
//! use geoglobe::{GlobeConfig, GlobeState, RenderItem};
//! use geoglobe::geoglobe_types::geo::DistanceUnit;
//! use geoglobe::geoglobe_types::latlon;
//!
//! let mut globe = GlobeState::new(GlobeConfig::default())?;
//! globe.add_flight_path(&latlon!(40.7128, -74.0060), &latlon!(51.5074, -0.1278))?;
//!
//! let measurement = globe.measure(&latlon!(48.8566, 2.3522), &latlon!(41.9028, 12.4964), DistanceUnit::Kilometers)?;
//! println!("{:.1} {}", measurement.distance, measurement.unit);
//!
//! for item in globe.render_items()? {
//!     if let RenderItem::Line { points, style } = item {
//!         println!("line of {} points, color {}", points.len(), style.color.to_hex());
//!     }
//! }
//! # Ok::<(), geoglobe::error::GlobeError>(())
//! ```
//!
//! # Main components
//!
//! * [`GlobeState`] holds everything attached to the globe. It is composed of a [`RouteModule`], a
//!   [`PolygonModule`] and a [`PlacemarkModule`], all of them using the same [`GeoCapabilities`].
//! * [`RouteBuilder`] and [`PolygonExtruder`] produce the geometry of routes and extruded polygons.
//! * [`PlacemarkRegistry`] stores named, grouped and colored points, and tracks which groups are hidden.
//! * [`GlobeConfig`], [`FriendsFile`] and [`TravelsFile`] load settings and user data from JSON.
//!
//! The renderer is expected to take [`RenderItem`]s from the state and to keep the [`GeometryHandle`]s it gets when
//! attaching geometry, so that it can [`detach`](GlobeState::detach) them later.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod capabilities;
mod color;
pub mod config;
pub mod error;
pub mod placemark;
pub mod polygon;
pub mod route;
pub mod state;
pub mod style;

pub use capabilities::{GeoCapabilities, SphereCapabilities};
pub use color::{Color, DEFAULT_COLOR, GROUP_COLORS, NAMED_COLORS};
pub use config::{FriendRecord, FriendsFile, GlobeConfig, TravelRecord, TravelsFile};
pub use placemark::{NewPlacemark, Placemark, PlacemarkId, PlacemarkRegistry, SharedRegistry};
pub use polygon::{ExtrudedPolygon, PolygonExtruder};
pub use route::{Route, RouteBuilder};
pub use state::{
    GeometryHandle, GlobeState, Measurement, PlacemarkModule, PolygonModule, RenderItem, RouteModule,
};
pub use style::{LineStyle, MarkerStyle, MarkerSymbol, PolygonStyle};

// Reexport geoglobe_types
pub use geoglobe_types;
