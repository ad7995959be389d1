//! Engine configuration and input records.
//!
//! Input records describe friends and travel photos in the JSON format of the viewer:
//!
//! ```json
//! { "friends": [ { "name": "Sarah", "city": "New York", "latitude": 40.7128, "longitude": -74.006,
//!                  "color": "yellow", "group": "college" } ] }
//! { "travels": [ { "photo": "photos/paris.jpg", "latitude": 48.8566, "longitude": 2.3522,
//!                  "title": "Eiffel Tower" } ] }
//! ```

use std::path::Path;

use geoglobe_types::geo::GeoPoint2d;
use geoglobe_types::latlon;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::GlobeError;
use crate::route::MIN_ROUTE_POINTS;

/// Scene constants used by [`GlobeState`](crate::GlobeState).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    /// Radius of the globe in scene units.
    pub sphere_radius: f64,
    /// Altitude of route and measurement lines above the surface.
    pub route_offset: f64,
    /// Altitude of friend markers above the surface.
    pub friend_offset: f64,
    /// Altitude of travel photo markers above the surface.
    pub photo_offset: f64,
    /// Height of extruded polygons.
    pub extrusion_height: f64,
    /// Number of sample points of great-circle routes.
    pub great_circle_points: usize,
    /// Line width of routes.
    pub route_width: f64,
    /// Line width of flight paths.
    pub flight_width: f64,
    /// Line width of distance measurements.
    pub measurement_width: f64,
    /// Size of friend markers.
    pub friend_marker_size: f64,
    /// Size of photo markers.
    pub photo_marker_size: f64,
    /// Size of other placemark markers.
    pub placemark_size: f64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            sphere_radius: 1.0,
            route_offset: 0.02,
            friend_offset: 0.05,
            photo_offset: 0.1,
            extrusion_height: 0.2,
            great_circle_points: 50,
            route_width: 3.0,
            flight_width: 5.0,
            measurement_width: 4.0,
            friend_marker_size: 18.0,
            photo_marker_size: 20.0,
            placemark_size: 15.0,
        }
    }
}

impl GlobeConfig {
    /// Parses configuration from a JSON string. Missing fields take default values.
    pub fn from_json(json: &str) -> Result<Self, GlobeError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the values can be used to build geometry.
    pub fn validate(&self) -> Result<(), GlobeError> {
        if !(self.sphere_radius.is_finite() && self.sphere_radius > 0.0) {
            return Err(GlobeError::InvalidRadius(self.sphere_radius));
        }

        if self.great_circle_points < MIN_ROUTE_POINTS {
            return Err(GlobeError::Config(format!(
                "great_circle_points must be at least {MIN_ROUTE_POINTS}, got {}",
                self.great_circle_points
            )));
        }

        if self.extrusion_height.is_nan() || self.extrusion_height <= 0.0 {
            return Err(GlobeError::Config(format!(
                "extrusion_height must be positive, got {}",
                self.extrusion_height
            )));
        }

        Ok(())
    }
}

fn default_color() -> String {
    "yellow".to_string()
}

fn default_group() -> String {
    "friends".to_string()
}

/// A friend placed on the globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendRecord {
    /// Name of the friend.
    pub name: String,
    /// City the friend lives in.
    #[serde(default)]
    pub city: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Path to the photo of the friend.
    #[serde(default)]
    pub photo: String,
    /// Marker color name.
    #[serde(default = "default_color")]
    pub color: String,
    /// Group the friend belongs to.
    #[serde(default = "default_group")]
    pub group: String,
}

impl FriendRecord {
    /// Position of the friend.
    pub fn position(&self) -> GeoPoint2d {
        latlon!(self.latitude, self.longitude)
    }
}

/// A travel photo placed on the globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRecord {
    /// Path to the photo.
    pub photo: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Title of the photo.
    #[serde(default)]
    pub title: String,
    /// Description of the photo.
    #[serde(default)]
    pub description: String,
    /// Date the photo was taken.
    #[serde(default)]
    pub date: String,
}

impl TravelRecord {
    /// Position of the photo.
    pub fn position(&self) -> GeoPoint2d {
        latlon!(self.latitude, self.longitude)
    }
}

/// Contents of a friends file: `{"friends": [...]}`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendsFile {
    /// Friend records.
    #[serde(default)]
    pub friends: Vec<FriendRecord>,
}

impl FriendsFile {
    /// Parses the records from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GlobeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the records from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GlobeError> {
        let path = path.as_ref();
        let file = Self::from_json(&std::fs::read_to_string(path)?)?;
        debug!("Loaded {} friends from {}", file.friends.len(), path.display());

        Ok(file)
    }
}

/// Contents of a travels file: `{"travels": [...]}`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelsFile {
    /// Travel photo records.
    #[serde(default)]
    pub travels: Vec<TravelRecord>,
}

impl TravelsFile {
    /// Parses the records from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GlobeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the records from a JSON file. Relative photo paths are resolved against the directory of the file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GlobeError> {
        let path = path.as_ref();
        let mut file = Self::from_json(&std::fs::read_to_string(path)?)?;

        if let Some(dir) = path.parent() {
            for travel in &mut file.travels {
                let photo = Path::new(&travel.photo);
                if !travel.photo.is_empty() && photo.is_relative() {
                    travel.photo = dir.join(photo).to_string_lossy().into_owned();
                }
            }
        }

        debug!("Loaded {} travels from {}", file.travels.len(), path.display());
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn default_config() {
        let config = GlobeConfig::from_json("{}").unwrap();
        assert_eq!(config, GlobeConfig::default());
        assert_eq!(config.route_offset, 0.02);
        assert_eq!(config.great_circle_points, 50);
    }

    #[test]
    fn partial_config() {
        let config = GlobeConfig::from_json(r#"{"sphere_radius": 6371.0, "great_circle_points": 10}"#).unwrap();
        assert_eq!(config.sphere_radius, 6371.0);
        assert_eq!(config.great_circle_points, 10);
        assert_eq!(config.photo_offset, 0.1);
    }

    #[test]
    fn invalid_config() {
        assert_matches!(
            GlobeConfig::from_json(r#"{"sphere_radius": 0.0}"#),
            Err(GlobeError::InvalidRadius(_))
        );
        assert_matches!(
            GlobeConfig::from_json(r#"{"great_circle_points": 1}"#),
            Err(GlobeError::Config(_))
        );
        assert_matches!(
            GlobeConfig::from_json(r#"{"extrusion_height": -1.0}"#),
            Err(GlobeError::Config(_))
        );
        assert_matches!(GlobeConfig::from_json("{"), Err(GlobeError::Decoding(_)));
    }

    #[test]
    fn friend_defaults() {
        let file = FriendsFile::from_json(
            r#"{"friends": [
                {"name": "Sarah Johnson", "city": "New York", "latitude": 40.7128, "longitude": -74.0060,
                 "color": "blue", "group": "college"},
                {"name": "Ann", "latitude": 1.5, "longitude": 2.5}
            ]}"#,
        )
        .unwrap();

        assert_eq!(file.friends.len(), 2);
        assert_eq!(file.friends[0].group, "college");
        assert_eq!(file.friends[0].color, "blue");

        let ann = &file.friends[1];
        assert_eq!(ann.color, "yellow");
        assert_eq!(ann.group, "friends");
        assert_eq!(ann.city, "");
        assert_eq!(ann.photo, "");
        assert_eq!(ann.position(), latlon!(1.5, 2.5));
    }

    #[test]
    fn travel_defaults() {
        let file = TravelsFile::from_json(
            r#"{"travels": [{"photo": "paris.jpg", "latitude": 48.8566, "longitude": 2.3522}]}"#,
        )
        .unwrap();

        let travel = &file.travels[0];
        assert_eq!(travel.photo, "paris.jpg");
        assert_eq!(travel.title, "");
        assert_eq!(travel.description, "");
        assert_eq!(travel.date, "");
    }

    #[test]
    fn empty_files() {
        assert!(FriendsFile::from_json("{}").unwrap().friends.is_empty());
        assert!(TravelsFile::from_json("{}").unwrap().travels.is_empty());
    }

    #[test]
    fn malformed_records() {
        assert_matches!(
            FriendsFile::from_json(r#"{"friends": [{"name": "No position"}]}"#),
            Err(GlobeError::Decoding(_))
        );
        assert_matches!(
            TravelsFile::from_json(r#"{"travels": [{"latitude": 1.0, "longitude": 1.0}]}"#),
            Err(GlobeError::Decoding(_))
        );
    }

    #[test]
    fn missing_file() {
        assert_matches!(
            FriendsFile::from_path("/nonexistent/geoglobe/friends.json"),
            Err(GlobeError::FsIo(_))
        );
    }

    #[test]
    fn relative_photo_paths() {
        let dir = std::env::temp_dir().join(format!("geoglobe-travels-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("travels.json");
        std::fs::write(
            &path,
            r#"{"travels": [
                {"photo": "paris.jpg", "latitude": 48.8566, "longitude": 2.3522},
                {"photo": "/photos/rome.jpg", "latitude": 41.9028, "longitude": 12.4964}
            ]}"#,
        )
        .unwrap();

        let file = TravelsFile::from_path(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(
            file.travels[0].photo,
            dir.join("paris.jpg").to_string_lossy()
        );
        assert_eq!(file.travels[1].photo, "/photos/rome.jpg");
    }
}
