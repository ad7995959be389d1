//! Named point entities (friends, travel photos, landmarks) placed on the globe.
//!
//! Placemarks are owned by a [`PlacemarkRegistry`]. A placemark never changes after it was added: to move or restyle
//! one, remove it and add a new one (see [`PlacemarkRegistry::relocate`]).

mod registry;

use std::collections::BTreeMap;

use geoglobe_types::geo::GeoPoint2d;
use serde::{Deserialize, Serialize};

use crate::Color;

pub use registry::{PlacemarkRegistry, SharedRegistry};

/// Category of friend placemarks.
pub const CATEGORY_FRIEND: &str = "friend";
/// Category of travel photo placemarks.
pub const CATEGORY_PHOTO: &str = "photo";
/// Category of placemarks added without an explicit one.
pub const CATEGORY_PLACEMARK: &str = "placemark";
/// Group of travel photo placemarks.
pub const GROUP_TRAVELS: &str = "travels";

/// Free-form metadata attached to a placemark.
pub type Metadata = BTreeMap<String, String>;

/// Identifier of a placemark, unique within its registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlacemarkId(pub(crate) u64);

/// Named point on the globe with its display color and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placemark {
    id: PlacemarkId,
    name: String,
    position: GeoPoint2d,
    category: String,
    color: Color,
    group: String,
    metadata: Metadata,
}

impl Placemark {
    /// Identifier of the placemark.
    pub fn id(&self) -> PlacemarkId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position on the globe.
    pub fn position(&self) -> GeoPoint2d {
        self.position
    }

    /// Category, e.g. [`CATEGORY_FRIEND`] or [`CATEGORY_PHOTO`].
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Resolved display color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Group the placemark belongs to.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Free-form metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns true if the placemark belongs to the group. Group names are compared case-insensitively.
    pub fn in_group(&self, group: &str) -> bool {
        group_key(&self.group) == group_key(group)
    }
}

/// Case-folded group name used for every group comparison.
pub(crate) fn group_key(group: &str) -> String {
    group.to_lowercase()
}

/// Description of a placemark to be added to a registry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlacemark {
    name: String,
    position: GeoPoint2d,
    group: String,
    category: String,
    color: Option<String>,
    metadata: Metadata,
}

impl NewPlacemark {
    /// Placemark in the `friends` group of the [`CATEGORY_PLACEMARK`] category without an explicit color.
    pub fn new(name: impl Into<String>, position: GeoPoint2d) -> Self {
        Self {
            name: name.into(),
            position,
            group: "friends".to_string(),
            category: CATEGORY_PLACEMARK.to_string(),
            color: None,
            metadata: Metadata::new(),
        }
    }

    /// Sets the group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the explicit color name. Unknown names fall back to the group color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Adds a metadata entry. Entries with empty values are skipped.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.metadata.insert(key.into(), value);
        }
        self
    }

    /// Replaces all metadata.
    pub fn with_all_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    fn into_placemark(self, id: PlacemarkId) -> Placemark {
        let color = Color::resolve(self.color.as_deref(), &self.group);
        Placemark {
            id,
            name: self.name,
            position: self.position,
            category: self.category,
            color,
            group: self.group,
            metadata: self.metadata,
        }
    }
}

impl From<&Placemark> for NewPlacemark {
    fn from(value: &Placemark) -> Self {
        Self {
            name: value.name.clone(),
            position: value.position,
            group: value.group.clone(),
            category: value.category.clone(),
            color: value.color.name().map(str::to_string),
            metadata: value.metadata.clone(),
        }
    }
}
