use std::sync::Arc;

use ahash::HashSet;
use geoglobe_types::geo::{validate, GeoPoint2d};
use log::debug;
use parking_lot::RwLock;

use super::{group_key, Metadata, NewPlacemark, Placemark, PlacemarkId};
use crate::error::GlobeError;

/// Registry shared between threads. Mutations take the write lock, queries the read lock.
pub type SharedRegistry = Arc<RwLock<PlacemarkRegistry>>;

/// In-memory collection of [`Placemark`]s with per-group visibility flags.
///
/// Placemarks are kept in insertion order. Visibility does not change the placemarks themselves: the registry only
/// reports the flag, and it is up to the renderer to honor it.
#[derive(Debug, Default, Clone)]
pub struct PlacemarkRegistry {
    placemarks: Vec<Placemark>,
    hidden_groups: HashSet<String>,
    next_id: u64,
}

impl PlacemarkRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the registry into a lock for sharing between threads.
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    /// Adds a placemark and returns a copy of it.
    ///
    /// The display color is `explicit_color` if it is a known color name, otherwise the default color of the
    /// `group`, otherwise yellow.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        group: impl Into<String>,
        position: GeoPoint2d,
        explicit_color: Option<&str>,
        metadata: Metadata,
    ) -> Result<Placemark, GlobeError> {
        let mut new = NewPlacemark::new(name, position)
            .with_group(group)
            .with_all_metadata(metadata);
        if let Some(color) = explicit_color {
            new = new.with_color(color);
        }

        self.insert(new)
    }

    /// Adds a placemark described by `new` and returns a copy of it.
    pub fn insert(&mut self, new: NewPlacemark) -> Result<Placemark, GlobeError> {
        validate(&new.position)?;

        let id = PlacemarkId(self.next_id);
        self.next_id += 1;

        let placemark = new.into_placemark(id);
        debug!(
            "Added placemark {:?} '{}' to group '{}'",
            id, placemark.name, placemark.group
        );

        self.placemarks.push(placemark.clone());
        Ok(placemark)
    }

    /// Removes the placemark and returns it.
    pub fn remove(&mut self, id: PlacemarkId) -> Result<Placemark, GlobeError> {
        let index = self
            .placemarks
            .iter()
            .position(|p| p.id == id)
            .ok_or(GlobeError::NotFound)?;

        debug!("Removed placemark {id:?}");
        Ok(self.placemarks.remove(index))
    }

    /// Moves a placemark by replacing it with a copy at the new `position`. The copy gets a new id.
    pub fn relocate(
        &mut self,
        id: PlacemarkId,
        position: GeoPoint2d,
    ) -> Result<Placemark, GlobeError> {
        validate(&position)?;

        let old = self.remove(id)?;
        let mut new = NewPlacemark::from(&old);
        new.position = position;

        self.insert(new)
    }

    /// Returns the placemark with the given id.
    pub fn get(&self, id: PlacemarkId) -> Option<&Placemark> {
        self.placemarks.iter().find(|p| p.id == id)
    }

    /// Iterates over all placemarks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Placemark> {
        self.placemarks.iter()
    }

    /// Number of placemarks in the registry.
    pub fn len(&self) -> usize {
        self.placemarks.len()
    }

    /// Returns true if the registry has no placemarks.
    pub fn is_empty(&self) -> bool {
        self.placemarks.is_empty()
    }

    /// Placemarks of the group in insertion order. The group name is case-insensitive.
    pub fn list_by_group(&self, group: &str) -> Vec<&Placemark> {
        self.placemarks.iter().filter(|p| p.in_group(group)).collect()
    }

    /// Groups with their placemarks, in the order the groups first appeared.
    pub fn groups(&self) -> Vec<(&str, Vec<&Placemark>)> {
        let mut groups: Vec<(&str, Vec<&Placemark>)> = vec![];
        for placemark in &self.placemarks {
            match groups.iter_mut().find(|(name, _)| placemark.in_group(name)) {
                Some((_, members)) => members.push(placemark),
                None => groups.push((placemark.group.as_str(), vec![placemark])),
            }
        }

        groups
    }

    /// Sets visibility flag of the group.
    pub fn set_group_visible(&mut self, group: &str, visible: bool) {
        let key = group_key(group);
        debug!("Group '{key}' visibility set to {visible}");
        if visible {
            self.hidden_groups.remove(&key);
        } else {
            self.hidden_groups.insert(key);
        }
    }

    /// Returns false if the group was hidden with [`PlacemarkRegistry::set_group_visible`].
    pub fn is_group_visible(&self, group: &str) -> bool {
        !self.hidden_groups.contains(&group_key(group))
    }

    /// Returns true if the group of the placemark is visible.
    pub fn is_visible(&self, placemark: &Placemark) -> bool {
        self.is_group_visible(&placemark.group)
    }

    /// Iterates over placemarks of visible groups.
    pub fn iter_visible(&self) -> impl Iterator<Item = &Placemark> {
        self.placemarks.iter().filter(|p| self.is_visible(p))
    }

    /// Removes all placemarks. Visibility flags of the groups are kept.
    pub fn clear(&mut self) {
        debug!("Removing all {} placemarks", self.placemarks.len());
        self.placemarks.clear();
    }
}
