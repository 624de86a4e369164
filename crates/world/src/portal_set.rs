//! Per-dimension portal collections.

use std::collections::BTreeMap;

use nethermap_core::{Aabb, Point};
use serde::{Deserialize, Serialize};

use crate::portal::Portal;

/// A set of portals, at most one per exact coordinate.
///
/// Entries are keyed by the location's canonical string form in a
/// `BTreeMap`, so iteration order is deterministic (lexicographic on that
/// string). The resolver's nearest-candidate scan inherits its tie-break
/// from this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Portal>", into = "Vec<Portal>")]
pub struct PortalSet {
    map: BTreeMap<String, Portal>,
}

impl PortalSet {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a portal, replacing any existing portal at the same
    /// coordinates. The silent replace is intentional: editing a portal
    /// is modeled as re-inserting it at its (possibly unchanged)
    /// location. Returns the replaced portal, if any.
    pub fn add(&mut self, portal: Portal) -> Option<Portal> {
        let key = portal.location().to_string();
        tracing::debug!(portal = %portal, "adding portal");
        self.map.insert(key, portal)
    }

    /// Remove a portal by its location. No-op if absent.
    pub fn remove(&mut self, portal: &Portal) -> Option<Portal> {
        let removed = self.map.remove(&portal.location().to_string());
        if let Some(p) = &removed {
            tracing::debug!(portal = %p, "removed portal");
        }
        removed
    }

    /// Remove every portal.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Exact-location lookup.
    pub fn find(&self, location: Point) -> Option<&Portal> {
        self.map.get(&location.to_string())
    }

    /// The sub-collection of portals inside a half-open box. Idempotent:
    /// narrowing twice by the same box changes nothing.
    pub fn narrow(&self, area: &Aabb) -> PortalSet {
        let map = self
            .map
            .iter()
            .filter(|(_, p)| area.contains(p.location()))
            .map(|(k, p)| (k.clone(), p.clone()))
            .collect();
        PortalSet { map }
    }

    /// Iterate in key order. The order is deterministic but not the
    /// display order; use [`sorted`](Self::sorted) for lists.
    pub fn iter(&self) -> impl Iterator<Item = &Portal> {
        self.map.values()
    }

    /// Number of portals.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Portals in display order: distance from the origin ascending,
    /// ties broken by coordinates.
    pub fn sorted(&self) -> Vec<&Portal> {
        let mut portals: Vec<&Portal> = self.map.values().collect();
        portals.sort();
        portals
    }
}

impl<'a> IntoIterator for &'a PortalSet {
    type Item = &'a Portal;
    type IntoIter = std::collections::btree_map::Values<'a, String, Portal>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.values()
    }
}

impl From<Vec<Portal>> for PortalSet {
    fn from(portals: Vec<Portal>) -> Self {
        let mut set = Self::new();
        for p in portals {
            set.map.insert(p.location().to_string(), p);
        }
        set
    }
}

impl From<PortalSet> for Vec<Portal> {
    fn from(set: PortalSet) -> Self {
        set.map.into_values().collect()
    }
}
