//! The world aggregate: one portal collection per dimension.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use nethermap_core::Dimension;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::Rgb;
use crate::portal_set::PortalSet;

/// Stable identifier for a world, independent of its user-editable name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WorldId(Uuid);

impl WorldId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WorldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A saved project: a named pair of portal collections, one per
/// dimension.
///
/// Identity is the `id`; the name is user-editable and two distinct
/// worlds may share one. `Clone` is a deep value copy; speculative
/// edits ("what if a portal existed here") clone the world, mutate the
/// copy, query it, and throw it away, never touching the live instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    id: WorldId,
    /// User-facing world name.
    pub name: String,
    overworld_portals: PortalSet,
    nether_portals: PortalSet,
}

impl World {
    /// Create an empty world with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(WorldId::new(), name)
    }

    /// Create an empty world with a known identifier. Deserialized
    /// worlds come through here so their identity survives the round
    /// trip.
    pub fn with_id(id: WorldId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            overworld_portals: PortalSet::new(),
            nether_portals: PortalSet::new(),
        }
    }

    /// This world's identifier.
    pub fn id(&self) -> WorldId {
        self.id
    }

    /// The portal collection for a dimension. Total: both collections
    /// always exist, even when empty.
    pub fn portals(&self, dimension: Dimension) -> &PortalSet {
        match dimension {
            Dimension::Overworld => &self.overworld_portals,
            Dimension::Nether => &self.nether_portals,
        }
    }

    /// Mutable access to the portal collection for a dimension.
    pub fn portals_mut(&mut self, dimension: Dimension) -> &mut PortalSet {
        match dimension {
            Dimension::Overworld => &mut self.overworld_portals,
            Dimension::Nether => &mut self.nether_portals,
        }
    }

    /// A name for the next portal that collides with no existing portal
    /// name in either dimension: `"Portal #n"` for the smallest workable
    /// `n`, preferring one past the current portal count.
    pub fn new_portal_name_candidate(&self) -> String {
        let names: HashSet<&str> = self
            .overworld_portals
            .iter()
            .chain(self.nether_portals.iter())
            .map(|p| p.name.as_str())
            .collect();

        let total = self.overworld_portals.len() + self.nether_portals.len();
        let preferred = format!("Portal #{}", total + 1);
        if !names.contains(preferred.as_str()) {
            return preferred;
        }
        let mut i = 1u64;
        loop {
            let candidate = format!("Portal #{i}");
            if !names.contains(candidate.as_str()) {
                return candidate;
            }
            i += 1;
        }
    }

    /// A color for the next portal: random hue, saturation 100%, value
    /// 40%. Dark enough for white text, distinct enough to tell portals
    /// apart at a glance.
    pub fn new_portal_color_candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        Rgb::from_hsv(rng.gen_range(0.0..360.0), 100.0, 40.0)
    }
}

impl PartialEq for World {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for World {}

/// Worlds order by identifier, giving selector lists a stable total
/// order regardless of renames.
impl Ord for World {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for World {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
