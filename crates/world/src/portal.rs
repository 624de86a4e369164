//! The portal entity.

use std::cmp::Ordering;
use std::fmt;

use nethermap_core::{Aabb, Dimension, Point};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::link;
use crate::world::World;

/// A named, colored portal anchored to one spot in one dimension.
///
/// Identity is `(dimension, location)` and nothing else: two portals at
/// the same coordinates in the same dimension are the same portal even if
/// their name or color differ. Editing exploits this: the edited value
/// simply replaces the original in its collection. Moving a portal is a
/// delete plus a recreate; `dimension` and `location` never change after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portal {
    dimension: Dimension,
    location: Point,
    /// User-facing label.
    pub name: String,
    /// Display color on the map and in lists.
    pub color: Rgb,
}

impl Portal {
    /// Construct a portal. The location is taken as-is; callers that want
    /// block-aligned portals round before constructing.
    pub fn new(dimension: Dimension, location: Point, name: impl Into<String>, color: Rgb) -> Self {
        Self {
            dimension,
            location,
            name: name.into(),
            color,
        }
    }

    /// The dimension this portal sits in.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Where this portal sits.
    pub fn location(&self) -> Point {
        self.location
    }

    /// The portal the game would connect this one to, if any.
    ///
    /// Convenience for [`link::linked_portal`].
    pub fn linked_portal<'w>(&self, world: &'w World) -> Option<&'w Portal> {
        link::linked_portal(self, world)
    }

    /// The area scanned in the opposite dimension when resolving this
    /// portal's link. Convenience for [`link::search_area`].
    pub fn search_area(&self) -> Aabb {
        link::search_area(self)
    }

    fn distance_from_origin(&self) -> f64 {
        self.location.distance(Point::ORIGIN)
    }
}

impl PartialEq for Portal {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.location == other.location
    }
}

// Locations are finite by construction (they come from coordinate input
// fields or deserialized saves), so the partial equality above is total.
impl Eq for Portal {}

/// Display order: distance from the origin ascending, then x, y, z.
///
/// There is no one natural way to order 3D points; distance from the
/// origin reads well in a list, and the coordinate tie-break makes the
/// order total since two distinct portals cannot share a spot.
impl Ord for Portal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_from_origin()
            .total_cmp(&other.distance_from_origin())
            .then_with(|| self.location.x.total_cmp(&other.location.x))
            .then_with(|| self.location.y.total_cmp(&other.location.y))
            .then_with(|| self.location.z.total_cmp(&other.location.z))
            .then_with(|| self.dimension.cmp(&other.dimension))
    }
}

impl PartialOrd for Portal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.name,
            self.dimension,
            self.location
        )
    }
}
