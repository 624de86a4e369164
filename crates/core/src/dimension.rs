//! The two linked dimensions and their portal coordinate transforms.
//!
//! The game pairs every Overworld position with a Nether position through
//! an 8:1 horizontal scaling, then scans a chunk-aligned area around the
//! scaled point for an existing portal. The constants here reproduce that
//! algorithm: 8:1 ratio, 17×17-chunk search in the Overworld vs 3×3 in the
//! Nether, and a Y-clamp keeping generated portals away from the world
//! floor and ceiling.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bounds::Aabb;
use crate::chunk::{Chunk, CHUNK_SIZE};
use crate::point::Point;

/// Lowest Y a generated portal may be placed at.
const GENERATED_PORTAL_MIN_Y: f64 = 70.0;

/// Margin kept below the destination dimension's ceiling when placing a
/// generated portal.
const GENERATED_PORTAL_CEILING_MARGIN: f64 = 10.0;

/// A world dimension.
///
/// A closed set: every operation matches exhaustively, so there is no
/// "unsupported dimension" failure mode anywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    /// The Overworld.
    Overworld,
    /// The Nether. Horizontal coordinates here are 1/8 of their
    /// Overworld counterparts.
    Nether,
}

impl Dimension {
    /// Human-readable dimension name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Overworld => "Overworld",
            Self::Nether => "Nether",
        }
    }

    /// Lowest buildable altitude.
    pub const fn min_altitude(self) -> f64 {
        0.0
    }

    /// Build height limit (exclusive).
    pub const fn max_altitude(self) -> f64 {
        match self {
            Self::Overworld => 256.0,
            Self::Nether => 128.0,
        }
    }

    /// The dimension portals in this one lead to. An involution:
    /// `d.opposite().opposite() == d`.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Overworld => Self::Nether,
            Self::Nether => Self::Overworld,
        }
    }

    /// Map a point in this dimension to the nominal destination the game
    /// would target in the opposite dimension.
    ///
    /// X and Z divide by 8 (flooring) going into the Nether and multiply
    /// by 8 coming out; Y passes through unchanged. The floor makes the
    /// two directions asymmetric: a full round trip can drift by up to a
    /// chunk horizontally.
    pub fn scale_for_portal(self, p: Point) -> Point {
        match self {
            Self::Overworld => Point::new((p.x / 8.0).floor(), p.y, (p.z / 8.0).floor()),
            Self::Nether => Point::new(p.x * 8.0, p.y, p.z * 8.0),
        }
    }

    /// Like [`scale_for_portal`](Self::scale_for_portal), but with Y
    /// clamped into the band where the game is willing to generate a new
    /// portal: at least 70, at most 10 below the destination ceiling.
    pub fn scale_and_restrict_for_portal(self, p: Point) -> Point {
        let nominal = self.scale_for_portal(p);
        let ceiling = self.opposite().max_altitude() - GENERATED_PORTAL_CEILING_MARGIN;
        Point::new(
            nominal.x,
            nominal.y.clamp(GENERATED_PORTAL_MIN_Y, ceiling),
            nominal.z,
        )
    }

    /// The area the game scans *in this dimension* for an existing portal
    /// to link a nominal destination point to.
    ///
    /// Chunk-aligned and centered on the chunk containing `nominal`:
    /// ±8 chunks (17×17) in the Overworld, ±1 chunk (3×3) in the Nether,
    /// spanning the full altitude range.
    pub fn portal_search_area(self, nominal: Point) -> Aabb {
        let radius = match self {
            Self::Overworld => 8,
            Self::Nether => 1,
        };
        let center = Chunk::containing(nominal);
        let min = center.offset(-radius, -radius).origin();
        let max = center.offset(radius + 1, radius + 1).origin();
        Aabb::new(
            Point::new(min.x, self.min_altitude(), min.z),
            Point::new(max.x, self.max_altitude(), max.z),
        )
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
