//! Chunk cells: the 16×16 horizontal unit the game partitions the world
//! into, and the unit portal search areas are sized in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Chunk edge length in blocks (X and Z axes).
pub const CHUNK_SIZE: i64 = 16;

/// A chunk cell, identified by its origin corner.
///
/// The origin is normalized: x and z are always multiples of 16, y is
/// always 0. Chunks only tile the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chunk {
    origin_x: i64,
    origin_z: i64,
}

impl Chunk {
    /// The chunk containing a given point. Coordinates floor toward
    /// negative infinity, so `(-0.5, _, -0.5)` lands in the chunk at
    /// `(-16, 0, -16)`.
    pub fn containing(p: Point) -> Self {
        Self {
            origin_x: (p.x / CHUNK_SIZE as f64).floor() as i64 * CHUNK_SIZE,
            origin_z: (p.z / CHUNK_SIZE as f64).floor() as i64 * CHUNK_SIZE,
        }
    }

    /// Shift by whole chunks.
    pub fn offset(self, dx: i64, dz: i64) -> Self {
        Self {
            origin_x: self.origin_x + dx * CHUNK_SIZE,
            origin_z: self.origin_z + dz * CHUNK_SIZE,
        }
    }

    /// The origin corner as a point (y = 0).
    pub fn origin(self) -> Point {
        Point::new(self.origin_x as f64, 0.0, self.origin_z as f64)
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chunk ({}, {})", self.origin_x, self.origin_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containing_normalizes_to_multiples_of_16() {
        let c = Chunk::containing(Point::new(17.0, 64.0, 31.9));
        assert_eq!(c.origin(), Point::new(16.0, 0.0, 16.0));

        let exact = Chunk::containing(Point::new(32.0, 0.0, -16.0));
        assert_eq!(exact.origin(), Point::new(32.0, 0.0, -16.0));
    }

    #[test]
    fn negative_coords_floor_away_from_zero() {
        let c = Chunk::containing(Point::new(-0.5, 70.0, -16.5));
        assert_eq!(c.origin(), Point::new(-16.0, 0.0, -32.0));
    }

    #[test]
    fn offset_moves_by_whole_chunks() {
        let c = Chunk::containing(Point::ORIGIN).offset(-8, 8);
        assert_eq!(c.origin(), Point::new(-128.0, 0.0, 128.0));
    }
}
