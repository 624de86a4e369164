//! Axis-aligned bounding boxes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// An axis-aligned box, half-open on every axis: a point is inside iff
/// `min <= p < max` component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Inclusive lower corner.
    pub min: Point,
    /// Exclusive upper corner.
    pub max: Point,
}

impl Aabb {
    /// Construct from corners. `min` must not exceed `max` on any axis;
    /// a violation is a programming error in the caller, not a
    /// recoverable condition.
    pub fn new(min: Point, max: Point) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y && min.z <= max.z,
            "degenerate box: min {min} exceeds max {max}"
        );
        Self { min, max }
    }

    /// Half-open containment test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
            && p.z >= self.min.z
            && p.z < self.max.z
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[({}) .. ({}))", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_half_open() {
        let b = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(16.0, 128.0, 16.0));
        assert!(b.contains(Point::new(0.0, 0.0, 0.0)));
        assert!(b.contains(Point::new(15.9, 127.9, 15.9)));
        assert!(!b.contains(Point::new(16.0, 64.0, 0.0)));
        assert!(!b.contains(Point::new(0.0, 128.0, 0.0)));
        assert!(!b.contains(Point::new(-0.1, 64.0, 0.0)));
    }
}
