//! 3D coordinate value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point in block coordinates.
///
/// Components are `f64` because the UI feeds us live drag coordinates;
/// nothing here rounds implicitly. Rounding happens only through
/// [`Point::round`] or the flooring built into the dimension transforms.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Point {
    /// East/west coordinate.
    pub x: f64,
    /// Altitude.
    pub y: f64,
    /// North/south coordinate.
    pub z: f64,
}

impl Point {
    /// The world origin `(0, 0, 0)`.
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Construct a point from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Produce a new point shifted by the given deltas.
    pub fn offset(self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Round each component to the nearest integer.
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round(), self.z.round())
    }

    /// Euclidean distance to another point. Y participates: portal
    /// candidate selection is a 3D comparison, not a map-plane one.
    pub fn distance(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// The canonical string form, `"x, y, z"`. Portal collections key their
/// entries on this, so the formatting must stay stable and equal points
/// must produce equal strings. Negative zero would break that (`-0.0`
/// formats as `"-0"` yet compares equal to `0.0`), so each component is
/// collapsed to positive zero by adding `0.0` before formatting.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x + 0.0, self.y + 0.0, self.z + 0.0)
    }
}

/// Failure to parse the canonical `"x, y, z"` form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePointError {
    /// Wrong number of comma-separated components.
    #[error("expected three comma-separated components, got {0}")]
    ComponentCount(usize),
    /// A component was not a number.
    #[error("invalid coordinate {0:?}")]
    InvalidNumber(String),
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(ParsePointError::ComponentCount(parts.len()));
        }
        let mut coords = [0.0; 3];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            let trimmed = part.trim();
            *slot = trimmed
                .parse::<f64>()
                .map_err(|_| ParsePointError::InvalidNumber(trimmed.to_owned()))?;
        }
        Ok(Self::new(coords[0], coords[1], coords[2]))
    }
}
