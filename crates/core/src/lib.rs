#![warn(missing_docs)]
//! Geometry primitives shared across the workspace.
//!
//! Everything here is a plain `Copy` value with no interior state: points,
//! chunk cells, axis-aligned boxes, and the closed set of dimensions with
//! their portal coordinate transforms. The domain model and the linking
//! resolver live in `nethermap-world` on top of these.

mod bounds;
mod chunk;
mod dimension;
mod point;

pub use bounds::Aabb;
pub use chunk::{Chunk, CHUNK_SIZE};
pub use dimension::Dimension;
pub use point::{ParsePointError, Point};
