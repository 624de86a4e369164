#![warn(missing_docs)]
//! Portal network model and linking resolver.
//!
//! A [`World`] owns one [`PortalSet`] per dimension; the [`link`] module
//! answers "which existing portal does the game connect this one to",
//! mirroring the vanilla Nether-portal search: scale the coordinates,
//! scan a chunk-aligned area in the opposite dimension, take the nearest
//! candidate. All queries are pure and pull-based; callers re-invoke them
//! whenever coordinates or the portal set change.

mod color;
pub mod link;
mod portal;
mod portal_set;
mod world;

pub use color::Rgb;
pub use link::LinkState;
pub use portal::Portal;
pub use portal_set::PortalSet;
pub use world::{World, WorldId};
