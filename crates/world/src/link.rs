//! Portal link resolution.
//!
//! Mirrors the game's Nether-portal search: scale the source coordinates
//! into the opposite dimension (8:1 horizontally), scan a chunk-aligned
//! area around that nominal point, and connect to the nearest existing
//! portal in it. Linking is not symmetric: the portal you arrive at may
//! itself link somewhere else, so the queries here also classify a
//! pair's relationship for the UI: bidirectional, one-way, or out of
//! range entirely.
//!
//! Everything is a pure pull-based query over a world snapshot. Nothing
//! is cached; callers re-invoke on any change.

use nethermap_core::{Aabb, Dimension, Point};
use serde::{Deserialize, Serialize};

use crate::portal::Portal;
use crate::world::World;

/// How a portal relates to its resolved link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkState {
    /// No portal exists in the search area; the game would generate a
    /// fresh one near the restricted nominal point.
    Unlinked,
    /// The target links straight back: travel works both ways.
    Bidirectional,
    /// The target lies in range of the source, but resolves to some
    /// closer portal instead. Travel through the source is one-way.
    OneWay,
    /// The source sits outside the box the target's own resolution
    /// scans, so the target can never link back regardless of what else
    /// exists.
    OutsideRange,
}

/// The existing portal the game would connect `source` to, or `None` if
/// the search area holds no candidate (in which case the game would
/// generate a new portal near
/// [`Dimension::scale_and_restrict_for_portal`]).
pub fn linked_portal<'w>(source: &Portal, world: &'w World) -> Option<&'w Portal> {
    linked_portal_at(source.dimension(), source.location(), world)
}

/// [`linked_portal`] for a hypothetical portal that need not exist in
/// any collection, the "if I built a portal here" preview.
pub fn linked_portal_at(
    dimension: Dimension,
    location: Point,
    world: &World,
) -> Option<&Portal> {
    let nominal = dimension.scale_for_portal(location);
    let target_dimension = dimension.opposite();
    let area = target_dimension.portal_search_area(nominal);
    let candidates = world.portals(target_dimension).narrow(&area);

    tracing::trace!(
        %nominal,
        %area,
        candidates = candidates.len(),
        "resolving portal link"
    );

    // Nearest by 3D Euclidean distance. On a tie the first candidate in
    // the collection's key order wins; the game's own tie behavior is
    // undefined, so any deterministic choice is as good as another.
    let mut closest: Option<&Portal> = None;
    let mut shortest = f64::INFINITY;
    for p in &candidates {
        let d = p.location().distance(nominal);
        if d < shortest {
            closest = Some(p);
            shortest = d;
        }
    }

    // Hand back the world's own portal rather than the narrowed copy.
    closest.and_then(|p| world.portals(target_dimension).find(p.location()))
}

/// The box `source`'s link resolution scans in the opposite dimension.
/// Exposed so the UI can draw it without duplicating the math.
pub fn search_area(source: &Portal) -> Aabb {
    search_area_at(source.dimension(), source.location())
}

/// [`search_area`] for a hypothetical portal.
pub fn search_area_at(dimension: Dimension, location: Point) -> Aabb {
    dimension
        .opposite()
        .portal_search_area(dimension.scale_for_portal(location))
}

/// Whether two portals are each other's link target.
pub fn is_bidirectional(p1: &Portal, p2: &Portal, world: &World) -> bool {
    linked_portal(p1, world).is_some_and(|target| target == p2)
        && linked_portal(p2, world).is_some_and(|target| target == p1)
}

/// Classify `source`'s relationship with its resolved target.
pub fn link_state(source: &Portal, world: &World) -> LinkState {
    let Some(target) = linked_portal(source, world) else {
        return LinkState::Unlinked;
    };
    if linked_portal(target, world).is_some_and(|back| back == source) {
        LinkState::Bidirectional
    } else if search_area(target).contains(source.location()) {
        LinkState::OneWay
    } else {
        LinkState::OutsideRange
    }
}

/// Whether inserting `hypothetical` would make it `existing`'s new link
/// target. Evaluated against a clone of the world, so the live instance
/// is never touched. The UI uses this to warn that building a portal
/// would steal an existing (possibly carefully tuned) link.
pub fn links_back_if_added(existing: &Portal, hypothetical: &Portal, world: &World) -> bool {
    let mut speculative = world.clone();
    speculative
        .portals_mut(hypothetical.dimension())
        .add(hypothetical.clone());
    linked_portal(existing, &speculative).is_some_and(|target| target == hypothetical)
}
