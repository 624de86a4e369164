//! Property tests for the portal collection and the linking resolver.

use nethermap_core::{Aabb, Dimension, Point};
use nethermap_world::{link, Portal, PortalSet, Rgb, World};
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = Point> {
    (
        -2000i32..2000i32,
        0i32..128i32,
        -2000i32..2000i32,
    )
        .prop_map(|(x, y, z)| Point::new(x as f64, y as f64, z as f64))
}

fn arb_portal(dimension: Dimension) -> impl Strategy<Value = Portal> {
    arb_point().prop_map(move |location| {
        Portal::new(dimension, location, "p", Rgb::new(0, 0, 0))
    })
}

fn arb_box() -> impl Strategy<Value = Aabb> {
    (arb_point(), 1i32..512i32, 1i32..128i32, 1i32..512i32).prop_map(|(min, dx, dy, dz)| {
        Aabb::new(min, min.offset(dx as f64, dy as f64, dz as f64))
    })
}

proptest! {
    /// Property: narrowing is idempotent and never invents portals.
    #[test]
    fn narrow_is_idempotent(
        portals in prop::collection::vec(arb_portal(Dimension::Overworld), 0..40),
        area in arb_box(),
    ) {
        let mut set = PortalSet::new();
        for p in portals {
            set.add(p);
        }

        let once = set.narrow(&area);
        let twice = once.narrow(&area);

        prop_assert_eq!(once.len(), twice.len());
        prop_assert!(once.len() <= set.len());
        for p in &once {
            prop_assert!(area.contains(p.location()));
            prop_assert!(twice.find(p.location()).is_some());
        }
    }

    /// Property: upserting at an occupied location keeps the set's size
    /// and the newcomer's fields.
    #[test]
    fn upsert_replaces_in_place(
        location in arb_point(),
        others in prop::collection::vec(arb_portal(Dimension::Nether), 0..20),
    ) {
        let mut set = PortalSet::new();
        for p in others {
            set.add(p);
        }
        set.add(Portal::new(Dimension::Nether, location, "old", Rgb::new(0, 0, 0)));
        let len_before = set.len();

        set.add(Portal::new(Dimension::Nether, location, "new", Rgb::new(1, 2, 3)));

        prop_assert_eq!(set.len(), len_before);
        let found = set.find(location).unwrap();
        prop_assert_eq!(found.name.as_str(), "new");
        prop_assert_eq!(found.color, Rgb::new(1, 2, 3));
    }

    /// Property: the resolved target (when any) lies inside the source's
    /// search area and no known candidate in that area is strictly
    /// closer to the nominal point.
    #[test]
    fn resolved_target_is_the_nearest_in_area(
        source in arb_portal(Dimension::Nether),
        others in prop::collection::vec(arb_portal(Dimension::Overworld), 0..30),
    ) {
        let mut world = World::new("prop");
        for p in &others {
            world.portals_mut(Dimension::Overworld).add(p.clone());
        }
        world.portals_mut(Dimension::Nether).add(source.clone());

        let nominal = Dimension::Nether.scale_for_portal(source.location());
        let area = link::search_area(&source);

        match link::linked_portal(&source, &world) {
            None => {
                for p in world.portals(Dimension::Overworld) {
                    prop_assert!(!area.contains(p.location()));
                }
            }
            Some(target) => {
                prop_assert!(area.contains(target.location()));
                let chosen = target.location().distance(nominal);
                for p in world.portals(Dimension::Overworld) {
                    if area.contains(p.location()) {
                        prop_assert!(p.location().distance(nominal) >= chosen);
                    }
                }
            }
        }
    }

    /// Property: resolution is deterministic: a fresh query over the
    /// same world returns the same target.
    #[test]
    fn resolution_is_deterministic(
        source in arb_portal(Dimension::Overworld),
        others in prop::collection::vec(arb_portal(Dimension::Nether), 0..30),
    ) {
        let mut world = World::new("prop");
        for p in &others {
            world.portals_mut(Dimension::Nether).add(p.clone());
        }

        let first = link::linked_portal(&source, &world).cloned();
        let second = link::linked_portal(&source, &world).cloned();
        prop_assert_eq!(first, second);
    }

    /// Property: bidirectionality agrees with two independent
    /// linked-portal calls, by definition.
    #[test]
    fn bidirectionality_matches_independent_queries(
        overworld in prop::collection::vec(arb_portal(Dimension::Overworld), 1..15),
        nether in prop::collection::vec(arb_portal(Dimension::Nether), 1..15),
    ) {
        let mut world = World::new("prop");
        for p in overworld.iter().chain(nether.iter()) {
            world.portals_mut(p.dimension()).add(p.clone());
        }

        for a in world.portals(Dimension::Overworld) {
            for b in world.portals(Dimension::Nether) {
                let forward = link::linked_portal(a, &world) == Some(b);
                let backward = link::linked_portal(b, &world) == Some(a);
                prop_assert_eq!(
                    link::is_bidirectional(a, b, &world),
                    forward && backward
                );
            }
        }
    }
}
