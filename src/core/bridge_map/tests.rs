use super::*;
use crate::core::{generate_anchors, LayoutRect, Region, RegionNode};

fn anchors() -> Vec<Anchor> {
    generate_anchors(LayoutRect::new(0.0, 0.0, 1000.0, 600.0))
}

fn anchor(anchors: &[Anchor], name: &str) -> Anchor {
    let id: AnchorId = name.parse().expect("gültige Anker-ID");
    *anchors
        .iter()
        .find(|a| a.id == id)
        .expect("Anker erwartet")
}

fn node(id: &str) -> RegionNode {
    RegionNode::from_id(id).expect("gültige Knoten-ID")
}

fn bridge_by_id(map: &BridgeMap, id: BridgeId) -> Bridge {
    *map.bridges()
        .find(|b| b.id == id)
        .expect("Brücke erwartet")
}

#[test]
fn test_add_bridge_adds_one_edge() {
    let anchors = anchors();
    let mut map = BridgeMap::new();

    let id = map
        .add_bridge(anchor(&anchors, "north_0"), anchor(&anchors, "kneiphof_4"))
        .expect("Brücke erwartet");

    assert_eq!(map.bridge_count(), 1);
    assert_eq!(map.graph().edge_count(), 1);
    assert_eq!(map.graph().degree(node("1")), 1);
    assert_eq!(map.graph().degree(node("2")), 1);

    let bridge = bridge_by_id(&map, id);
    let edge = map
        .graph()
        .edges()
        .find(|e| e.id == bridge.edge_id)
        .expect("Kante erwartet");
    assert_eq!(edge.key(), (node("1"), node("2")));
}

#[test]
fn test_add_bridge_rejects_invalid_pairs() {
    let anchors = anchors();
    let mut map = BridgeMap::new();

    let same = map.add_bridge(anchor(&anchors, "north_0"), anchor(&anchors, "north_1"));
    assert!(matches!(same, Err(BridgeError::SameRegion { .. })));

    let invalid = map.add_bridge(anchor(&anchors, "north_0"), anchor(&anchors, "lomse_0"));
    assert_eq!(
        invalid,
        Err(BridgeError::InvalidConnection {
            start: AnchorId::new(Region::North, 0),
            end: AnchorId::new(Region::Lomse, 0),
        })
    );

    assert!(map.is_empty());
    assert_eq!(map.graph().edge_count(), 0);
}

#[test]
fn test_parallel_bridges_get_own_edges() {
    let anchors = anchors();
    let mut map = BridgeMap::new();

    let a = map
        .add_bridge(anchor(&anchors, "north_0"), anchor(&anchors, "kneiphof_4"))
        .expect("Brücke erwartet");
    let b = map
        .add_bridge(anchor(&anchors, "north_1"), anchor(&anchors, "kneiphof_5"))
        .expect("Brücke erwartet");
    assert_eq!(map.graph().edges_between(node("1"), node("2")).len(), 2);

    let removed = map.remove_bridge(a).expect("Brücke erwartet");
    assert_eq!(removed.id, a);
    assert_eq!(map.graph().edges_between(node("1"), node("2")).len(), 1);
    let remaining = bridge_by_id(&map, b);
    assert!(map.graph().edges().any(|e| e.id == remaining.edge_id));
}

#[test]
fn test_remove_near_picks_closest_bridge() {
    let anchors = anchors();
    let mut map = BridgeMap::new();
    let north_0 = anchor(&anchors, "north_0");
    let kneiphof_4 = anchor(&anchors, "kneiphof_4");
    let north_1 = anchor(&anchors, "north_1");
    let kneiphof_5 = anchor(&anchors, "kneiphof_5");

    map.add_bridge(north_0, kneiphof_4).expect("Brücke erwartet");
    let second = map.add_bridge(north_1, kneiphof_5).expect("Brücke erwartet");

    // Punkt auf der Mitte der zweiten Brücke
    let midpoint = (north_1.position + kneiphof_5.position) * 0.5;
    let removed = map.remove_bridge_near(midpoint, 15.0).expect("Treffer erwartet");

    assert_eq!(removed.id, second);
    assert_eq!(map.bridge_count(), 1);
    assert_eq!(map.graph().edge_count(), 1);
}

#[test]
fn test_remove_near_out_of_range_is_noop() {
    let anchors = anchors();
    let mut map = BridgeMap::new();
    let start = anchor(&anchors, "south_4");
    let end = anchor(&anchors, "lomse_3");
    map.add_bridge(start, end).expect("Brücke erwartet");

    let far = start.position + Vec2::new(0.0, 200.0);
    assert!(map.remove_bridge_near(far, 15.0).is_none());
    assert_eq!(map.bridge_count(), 1);
    assert_eq!(map.graph().edge_count(), 1);
}

#[test]
fn test_remove_near_uses_strict_threshold() {
    let mut map = BridgeMap::new();
    let start = Anchor::new(Region::North, 0, Vec2::new(0.0, 0.0));
    let end = Anchor::new(Region::Kneiphof, 4, Vec2::new(100.0, 0.0));
    map.add_bridge(start, end).expect("Brücke erwartet");

    assert!(map.nearest_bridge(Vec2::new(50.0, 15.0), 15.0).is_none());
    let hit = map
        .nearest_bridge(Vec2::new(50.0, 14.5), 15.0)
        .expect("Treffer erwartet");
    assert!((hit.distance - 14.5).abs() < 1e-4);
}

#[test]
fn test_equal_distance_prefers_older_bridge() {
    let mut map = BridgeMap::new();
    let first = map
        .add_bridge(
            Anchor::new(Region::North, 0, Vec2::new(0.0, 0.0)),
            Anchor::new(Region::Kneiphof, 4, Vec2::new(100.0, 0.0)),
        )
        .expect("Brücke erwartet");
    map.add_bridge(
        Anchor::new(Region::North, 1, Vec2::new(0.0, 10.0)),
        Anchor::new(Region::Kneiphof, 5, Vec2::new(100.0, 10.0)),
    )
    .expect("Brücke erwartet");

    let hit = map
        .nearest_bridge(Vec2::new(50.0, 5.0), 15.0)
        .expect("Treffer erwartet");
    assert_eq!(hit.bridge_id, first);
}

#[test]
fn test_add_then_remove_restores_graph() {
    let anchors = anchors();
    let mut map = BridgeMap::new();
    let start = anchor(&anchors, "kneiphof_8");
    let end = anchor(&anchors, "lomse_10");

    let id = map.add_bridge(start, end).expect("Brücke erwartet");
    map.remove_bridge(id).expect("Brücke erwartet");

    assert!(map.is_empty());
    assert_eq!(map.graph().edge_count(), 0);
    assert!(map.graph().degrees().values().all(|d| *d == 0));
    assert!(map.remove_bridge(id).is_none());
}

#[test]
fn test_relayout_moves_bridge_endpoints() {
    let small = generate_anchors(LayoutRect::new(0.0, 0.0, 500.0, 300.0));
    let large = anchors();
    let mut map = BridgeMap::new();
    let id = map
        .add_bridge(anchor(&small, "south_0"), anchor(&small, "kneiphof_3"))
        .expect("Brücke erwartet");

    map.relayout(&large);

    let bridge = bridge_by_id(&map, id);
    assert_eq!(bridge.start.position, anchor(&large, "south_0").position);
    assert_eq!(bridge.end.position, anchor(&large, "kneiphof_3").position);
    assert_eq!(map.graph().edge_count(), 1);
}
