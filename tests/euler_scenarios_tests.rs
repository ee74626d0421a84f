use glam::Vec2;
use koenigsberg_bridges::{
    analyze, generate_anchors, is_valid_connection, Anchor, BridgeMap, Classification,
    LayoutRect, Region, RegionNode,
};

fn anchors() -> Vec<Anchor> {
    generate_anchors(LayoutRect::new(40.0, 30.0, 900.0, 600.0))
}

fn named(anchors: &[Anchor], name: &str) -> Anchor {
    anchors
        .iter()
        .find(|a| a.id.to_string() == name)
        .copied()
        .unwrap_or_else(|| panic!("Anker {name} sollte existieren"))
}

fn build(pairs: &[(&str, &str)]) -> BridgeMap {
    let anchors = anchors();
    let mut map = BridgeMap::new();
    for (from, to) in pairs {
        map.add_bridge(named(&anchors, from), named(&anchors, to))
            .unwrap_or_else(|e| panic!("{from} → {to} sollte gültig sein: {e}"));
    }
    map
}

fn node(id: &str) -> RegionNode {
    RegionNode::from_id(id).expect("Knoten-ID sollte gültig sein")
}

fn degree_list(map: &BridgeMap) -> Vec<usize> {
    map.graph().degrees().into_values().collect()
}

/// Prüft, dass die Knotenfolge jede Kante genau einmal benutzt.
fn assert_uses_every_edge_once(map: &BridgeMap, walk: &[RegionNode]) {
    assert_eq!(walk.len(), map.graph().edge_count() + 1);
    let mut remaining: Vec<(RegionNode, RegionNode)> = map
        .graph()
        .edges()
        .map(|edge| edge.key())
        .collect();
    for step in walk.windows(2) {
        let key = if step[0] <= step[1] {
            (step[0], step[1])
        } else {
            (step[1], step[0])
        };
        let position = remaining
            .iter()
            .position(|k| *k == key)
            .unwrap_or_else(|| panic!("Kante {key:?} fehlt oder wurde doppelt benutzt"));
        remaining.swap_remove(position);
    }
    assert!(remaining.is_empty());
}

#[test]
fn test_empty_graph_has_no_edges() {
    let map = BridgeMap::new();

    let result = analyze(map.graph());

    assert_eq!(result.classification, Classification::NoEdges);
    assert_eq!(result.degrees.len(), 4);
    assert!(result.walk.is_none());
}

#[test]
fn test_single_bridge_isolates_two_nodes() {
    let map = build(&[("north_0", "kneiphof_4")]);

    let result = analyze(map.graph());

    assert_eq!(degree_list(&map), vec![1, 1, 0, 0]);
    assert_eq!(result.classification, Classification::Neither);
    assert_eq!(result.isolated_nodes, vec![node("3"), node("4")]);
    assert!(result
        .diagnostic_lines
        .iter()
        .any(|line| line.contains("Isolated nodes: 3, 4")));
}

#[test]
fn test_classic_seven_bridges_have_four_odd_nodes() {
    let map = build(&[
        ("north_0", "kneiphof_4"),
        ("north_1", "kneiphof_5"),
        ("north_4", "lomse_4"),
        ("south_0", "kneiphof_3"),
        ("south_1", "kneiphof_2"),
        ("south_4", "lomse_3"),
        ("kneiphof_8", "lomse_10"),
    ]);

    let result = analyze(map.graph());

    assert_eq!(degree_list(&map), vec![3, 5, 3, 3]);
    assert_eq!(result.classification, Classification::Neither);
    assert_eq!(
        result.odd_nodes,
        vec![node("1"), node("2"), node("3"), node("4")]
    );
    assert!(result.walk.is_none());
}

#[test]
fn test_four_cycle_is_circuit() {
    let map = build(&[
        ("north_0", "kneiphof_4"),
        ("south_0", "kneiphof_3"),
        ("south_4", "lomse_3"),
        ("north_4", "lomse_4"),
    ]);

    let result = analyze(map.graph());

    assert_eq!(result.classification, Classification::EulerianCircuit);
    let walk = result.walk.expect("Kreis sollte konstruiert werden");
    assert_eq!(walk.first(), walk.last());
    assert_uses_every_edge_once(&map, &walk);
}

#[test]
fn test_two_odd_nodes_give_path() {
    let map = build(&[
        ("north_0", "kneiphof_4"),
        ("kneiphof_8", "lomse_10"),
        ("north_4", "lomse_4"),
        ("south_0", "kneiphof_3"),
        ("south_4", "lomse_3"),
    ]);

    let result = analyze(map.graph());

    assert_eq!(result.classification, Classification::EulerianPath);
    assert_eq!(result.odd_nodes, vec![node("2"), node("3")]);
    let walk = result.walk.expect("Weg sollte konstruiert werden");
    assert_eq!(walk.first(), Some(&node("2")));
    assert_eq!(walk.last(), Some(&node("3")));
    assert_uses_every_edge_once(&map, &walk);
}

#[test]
fn test_parallel_bridges_with_isolated_nodes_stay_neither() {
    let map = build(&[("north_0", "kneiphof_4"), ("north_1", "kneiphof_5")]);

    let result = analyze(map.graph());

    assert_eq!(result.classification, Classification::Neither);
    assert_eq!(degree_list(&map), vec![2, 2, 0, 0]);
}

#[test]
fn test_anchor_counts_for_various_rects() {
    let rects = [
        LayoutRect::new(0.0, 0.0, 800.0, 600.0),
        LayoutRect::new(46.0, 46.0, 715.4, 708.0),
        LayoutRect::new(-20.0, 15.0, 1.0, 1.0),
        LayoutRect::new(0.0, 0.0, 0.0, 0.0),
    ];
    for rect in rects {
        let anchors = generate_anchors(rect);
        assert_eq!(anchors.len(), 38);
        for (region, expected) in [
            (Region::North, 8),
            (Region::South, 8),
            (Region::Kneiphof, 11),
            (Region::Lomse, 11),
        ] {
            assert_eq!(anchors.iter().filter(|a| a.region() == region).count(), expected);
        }
        let mut ids: Vec<String> = anchors.iter().map(|a| a.id.to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 38);
    }
}

#[test]
fn test_valid_connection_is_symmetric_and_never_within_region() {
    let anchors = anchors();
    for a in &anchors {
        for b in &anchors {
            assert_eq!(is_valid_connection(a, b), is_valid_connection(b, a));
            if a.region() == b.region() {
                assert!(!is_valid_connection(a, b));
            }
        }
    }
}

#[test]
fn test_add_then_remove_restores_degrees() {
    let mut map = build(&[("north_4", "lomse_4"), ("south_1", "kneiphof_2")]);
    let degrees_before = degree_list(&map);
    let anchors = anchors();
    let start = named(&anchors, "kneiphof_9");
    let end = named(&anchors, "lomse_9");

    map.add_bridge(start, end)
        .expect("kneiphof_9 → lomse_9 sollte gültig sein");
    assert_eq!(map.graph().edge_count(), 3);
    assert_eq!(map.graph().degree(node("2")), degrees_before[1] + 1);
    assert_eq!(map.graph().degree(node("3")), degrees_before[2] + 1);

    let midpoint = (start.position + end.position) * 0.5;
    let removed = map
        .remove_bridge_near(midpoint, 15.0)
        .expect("Brücke sollte in Reichweite sein");

    assert_eq!(removed.start.id, start.id);
    assert_eq!(map.graph().edge_count(), 2);
    assert_eq!(degree_list(&map), degrees_before);
}

#[test]
fn test_remove_near_without_bridge_in_range_is_noop() {
    let mut map = build(&[("north_0", "kneiphof_4")]);

    assert!(map.remove_bridge_near(Vec2::new(-1000.0, -1000.0), 15.0).is_none());
    assert_eq!(map.bridge_count(), 1);
    assert_eq!(degree_list(&map), vec![1, 1, 0, 0]);
}
