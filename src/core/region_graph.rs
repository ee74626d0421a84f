//! Ungerichteter Multigraph über den vier Regionsknoten.
//!
//! Kanten leben in einer Arena mit stabilen IDs (Einfügereihenfolge bleibt
//! erhalten), zusätzlich indexiert nach Knotenpaar. Damit lässt sich genau eine
//! von mehreren parallelen Kanten entfernen.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

use super::RegionNode;

/// Stabile ID einer Graph-Kante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(u64);

impl EdgeId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Eine ungerichtete Kante zwischen zwei Regionsknoten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEdge {
    pub id: EdgeId,
    pub a: RegionNode,
    pub b: RegionNode,
}

impl RegionEdge {
    /// Gegenüberliegender Endpunkt, falls `node` inzident ist.
    pub fn other(&self, node: RegionNode) -> Option<RegionNode> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }

    /// Knotenpaar in normalisierter Reihenfolge.
    pub fn key(&self) -> (RegionNode, RegionNode) {
        pair_key(self.a, self.b)
    }
}

fn pair_key(a: RegionNode, b: RegionNode) -> (RegionNode, RegionNode) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Multigraph mit den vier festen Knoten. Knoten existieren immer, auch mit Grad 0.
#[derive(Debug, Clone, Default)]
pub struct RegionGraph {
    edges: IndexMap<EdgeId, RegionEdge>,
    pair_index: HashMap<(RegionNode, RegionNode), Vec<EdgeId>>,
    next_edge_id: u64,
}

impl RegionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle Knoten (immer vier, sortiert nach ID).
    pub fn nodes(&self) -> [RegionNode; 4] {
        RegionNode::ALL
    }

    /// Fügt eine Kante hinzu und liefert ihre neue ID.
    pub fn add_edge(&mut self, a: RegionNode, b: RegionNode) -> EdgeId {
        self.next_edge_id += 1;
        let id = EdgeId(self.next_edge_id);
        let edge = RegionEdge { id, a, b };
        self.pair_index.entry(edge.key()).or_default().push(id);
        self.edges.insert(id, edge);
        id
    }

    /// Entfernt genau die Kante `id`; die Reihenfolge der übrigen Kanten bleibt erhalten.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<RegionEdge> {
        let edge = self.edges.shift_remove(&id)?;
        let key = edge.key();
        if let Some(ids) = self.pair_index.get_mut(&key) {
            ids.retain(|e| *e != id);
            if ids.is_empty() {
                self.pair_index.remove(&key);
            }
        }
        Some(edge)
    }

    /// IDs aller parallelen Kanten zwischen `a` und `b` in Einfügereihenfolge.
    pub fn edges_between(&self, a: RegionNode, b: RegionNode) -> &[EdgeId] {
        self.pair_index
            .get(&pair_key(a, b))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterator über alle Kanten in Einfügereihenfolge.
    pub fn edges(&self) -> impl Iterator<Item = &RegionEdge> {
        self.edges.values()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Grad eines Knotens: jede Kante zählt einmal pro Endpunkt.
    pub fn degree(&self, node: RegionNode) -> usize {
        self.edges
            .values()
            .map(|e| usize::from(e.a == node) + usize::from(e.b == node))
            .sum()
    }

    /// Grade aller vier Knoten.
    pub fn degrees(&self) -> BTreeMap<RegionNode, usize> {
        let mut degrees: BTreeMap<RegionNode, usize> =
            RegionNode::ALL.into_iter().map(|n| (n, 0)).collect();
        for edge in self.edges.values() {
            *degrees.entry(edge.a).or_default() += 1;
            *degrees.entry(edge.b).or_default() += 1;
        }
        degrees
    }

    /// Inzidente Kanten eines Knotens als `(Kante, Nachbar)` in Einfügereihenfolge.
    pub fn incident_edges(&self, node: RegionNode) -> Vec<(EdgeId, RegionNode)> {
        self.edges
            .values()
            .filter_map(|e| e.other(node).map(|other| (e.id, other)))
            .collect()
    }

    /// Prüft, ob alle `nodes` über Kanten untereinander erreichbar sind.
    ///
    /// Leere oder einelementige Mengen gelten als zusammenhängend.
    pub fn is_connected_over(&self, nodes: &[RegionNode]) -> bool {
        let Some(&start) = nodes.first() else {
            return true;
        };

        let mut visited = [false; 4];
        let mut stack = vec![start];
        visited[start.index()] = true;

        while let Some(current) = stack.pop() {
            for edge in self.edges.values() {
                let Some(next) = edge.other(current) else {
                    continue;
                };
                if nodes.contains(&next) && !visited[next.index()] {
                    visited[next.index()] = true;
                    stack.push(next);
                }
            }
        }

        nodes.iter().all(|n| visited[n.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> RegionNode {
        RegionNode::from_id(id).expect("gültige Knoten-ID")
    }

    #[test]
    fn new_graph_has_four_isolated_nodes() {
        let graph = RegionGraph::new();
        assert_eq!(graph.nodes().len(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.degrees().values().all(|d| *d == 0));
    }

    #[test]
    fn parallel_edges_are_tracked_individually() {
        let mut graph = RegionGraph::new();
        let first = graph.add_edge(node("1"), node("2"));
        let second = graph.add_edge(node("2"), node("1"));

        assert_ne!(first, second);
        assert_eq!(graph.edges_between(node("1"), node("2")), &[first, second]);
        assert_eq!(graph.degree(node("1")), 2);

        let removed = graph.remove_edge(first).expect("Kante erwartet");
        assert_eq!(removed.id, first);
        assert_eq!(graph.edges_between(node("2"), node("1")), &[second]);
        assert_eq!(graph.degree(node("2")), 1);
    }

    #[test]
    fn removal_keeps_insertion_order() {
        let mut graph = RegionGraph::new();
        let a = graph.add_edge(node("1"), node("2"));
        let b = graph.add_edge(node("2"), node("3"));
        let c = graph.add_edge(node("3"), node("4"));
        graph.remove_edge(b);

        let ids: Vec<EdgeId> = graph.edges().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn connectivity_over_subset() {
        let mut graph = RegionGraph::new();
        graph.add_edge(node("1"), node("2"));
        graph.add_edge(node("3"), node("4"));

        assert!(graph.is_connected_over(&[node("1"), node("2")]));
        assert!(!graph.is_connected_over(&RegionNode::ALL));
        assert!(graph.is_connected_over(&[]));

        graph.add_edge(node("2"), node("3"));
        assert!(graph.is_connected_over(&RegionNode::ALL));
    }
}
