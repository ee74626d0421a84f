//! Euler-Analyse des Regions-Multigraphen.
//!
//! Reine Funktion über einem Graph-Snapshot: Grade, Zusammenhang über den
//! Knoten mit Kanten, Klassifikation und (falls vorhanden) ein konkreter
//! Euler-Weg per Hierholzer. Das Ergebnis wird nach jeder Änderung komplett
//! neu berechnet.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use super::{EdgeId, RegionGraph, RegionNode};

/// Standardbreite, ab der ein Weg auf mehrere Zeilen umbrochen wird (Zeichen).
pub const DEFAULT_WALK_LINE_WIDTH: usize = 30;

const WALK_SEPARATOR: &str = " → ";

/// Ergebnis der Euler-Prüfung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Noch keine Brücke gebaut
    NoEdges,
    /// Geschlossener Weg über alle Kanten existiert
    EulerianCircuit,
    /// Nur ein offener Weg zwischen den zwei ungeraden Knoten existiert
    EulerianPath,
    /// Weder Weg noch Kreis
    Neither,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::NoEdges => "no-edges",
            Classification::EulerianCircuit => "eulerian-circuit",
            Classification::EulerianPath => "eulerian-path",
            Classification::Neither => "neither",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Vollständiges Analyse-Ergebnis für das Textpanel.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Grad je Knoten (immer alle vier)
    pub degrees: BTreeMap<RegionNode, usize>,
    pub classification: Classification,
    /// Knotenfolge des gefundenen Kreises/Wegs
    pub walk: Option<Vec<RegionNode>>,
    /// Knoten mit ungeradem Grad, sortiert
    pub odd_nodes: Vec<RegionNode>,
    /// Knoten ohne Kanten, sortiert
    pub isolated_nodes: Vec<RegionNode>,
    /// Zusammenhang über alle Knoten mit Grad > 0
    pub connected: bool,
    /// Fertig formatierte Zeilen für die Anzeige
    pub diagnostic_lines: Vec<String>,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        analyze(&RegionGraph::new())
    }
}

/// Analysiert den Graphen mit der Standard-Zeilenbreite.
pub fn analyze(graph: &RegionGraph) -> AnalysisResult {
    analyze_with_width(graph, DEFAULT_WALK_LINE_WIDTH)
}

/// Analysiert den Graphen; Wege werden ab `line_width` Zeichen umbrochen.
pub fn analyze_with_width(graph: &RegionGraph, line_width: usize) -> AnalysisResult {
    let degrees = graph.degrees();
    let odd_nodes: Vec<RegionNode> = degrees
        .iter()
        .filter(|(_, d)| *d % 2 == 1)
        .map(|(n, _)| *n)
        .collect();
    let active_nodes: Vec<RegionNode> = degrees
        .iter()
        .filter(|(_, d)| **d > 0)
        .map(|(n, _)| *n)
        .collect();
    let isolated_nodes: Vec<RegionNode> = degrees
        .iter()
        .filter(|(_, d)| **d == 0)
        .map(|(n, _)| *n)
        .collect();

    let mut lines = Vec::new();
    lines.push("Node degrees:".to_string());
    for (node, degree) in &degrees {
        lines.push(format!("  - Node {node}: {degree}"));
    }
    lines.push(String::new());

    if graph.is_empty() {
        lines.push("Conclusion: No bridges have been built yet.".to_string());
        lines.push("Drag between landmasses to build a bridge!".to_string());
        return AnalysisResult {
            degrees,
            classification: Classification::NoEdges,
            walk: None,
            odd_nodes,
            isolated_nodes,
            connected: true,
            diagnostic_lines: lines,
        };
    }

    let connected = graph.is_connected_over(&active_nodes);

    let (classification, walk) = if !connected || !isolated_nodes.is_empty() {
        push_neither_conclusion(&mut lines);
        if !connected {
            lines.push("Reason: The graph is not connected.".to_string());
        }
        if !isolated_nodes.is_empty() {
            lines.push(format!("Isolated nodes: {}.", join_nodes(&isolated_nodes)));
        }
        (Classification::Neither, None)
    } else if odd_nodes.is_empty() {
        lines.push("Conclusion: An Eulerian circuit exists.".to_string());
        let walk = active_nodes
            .first()
            .and_then(|start| eulerian_walk(graph, *start));
        match &walk {
            Some(walk) => {
                lines.push("Eulerian circuit:".to_string());
                push_wrapped_walk(&mut lines, walk, line_width);
            }
            None => {
                lines.push("(Every bridge can be crossed exactly once".to_string());
                lines.push("and the walk returns to its start.)".to_string());
            }
        }
        (Classification::EulerianCircuit, walk)
    } else if odd_nodes.len() == 2 {
        lines.push("Conclusion: Only an Eulerian path exists.".to_string());
        let walk = eulerian_walk(graph, odd_nodes[0]);
        match &walk {
            Some(walk) => {
                lines.push("Eulerian path:".to_string());
                push_wrapped_walk(&mut lines, walk, line_width);
            }
            None => {
                lines.push("Start at one odd-degree node and".to_string());
                lines.push(format!(
                    "end at the other: {}, {}.",
                    odd_nodes[0], odd_nodes[1]
                ));
            }
        }
        (Classification::EulerianPath, walk)
    } else {
        push_neither_conclusion(&mut lines);
        lines.push(format!(
            "Odd-degree node count is {}: {}.",
            odd_nodes.len(),
            join_nodes(&odd_nodes)
        ));
        (Classification::Neither, None)
    };

    AnalysisResult {
        degrees,
        classification,
        walk,
        odd_nodes,
        isolated_nodes,
        connected,
        diagnostic_lines: lines,
    }
}

fn push_neither_conclusion(lines: &mut Vec<String>) {
    lines.push("Conclusion: No Eulerian path".to_string());
    lines.push("or circuit exists.".to_string());
}

fn join_nodes(nodes: &[RegionNode]) -> String {
    nodes
        .iter()
        .map(|n| n.id())
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_wrapped_walk(lines: &mut Vec<String>, walk: &[RegionNode], line_width: usize) {
    let words: Vec<&str> = walk.iter().map(|n| n.id()).collect();
    lines.extend(wrap_walk(&words, line_width).into_iter().map(|l| format!("  {l}")));
}

/// Verbindet die Knoten mit `" → "` und bricht um, sobald Zeile plus nächstes
/// Wort (ohne Trenner) länger als `line_width` Zeichen würde.
pub fn wrap_walk(words: &[&str], line_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in words {
        let candidate_len = line.chars().count() + word.chars().count();
        if candidate_len > line_width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            if !line.is_empty() {
                line.push_str(WALK_SEPARATOR);
            }
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Konstruiert einen Euler-Weg ab `start` (Hierholzer, iterativ).
///
/// Kanten werden pro Knoten in Einfügereihenfolge abgearbeitet, das Ergebnis
/// ist damit deterministisch. Liefert `None`, wenn nicht alle Kanten
/// erreicht werden (z. B. unzusammenhängender Graph).
pub fn eulerian_walk(graph: &RegionGraph, start: RegionNode) -> Option<Vec<RegionNode>> {
    if graph.is_empty() {
        return None;
    }

    let adjacency: Vec<Vec<(EdgeId, RegionNode)>> = RegionNode::ALL
        .iter()
        .map(|node| graph.incident_edges(*node))
        .collect();
    let mut cursor = [0usize; 4];
    let mut used: HashSet<EdgeId> = HashSet::with_capacity(graph.edge_count());

    let mut stack = vec![start];
    let mut walk = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&current) = stack.last() {
        let slot = current.index();
        let mut next = None;
        while let Some(&(edge_id, other)) = adjacency[slot].get(cursor[slot]) {
            cursor[slot] += 1;
            if used.insert(edge_id) {
                next = Some(other);
                break;
            }
        }

        match next {
            Some(other) => stack.push(other),
            None => {
                stack.pop();
                walk.push(current);
            }
        }
    }

    walk.reverse();
    (walk.len() == graph.edge_count() + 1).then_some(walk)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> RegionNode {
        RegionNode::from_id(id).expect("gültige Knoten-ID")
    }

    fn graph_with(edges: &[(&str, &str)]) -> RegionGraph {
        let mut graph = RegionGraph::new();
        for (a, b) in edges {
            graph.add_edge(node(a), node(b));
        }
        graph
    }

    /// Prüft, dass `walk` jede Kante genau einmal benutzt.
    fn assert_uses_every_edge_once(graph: &RegionGraph, walk: &[RegionNode]) {
        assert_eq!(walk.len(), graph.edge_count() + 1);
        let mut remaining: Vec<(RegionNode, RegionNode)> = graph.edges().map(|e| e.key()).collect();
        for pair in walk.windows(2) {
            let key = if pair[0] <= pair[1] {
                (pair[0], pair[1])
            } else {
                (pair[1], pair[0])
            };
            let pos = remaining
                .iter()
                .position(|k| *k == key)
                .expect("Weg benutzt eine nicht vorhandene Kante");
            remaining.swap_remove(pos);
        }
        assert!(remaining.is_empty());
    }

    #[test]
    fn empty_graph_has_no_edges() {
        let result = analyze(&RegionGraph::new());
        assert_eq!(result.classification, Classification::NoEdges);
        assert_eq!(result.degrees.len(), 4);
        assert!(result.walk.is_none());
        assert_eq!(
            result.diagnostic_lines.last().map(String::as_str),
            Some("Drag between landmasses to build a bridge!")
        );
    }

    #[test]
    fn single_bridge_reports_isolated_nodes() {
        let result = analyze(&graph_with(&[("1", "2")]));
        assert_eq!(result.classification, Classification::Neither);
        assert_eq!(result.degrees[&node("1")], 1);
        assert_eq!(result.degrees[&node("3")], 0);
        assert_eq!(result.isolated_nodes, vec![node("3"), node("4")]);
        assert!(result.connected);
        assert!(result
            .diagnostic_lines
            .contains(&"Isolated nodes: 3, 4.".to_string()));
    }

    #[test]
    fn classic_seven_bridges_are_neither() {
        let graph = graph_with(&[
            ("1", "2"),
            ("1", "2"),
            ("2", "4"),
            ("2", "4"),
            ("1", "3"),
            ("2", "3"),
            ("4", "3"),
        ]);
        let result = analyze(&graph);

        let degrees: Vec<usize> = result.degrees.values().copied().collect();
        assert_eq!(degrees, vec![3, 5, 3, 3]);
        assert_eq!(result.classification, Classification::Neither);
        assert_eq!(result.odd_nodes.len(), 4);
        assert!(result
            .diagnostic_lines
            .contains(&"Odd-degree node count is 4: 1, 2, 3, 4.".to_string()));
    }

    #[test]
    fn four_cycle_is_circuit() {
        let graph = graph_with(&[("1", "2"), ("2", "3"), ("3", "4"), ("4", "1")]);
        let result = analyze(&graph);

        assert_eq!(result.classification, Classification::EulerianCircuit);
        let walk = result.walk.expect("Kreis erwartet");
        assert_eq!(walk.first(), walk.last());
        assert_eq!(walk[0], node("1"));
        assert_uses_every_edge_once(&graph, &walk);
        assert!(result
            .diagnostic_lines
            .contains(&"  1 → 2 → 3 → 4 → 1".to_string()));
    }

    #[test]
    fn two_odd_nodes_give_path_between_them() {
        let graph = graph_with(&[("1", "2"), ("2", "3"), ("3", "4"), ("4", "1"), ("1", "3")]);
        let result = analyze(&graph);

        assert_eq!(result.classification, Classification::EulerianPath);
        assert_eq!(result.odd_nodes, vec![node("1"), node("3")]);
        let walk = result.walk.expect("Weg erwartet");
        assert_eq!(walk.first(), Some(&node("1")));
        assert_eq!(walk.last(), Some(&node("3")));
        assert_uses_every_edge_once(&graph, &walk);
    }

    #[test]
    fn disconnected_graph_is_neither() {
        let graph = graph_with(&[("1", "2"), ("1", "2"), ("3", "4"), ("3", "4")]);
        let result = analyze(&graph);

        assert_eq!(result.classification, Classification::Neither);
        assert!(!result.connected);
        assert!(result.isolated_nodes.is_empty());
        assert!(result
            .diagnostic_lines
            .contains(&"Reason: The graph is not connected.".to_string()));
    }

    #[test]
    fn long_walks_are_wrapped() {
        let words = ["1", "2", "1", "2", "1", "2", "1", "2", "1", "2", "1"];
        let lines = wrap_walk(&words, 30);
        assert_eq!(lines.len(), 2);
        // Trenner zählen bei der Prüfung nicht mit: die erste Zeile wird 33 Zeichen lang
        assert_eq!(lines[0], "1 → 2 → 1 → 2 → 1 → 2 → 1 → 2 → 1");
        assert_eq!(lines[1], "2 → 1");

        let short = wrap_walk(&["1", "2", "1"], 30);
        assert_eq!(short, vec!["1 → 2 → 1".to_string()]);
    }

    #[test]
    fn walk_fails_on_disconnected_graph() {
        let graph = graph_with(&[("1", "2"), ("1", "2"), ("3", "4"), ("3", "4")]);
        assert!(eulerian_walk(&graph, node("1")).is_none());
        assert!(eulerian_walk(&RegionGraph::new(), node("1")).is_none());
    }
}
