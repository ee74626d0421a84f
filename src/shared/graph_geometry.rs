//! Geometrie des Graph-Panels: Knotenpositionen und Kantenzüge.
//!
//! Einzelne Kanten sind gerade Strecken von Knotenrand zu Knotenrand.
//! Mehrere parallele Kanten werden zu quadratischen Bézier-Kurven, deren
//! Kontrollpunkte entlang der Normalen gefächert sind.

use glam::Vec2;

use super::AppOptions;
use crate::core::{LayoutRect, RegionGraph, RegionNode};

/// Positionen der vier Knoten: 1 oben, 2 links, 3 rechts, 4 unten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphPanelLayout {
    pub center: Vec2,
    pub node_radius: f32,
    positions: [Vec2; 4],
}

impl GraphPanelLayout {
    pub fn compute(panel: LayoutRect, options: &AppOptions) -> Self {
        let center = panel.center();
        let offset = options.graph_node_offset;
        Self {
            center,
            node_radius: options.graph_node_radius,
            positions: [
                center + Vec2::new(0.0, -offset),
                center + Vec2::new(-offset, 0.0),
                center + Vec2::new(offset, 0.0),
                center + Vec2::new(0.0, offset),
            ],
        }
    }

    pub fn node_position(&self, node: RegionNode) -> Vec2 {
        self.positions[node.index()]
    }

    /// Alle Knoten mit Position, sortiert nach ID.
    pub fn nodes(&self) -> impl Iterator<Item = (RegionNode, Vec2)> + '_ {
        RegionNode::ALL
            .into_iter()
            .map(|node| (node, self.node_position(node)))
    }
}

/// Eine gezeichnete Graph-Kante als Polylinie.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdgeShape {
    pub a: RegionNode,
    pub b: RegionNode,
    pub points: Vec<Vec2>,
}

impl GraphEdgeShape {
    pub fn is_curved(&self) -> bool {
        self.points.len() > 2
    }
}

/// Erzeugt die Kantenzüge für alle Kanten des Graphen.
///
/// Knotenpaare werden in der Reihenfolge ihres ersten Auftretens verarbeitet.
pub fn edge_shapes(
    graph: &RegionGraph,
    layout: &GraphPanelLayout,
    options: &AppOptions,
) -> Vec<GraphEdgeShape> {
    let mut shapes = Vec::with_capacity(graph.edge_count());
    let mut seen: Vec<(RegionNode, RegionNode)> = Vec::new();

    for edge in graph.edges() {
        let key = edge.key();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);

        let (u, v) = key;
        let count = graph.edges_between(u, v).len();
        let center_u = layout.node_position(u);
        let center_v = layout.node_position(v);
        let direction = center_v - center_u;
        if direction.length_squared() == 0.0 {
            continue;
        }
        let direction = direction.normalize();
        let radius = layout.node_radius;

        if count == 1 {
            shapes.push(GraphEdgeShape {
                a: u,
                b: v,
                points: vec![center_u + direction * radius, center_v - direction * radius],
            });
            continue;
        }

        let normal = direction.perp();
        for i in 0..count {
            let offset = (i as f32 - (count as f32 - 1.0) / 2.0) * options.parallel_edge_spacing;
            let control = center_u.lerp(center_v, 0.5) + normal * offset * options.parallel_edge_bend;
            let start = center_u + (control - center_u).normalize_or_zero() * radius;
            let end = center_v + (control - center_v).normalize_or_zero() * radius;
            shapes.push(GraphEdgeShape {
                a: u,
                b: v,
                points: quadratic_bezier(start, control, end, options.curve_samples),
            });
        }
    }

    shapes
}

/// Tastet eine quadratische Bézier-Kurve mit `steps` Segmenten ab (De Casteljau).
pub fn quadratic_bezier(start: Vec2, control: Vec2, end: Vec2, steps: usize) -> Vec<Vec2> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|step| {
            let t = step as f32 / steps as f32;
            start.lerp(control, t).lerp(control.lerp(end, t), t)
        })
        .collect()
}
