//! Gebaute Brücken und der daraus abgeleitete Regions-Multigraph.

use glam::Vec2;
use indexmap::IndexMap;
use thiserror::Error;

use super::geometry::point_segment_distance;
use super::topology::is_valid_connection;
use super::{Anchor, AnchorId, EdgeId, RegionGraph};

/// Stabile ID einer Brücke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BridgeId(u64);

impl BridgeId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Eine gezeichnete Brücke zwischen zwei Ankern.
///
/// Jede Brücke besitzt genau eine Kante im Multigraphen (`edge_id`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bridge {
    pub id: BridgeId,
    pub start: Anchor,
    pub end: Anchor,
    pub edge_id: EdgeId,
}

impl Bridge {
    /// Strecke zwischen den beiden Ankerpositionen.
    pub fn segment(&self) -> (Vec2, Vec2) {
        (self.start.position, self.end.position)
    }

    /// Abstand eines Punkts zur Brückenstrecke.
    pub fn distance_to(&self, point: Vec2) -> f32 {
        point_segment_distance(point, self.start.position, self.end.position)
    }
}

/// Treffer einer Brückensuche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BridgeMatch {
    pub bridge_id: BridgeId,
    pub distance: f32,
}

/// Abgelehnte Brücke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("Brücke {start} → {end} verbindet dieselbe Region")]
    SameRegion { start: AnchorId, end: AnchorId },
    #[error("Brücke {start} → {end} ist laut Topologie nicht erlaubt")]
    InvalidConnection { start: AnchorId, end: AnchorId },
}

/// Alle gebauten Brücken plus Multigraph, immer synchron gehalten.
#[derive(Debug, Clone, Default)]
pub struct BridgeMap {
    bridges: IndexMap<BridgeId, Bridge>,
    graph: RegionGraph,
    next_bridge_id: u64,
}

impl BridgeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut eine Brücke, sofern die Topologie das Anker-Paar erlaubt.
    pub fn add_bridge(&mut self, start: Anchor, end: Anchor) -> Result<BridgeId, BridgeError> {
        if start.region() == end.region() {
            return Err(BridgeError::SameRegion {
                start: start.id,
                end: end.id,
            });
        }
        if !is_valid_connection(&start, &end) {
            return Err(BridgeError::InvalidConnection {
                start: start.id,
                end: end.id,
            });
        }

        let edge_id = self.graph.add_edge(start.node(), end.node());
        self.next_bridge_id += 1;
        let id = BridgeId(self.next_bridge_id);
        self.bridges.insert(
            id,
            Bridge {
                id,
                start,
                end,
                edge_id,
            },
        );
        Ok(id)
    }

    /// Entfernt eine Brücke samt ihrer Kante.
    pub fn remove_bridge(&mut self, id: BridgeId) -> Option<Bridge> {
        let bridge = self.bridges.shift_remove(&id)?;
        self.graph.remove_edge(bridge.edge_id);
        Some(bridge)
    }

    /// Nächstgelegene Brücke mit Abstand strikt kleiner als `max_distance`.
    ///
    /// Bei gleichem Abstand gewinnt die früher gebaute Brücke.
    pub fn nearest_bridge(&self, point: Vec2, max_distance: f32) -> Option<BridgeMatch> {
        let mut best: Option<BridgeMatch> = None;
        for bridge in self.bridges.values() {
            let distance = bridge.distance_to(point);
            if distance >= max_distance {
                continue;
            }
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(BridgeMatch {
                    bridge_id: bridge.id,
                    distance,
                });
            }
        }
        best
    }

    /// Entfernt die nächstgelegene Brücke in Reichweite (genau eine Kante).
    pub fn remove_bridge_near(&mut self, point: Vec2, max_distance: f32) -> Option<Bridge> {
        let hit = self.nearest_bridge(point, max_distance)?;
        self.remove_bridge(hit.bridge_id)
    }

    /// Übernimmt neue Ankerpositionen nach einer Layout-Änderung (Zuordnung per ID).
    pub fn relayout(&mut self, anchors: &[Anchor]) {
        let lookup = |id: AnchorId| anchors.iter().find(|a| a.id == id).map(|a| a.position);
        for bridge in self.bridges.values_mut() {
            if let Some(position) = lookup(bridge.start.id) {
                bridge.start.position = position;
            }
            if let Some(position) = lookup(bridge.end.id) {
                bridge.end.position = position;
            }
        }
    }

    /// Alle Brücken in Baureihenfolge.
    pub fn bridges(&self) -> impl Iterator<Item = &Bridge> {
        self.bridges.values()
    }

    pub fn bridge_count(&self) -> usize {
        self.bridges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bridges.is_empty()
    }

    /// Read-only Zugriff auf den Multigraphen.
    pub fn graph(&self) -> &RegionGraph {
        &self.graph
    }
}

#[cfg(test)]
mod tests;
