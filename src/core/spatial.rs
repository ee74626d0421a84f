//! Spatial-Index (KD-Tree) für Anker-Hit-Tests.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::{Anchor, AnchorId};

/// Ergebnis eines Hit-Tests gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorMatch {
    /// Position des Ankers in der indexierten Liste
    pub slot: usize,
    /// ID des gefundenen Ankers
    pub anchor_id: AnchorId,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über einer Anker-Liste.
#[derive(Debug, Clone)]
pub struct AnchorIndex {
    tree: KdTree<f64, 2>,
    anchor_ids: Vec<AnchorId>,
    positions: Vec<Vec2>,
}

impl AnchorIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            anchor_ids: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Baut einen neuen Index; `slot` entspricht dem Index in `anchors`.
    pub fn from_anchors(anchors: &[Anchor]) -> Self {
        let entries: Vec<[f64; 2]> = anchors
            .iter()
            .map(|a| [a.position.x as f64, a.position.y as f64])
            .collect();

        Self {
            tree: (&entries).into(),
            anchor_ids: anchors.iter().map(|a| a.id).collect(),
            positions: anchors.iter().map(|a| a.position).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.anchor_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchor_ids.is_empty()
    }

    /// Findet den nächsten Anker mit Abstand ≤ `radius`.
    ///
    /// Bei gleichem Abstand gewinnt der Anker mit kleinerem Slot.
    pub fn anchor_at(&self, query: Vec2, radius: f32) -> Option<AnchorMatch> {
        self.within_radius(query, radius).into_iter().next()
    }

    /// Findet alle Anker mit Abstand ≤ `radius`, sortiert nach Abstand und Slot.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<AnchorMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        // KD-Tree als Vorfilter mit Toleranz, exakte Prüfung auf den f32-Positionen
        let search = (radius + 1.0) as f64;
        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], search * search)
            .into_iter()
            .filter_map(|entry| {
                let slot = entry.item as usize;
                let distance = self.positions.get(slot)?.distance(query);
                (distance <= radius).then(|| AnchorMatch {
                    slot,
                    anchor_id: self.anchor_ids[slot],
                    distance,
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.slot.cmp(&b.slot)));
        results
    }
}
