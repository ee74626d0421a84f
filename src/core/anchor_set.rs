//! Generierte Anker eines Karten-Layouts inklusive Spatial-Index.

use glam::Vec2;

use super::topology::valid_targets;
use super::{generate_anchors, Anchor, AnchorId, AnchorIndex, LayoutRect, Region};

/// Alle Anker für ein bestimmtes Kartenrechteck.
///
/// Wird bei jeder Änderung des Rechtecks komplett neu erzeugt.
#[derive(Debug, Clone)]
pub struct AnchorSet {
    rect: LayoutRect,
    anchors: Vec<Anchor>,
    index: AnchorIndex,
}

impl AnchorSet {
    /// Erzeugt Anker und Index für `rect`.
    ///
    /// Degenerierte Rechtecke (< 1 px) bekommen keinen Index; Hit-Tests liefern dann `None`.
    pub fn generate(rect: LayoutRect) -> Self {
        let anchors = generate_anchors(rect);
        let index = if rect.size.min_element() >= 1.0 {
            AnchorIndex::from_anchors(&anchors)
        } else {
            AnchorIndex::empty()
        };
        Self {
            rect,
            anchors,
            index,
        }
    }

    pub fn rect(&self) -> LayoutRect {
        self.rect
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Anker unter dem Zeiger (Abstand ≤ `radius`), falls vorhanden.
    pub fn anchor_at(&self, point: Vec2, radius: f32) -> Option<Anchor> {
        let hit = self.index.anchor_at(point, radius)?;
        self.anchors.get(hit.slot).copied()
    }

    pub fn find(&self, id: AnchorId) -> Option<Anchor> {
        self.anchors.iter().find(|a| a.id == id).copied()
    }

    /// Sucht einen Anker anhand seiner Textform (`"north_3"`).
    pub fn find_by_name(&self, name: &str) -> Option<Anchor> {
        let id: AnchorId = name.parse().ok()?;
        self.find(id)
    }

    pub fn anchors_in_region(&self, region: Region) -> impl Iterator<Item = &Anchor> {
        self.anchors.iter().filter(move |a| a.region() == region)
    }

    /// Highlight-Menge für einen Drag ab `selected`.
    pub fn valid_targets(&self, selected: &Anchor) -> Vec<Anchor> {
        valid_targets(selected, &self.anchors)
    }
}

impl Default for AnchorSet {
    fn default() -> Self {
        Self::generate(LayoutRect::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_finds_generated_anchor() {
        let set = AnchorSet::generate(LayoutRect::new(0.0, 0.0, 800.0, 600.0));
        let north_2 = set.find_by_name("north_2").expect("north_2 erwartet");

        let hit = set
            .anchor_at(north_2.position + Vec2::new(3.0, -2.0), 6.0)
            .expect("Treffer erwartet");
        assert_eq!(hit.id, north_2.id);
        assert!(set.anchor_at(Vec2::new(5.0, 5.0), 6.0).is_none());
    }

    #[test]
    fn degenerate_rect_has_anchors_but_no_hits() {
        let set = AnchorSet::default();
        assert_eq!(set.len(), 38);
        assert!(set.anchor_at(Vec2::ZERO, 6.0).is_none());
    }

    #[test]
    fn region_filter_counts() {
        let set = AnchorSet::generate(LayoutRect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(set.anchors_in_region(Region::Lomse).count(), 11);
        assert_eq!(set.anchors_in_region(Region::South).count(), 8);
    }
}
