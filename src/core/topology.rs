//! Brücken-Topologie: welche Anker-Paare eine zulässige Brücke bilden.
//!
//! Die Regeln sind als deklarative Tabelle hinterlegt: pro ungeordnetem
//! Regionspaar eine reine Index-Abbildung von der ersten auf die zweite Region.
//! Dieselbe Tabelle validiert abgeschlossene Drags und liefert die
//! Highlight-Menge während eines laufenden Drags.

use super::{Anchor, Region};

/// Bildet den Index eines Ankers der ersten Region auf den einzig zulässigen
/// Partner-Index der zweiten Region ab (`None` = kein Partner).
pub type IndexMapping = fn(usize) -> Option<usize>;

/// Eine Zeile der Topologie-Tabelle.
#[derive(Clone, Copy)]
pub struct TopologyRule {
    pub first: Region,
    pub second: Region,
    pub map: IndexMapping,
}

fn north_to_kneiphof(i: usize) -> Option<usize> {
    (i < 4).then_some(i + 4)
}

fn north_to_lomse(i: usize) -> Option<usize> {
    (4..8).contains(&i).then_some(i)
}

fn south_to_kneiphof(i: usize) -> Option<usize> {
    (i < 4).then(|| 3 - i)
}

fn south_to_lomse(i: usize) -> Option<usize> {
    (4..8).contains(&i).then(|| 7 - i)
}

fn kneiphof_to_lomse(i: usize) -> Option<usize> {
    (8..11).contains(&i).then(|| 18 - i)
}

/// Vollständige Topologie. Nicht gelistete Paare (inkl. gleiche Region) sind unzulässig.
pub const TOPOLOGY_RULES: [TopologyRule; 5] = [
    TopologyRule {
        first: Region::North,
        second: Region::Kneiphof,
        map: north_to_kneiphof,
    },
    TopologyRule {
        first: Region::North,
        second: Region::Lomse,
        map: north_to_lomse,
    },
    TopologyRule {
        first: Region::South,
        second: Region::Kneiphof,
        map: south_to_kneiphof,
    },
    TopologyRule {
        first: Region::South,
        second: Region::Lomse,
        map: south_to_lomse,
    },
    TopologyRule {
        first: Region::Kneiphof,
        second: Region::Lomse,
        map: kneiphof_to_lomse,
    },
];

/// Findet die Regel für ein ungeordnetes Regionspaar.
///
/// Der `bool` ist `true`, wenn `a` der zweiten Region der Regel entspricht.
pub fn rule_for(a: Region, b: Region) -> Option<(&'static TopologyRule, bool)> {
    TOPOLOGY_RULES.iter().find_map(|rule| {
        if rule.first == a && rule.second == b {
            Some((rule, false))
        } else if rule.first == b && rule.second == a {
            Some((rule, true))
        } else {
            None
        }
    })
}

/// Prüft, ob zwischen zwei Ankern eine Brücke gebaut werden darf (symmetrisch).
pub fn is_valid_connection(a: &Anchor, b: &Anchor) -> bool {
    let Some((rule, swapped)) = rule_for(a.region(), b.region()) else {
        return false;
    };
    let (first, second) = if swapped { (b, a) } else { (a, b) };
    (rule.map)(first.index()) == Some(second.index())
}

/// Alle Anker anderer Regionen, die mit `selected` eine gültige Brücke bilden.
pub fn valid_targets(selected: &Anchor, anchors: &[Anchor]) -> Vec<Anchor> {
    anchors
        .iter()
        .filter(|candidate| candidate.region() != selected.region())
        .filter(|candidate| is_valid_connection(selected, candidate))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{generate_anchors, LayoutRect};
    use glam::Vec2;

    fn anchor(region: Region, index: usize) -> Anchor {
        Anchor::new(region, index, Vec2::ZERO)
    }

    fn all_anchors() -> Vec<Anchor> {
        generate_anchors(LayoutRect::new(0.0, 0.0, 800.0, 600.0))
    }

    #[test]
    fn documented_pairs_are_valid() {
        let pairs = [
            (anchor(Region::North, 0), anchor(Region::Kneiphof, 4)),
            (anchor(Region::North, 3), anchor(Region::Kneiphof, 7)),
            (anchor(Region::North, 5), anchor(Region::Lomse, 5)),
            (anchor(Region::South, 0), anchor(Region::Kneiphof, 3)),
            (anchor(Region::South, 2), anchor(Region::Kneiphof, 1)),
            (anchor(Region::South, 4), anchor(Region::Lomse, 3)),
            (anchor(Region::South, 7), anchor(Region::Lomse, 0)),
            (anchor(Region::Kneiphof, 8), anchor(Region::Lomse, 10)),
            (anchor(Region::Kneiphof, 9), anchor(Region::Lomse, 9)),
        ];
        for (a, b) in pairs {
            assert!(is_valid_connection(&a, &b), "{} – {}", a.id, b.id);
            assert!(is_valid_connection(&b, &a), "{} – {}", b.id, a.id);
        }
    }

    #[test]
    fn wrong_bands_are_rejected() {
        assert!(!is_valid_connection(
            &anchor(Region::North, 4),
            &anchor(Region::Kneiphof, 8)
        ));
        assert!(!is_valid_connection(
            &anchor(Region::North, 0),
            &anchor(Region::Lomse, 0)
        ));
        assert!(!is_valid_connection(
            &anchor(Region::South, 0),
            &anchor(Region::Kneiphof, 4)
        ));
        assert!(!is_valid_connection(
            &anchor(Region::Kneiphof, 8),
            &anchor(Region::Lomse, 8)
        ));
        assert!(!is_valid_connection(
            &anchor(Region::North, 1),
            &anchor(Region::South, 1)
        ));
    }

    #[test]
    fn connection_is_symmetric_for_all_pairs() {
        let anchors = all_anchors();
        for a in &anchors {
            for b in &anchors {
                assert_eq!(is_valid_connection(a, b), is_valid_connection(b, a));
            }
        }
    }

    #[test]
    fn same_region_is_never_valid() {
        let anchors = all_anchors();
        for a in &anchors {
            for b in anchors.iter().filter(|b| b.region() == a.region()) {
                assert!(!is_valid_connection(a, b));
            }
        }
    }

    #[test]
    fn every_anchor_has_exactly_one_partner() {
        // Die Tabelle beschreibt 4+4+4+4+3 = 19 Brückenplätze, jeder Anker gehört zu genau einem.
        let anchors = all_anchors();
        for a in &anchors {
            let targets = valid_targets(a, &anchors);
            assert_eq!(targets.len(), 1, "Anker {}", a.id);
        }
    }

    #[test]
    fn highlight_set_for_north_0() {
        let anchors = all_anchors();
        let north_0 = anchors[0];
        let targets = valid_targets(&north_0, &anchors);
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].id.to_string(), "kneiphof_4");
    }
}
