//! Die vier Landmassen von Königsberg und ihre logischen Graph-Knoten.

use std::fmt;

/// Landmasse, auf der ein Brücken-Anker liegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Nördliches Ufer
    North,
    /// Südliches Ufer
    South,
    /// Insel Kneiphof (links)
    Kneiphof,
    /// Insel Lomse (rechts)
    Lomse,
}

impl Region {
    /// Alle Regionen in Generierungsreihenfolge der Anker.
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::Kneiphof, Region::Lomse];

    /// Name der Region, wie er in Anker-IDs verwendet wird.
    pub fn as_str(self) -> &'static str {
        match self {
            Region::North => "north",
            Region::South => "south",
            Region::Kneiphof => "kneiphof",
            Region::Lomse => "lomse",
        }
    }

    /// Parst einen Regionsnamen (`"north"`, `"kneiphof"`, …).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.as_str() == name)
    }

    /// Anzahl der Anker dieser Region.
    pub fn anchor_count(self) -> usize {
        match self {
            Region::North | Region::South => 8,
            Region::Kneiphof | Region::Lomse => 11,
        }
    }

    /// Logischer Graph-Knoten dieser Region.
    pub fn node(self) -> RegionNode {
        match self {
            Region::North => RegionNode(1),
            Region::Kneiphof => RegionNode(2),
            Region::Lomse => RegionNode(3),
            Region::South => RegionNode(4),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Einer der vier festen Knoten des Multigraphen (`"1"` bis `"4"`).
///
/// Die Ordnung entspricht der lexikographischen Ordnung der IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionNode(u8);

impl RegionNode {
    /// Alle Knoten, sortiert nach ID.
    pub const ALL: [RegionNode; 4] = [RegionNode(1), RegionNode(2), RegionNode(3), RegionNode(4)];

    /// Textuelle Knoten-ID (`"1"`..`"4"`).
    pub fn id(self) -> &'static str {
        match self.0 {
            1 => "1",
            2 => "2",
            3 => "3",
            _ => "4",
        }
    }

    /// Position des Knotens in `ALL` (0-basiert).
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Region, die diesem Knoten zugeordnet ist.
    pub fn region(self) -> Region {
        match self.0 {
            1 => Region::North,
            2 => Region::Kneiphof,
            3 => Region::Lomse,
            _ => Region::South,
        }
    }

    /// Sucht einen Knoten anhand seiner textuellen ID.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|node| node.id() == id)
    }
}

impl fmt::Display for RegionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
