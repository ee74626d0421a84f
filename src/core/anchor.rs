//! Brücken-Anker: feste Punkte an den Ufern, an denen Brücken ansetzen können.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;

use super::{LayoutRect, Region, RegionNode};

/// X-Band der Ufer-Anker in Richtung Kneiphof (Indizes 0–3).
const BANK_LEFT_BAND: (f32, f32) = (0.28, 0.44);
/// X-Band der Ufer-Anker in Richtung Lomse (Indizes 4–7).
const BANK_RIGHT_BAND: (f32, f32) = (0.66, 0.82);
const NORTH_BANK_Y: f32 = 0.25;
const SOUTH_BANK_Y: f32 = 0.75;

const KNEIPHOF_CENTER: (f32, f32) = (0.35, 0.5);
const LOMSE_CENTER: (f32, f32) = (0.75, 0.5);
/// Halbachsen der Inselellipsen relativ zu Breite/Höhe.
const ISLAND_HALF_AXIS: f32 = 0.175;
/// Anker liegen leicht innerhalb des Inselrands.
const ISLAND_ANCHOR_SCALE: f32 = 0.9;
/// Winkelschritt der oberen/unteren Inselbänder (Grad).
const ISLAND_BAND_STEP_DEG: f32 = 13.33;
const ISLAND_UPPER_START_DEG: f32 = 70.0;
const ISLAND_LOWER_START_DEG: f32 = 250.0;
/// Winkelschritt der drei Anker zwischen den Inseln (Grad).
const ISLAND_INNER_STEP_DEG: f32 = 20.0;
const KNEIPHOF_INNER_START_DEG: f32 = -20.0;
const LOMSE_INNER_START_DEG: f32 = 160.0;

/// Identität eines Ankers: Region plus Ordinalindex innerhalb der Region.
///
/// Textform wie `"north_3"` oder `"kneiphof_10"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId {
    pub region: Region,
    pub index: usize,
}

impl AnchorId {
    pub fn new(region: Region, index: usize) -> Self {
        Self { region, index }
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.region, self.index)
    }
}

impl FromStr for AnchorId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, index) = s
            .rsplit_once('_')
            .ok_or_else(|| format!("Ungültige Anker-ID: {s}"))?;
        let region = Region::from_name(name).ok_or_else(|| format!("Unbekannte Region: {name}"))?;
        let index: usize = index
            .parse()
            .map_err(|_| format!("Ungültiger Anker-Index: {index}"))?;
        if index >= region.anchor_count() {
            return Err(format!("Anker-Index {index} außerhalb von {region}"));
        }
        Ok(Self { region, index })
    }
}

/// Ein konkreter Anker mit Bildschirmposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub id: AnchorId,
    pub position: Vec2,
}

impl Anchor {
    pub fn new(region: Region, index: usize, position: Vec2) -> Self {
        Self {
            id: AnchorId::new(region, index),
            position,
        }
    }

    pub fn region(&self) -> Region {
        self.id.region
    }

    pub fn index(&self) -> usize {
        self.id.index
    }

    /// Graph-Knoten der Region dieses Ankers.
    pub fn node(&self) -> RegionNode {
        self.id.region.node()
    }

    /// Hit-Test: euklidischer Abstand ≤ `radius`.
    pub fn contains_point(&self, point: Vec2, radius: f32) -> bool {
        self.position.distance_squared(point) <= radius * radius
    }
}

/// Erzeugt alle 38 Anker für das gegebene Kartenrechteck.
///
/// Deterministisch; Reihenfolge: North (0–7), South (0–7), Kneiphof (0–10), Lomse (0–10).
pub fn generate_anchors(rect: LayoutRect) -> Vec<Anchor> {
    let mut anchors = Vec::with_capacity(38);
    push_bank_anchors(&mut anchors, rect, Region::North, NORTH_BANK_Y);
    push_bank_anchors(&mut anchors, rect, Region::South, SOUTH_BANK_Y);
    push_island_anchors(
        &mut anchors,
        rect,
        Region::Kneiphof,
        KNEIPHOF_CENTER,
        KNEIPHOF_INNER_START_DEG,
    );
    push_island_anchors(
        &mut anchors,
        rect,
        Region::Lomse,
        LOMSE_CENTER,
        LOMSE_INNER_START_DEG,
    );
    anchors
}

fn push_bank_anchors(anchors: &mut Vec<Anchor>, rect: LayoutRect, region: Region, fy: f32) {
    let y = rect.y() + rect.height() * fy;
    for (offset, (start, end)) in [(0, BANK_LEFT_BAND), (4, BANK_RIGHT_BAND)] {
        let x_start = rect.x() + rect.width() * start;
        let x_end = rect.x() + rect.width() * end;
        for i in 0..4 {
            let x = x_start + (x_end - x_start) * i as f32 / 3.0;
            anchors.push(Anchor::new(region, offset + i, Vec2::new(x, y)));
        }
    }
}

fn push_island_anchors(
    anchors: &mut Vec<Anchor>,
    rect: LayoutRect,
    region: Region,
    center: (f32, f32),
    inner_start_deg: f32,
) {
    let center = rect.at_fraction(center.0, center.1);
    let half_axes = rect.size * ISLAND_HALF_AXIS * ISLAND_ANCHOR_SCALE;
    let on_ellipse = |deg: f32| {
        let angle = deg.to_radians();
        center + half_axes * Vec2::new(angle.cos(), angle.sin())
    };

    for i in 0..4 {
        let deg = ISLAND_UPPER_START_DEG + i as f32 * ISLAND_BAND_STEP_DEG;
        anchors.push(Anchor::new(region, i, on_ellipse(deg)));
    }
    for i in 0..4 {
        let deg = ISLAND_LOWER_START_DEG + i as f32 * ISLAND_BAND_STEP_DEG;
        anchors.push(Anchor::new(region, 4 + i, on_ellipse(deg)));
    }
    for i in 0..3 {
        let deg = inner_start_deg + i as f32 * ISLAND_INNER_STEP_DEG;
        anchors.push(Anchor::new(region, 8 + i, on_ellipse(deg)));
    }
}
