//! Rein-mathematische Geometrie-Hilfen: Layout-Rechtecke und Punkt-Strecken-Abstand.

use glam::Vec2;

/// Achsenparalleles Rechteck in Bildschirm-Pixeln (Ursprung oben links).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutRect {
    /// Linke obere Ecke
    pub min: Vec2,
    /// Breite und Höhe
    pub size: Vec2,
}

impl LayoutRect {
    /// Erstellt ein Rechteck aus Ursprung und Ausdehnung.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width.max(0.0), height.max(0.0)),
        }
    }

    pub fn x(&self) -> f32 {
        self.min.x
    }

    pub fn y(&self) -> f32 {
        self.min.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Rechte Kante (x + Breite).
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    /// Untere Kante (y + Höhe).
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Punkt bei relativen Anteilen `(fx, fy)` der Breite/Höhe.
    pub fn at_fraction(&self, fx: f32, fy: f32) -> Vec2 {
        self.min + self.size * Vec2::new(fx, fy)
    }

    /// Verkleinert das Rechteck an allen Seiten um `margin`.
    pub fn inset(&self, margin: f32) -> Self {
        Self::new(
            self.min.x + margin,
            self.min.y + margin,
            self.size.x - 2.0 * margin,
            self.size.y - 2.0 * margin,
        )
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }
}

/// Abstand eines Punkts zur Strecke `start`–`end`.
///
/// Projektion auf die Gerade, Parameter auf [0, 1] geklemmt.
/// Strecken der Länge 0 liefern den Punktabstand zu `start`.
pub fn point_segment_distance(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let delta = end - start;
    let length_sq = delta.length_squared();
    if length_sq == 0.0 {
        return point.distance(start);
    }

    let t = ((point - start).dot(delta) / length_sq).clamp(0.0, 1.0);
    point.distance(start + delta * t)
}
