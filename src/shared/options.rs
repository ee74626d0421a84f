//! Zentrale Konfiguration für den Königsberg-Simulator.
//!
//! `AppOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Interaktion ─────────────────────────────────────────────────────

/// Hit-Radius der Anker in Pixeln.
pub const ANCHOR_HIT_RADIUS: f32 = 6.0;
/// Maximaler Zeitabstand zweier Klicks für einen Doppelklick (ms, strikt kleiner).
pub const DOUBLE_CLICK_THRESHOLD_MS: u64 = 500;
/// Maximaler Abstand zweier Klicks für einen Doppelklick (px, strikt kleiner).
pub const DOUBLE_CLICK_DISTANCE: f32 = 10.0;
/// Maximaler Abstand zur Brückenlinie beim Entfernen per Doppelklick (px, strikt kleiner).
pub const BRIDGE_REMOVAL_DISTANCE: f32 = 15.0;

// ── Graph-Panel ─────────────────────────────────────────────────────

/// Radius der vier Graph-Knoten.
pub const GRAPH_NODE_RADIUS: f32 = 25.0;
/// Abstand der Knoten vom Panel-Mittelpunkt.
pub const GRAPH_NODE_OFFSET: f32 = 80.0;
/// Abstand paralleler Kanten.
pub const PARALLEL_EDGE_SPACING: f32 = 8.0;
/// Verstärkung des Kontrollpunkt-Versatzes paralleler Kanten.
pub const PARALLEL_EDGE_BEND: f32 = 2.5;
/// Anzahl Segmente pro Bézier-Kurve.
pub const CURVE_SAMPLES: usize = 20;
/// Zeilenbreite (Zeichen), ab der Euler-Wege umbrochen werden.
pub const WALK_LINE_WIDTH: usize = 30;

// ── Bildschirm-Layout ───────────────────────────────────────────────

pub const OUTER_MARGIN: f32 = 12.0;
pub const INNER_GAP: f32 = 24.0;
pub const PANEL_MARGIN: f32 = 10.0;
/// Anteil der Karte an der Simulator-Breite.
pub const MAP_SHARE: f32 = 0.7;
/// Anteil des Simulators an der Fensterbreite.
pub const SCREEN_SHARE: f32 = 0.7;
/// Startgröße des Fensters.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1540.0, 800.0];

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius eines Ankers (normal / hervorgehoben).
pub const ANCHOR_RADIUS: f32 = 5.0;
pub const ANCHOR_RADIUS_HIGHLIGHTED: f32 = 8.0;
/// Linienstärke gebauter Brücken.
pub const BRIDGE_WIDTH: f32 = 5.0;
/// Linienstärke der Drag-Vorschau.
pub const DRAG_PREVIEW_WIDTH: f32 = 4.0;
/// Linienstärke der Graph-Kanten.
pub const GRAPH_EDGE_WIDTH: f32 = 4.0;

/// Hintergrund (RGBA: Hellgrau).
pub const BACKGROUND_COLOR: [f32; 4] = [0.96, 0.96, 0.96, 1.0];
/// Wasser (RGBA: Hellblau).
pub const WATER_COLOR: [f32; 4] = [0.678, 0.847, 0.902, 1.0];
/// Landflächen (RGBA: Hellgrün).
pub const LAND_COLOR: [f32; 4] = [0.565, 0.933, 0.565, 1.0];
/// Umrandung der Landflächen (RGBA: Dunkelgrün).
pub const LAND_BORDER_COLOR: [f32; 4] = [0.133, 0.545, 0.133, 1.0];
/// Brücken und Drag-Vorschau (RGBA: Braun).
pub const BRIDGE_COLOR: [f32; 4] = [0.545, 0.271, 0.075, 1.0];
/// Rand hervorgehobener Anker (RGBA: Gold).
pub const HIGHLIGHT_COLOR: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
/// Graph-Kanten, Knotenrand und Text (RGBA: Schwarz).
pub const GRAPH_EDGE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Füllung der Graph-Knoten (RGBA: Weiß).
pub const GRAPH_NODE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Trennlinie zwischen Karte und Graph (RGBA: Grau).
pub const DIVIDER_COLOR: [f32; 4] = [0.502, 0.502, 0.502, 1.0];

pub const NORTH_COLOR: [f32; 4] = [1.0, 0.392, 0.392, 1.0];
pub const SOUTH_COLOR: [f32; 4] = [0.392, 0.392, 1.0, 1.0];
pub const KNEIPHOF_COLOR: [f32; 4] = [0.392, 1.0, 0.392, 1.0];
pub const LOMSE_COLOR: [f32; 4] = [1.0, 1.0, 0.392, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `koenigsberg_bridges.toml` neben der Binary gespeichert.
///
/// `#[serde(default)]` hält ältere Dateien mit fehlenden Feldern ladbar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Hit-Radius der Anker in Pixeln
    pub anchor_hit_radius: f32,
    /// Doppelklick-Zeitfenster in Millisekunden
    pub double_click_threshold_ms: u64,
    /// Doppelklick-Abstand in Pixeln
    pub double_click_distance: f32,
    /// Maximaler Abstand zur Brücke beim Entfernen
    pub bridge_removal_distance: f32,

    // ── Graph-Panel ─────────────────────────────────────────────
    pub graph_node_radius: f32,
    pub graph_node_offset: f32,
    pub parallel_edge_spacing: f32,
    pub parallel_edge_bend: f32,
    pub curve_samples: usize,
    /// Umbruchbreite für Euler-Wege im Textpanel
    pub walk_line_width: usize,

    // ── Layout ──────────────────────────────────────────────────
    pub outer_margin: f32,
    pub inner_gap: f32,
    pub panel_margin: f32,
    pub map_share: f32,
    pub screen_share: f32,

    // ── Darstellung ─────────────────────────────────────────────
    pub anchor_radius: f32,
    pub anchor_radius_highlighted: f32,
    pub bridge_width: f32,
    pub drag_preview_width: f32,
    pub graph_edge_width: f32,
    pub background_color: [f32; 4],
    pub water_color: [f32; 4],
    pub land_color: [f32; 4],
    pub land_border_color: [f32; 4],
    pub bridge_color: [f32; 4],
    pub highlight_color: [f32; 4],
    pub graph_edge_color: [f32; 4],
    pub graph_node_color: [f32; 4],
    pub divider_color: [f32; 4],
    /// Ankerfarben in Region-Reihenfolge: North, South, Kneiphof, Lomse
    pub region_colors: [[f32; 4]; 4],
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            anchor_hit_radius: ANCHOR_HIT_RADIUS,
            double_click_threshold_ms: DOUBLE_CLICK_THRESHOLD_MS,
            double_click_distance: DOUBLE_CLICK_DISTANCE,
            bridge_removal_distance: BRIDGE_REMOVAL_DISTANCE,

            graph_node_radius: GRAPH_NODE_RADIUS,
            graph_node_offset: GRAPH_NODE_OFFSET,
            parallel_edge_spacing: PARALLEL_EDGE_SPACING,
            parallel_edge_bend: PARALLEL_EDGE_BEND,
            curve_samples: CURVE_SAMPLES,
            walk_line_width: WALK_LINE_WIDTH,

            outer_margin: OUTER_MARGIN,
            inner_gap: INNER_GAP,
            panel_margin: PANEL_MARGIN,
            map_share: MAP_SHARE,
            screen_share: SCREEN_SHARE,

            anchor_radius: ANCHOR_RADIUS,
            anchor_radius_highlighted: ANCHOR_RADIUS_HIGHLIGHTED,
            bridge_width: BRIDGE_WIDTH,
            drag_preview_width: DRAG_PREVIEW_WIDTH,
            graph_edge_width: GRAPH_EDGE_WIDTH,
            background_color: BACKGROUND_COLOR,
            water_color: WATER_COLOR,
            land_color: LAND_COLOR,
            land_border_color: LAND_BORDER_COLOR,
            bridge_color: BRIDGE_COLOR,
            highlight_color: HIGHLIGHT_COLOR,
            graph_edge_color: GRAPH_EDGE_COLOR,
            graph_node_color: GRAPH_NODE_COLOR,
            divider_color: DIVIDER_COLOR,
            region_colors: [NORTH_COLOR, SOUTH_COLOR, KNEIPHOF_COLOR, LOMSE_COLOR],
        }
    }
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text; fehlende Felder bekommen Standardwerte.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("koenigsberg-bridges"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("koenigsberg_bridges.toml")
    }

    /// Ankerfarbe der Region.
    pub fn region_color(&self, region: crate::core::Region) -> [f32; 4] {
        self.region_colors[region_slot(region)]
    }

    pub fn region_color_mut(&mut self, region: crate::core::Region) -> &mut [f32; 4] {
        &mut self.region_colors[region_slot(region)]
    }
}

fn region_slot(region: crate::core::Region) -> usize {
    use crate::core::Region;
    match region {
        Region::North => 0,
        Region::South => 1,
        Region::Kneiphof => 2,
        Region::Lomse => 3,
    }
}
