//! Render-Szene als expliziter Übergabevertrag zwischen App und Frontend.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use std::collections::HashSet;

use glam::Vec2;

use super::graph_geometry::{GraphEdgeShape, GraphPanelLayout};
use super::layout::ScreenLayout;
use super::options::AppOptions;
use crate::core::{Anchor, AnchorId, Classification};

/// Gerade Linie zwischen zwei Bildschirmpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Bildschirm-Aufteilung
    pub layout: ScreenLayout,
    /// Alle Anker der Karte
    pub anchors: Vec<Anchor>,
    /// Gültige Ziele des laufenden Drags
    pub highlighted: HashSet<AnchorId>,
    /// Gebaute Brücken in Baureihenfolge
    pub bridges: Vec<LineSegment>,
    /// Linie vom Start-Anker zum Mauszeiger während eines Drags
    pub drag_preview: Option<LineSegment>,
    /// Knotenpositionen im Graph-Panel
    pub graph: GraphPanelLayout,
    /// Kantenzüge im Graph-Panel
    pub graph_edges: Vec<GraphEdgeShape>,
    pub classification: Classification,
    /// Zeilen für das Analyse-Panel
    pub analysis_lines: Vec<String>,
    /// Laufzeit-Optionen für Farben und Breiten
    pub options: AppOptions,
}

impl RenderScene {
    pub fn is_highlighted(&self, anchor: &Anchor) -> bool {
        self.highlighted.contains(&anchor.id)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_preview.is_some()
    }
}
