use glam::Vec2;

use crate::core::{analyze_with_width, AnalysisResult, Anchor, AnchorSet, BridgeMap};
use crate::shared::options::DEFAULT_WINDOW_SIZE;
use crate::shared::AppOptions;

use super::{InteractionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Anker der aktuellen Karte (inkl. Spatial-Index)
    pub anchors: AnchorSet,
    /// Gebaute Brücken samt Multigraph
    pub bridges: BridgeMap,
    /// Letztes Analyse-Ergebnis, nach jeder Änderung ersetzt
    pub analysis: AnalysisResult,
    /// Drag-Automat und Doppelklick-Tracker
    pub interaction: InteractionState,
    /// View-State
    pub view: ViewState,
    /// Laufzeit-Optionen (Radien, Schwellen, Farben)
    pub options: AppOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standardoptionen und Standard-Fenstergröße
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Erstellt einen App-State mit den gegebenen Optionen: 4 Knoten, keine Brücken.
    pub fn with_options(options: AppOptions) -> Self {
        let view = ViewState::new(DEFAULT_WINDOW_SIZE, &options);
        let bridges = BridgeMap::new();
        let analysis = analyze_with_width(bridges.graph(), options.walk_line_width);
        Self {
            anchors: AnchorSet::generate(view.layout.map),
            bridges,
            analysis,
            interaction: InteractionState::new(),
            view,
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gültige Ziel-Anker des laufenden Drags (leer im Idle-Zustand).
    pub fn highlighted_anchors(&self) -> &[Anchor] {
        self.interaction
            .active_drag()
            .map(|drag| drag.highlighted.as_slice())
            .unwrap_or(&[])
    }

    /// Vorschau-Linie `(von, bis)` des laufenden Drags.
    pub fn drag_preview(&self) -> Option<(Vec2, Vec2)> {
        self.interaction
            .active_drag()
            .map(|drag| (drag.start.position, drag.pointer))
    }

    /// Anzahl gebauter Brücken (für UI-Anzeige)
    pub fn bridge_count(&self) -> usize {
        self.bridges.bridge_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
