//! Use-Case: Fenster- und Kartenlayout, Anker-Neuerzeugung.

use crate::app::state::ViewState;
use crate::app::AppState;
use crate::core::{AnchorSet, LayoutRect};

/// Übernimmt eine neue Fenstergröße und leitet das Kartenrechteck daraus ab.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view = ViewState::new(size, &state.options);
    let map = state.view.layout.map;
    set_map_rect(state, map);
}

/// Erzeugt die Anker für `rect` neu und zieht Brücken sowie Drag nach.
///
/// Unverändertes Rechteck ist ein No-op.
pub fn set_map_rect(state: &mut AppState, rect: LayoutRect) {
    if state.anchors.rect() == rect {
        return;
    }

    state.anchors = AnchorSet::generate(rect);
    state.bridges.relayout(state.anchors.anchors());

    if let Some(drag) = state.interaction.active_drag_mut() {
        if let Some(start) = state.anchors.find(drag.start.id) {
            drag.highlighted = state.anchors.valid_targets(&start);
            drag.start = start;
        }
    }

    log::info!(
        "{} Anker für Karte {:.0}x{:.0} bei ({:.0}, {:.0}) erzeugt",
        state.anchors.len(),
        rect.width(),
        rect.height(),
        rect.x(),
        rect.y()
    );
}
