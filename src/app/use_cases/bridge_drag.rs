//! Use-Case: Brücke per Drag zwischen zwei Ankern bauen.

use glam::Vec2;

use crate::app::state::{BridgeDrag, DragState};
use crate::app::AppState;

use super::analysis;

/// Startet einen Drag am Anker unter dem Zeiger.
///
/// Ein noch laufender Drag (verlorenes Loslassen) wird immer verworfen.
pub fn begin(state: &mut AppState, position: Vec2, hit_radius: f32) {
    if let Some(stale) = state.interaction.take_drag() {
        log::debug!("Verwaister Drag ab {} verworfen", stale.start.id);
    }

    let Some(start) = state.anchors.anchor_at(position, hit_radius) else {
        log::debug!(
            "Pointer-Down ohne Anker bei ({:.1}, {:.1})",
            position.x,
            position.y
        );
        return;
    };

    let highlighted = state.anchors.valid_targets(&start);
    log::debug!(
        "Drag ab {} gestartet, {} gültige Ziele",
        start.id,
        highlighted.len()
    );

    state.interaction.drag = DragState::Dragging(BridgeDrag {
        start,
        pointer: position,
        highlighted,
    });
}

/// Führt die Vorschau-Linie des laufenden Drags nach.
pub fn update_preview(state: &mut AppState, position: Vec2) {
    if let Some(drag) = state.interaction.active_drag_mut() {
        drag.pointer = position;
    }
}

/// Beendet den Drag und baut bei gültigem Ziel eine Brücke.
///
/// Drag-Zustand und Highlight-Menge werden in jedem Fall geleert.
pub fn finish(state: &mut AppState, position: Vec2, hit_radius: f32) {
    let Some(drag) = state.interaction.take_drag() else {
        return;
    };

    let Some(end) = state.anchors.anchor_at(position, hit_radius) else {
        log::debug!("Drag ab {} ohne Ziel-Anker abgebrochen", drag.start.id);
        return;
    };

    if end.id == drag.start.id {
        log::debug!("Drag ab {} am Start-Anker beendet", drag.start.id);
        return;
    }

    match state.bridges.add_bridge(drag.start, end) {
        Ok(bridge_id) => {
            log::info!(
                "Brücke #{} gebaut: {} → {}",
                bridge_id.raw(),
                drag.start.id,
                end.id
            );
            analysis::refresh(state);
        }
        Err(err) => log::warn!("Brücke abgelehnt: {}", err),
    }
}
