//! Use-Case: Doppelklick-Erkennung und Entfernen der nächstgelegenen Brücke.

use glam::Vec2;

use crate::app::AppState;

use super::analysis;

/// Merkt sich den Klick als Referenz für den nächsten Pointer-Down.
pub fn record_click(state: &mut AppState, position: Vec2, timestamp_ms: u64) {
    state.interaction.clicks.record(position, timestamp_ms);
}

/// Entfernt die nächstgelegene Brücke mit Abstand strikt unter `max_distance`.
pub fn remove_bridge_near(state: &mut AppState, position: Vec2, max_distance: f32) {
    let Some(bridge) = state.bridges.remove_bridge_near(position, max_distance) else {
        log::debug!(
            "Doppelklick ohne Brücke in Reichweite bei ({:.1}, {:.1})",
            position.x,
            position.y
        );
        return;
    };

    log::info!(
        "Brücke #{} entfernt: {} → {}",
        bridge.id.raw(),
        bridge.start.id,
        bridge.end.id
    );
    analysis::refresh(state);
}
