//! Handler für Brücken-Drag und Doppelklick-Entfernung.

use crate::app::use_cases;
use crate::app::AppState;

/// Startet einen Brücken-Drag am getroffenen Anker.
pub fn begin_bridge_drag(state: &mut AppState, position: glam::Vec2, hit_radius: f32) {
    use_cases::bridge_drag::begin(state, position, hit_radius);
}

/// Aktualisiert die Vorschau-Linie.
pub fn update_drag_preview(state: &mut AppState, position: glam::Vec2) {
    use_cases::bridge_drag::update_preview(state, position);
}

/// Beendet den Drag, ggf. mit neuer Brücke.
pub fn finish_bridge_drag(state: &mut AppState, position: glam::Vec2, hit_radius: f32) {
    use_cases::bridge_drag::finish(state, position, hit_radius);
}

/// Entfernt die Brücke unter dem Doppelklick.
pub fn remove_bridge_near(state: &mut AppState, position: glam::Vec2, max_distance: f32) {
    use_cases::double_click::remove_bridge_near(state, position, max_distance);
}

pub fn record_click(state: &mut AppState, position: glam::Vec2, timestamp_ms: u64) {
    use_cases::double_click::record_click(state, position, timestamp_ms);
}
