//! Handler für Viewport und Kartenlayout.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::LayoutRect;

/// Aktualisiert die Viewport-Größe und erzeugt die Anker neu.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::layout::resize(state, size);
}

/// Setzt das Kartenrechteck direkt.
pub fn set_map_rect(state: &mut AppState, rect: LayoutRect) {
    use_cases::layout::set_map_rect(state, rect);
}
