//! Keyboard-Shortcuts.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Escape beendet die Anwendung
    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        events.push(AppIntent::ExitRequested);
    }

    events
}
