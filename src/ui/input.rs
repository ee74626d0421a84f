//! Canvas-Input-Handling: Maus-Events und Fenstergröße → AppIntent.

use glam::Vec2;

use super::keyboard;
use crate::app::AppIntent;

/// Merkt sich den Input-Zustand zwischen zwei Frames.
#[derive(Default)]
pub struct InputState {
    last_pointer: Option<Vec2>,
    last_canvas_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Positionen werden relativ zur linken oberen Ecke des Canvas geliefert,
    /// Zeitstempel in Millisekunden seit Programmstart.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui);
        let origin = response.rect.min;

        let canvas_size = [response.rect.width(), response.rect.height()];
        if self.last_canvas_size != Some(canvas_size) {
            self.last_canvas_size = Some(canvas_size);
            events.push(AppIntent::ViewportResized { size: canvas_size });
        }

        let (pressed, released, pointer_pos, time) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
                i.time,
            )
        });

        let Some(pointer_pos) = pointer_pos else {
            // Loslassen außerhalb des Fensters: letzte bekannte Position verwenden
            if released {
                if let Some(position) = self.last_pointer {
                    events.push(AppIntent::PointerReleased { position });
                }
            }
            return events;
        };
        let position = Vec2::new(pointer_pos.x - origin.x, pointer_pos.y - origin.y);
        let timestamp_ms = (time * 1000.0) as u64;

        if pressed && response.contains_pointer() {
            events.push(AppIntent::PointerPressed {
                position,
                timestamp_ms,
            });
        }

        if self.last_pointer != Some(position) {
            self.last_pointer = Some(position);
            events.push(AppIntent::PointerMoved { position });
        }

        if released {
            events.push(AppIntent::PointerReleased { position });
        }

        events
    }
}
