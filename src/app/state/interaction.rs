use glam::Vec2;

use crate::core::Anchor;

/// Ein registrierter Mausklick (Pointer-Down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickRecord {
    pub position: Vec2,
    pub timestamp_ms: u64,
}

/// Merkt sich nur den letzten Klick für die Doppelklick-Erkennung.
///
/// Wird bei jedem Pointer-Down aktualisiert, egal ob etwas getroffen wurde.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClickTracker {
    last: Option<ClickRecord>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<ClickRecord> {
        self.last
    }

    /// Prüft, ob ein Klick bei `position`/`timestamp_ms` der zweite Klick eines Doppelklicks ist.
    ///
    /// Beide Schwellen gelten strikt (`<`). Rückwärts laufende Zeit zählt nicht.
    pub fn is_double_click(
        &self,
        position: Vec2,
        timestamp_ms: u64,
        threshold_ms: u64,
        max_distance: f32,
    ) -> bool {
        let Some(last) = self.last else {
            return false;
        };
        let Some(elapsed) = timestamp_ms.checked_sub(last.timestamp_ms) else {
            return false;
        };
        elapsed < threshold_ms && last.position.distance(position) < max_distance
    }

    pub fn record(&mut self, position: Vec2, timestamp_ms: u64) {
        self.last = Some(ClickRecord {
            position,
            timestamp_ms,
        });
    }
}

/// Laufender Brücken-Drag.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeDrag {
    /// Anker, an dem der Drag begann
    pub start: Anchor,
    /// Aktuelle Zeigerposition für die Vorschau-Linie
    pub pointer: Vec2,
    /// Gültige Ziel-Anker (Highlight-Menge)
    pub highlighted: Vec<Anchor>,
}

/// Drag-Automat: Idle oder Dragging.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(BridgeDrag),
}

/// Zeiger-Interaktion: Drag-Automat plus Doppelklick-Tracker.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub drag: DragState,
    pub clicks: ClickTracker,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    pub fn active_drag(&self) -> Option<&BridgeDrag> {
        match &self.drag {
            DragState::Dragging(drag) => Some(drag),
            DragState::Idle => None,
        }
    }

    pub fn active_drag_mut(&mut self) -> Option<&mut BridgeDrag> {
        match &mut self.drag {
            DragState::Dragging(drag) => Some(drag),
            DragState::Idle => None,
        }
    }

    /// Beendet einen laufenden Drag und liefert ihn zurück.
    pub fn take_drag(&mut self) -> Option<BridgeDrag> {
        match std::mem::take(&mut self.drag) {
            DragState::Dragging(drag) => Some(drag),
            DragState::Idle => None,
        }
    }
}
