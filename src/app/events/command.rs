use crate::core::LayoutRect;
use crate::shared::AppOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag an einem Anker unter dem Zeiger beginnen (kein Treffer = keine Änderung)
    BeginBridgeDrag {
        position: glam::Vec2,
        hit_radius: f32,
    },
    /// Vorschau-Linie des laufenden Drags nachführen
    UpdateDragPreview { position: glam::Vec2 },
    /// Drag beenden und bei gültigem Ziel-Anker eine Brücke bauen
    FinishBridgeDrag {
        position: glam::Vec2,
        hit_radius: f32,
    },
    /// Nächstgelegene Brücke in Reichweite entfernen
    RemoveBridgeNear {
        position: glam::Vec2,
        max_distance: f32,
    },
    /// Klick für die Doppelklick-Erkennung merken
    RecordClick {
        position: glam::Vec2,
        timestamp_ms: u64,
    },
    /// Fenstergröße setzen und Layout neu berechnen
    SetViewportSize { size: [f32; 2] },
    /// Kartenrechteck setzen und Anker neu erzeugen
    SetMapRect { rect: LayoutRect },
    /// Anwendung beenden
    RequestExit,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: AppOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
