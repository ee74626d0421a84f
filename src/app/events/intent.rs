use crate::core::LayoutRect;
use crate::shared::AppOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Linke Maustaste gedrückt (Zeitstempel in ms, monoton)
    PointerPressed {
        position: glam::Vec2,
        timestamp_ms: u64,
    },
    /// Linke Maustaste losgelassen
    PointerReleased { position: glam::Vec2 },
    /// Mauszeiger bewegt
    PointerMoved { position: glam::Vec2 },
    /// Fenstergröße hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kartenrechteck direkt vom Host vorgegeben
    MapLayoutChanged { rect: LayoutRect },
    /// Anwendung beenden
    ExitRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: AppOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
