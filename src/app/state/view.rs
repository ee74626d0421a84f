use glam::Vec2;

use crate::shared::{AppOptions, ScreenLayout};

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState {
    /// Aktuelle Fenstergröße in Pixel
    pub viewport_size: [f32; 2],
    /// Daraus abgeleitete Bildschirm-Aufteilung
    pub layout: ScreenLayout,
}

impl ViewState {
    /// Erstellt den View-Zustand für eine Fenstergröße.
    pub fn new(viewport_size: [f32; 2], options: &AppOptions) -> Self {
        Self {
            viewport_size,
            layout: ScreenLayout::compute(Vec2::from(viewport_size), options),
        }
    }
}
