//! Bildschirm-Aufteilung: Rahmen, Simulator (Karte + Graph-Panel) und Analyse-Panel.

use glam::Vec2;

use super::AppOptions;
use crate::core::LayoutRect;

/// Alle Layout-Rechtecke eines Frames, abgeleitet aus der Fenstergröße.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenLayout {
    /// Fenstergröße, aus der das Layout berechnet wurde
    pub window_size: Vec2,
    /// Äußerer Rahmen
    pub outer: LayoutRect,
    /// Simulator-Panel (Karte + Graph)
    pub simulator: LayoutRect,
    /// Karte mit Ankern und Brücken
    pub map: LayoutRect,
    /// Graph-Panel mit den vier Knoten
    pub graph_panel: LayoutRect,
    /// Textpanel mit dem Analyse-Ergebnis
    pub analysis: LayoutRect,
}

impl ScreenLayout {
    pub fn compute(window_size: Vec2, options: &AppOptions) -> Self {
        let margin = options.outer_margin;
        let gap = options.inner_gap;

        let outer = LayoutRect::new(
            margin,
            margin,
            window_size.x - 2.0 * margin,
            window_size.y - 2.0 * margin,
        );

        let simulator = LayoutRect::new(
            outer.x() + gap,
            outer.y() + gap,
            window_size.x * options.screen_share - gap - margin,
            window_size.y - 2.0 * (margin + gap),
        );

        let analysis_left = simulator.right() + gap;
        let analysis = LayoutRect::new(
            analysis_left,
            simulator.y(),
            outer.right() - analysis_left - gap,
            simulator.height(),
        );

        let inner = simulator.inset(options.panel_margin);
        let map_width = inner.width() * options.map_share;
        let map = LayoutRect::new(inner.x(), inner.y(), map_width, inner.height());
        let graph_panel = LayoutRect::new(
            inner.x() + map_width,
            inner.y(),
            inner.width() - map_width,
            inner.height(),
        );

        Self {
            window_size,
            outer,
            simulator,
            map,
            graph_panel,
            analysis,
        }
    }

    /// X-Position der Trennlinie zwischen Karte und Graph-Panel.
    pub fn divider_x(&self) -> f32 {
        self.map.right()
    }
}
