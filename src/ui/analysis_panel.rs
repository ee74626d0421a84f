//! Textpanel mit dem Analyse-Ergebnis.

use glam::Vec2;

use super::canvas::{to_pos, to_rect};
use crate::shared::RenderScene;

const TITLE: &str = "ANALYSIS RESULT";
const TEXT_INSET: f32 = 20.0;
const LINE_HEIGHT: f32 = 28.0;

/// Zeichnet Titel und Diagnosezeilen in das Analyse-Rechteck.
pub fn paint_analysis_panel(painter: &egui::Painter, origin: egui::Pos2, scene: &RenderScene) {
    let rect = scene.layout.analysis;
    let opts = &scene.options;

    painter.rect_filled(to_rect(origin, rect), 0.0, egui::Color32::WHITE);
    painter.rect_stroke(
        to_rect(origin, rect),
        0.0,
        egui::Stroke::new(2.0, super::to_color32(opts.divider_color)),
        egui::StrokeKind::Inside,
    );

    painter.text(
        to_pos(origin, Vec2::new(rect.x() + TEXT_INSET, rect.y() + TEXT_INSET)),
        egui::Align2::LEFT_TOP,
        TITLE,
        egui::FontId::proportional(26.0),
        egui::Color32::BLACK,
    );

    let text_top = rect.y() + TEXT_INSET + 2.0 * LINE_HEIGHT;
    for (row, line) in scene.analysis_lines.iter().enumerate() {
        let y = text_top + row as f32 * LINE_HEIGHT;
        if y + LINE_HEIGHT > rect.bottom() {
            break;
        }
        painter.text(
            to_pos(origin, Vec2::new(rect.x() + TEXT_INSET, y)),
            egui::Align2::LEFT_TOP,
            line,
            egui::FontId::proportional(18.0),
            egui::Color32::BLACK,
        );
    }
}
