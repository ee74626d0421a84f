//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Bridges: {} | Edges: {}",
                state.bridge_count(),
                state.bridges.graph().edge_count()
            ));

            ui.separator();

            ui.label(format!("Result: {}", state.analysis.classification));

            ui.separator();

            if let Some(drag) = state.interaction.active_drag() {
                ui.label(format!(
                    "Dragging from {} ({} valid targets)",
                    drag.start.id,
                    drag.highlighted.len()
                ));
            } else {
                ui.label(
                    "Drag between landmasses to build a bridge, double-click a bridge to remove it",
                );
            }
        });
    });
}
