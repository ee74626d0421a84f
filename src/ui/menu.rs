//! Top-Menü (File, Edit).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit (Esc)").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                let label = if state.show_options_dialog {
                    "Close Options"
                } else {
                    "Options..."
                };
                if ui.button(label).clicked() {
                    events.push(if state.show_options_dialog {
                        AppIntent::CloseOptionsDialogRequested
                    } else {
                        AppIntent::OpenOptionsDialogRequested
                    });
                    ui.close();
                }
            });
        });
    });

    events
}
