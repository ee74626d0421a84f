//! Optionen-Dialog für Schwellen, Layout und Farben.

use crate::app::{AppIntent, AppState};
use crate::core::Region;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Interaktion ─────────────────────────────────
                    ui.collapsing("Interaktion", |ui| {
                        changed |= drag_value(
                            ui,
                            "Anker-Trefferradius (px):",
                            &mut opts.anchor_hit_radius,
                            1.0..=30.0,
                            0.5,
                        );
                        ui.horizontal(|ui| {
                            ui.label("Doppelklick-Zeit (ms):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.double_click_threshold_ms)
                                        .range(100..=2000)
                                        .speed(10.0),
                                )
                                .changed();
                        });
                        changed |= drag_value(
                            ui,
                            "Doppelklick-Abstand (px):",
                            &mut opts.double_click_distance,
                            1.0..=50.0,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Brücken-Entfernradius (px):",
                            &mut opts.bridge_removal_distance,
                            1.0..=60.0,
                            0.5,
                        );
                    });

                    // ── Graph-Panel ─────────────────────────────────
                    ui.collapsing("Graph", |ui| {
                        changed |= drag_value(
                            ui,
                            "Knotenradius:",
                            &mut opts.graph_node_radius,
                            5.0..=60.0,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Knotenabstand:",
                            &mut opts.graph_node_offset,
                            20.0..=200.0,
                            1.0,
                        );
                        changed |= drag_value(
                            ui,
                            "Abstand paralleler Kanten:",
                            &mut opts.parallel_edge_spacing,
                            0.0..=30.0,
                            0.5,
                        );
                        ui.horizontal(|ui| {
                            ui.label("Kurven-Stützpunkte:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.curve_samples).range(2..=100))
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zeilenbreite Euler-Weg:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.walk_line_width).range(5..=120))
                                .changed();
                        });
                    });

                    // ── Layout ──────────────────────────────────────
                    ui.collapsing("Layout", |ui| {
                        changed |= drag_value(
                            ui,
                            "Außenrand:",
                            &mut opts.outer_margin,
                            0.0..=60.0,
                            1.0,
                        );
                        changed |= drag_value(
                            ui,
                            "Innenabstand:",
                            &mut opts.inner_gap,
                            0.0..=80.0,
                            1.0,
                        );
                        changed |= drag_value(
                            ui,
                            "Panel-Rand:",
                            &mut opts.panel_margin,
                            0.0..=40.0,
                            1.0,
                        );
                        changed |= drag_value(
                            ui,
                            "Kartenanteil:",
                            &mut opts.map_share,
                            0.3..=0.9,
                            0.01,
                        );
                        changed |= drag_value(
                            ui,
                            "Simulatoranteil:",
                            &mut opts.screen_share,
                            0.4..=0.9,
                            0.01,
                        );
                    });

                    // ── Farben ──────────────────────────────────────
                    ui.collapsing("Farben", |ui| {
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                        changed |= color_edit(ui, "Wasser:", &mut opts.water_color);
                        changed |= color_edit(ui, "Land:", &mut opts.land_color);
                        changed |= color_edit(ui, "Brücke:", &mut opts.bridge_color);
                        changed |= color_edit(ui, "Hervorhebung:", &mut opts.highlight_color);
                        changed |= color_edit(ui, "Graph-Kanten:", &mut opts.graph_edge_color);
                        for region in Region::ALL {
                            let label = format!("Anker {}:", region.as_str());
                            changed |= color_edit(ui, &label, opts.region_color_mut(region));
                        }
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
