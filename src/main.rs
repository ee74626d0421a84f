//! Königsberger Brücken: interaktiver Simulator.
//!
//! Brücken per Drag zwischen Ankern bauen, per Doppelklick entfernen.
//! Das Analyse-Panel meldet laufend Euler-Kreis, Euler-Weg oder keins von beiden.

use eframe::egui;
use koenigsberg_bridges::{ui, AppController, AppIntent, AppOptions, AppState};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Königsberger Brücken v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(koenigsberg_bridges::shared::options::DEFAULT_WINDOW_SIZE)
                .with_title("Seven Bridges of Königsberg"),
            ..Default::default()
        };

        eframe::run_native(
            "Seven Bridges of Königsberg",
            options,
            Box::new(|_cc| Ok(Box::new(SimulatorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SimulatorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl SimulatorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AppOptions::config_path();
        let options = AppOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for SimulatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl SimulatorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_canvas_events(ui, &response));

                let scene = self.controller.build_render_scene(&self.state);
                let painter = ui.painter_at(rect);
                ui::paint_simulator(&painter, rect.min, &scene);
                ui::paint_analysis_panel(&painter, rect.min, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.interaction.is_dragging()
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
