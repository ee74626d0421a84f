//! Application Controller für zentrale Event-Verarbeitung.

use glam::Vec2;

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Brücken-Interaktion ===
            AppCommand::BeginBridgeDrag {
                position,
                hit_radius,
            } => handlers::interaction::begin_bridge_drag(state, position, hit_radius),
            AppCommand::UpdateDragPreview { position } => {
                handlers::interaction::update_drag_preview(state, position)
            }
            AppCommand::FinishBridgeDrag {
                position,
                hit_radius,
            } => handlers::interaction::finish_bridge_drag(state, position, hit_radius),
            AppCommand::RemoveBridgeNear {
                position,
                max_distance,
            } => handlers::interaction::remove_bridge_near(state, position, max_distance),
            AppCommand::RecordClick {
                position,
                timestamp_ms,
            } => handlers::interaction::record_click(state, position, timestamp_ms),

            // === Viewport & Layout ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::SetMapRect { rect } => handlers::view::set_map_rect(state, rect),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Pointer-Down mit monotonem Zeitstempel in Millisekunden.
    pub fn pointer_down(
        &mut self,
        state: &mut AppState,
        position: Vec2,
        timestamp_ms: u64,
    ) -> anyhow::Result<()> {
        self.handle_intent(
            state,
            AppIntent::PointerPressed {
                position,
                timestamp_ms,
            },
        )
    }

    pub fn pointer_up(&mut self, state: &mut AppState, position: Vec2) -> anyhow::Result<()> {
        self.handle_intent(state, AppIntent::PointerReleased { position })
    }

    pub fn pointer_move(&mut self, state: &mut AppState, position: Vec2) -> anyhow::Result<()> {
        self.handle_intent(state, AppIntent::PointerMoved { position })
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
