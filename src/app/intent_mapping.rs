//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            position,
            timestamp_ms,
        } => {
            let options = &state.options;
            let is_double_click = state.interaction.clicks.is_double_click(
                position,
                timestamp_ms,
                options.double_click_threshold_ms,
                options.double_click_distance,
            );

            // Der Klick wird immer gemerkt, auch wenn nichts getroffen wurde
            let first = if is_double_click {
                AppCommand::RemoveBridgeNear {
                    position,
                    max_distance: options.bridge_removal_distance,
                }
            } else {
                AppCommand::BeginBridgeDrag {
                    position,
                    hit_radius: options.anchor_hit_radius,
                }
            };

            vec![
                first,
                AppCommand::RecordClick {
                    position,
                    timestamp_ms,
                },
            ]
        }
        AppIntent::PointerReleased { position } => {
            if state.interaction.is_dragging() {
                vec![AppCommand::FinishBridgeDrag {
                    position,
                    hit_radius: state.options.anchor_hit_radius,
                }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerMoved { position } => {
            if state.interaction.is_dragging() {
                vec![AppCommand::UpdateDragPreview { position }]
            } else {
                vec![]
            }
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::MapLayoutChanged { rect } => vec![AppCommand::SetMapRect { rect }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
