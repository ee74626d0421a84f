//! Application State — zentrale Datenhaltung.

mod app_state;
mod interaction;
mod view;

pub use app_state::AppState;
pub use interaction::{BridgeDrag, ClickRecord, ClickTracker, DragState, InteractionState};
pub use view::ViewState;
