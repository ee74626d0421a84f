//! UI-Komponenten: Menü, Status-Bar, Simulator-Canvas, Analyse-Panel, Dialoge.

/// UI-Layer mit egui
///
/// Zeichnet ausschließlich die `RenderScene` und übersetzt egui-Input in `AppIntent`s.
pub mod analysis_panel;
pub mod canvas;
pub mod input;
mod keyboard;
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use analysis_panel::paint_analysis_panel;
pub use canvas::{paint_simulator, to_color32};
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
