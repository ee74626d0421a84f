//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod graph_geometry;
pub mod layout;
pub mod options;
mod render_scene;

pub use graph_geometry::{edge_shapes, GraphEdgeShape, GraphPanelLayout};
pub use layout::ScreenLayout;
pub use options::AppOptions;
pub use render_scene::{LineSegment, RenderScene};
