//! Use-Cases der Application-Layer-Orchestrierung.

pub mod analysis;
pub mod bridge_drag;
pub mod double_click;
pub mod layout;
