//! Königsberger Brücken Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, DragState, ViewState};
pub use core::{
    analyze, generate_anchors, is_valid_connection, AnalysisResult, Anchor, AnchorId, AnchorSet,
    Bridge, BridgeError, BridgeId, BridgeMap, Classification, LayoutRect, Region, RegionGraph,
    RegionNode,
};
pub use shared::{AppOptions, RenderScene};
