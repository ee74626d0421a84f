//! Core-Domänentypen: Regionen, Anker, Topologie, Brücken, Multigraph, Euler-Analyse.

pub mod anchor;
pub mod anchor_set;
pub mod bridge_map;
pub mod euler;
pub mod geometry;
pub mod region;
pub mod region_graph;
pub mod spatial;
pub mod topology;

pub use anchor::{generate_anchors, Anchor, AnchorId};
pub use anchor_set::AnchorSet;
pub use bridge_map::{Bridge, BridgeError, BridgeId, BridgeMap, BridgeMatch};
pub use euler::{analyze, analyze_with_width, eulerian_walk, AnalysisResult, Classification};
pub use geometry::{point_segment_distance, LayoutRect};
pub use region::{Region, RegionNode};
pub use region_graph::{EdgeId, RegionEdge, RegionGraph};
pub use spatial::{AnchorIndex, AnchorMatch};
pub use topology::{is_valid_connection, valid_targets, TOPOLOGY_RULES};
