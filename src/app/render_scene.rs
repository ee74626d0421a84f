//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{edge_shapes, GraphPanelLayout, LineSegment, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let layout = state.view.layout;
    let graph = GraphPanelLayout::compute(layout.graph_panel, &state.options);
    let graph_edges = edge_shapes(state.bridges.graph(), &graph, &state.options);

    let bridges = state
        .bridges
        .bridges()
        .map(|bridge| {
            let (from, to) = bridge.segment();
            LineSegment { from, to }
        })
        .collect();

    RenderScene {
        layout,
        anchors: state.anchors.anchors().to_vec(),
        highlighted: state.highlighted_anchors().iter().map(|a| a.id).collect(),
        bridges,
        drag_preview: state
            .drag_preview()
            .map(|(from, to)| LineSegment { from, to }),
        graph,
        graph_edges,
        classification: state.analysis.classification,
        analysis_lines: state.analysis.diagnostic_lines.clone(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::use_cases::bridge_drag;
    use crate::app::AppState;
    use crate::core::Classification;

    #[test]
    fn empty_state_yields_anchors_without_bridges() {
        let state = AppState::new();

        let scene = build(&state);

        assert_eq!(scene.anchors.len(), 38);
        assert!(scene.bridges.is_empty());
        assert!(scene.highlighted.is_empty());
        assert!(!scene.is_dragging());
        assert!(scene.graph_edges.is_empty());
        assert_eq!(scene.classification, Classification::NoEdges);
        assert_eq!(scene.analysis_lines, state.analysis.diagnostic_lines);
    }

    #[test]
    fn dragging_exposes_preview_and_highlights() {
        let mut state = AppState::new();
        let start = state
            .anchors
            .find_by_name("north_5")
            .expect("north_5 sollte existieren");
        bridge_drag::begin(&mut state, start.position, 6.0);
        bridge_drag::update_preview(&mut state, start.position + glam::Vec2::new(40.0, 30.0));

        let scene = build(&state);

        let preview = scene.drag_preview.expect("Vorschau sollte aktiv sein");
        assert_eq!(preview.from, start.position);
        assert_eq!(preview.to, start.position + glam::Vec2::new(40.0, 30.0));
        let target = state
            .anchors
            .find_by_name("lomse_5")
            .expect("lomse_5 sollte existieren");
        assert!(scene.is_highlighted(&target));
        assert_eq!(scene.highlighted.len(), 1);
    }

    #[test]
    fn built_bridge_appears_on_map_and_in_graph_panel() {
        let mut state = AppState::new();
        let start = state
            .anchors
            .find_by_name("north_5")
            .expect("north_5 sollte existieren");
        let end = state
            .anchors
            .find_by_name("lomse_5")
            .expect("lomse_5 sollte existieren");
        bridge_drag::begin(&mut state, start.position, 6.0);
        bridge_drag::finish(&mut state, end.position, 6.0);

        let scene = build(&state);

        assert_eq!(scene.bridges.len(), 1);
        assert_eq!(scene.bridges[0].from, start.position);
        assert_eq!(scene.bridges[0].to, end.position);
        assert_eq!(scene.graph_edges.len(), 1);
        assert!(!scene.graph_edges[0].is_curved());
    }
}
