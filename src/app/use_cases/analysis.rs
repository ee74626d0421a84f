//! Use-Case: Euler-Analyse nach jeder Graph-Änderung erneuern.

use crate::app::AppState;
use crate::core::analyze_with_width;

/// Ersetzt das Analyse-Ergebnis anhand des aktuellen Multigraphen.
pub fn refresh(state: &mut AppState) {
    state.analysis = analyze_with_width(state.bridges.graph(), state.options.walk_line_width);
    log::info!(
        "Analyse: {} ({} Brücken)",
        state.analysis.classification,
        state.bridges.bridge_count()
    );
}
