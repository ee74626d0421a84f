//! Zeichnet den Simulator (Karte, Anker, Brücken, Graph-Panel) aus der RenderScene.
//!
//! Alle Szenenkoordinaten sind relativ zum Canvas-Ursprung.

use glam::Vec2;

use crate::core::{LayoutRect, Region};
use crate::shared::RenderScene;

/// Nordufer als Anteile des Kartenrechtecks (konvex)
const NORTH_BANK: [(f32, f32); 6] = [
    (0.0, 0.0),
    (1.0, 0.0),
    (1.0, 0.25),
    (0.7, 0.28),
    (0.3, 0.28),
    (0.0, 0.25),
];

const SOUTH_BANK: [(f32, f32); 6] = [
    (0.0, 0.75),
    (0.3, 0.72),
    (0.7, 0.72),
    (1.0, 0.75),
    (1.0, 1.0),
    (0.0, 1.0),
];

const KNEIPHOF_CENTER: (f32, f32) = (0.35, 0.5);
const LOMSE_CENTER: (f32, f32) = (0.75, 0.5);
/// Halbachsen der Inseln als Anteil von Breite/Höhe
const ISLAND_HALF_AXES: f32 = 0.175;

/// Position der Landnummern (Knoten-IDs) auf der Karte
const LAND_LABELS: [(&str, (f32, f32)); 4] = [
    ("1", (0.5, 0.15)),
    ("2", KNEIPHOF_CENTER),
    ("3", LOMSE_CENTER),
    ("4", (0.5, 0.88)),
];

/// Wandelt eine RGBA-Farbe aus den Optionen in eine egui-Farbe um.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

pub(super) fn to_pos(origin: egui::Pos2, point: Vec2) -> egui::Pos2 {
    egui::pos2(origin.x + point.x, origin.y + point.y)
}

pub(super) fn to_rect(origin: egui::Pos2, rect: LayoutRect) -> egui::Rect {
    egui::Rect::from_min_size(
        to_pos(origin, rect.min),
        egui::vec2(rect.width(), rect.height()),
    )
}

/// Zeichnet Karte und Graph-Panel.
pub fn paint_simulator(painter: &egui::Painter, origin: egui::Pos2, scene: &RenderScene) {
    let opts = &scene.options;
    let layout = &scene.layout;

    painter.rect_filled(painter.clip_rect(), 0.0, to_color32(opts.background_color));
    painter.rect_stroke(
        to_rect(origin, layout.outer),
        0.0,
        egui::Stroke::new(2.0, to_color32(opts.land_border_color)),
        egui::StrokeKind::Inside,
    );

    paint_map(painter, origin, scene);
    paint_bridges(painter, origin, scene);
    paint_anchors(painter, origin, scene);

    let divider_x = layout.divider_x();
    painter.line_segment(
        [
            to_pos(origin, Vec2::new(divider_x, layout.map.y())),
            to_pos(origin, Vec2::new(divider_x, layout.map.bottom())),
        ],
        egui::Stroke::new(2.0, to_color32(opts.divider_color)),
    );

    paint_graph_panel(painter, origin, scene);
}

fn paint_map(painter: &egui::Painter, origin: egui::Pos2, scene: &RenderScene) {
    let opts = &scene.options;
    let map = scene.layout.map;
    let land = to_color32(opts.land_color);
    let border = egui::Stroke::new(1.0, to_color32(opts.land_border_color));

    painter.rect_filled(to_rect(origin, map), 0.0, to_color32(opts.water_color));

    for bank in [NORTH_BANK, SOUTH_BANK] {
        let points = bank
            .iter()
            .map(|&(fx, fy)| to_pos(origin, map.at_fraction(fx, fy)))
            .collect();
        painter.add(egui::Shape::convex_polygon(points, land, border));
    }

    let half_axes = egui::vec2(
        map.width() * ISLAND_HALF_AXES,
        map.height() * ISLAND_HALF_AXES,
    );
    for (fx, fy) in [KNEIPHOF_CENTER, LOMSE_CENTER] {
        let center = to_pos(origin, map.at_fraction(fx, fy));
        painter.add(egui::Shape::ellipse_filled(center, half_axes, land));
        painter.add(egui::Shape::ellipse_stroke(center, half_axes, border));
    }

    for (label, (fx, fy)) in LAND_LABELS {
        painter.text(
            to_pos(origin, map.at_fraction(fx, fy)),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(28.0),
            egui::Color32::BLACK,
        );
    }
}

fn paint_bridges(painter: &egui::Painter, origin: egui::Pos2, scene: &RenderScene) {
    let opts = &scene.options;
    let stroke = egui::Stroke::new(opts.bridge_width, to_color32(opts.bridge_color));
    for segment in &scene.bridges {
        painter.line_segment(
            [to_pos(origin, segment.from), to_pos(origin, segment.to)],
            stroke,
        );
    }

    if let Some(preview) = scene.drag_preview {
        painter.line_segment(
            [to_pos(origin, preview.from), to_pos(origin, preview.to)],
            egui::Stroke::new(opts.drag_preview_width, to_color32(opts.bridge_color)),
        );
    }
}

fn paint_anchors(painter: &egui::Painter, origin: egui::Pos2, scene: &RenderScene) {
    let opts = &scene.options;
    for anchor in &scene.anchors {
        let fill = to_color32(opts.region_color(anchor.region()));
        let center = to_pos(origin, anchor.position);
        if scene.is_highlighted(anchor) {
            painter.circle(
                center,
                opts.anchor_radius_highlighted,
                fill,
                egui::Stroke::new(3.0, to_color32(opts.highlight_color)),
            );
        } else {
            painter.circle(
                center,
                opts.anchor_radius,
                fill,
                egui::Stroke::new(2.0, egui::Color32::BLACK),
            );
        }
    }
}

fn paint_graph_panel(painter: &egui::Painter, origin: egui::Pos2, scene: &RenderScene) {
    let opts = &scene.options;
    let edge_stroke = egui::Stroke::new(
        opts.graph_edge_width,
        to_color32(opts.graph_edge_color),
    );

    for shape in &scene.graph_edges {
        let points: Vec<egui::Pos2> = shape.points.iter().map(|&p| to_pos(origin, p)).collect();
        painter.add(egui::Shape::line(points, edge_stroke));
    }

    for (node, position) in scene.graph.nodes() {
        let center = to_pos(origin, position);
        painter.circle(
            center,
            scene.graph.node_radius,
            to_color32(opts.graph_node_color),
            egui::Stroke::new(3.0, egui::Color32::BLACK),
        );
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            node.id(),
            egui::FontId::proportional(20.0),
            egui::Color32::BLACK,
        );
    }

    let panel = scene.layout.graph_panel;
    painter.text(
        to_pos(origin, Vec2::new(panel.center().x, panel.y() + 10.0)),
        egui::Align2::CENTER_TOP,
        region_legend(),
        egui::FontId::proportional(13.0),
        egui::Color32::DARK_GRAY,
    );
}

/// Legende "1 = north, 2 = kneiphof, …" für das Graph-Panel.
fn region_legend() -> String {
    Region::ALL
        .iter()
        .map(|region| format!("{} = {}", region.node().id(), region.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}
