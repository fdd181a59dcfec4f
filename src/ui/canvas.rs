// Canvas painting: turns a sketch snapshot into egui shapes

use crate::command::SketchSnapshot;
use crate::config::{CanvasStyle, Rgba};
use crate::sketch::Point;
use eframe::egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};

pub fn color(rgba: Rgba) -> Color32 {
    let [r, g, b, a] = rgba;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Canvas coordinates are relative to the top-left corner of the canvas rect
pub fn to_screen(rect: Rect, point: Point) -> Pos2 {
    Pos2::new(rect.min.x + point.x as f32, rect.min.y + point.y as f32)
}

pub fn to_canvas(rect: Rect, pos: Pos2) -> Point {
    Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
}

/// Paint closed polygons, the in-progress path and the pointer preview
pub fn paint_sketch(
    painter: &Painter,
    rect: Rect,
    snapshot: &SketchSnapshot<'_>,
    style: &CanvasStyle,
    cursor: Option<Point>,
) {
    let outline = Stroke::new(style.polygon_stroke_width, color(style.polygon_stroke));
    for polygon in snapshot.polygons {
        let points: Vec<Pos2> = polygon
            .points()
            .iter()
            .map(|&p| to_screen(rect, p))
            .collect();
        // Concave polygons fill approximately; the outline is always exact
        painter.add(Shape::convex_polygon(
            points,
            color(style.polygon_fill),
            outline,
        ));
    }

    let path: Vec<Pos2> = snapshot
        .current_points
        .iter()
        .map(|&p| to_screen(rect, p))
        .collect();

    for &pos in &path {
        painter.circle_filled(pos, style.vertex_radius, color(style.vertex_color));
    }

    if path.len() >= 2 {
        painter.add(Shape::line(
            path,
            Stroke::new(style.path_width, color(style.path_color)),
        ));
    }

    if let Some((last, cursor)) = cursor.and_then(|c| snapshot.preview_segment(c)) {
        painter.extend(Shape::dashed_line(
            &[to_screen(rect, last), to_screen(rect, cursor)],
            Stroke::new(style.preview_width, color(style.preview_color)),
            style.preview_dash,
            style.preview_dash,
        ));
    }
}
