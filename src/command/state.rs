// SketchState - The drawing state that commands modify
//
// Only commands mutate this struct. Renderers get a borrowed
// `SketchSnapshot` and never touch the vectors directly.

use crate::sketch::geometry::{Point, Polygon};
use serde::Serialize;

/// In-progress vertices plus completed polygons
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SketchState {
    /// Vertices of the polygon being drawn, in click order
    current_points: Vec<Point>,

    /// Closed polygons, in creation order
    polygons: Vec<Polygon>,
}

impl SketchState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_points(&self) -> &[Point] {
        &self.current_points
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Borrow a read-only view for rendering
    pub fn snapshot(&self, revision: u64) -> SketchSnapshot<'_> {
        SketchSnapshot {
            current_points: &self.current_points,
            polygons: &self.polygons,
            revision,
        }
    }

    pub(crate) fn push_point(&mut self, point: Point) {
        self.current_points.push(point);
    }

    pub(crate) fn pop_point(&mut self) -> Option<Point> {
        self.current_points.pop()
    }

    /// Commit a polygon and clear the in-progress vertices
    pub(crate) fn finish_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
        self.current_points.clear();
    }

    /// Pop the last polygon back into the in-progress vertices
    pub(crate) fn reopen_last_polygon(&mut self) -> Option<&[Point]> {
        let polygon = self.polygons.pop()?;
        self.current_points = polygon.into_points();
        Some(&self.current_points)
    }
}

/// Read-only view of the sketch handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SketchSnapshot<'a> {
    pub current_points: &'a [Point],
    pub polygons: &'a [Polygon],
    /// Bumped after every effective execute/undo/redo
    pub revision: u64,
}

impl SketchSnapshot<'_> {
    /// Segment from the last placed vertex to the pointer, if one is in progress
    pub fn preview_segment(&self, cursor: Point) -> Option<(Point, Point)> {
        self.current_points.last().map(|&last| (last, cursor))
    }

    pub fn is_empty(&self) -> bool {
        self.current_points.is_empty() && self.polygons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]
    }

    #[test]
    fn test_finish_and_reopen_polygon() {
        let mut state = SketchState::new();
        for p in triangle() {
            state.push_point(p);
        }

        state.finish_polygon(Polygon::new(triangle()).unwrap());
        assert!(state.current_points().is_empty());
        assert_eq!(state.polygons().len(), 1);

        let reopened = state.reopen_last_polygon().map(<[Point]>::to_vec);
        assert_eq!(reopened, Some(triangle()));
        assert!(state.polygons().is_empty());
    }

    #[test]
    fn test_reopen_without_polygons() {
        let mut state = SketchState::new();
        assert!(state.reopen_last_polygon().is_none());
        assert_eq!(state, SketchState::new());
    }

    #[test]
    fn test_preview_segment() {
        let mut state = SketchState::new();
        let cursor = Point::new(5.0, 5.0);
        assert_eq!(state.snapshot(0).preview_segment(cursor), None);

        state.push_point(Point::new(1.0, 2.0));
        assert_eq!(
            state.snapshot(0).preview_segment(cursor),
            Some((Point::new(1.0, 2.0), cursor))
        );
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut state = SketchState::new();
        state.push_point(Point::new(1.0, 2.0));

        let json = serde_json::to_value(state.snapshot(4)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "current_points": [{"x": 1.0, "y": 2.0}],
                "polygons": [],
                "revision": 4
            })
        );
    }
}
