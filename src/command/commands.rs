// Concrete sketch commands

use crate::command::state::SketchState;
use crate::command::trait_def::Reversible;
use crate::sketch::geometry::{Point, Polygon, SketchError};

/// A reversible edit of the sketch
///
/// Each variant carries everything needed for both `apply` and `revert`,
/// so no state is captured from the moment the command was issued other
/// than what is stored here.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchCommand {
    /// Append a vertex to the in-progress polygon
    AddPoint(Point),

    /// Commit the in-progress vertices as a closed polygon
    ///
    /// The polygon is a copy of the vertex list taken when the command was
    /// built, so later edits of the in-progress list cannot reach it.
    ClosePolygon(Polygon),
}

impl SketchCommand {
    pub fn add_point(point: impl Into<Point>) -> Self {
        Self::AddPoint(point.into())
    }

    /// Snapshot `points` into a close command
    ///
    /// # Errors
    /// Returns [`SketchError::TooFewVertices`] for fewer than three points.
    pub fn close_polygon(points: &[Point]) -> Result<Self, SketchError> {
        Polygon::new(points.to_vec()).map(Self::ClosePolygon)
    }
}

impl Reversible<SketchState> for SketchCommand {
    fn apply(&self, state: &mut SketchState) {
        match self {
            Self::AddPoint(point) => state.push_point(*point),
            Self::ClosePolygon(polygon) => state.finish_polygon(polygon.clone()),
        }
    }

    fn revert(&self, state: &mut SketchState) {
        match self {
            Self::AddPoint(point) => {
                let removed = state.pop_point();
                debug_assert_eq!(removed.as_ref(), Some(point), "reverted a point that was not last");
                if removed.is_none() {
                    tracing::error!(?point, "add-point reverted with no in-progress vertices");
                }
            }
            Self::ClosePolygon(polygon) => {
                debug_assert!(
                    state.current_points().is_empty(),
                    "close-polygon reverted while a polygon was in progress"
                );
                match state.reopen_last_polygon() {
                    Some(restored) => debug_assert_eq!(restored, polygon.points()),
                    None => tracing::error!(
                        vertices = polygon.len(),
                        "close-polygon reverted with no completed polygons"
                    ),
                }
            }
        }
    }

    fn description(&self) -> String {
        match self {
            Self::AddPoint(point) => format!("Add point ({:.0}, {:.0})", point.x, point.y),
            Self::ClosePolygon(polygon) => {
                format!("Close polygon ({} vertices)", polygon.len())
            }
        }
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
    fn test_add_point_apply_and_revert() {
        let mut state = SketchState::new();
        let cmd = SketchCommand::add_point((3.0, 4.0));

        cmd.apply(&mut state);
        assert_eq!(state.current_points(), &[Point::new(3.0, 4.0)]);

        cmd.revert(&mut state);
        assert!(state.current_points().is_empty());
    }

    #[test]
    fn test_close_polygon_apply_and_revert() {
        let mut state = SketchState::new();
        for p in triangle() {
            SketchCommand::AddPoint(p).apply(&mut state);
        }

        let cmd = SketchCommand::close_polygon(state.current_points()).unwrap();
        cmd.apply(&mut state);
        assert!(state.current_points().is_empty());
        assert_eq!(state.polygons().len(), 1);
        assert_eq!(state.polygons()[0].points(), triangle().as_slice());

        cmd.revert(&mut state);
        assert_eq!(state.current_points(), triangle().as_slice());
        assert!(state.polygons().is_empty());
    }

    #[test]
    fn test_close_polygon_snapshot_is_independent() {
        let mut state = SketchState::new();
        for p in triangle() {
            SketchCommand::AddPoint(p).apply(&mut state);
        }
        let cmd = SketchCommand::close_polygon(state.current_points()).unwrap();

        // Mutating the live vertex list after construction must not leak in
        SketchCommand::add_point((99.0, 99.0)).apply(&mut state);
        cmd.apply(&mut state);

        assert_eq!(state.polygons()[0].len(), 3);
        assert!(state.current_points().is_empty());
    }

    #[test]
    fn test_close_polygon_requires_three_points() {
        let err = SketchCommand::close_polygon(&triangle()[..2]).unwrap_err();
        assert_eq!(err, SketchError::TooFewVertices { found: 2 });
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            SketchCommand::add_point((10.4, 20.6)).description(),
            "Add point (10, 21)"
        );
        assert_eq!(
            SketchCommand::close_polygon(&triangle())
                .unwrap()
                .description(),
            "Close polygon (3 vertices)"
        );
    }
}
