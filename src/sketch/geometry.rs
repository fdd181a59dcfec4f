// Geometry value types: points and closed polygons

use serde::{Deserialize, Serialize};

/// Minimum number of vertices a closed polygon must have
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Errors raised when building sketch values
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SketchError {
    #[error("A polygon needs at least 3 vertices, got {found}")]
    TooFewVertices { found: usize },
}

/// A canvas position. Plain value, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A closed polygon (last vertex implicitly connects to the first)
///
/// The vertex list is private so the `>= 3` invariant can only be
/// established through [`Polygon::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build a polygon from an ordered vertex list
    ///
    /// # Errors
    /// Returns [`SketchError::TooFewVertices`] if fewer than
    /// [`MIN_POLYGON_VERTICES`] points are given.
    pub fn new(points: Vec<Point>) -> Result<Self, SketchError> {
        if points.len() < MIN_POLYGON_VERTICES {
            return Err(SketchError::TooFewVertices {
                found: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed polygon
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = SketchError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}
