//! Geometry primitives for tile walls and assembled track output
//!
//! Wall shapes are authored in unit-cell space [0,1]×[0,1] and carried into
//! world space by pure transforms. Rotation happens in exact 90° steps about
//! the cell center so repeated catalog builds produce identical coordinates.

/// A 2D point in unit-cell or world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate about the unit-cell center (0.5, 0.5) by quarter turns
    ///
    /// A single quarter turn maps the centered point (x, y) to (−y, x),
    /// matching a 90° counter-clockwise rotation in grid coordinates.
    pub const fn rotated_about_cell_center(self, quarter_turns: usize) -> Self {
        let x = self.x - 0.5;
        let y = self.y - 0.5;
        let (rx, ry) = match quarter_turns % 4 {
            1 => (-y, x),
            2 => (-x, -y),
            3 => (y, -x),
            _ => (x, y),
        };
        Self {
            x: rx + 0.5,
            y: ry + 0.5,
        }
    }

    /// Translate by an offset
    pub const fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// An ordered sequence of points forming one wall outline
///
/// Polygons are treated as closed: the last point connects back to the
/// first. Once emitted into a generation result they are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Outline points in drawing order
    pub points: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from its outline points
    pub const fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Rotate every point about the unit-cell center by quarter turns
    #[must_use]
    pub fn rotated_about_cell_center(&self, quarter_turns: usize) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|point| point.rotated_about_cell_center(quarter_turns))
                .collect(),
        }
    }

    /// Translate every point by an offset
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|point| point.translated(dx, dy))
                .collect(),
        }
    }

    /// Number of outline points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Test whether the outline has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
