//! Wall-grid state shared by the carving, injection, and matching stages
//!
//! The grid is a DIM×DIM array of cells whose four walls start fully closed.
//! Carving and crossing injection only ever open walls; nothing re-closes
//! them, so later stages can read the arrays without revalidation.

use crate::spatial::geometry::Point;
use ndarray::Array2;

/// Cardinal direction with the stable edge-index order used everywhere
///
/// Index order is 0=east, 1=south, 2=west, 3=north; edge signatures, wall
/// arrays, and adjacency tables all share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Positive x (index 0)
    East,
    /// Positive y (index 1)
    South,
    /// Negative x (index 2)
    West,
    /// Negative y (index 3)
    North,
}

impl Direction {
    /// All directions in edge-index order
    pub const ALL: [Self; 4] = [Self::East, Self::South, Self::West, Self::North];

    /// Stable index of this direction
    pub const fn index(self) -> usize {
        match self {
            Self::East => 0,
            Self::South => 1,
            Self::West => 2,
            Self::North => 3,
        }
    }

    /// The facing direction, i.e. index + 2 mod 4
    pub const fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::North => Self::South,
        }
    }

    /// Unit grid offset (dx, dy) of a step in this direction
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
            Self::North => (0, -1),
        }
    }
}

/// Grid cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl GridPos {
    /// Create a position from column and row indices
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The in-bounds neighbor one step away, if any
    pub const fn neighbor(self, direction: Direction, dim: usize) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let nx = self.x as i64 + dx;
        let ny = self.y as i64 + dy;
        if nx >= 0 && ny >= 0 && (nx as usize) < dim && (ny as usize) < dim {
            Some(Self {
                x: nx as usize,
                y: ny as usize,
            })
        } else {
            None
        }
    }

    /// World coordinate of the cell center
    pub const fn center(self) -> Point {
        Point::new(self.x as f64 + 0.5, self.y as f64 + 0.5)
    }
}

/// Per-cell carving state: visited flag plus four closed-wall slots
#[derive(Debug, Clone, Copy)]
pub struct CellState {
    visited: bool,
    closed: [bool; 4],
}

impl Default for CellState {
    fn default() -> Self {
        Self {
            visited: false,
            closed: [true; 4],
        }
    }
}

impl CellState {
    /// Test whether the wall toward a direction is still closed
    pub const fn is_closed(&self, direction: Direction) -> bool {
        match direction {
            Direction::East => self.closed[0],
            Direction::South => self.closed[1],
            Direction::West => self.closed[2],
            Direction::North => self.closed[3],
        }
    }

    /// Closed-wall array in edge-index order (true = closed)
    pub const fn closed_walls(&self) -> [bool; 4] {
        self.closed
    }

    /// Number of open walls
    pub fn open_count(&self) -> usize {
        self.closed.iter().filter(|&&closed| !closed).count()
    }

    /// Test whether the carver has visited this cell
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    const fn open(&mut self, direction: Direction) {
        match direction {
            Direction::East => self.closed[0] = false,
            Direction::South => self.closed[1] = false,
            Direction::West => self.closed[2] = false,
            Direction::North => self.closed[3] = false,
        }
    }
}

/// DIM×DIM grid of wall cells
///
/// Storage is row-major (`[y, x]`). The dimension is carried explicitly so
/// every stage receives it through the grid rather than ambient state.
#[derive(Debug, Clone)]
pub struct WallGrid {
    cells: Array2<CellState>,
    dim: usize,
}

impl WallGrid {
    /// Create a fully closed, unvisited grid
    pub fn new(dim: usize) -> Self {
        Self {
            cells: Array2::from_elem((dim, dim), CellState::default()),
            dim,
        }
    }

    /// Cells per side
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// Read a cell's state
    pub fn cell(&self, pos: GridPos) -> Option<&CellState> {
        self.cells.get((pos.y, pos.x))
    }

    /// Test whether the carver has visited a cell
    pub fn is_visited(&self, pos: GridPos) -> bool {
        self.cell(pos).is_some_and(CellState::is_visited)
    }

    /// Mark a cell visited
    pub fn mark_visited(&mut self, pos: GridPos) {
        if let Some(cell) = self.cells.get_mut((pos.y, pos.x)) {
            cell.visited = true;
        }
    }

    /// Count of visited cells
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }

    /// Test whether the wall from a cell toward a direction is closed
    pub fn is_closed(&self, pos: GridPos, direction: Direction) -> bool {
        self.cell(pos).is_none_or(|cell| cell.is_closed(direction))
    }

    /// Closed-wall array of a cell in edge-index order
    pub fn closed_walls(&self, pos: GridPos) -> Option<[bool; 4]> {
        self.cell(pos).map(CellState::closed_walls)
    }

    /// Number of open walls of a cell
    pub fn open_wall_count(&self, pos: GridPos) -> usize {
        self.cell(pos).map_or(0, CellState::open_count)
    }

    /// Open the wall between a cell and its neighbor, on both sides
    ///
    /// Returns the neighbor position, or `None` (without mutating) when the
    /// step would leave the grid.
    pub fn open_between(&mut self, pos: GridPos, direction: Direction) -> Option<GridPos> {
        let neighbor = pos.neighbor(direction, self.dim)?;
        if let Some(cell) = self.cells.get_mut((pos.y, pos.x)) {
            cell.open(direction);
        }
        if let Some(cell) = self.cells.get_mut((neighbor.y, neighbor.x)) {
            cell.open(direction.opposite());
        }
        Some(neighbor)
    }

    /// Test whether a cell lies off the outer ring
    pub const fn is_interior(&self, pos: GridPos) -> bool {
        pos.x >= 1 && pos.y >= 1 && pos.x + 1 < self.dim && pos.y + 1 < self.dim
    }
}
