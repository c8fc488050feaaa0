//! Randomized depth-first carving of the spanning-tree skeleton
//!
//! A single carve over a fresh grid opens walls along a randomized DFS walk
//! from the seed cell (0,0) until every cell has been visited, producing
//! DIM²−1 traversal edges. Carving with the same seed and dimension is
//! bitwise reproducible.

use crate::io::error::{GeneratorError, Result};
use crate::spatial::grid::{Direction, GridPos, WallGrid};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// One traversable connection between two adjacent cells
///
/// Stored in traversal order (`from` is the cell the walk stood on);
/// duplicate suppression treats the pair as unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionEdge {
    /// Cell the connection was opened from
    pub from: GridPos,
    /// Cell the connection was opened into
    pub to: GridPos,
}

impl SolutionEdge {
    /// Create an edge between two cells
    pub const fn new(from: GridPos, to: GridPos) -> Self {
        Self { from, to }
    }

    fn unordered_key(&self) -> ((usize, usize), (usize, usize)) {
        let a = (self.from.x, self.from.y);
        let b = (self.to.x, self.to.y);
        if a <= b { (a, b) } else { (b, a) }
    }
}

/// Ordered edge list with unordered-pair duplicate suppression
///
/// Carving appends first, crossing injection appends after; the insertion
/// order is part of the observable result (the solution graph is built per
/// edge occurrence in this order).
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    edges: Vec<SolutionEdge>,
    seen: std::collections::HashSet<((usize, usize), (usize, usize))>,
}

impl EdgeList {
    /// Create an empty edge list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge unless the unordered pair is already present
    ///
    /// Returns whether the edge was inserted.
    pub fn push(&mut self, edge: SolutionEdge) -> bool {
        if self.seen.insert(edge.unordered_key()) {
            self.edges.push(edge);
            true
        } else {
            false
        }
    }

    /// Test whether an edge between two cells exists in either orientation
    pub fn contains_pair(&self, a: GridPos, b: GridPos) -> bool {
        self.seen.contains(&SolutionEdge::new(a, b).unordered_key())
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[SolutionEdge] {
        &self.edges
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Test whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Carve a spanning tree through the grid with a randomized backtracker
///
/// Walks an explicit frontier stack; at each step the four directions are
/// shuffled with the run's random source and the first in-bounds unvisited
/// neighbor is taken: the wall between the cells is opened on both sides,
/// the neighbor is pushed, and a [`SolutionEdge`] is appended. Dead ends
/// pop without touching walls. Terminates when the stack empties.
///
/// # Errors
///
/// Returns [`GeneratorError::UnreachableGrid`] when the walk fails to visit
/// every cell. That cannot happen for a well-formed grid and indicates a
/// programming error, not a runtime condition to recover from.
pub fn carve(grid: &mut WallGrid, edges: &mut EdgeList, rng: &mut StdRng) -> Result<()> {
    let dim = grid.dim();
    let seed_cell = GridPos::new(0, 0);
    let mut stack = Vec::with_capacity(dim * dim);

    grid.mark_visited(seed_cell);
    stack.push(seed_cell);

    while let Some(&current) = stack.last() {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);

        let step = directions.iter().find_map(|&direction| {
            current
                .neighbor(direction, dim)
                .filter(|&neighbor| !grid.is_visited(neighbor))
                .map(|neighbor| (direction, neighbor))
        });

        match step {
            Some((direction, neighbor)) => {
                grid.open_between(current, direction);
                grid.mark_visited(neighbor);
                stack.push(neighbor);
                edges.push(SolutionEdge::new(current, neighbor));
            }
            None => {
                stack.pop();
            }
        }
    }

    let visited = grid.visited_count();
    let expected = dim * dim;
    if visited == expected {
        Ok(())
    } else {
        Err(GeneratorError::UnreachableGrid { visited, expected })
    }
}
