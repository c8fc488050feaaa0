//! Probabilistic crossing injection after carving
//!
//! Converts interior cells into 4-way junctions to introduce cycles into
//! the otherwise acyclic skeleton. Only ever opens walls; the spanning
//! tree's reachability is preserved while loops become possible.

use crate::algorithm::carver::{EdgeList, SolutionEdge};
use crate::spatial::grid::{Direction, GridPos, WallGrid};
use rand::Rng;
use rand::rngs::StdRng;

/// Open remaining walls of randomly chosen interior cells
///
/// Scans interior cells in row-major order, excluding the outer ring so no
/// opening can face out of the grid. Each cell with fewer than four open
/// walls draws exactly one probability sample; when it falls below
/// `probability`, every remaining closed wall of the cell is opened (both
/// sides) and an edge is appended per opened wall unless the unordered
/// cell pair is already connected. Returns the number of cells converted.
pub fn inject_crossings(
    grid: &mut WallGrid,
    edges: &mut EdgeList,
    probability: f64,
    rng: &mut StdRng,
) -> usize {
    let dim = grid.dim();
    let mut converted = 0;

    for y in 1..dim.saturating_sub(1) {
        for x in 1..dim.saturating_sub(1) {
            let pos = GridPos::new(x, y);
            if grid.open_wall_count(pos) == 4 {
                continue;
            }
            let sample = rng.random::<f64>();
            if sample >= probability {
                continue;
            }

            for direction in Direction::ALL {
                if !grid.is_closed(pos, direction) {
                    continue;
                }
                if let Some(neighbor) = grid.open_between(pos, direction) {
                    edges.push(SolutionEdge::new(pos, neighbor));
                }
            }
            converted += 1;
        }
    }

    converted
}
