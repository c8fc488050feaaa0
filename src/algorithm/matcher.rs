//! Exact edge-signature tile matching
//!
//! Maps every cell's final closed-wall array to a catalog variant by
//! first-match linear scan. Catalog order is the priority order; the scan
//! is an exact lookup, not a solver: no backtracking across cells and no
//! domain narrowing feeds the final assignment.

use crate::io::error::{GeneratorError, Result};
use crate::spatial::grid::{GridPos, WallGrid};
use crate::spatial::tiles::TileCatalog;
use ndarray::Array2;

/// Tile assignment for every cell plus match statistics
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// Catalog variant index per cell, row-major `[y, x]`
    pub assignments: Array2<usize>,
    /// Cells that fell back to the block variant
    pub fallback_cells: usize,
}

/// Assign a catalog variant to every cell of the carved grid
///
/// A cell whose wall array matches no variant receives the block fallback;
/// the count of such cells is reported, never hidden. Every cell ends with
/// exactly one assignment.
///
/// # Errors
///
/// Returns [`GeneratorError::MissingFallbackTile`] when a cell matches no
/// variant and the catalog declares no block tile to fall back on.
pub fn assign_tiles(grid: &WallGrid, catalog: &TileCatalog) -> Result<MatchOutcome> {
    let dim = grid.dim();
    let mut assignments = Array2::from_elem((dim, dim), 0usize);
    let mut fallback_cells = 0;

    for y in 0..dim {
        for x in 0..dim {
            let pos = GridPos::new(x, y);
            let closed = grid.closed_walls(pos).unwrap_or([true; 4]);

            let matched = catalog
                .variants()
                .iter()
                .position(|variant| variant.signature.matches_walls(&closed));

            let index = match matched {
                Some(index) => index,
                None => {
                    fallback_cells += 1;
                    catalog
                        .fallback_index()
                        .ok_or(GeneratorError::MissingFallbackTile { x, y })?
                }
            };

            if let Some(slot) = assignments.get_mut((y, x)) {
                *slot = index;
            }
        }
    }

    Ok(MatchOutcome {
        assignments,
        fallback_cells,
    })
}
