//! Candidate-domain narrowing over catalog adjacency
//!
//! Diagnostic utility that filters each cell's set of placeable variants by
//! requiring support in every in-bounds neighbor's domain, iterated to a
//! fixed point. The grid pipeline's final assignment never consults this
//! (it stays a direct signature lookup), but the narrowing exposes catalog
//! dead ends (cells whose domain empties) before any carving happens.

use crate::algorithm::bitset::VariantBitset;
use crate::spatial::grid::{Direction, GridPos};
use crate::spatial::tiles::TileCatalog;
use ndarray::Array2;

/// Per-cell candidate domains over catalog variant indices
#[derive(Debug, Clone)]
pub struct DomainGrid {
    domains: Array2<VariantBitset>,
    dim: usize,
}

impl DomainGrid {
    /// Create a grid where every cell may still hold every variant
    pub fn full(catalog: &TileCatalog, dim: usize) -> Self {
        Self {
            domains: Array2::from_elem((dim, dim), VariantBitset::all(catalog.len())),
            dim,
        }
    }

    /// Cells per side
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// Domain of a cell
    pub fn domain(&self, pos: GridPos) -> Option<&VariantBitset> {
        self.domains.get((pos.y, pos.x))
    }

    /// Narrow every domain to variants supported by all neighbors
    ///
    /// One pass recomputes, per cell and direction, the union of variants
    /// each neighbor domain still admits on the shared edge and intersects
    /// it into the cell's domain. Passes repeat until nothing changes.
    /// Returns the total number of variants eliminated.
    pub fn narrow(&mut self, catalog: &TileCatalog) -> usize {
        let mut eliminated = 0;
        let mut changed = true;

        while changed {
            changed = false;
            for y in 0..self.dim {
                for x in 0..self.dim {
                    let pos = GridPos::new(x, y);
                    let Some(current) = self.domain(pos).cloned() else {
                        continue;
                    };
                    let mut options = current.clone();

                    for direction in Direction::ALL {
                        let Some(neighbor) = pos.neighbor(direction, self.dim) else {
                            continue;
                        };
                        let Some(neighbor_domain) = self.domain(neighbor) else {
                            continue;
                        };

                        let mut supported = VariantBitset::new(catalog.len());
                        for neighbor_variant in neighbor_domain.to_vec() {
                            if let Some(variant) = catalog.variant(neighbor_variant) {
                                for &index in variant.compatible_in(direction.opposite()) {
                                    supported.insert(index);
                                }
                            }
                        }
                        options.intersect_with(&supported);
                    }

                    if options != current {
                        eliminated += current.count() - options.count();
                        changed = true;
                        if let Some(slot) = self.domains.get_mut((y, x)) {
                            *slot = options;
                        }
                    }
                }
            }
        }

        eliminated
    }

    /// Domain size per cell, row-major
    pub fn domain_sizes(&self) -> Array2<usize> {
        self.domains.map(VariantBitset::count)
    }

    /// Positions whose domain has emptied (no placeable variant remains)
    pub fn contradictions(&self) -> Vec<GridPos> {
        let mut empty = Vec::new();
        for ((y, x), domain) in self.domains.indexed_iter() {
            if domain.is_empty() {
                empty.push(GridPos::new(x, y));
            }
        }
        empty
    }
}
