//! Tile-constrained generation of closed-loop 2D tracks and mazes
//!
//! The pipeline builds a catalog of rotated tile variants with per-edge
//! open/closed signatures, carves a spanning-tree maze over a square grid,
//! optionally injects crossings for cycles, matches every cell to a variant
//! by exact signature lookup, and derives the wall geometry plus a
//! navigable solution graph.

#![forbid(unsafe_code)]

/// Core pipeline stages: carving, crossings, matching, assembly, graph build
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Spatial data structures: geometry, wall grid, tile catalog
pub mod spatial;

pub use io::error::{GeneratorError, Result};
