//! Placement of matched tile geometry at grid-world coordinates
//!
//! Rotation is already baked into the catalog variants, so assembly is a
//! pure translation: every wall polygon of a cell's assigned variant moves
//! by the cell offset. Polygons are appended in tile-definition order and
//! never merged or deduplicated.

use crate::io::configuration::UNIT_TILE_SIZE;
use crate::spatial::geometry::Polygon;
use crate::spatial::tiles::TileCatalog;
use ndarray::Array2;

/// Translate every assigned variant's walls into world space
///
/// Cells are visited row-major; unknown assignment indices contribute no
/// geometry (the matcher never produces one).
pub fn assemble_geometry(assignments: &Array2<usize>, catalog: &TileCatalog) -> Vec<Polygon> {
    let mut polygons = Vec::new();

    for ((y, x), &variant_index) in assignments.indexed_iter() {
        let Some(variant) = catalog.variant(variant_index) else {
            continue;
        };
        let dx = x as f64 * UNIT_TILE_SIZE;
        let dy = y as f64 * UNIT_TILE_SIZE;
        for wall in &variant.walls {
            polygons.push(wall.translated(dx, dy));
        }
    }

    polygons
}
