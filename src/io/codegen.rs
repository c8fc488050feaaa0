//! Emission of generated results as a standalone Rust source file
//!
//! Writes a module exposing the assembled polygons and the solution graph
//! as plain data functions, so a consuming project can embed a generated
//! layout without linking this crate or shipping the tileset.

use crate::algorithm::graph::SolutionGraph;
use crate::io::error::{Result, file_system_error};
use crate::spatial::geometry::Polygon;
use std::fmt::Write as _;
use std::path::Path;

fn render(polygons: &[Polygon], graph: &SolutionGraph) -> String {
    let mut source = String::new();
    source.push_str("//! Generated track data. Do not edit by hand.\n\n");

    source.push_str("/// Wall polygons in world coordinates\n");
    source.push_str("pub fn track_polygons() -> Vec<Vec<(f64, f64)>> {\n    vec![\n");
    for polygon in polygons {
        source.push_str("        vec![");
        for (index, point) in polygon.points.iter().enumerate() {
            if index > 0 {
                source.push_str(", ");
            }
            let _ = write!(source, "({:.3}, {:.3})", point.x, point.y);
        }
        source.push_str("],\n");
    }
    source.push_str("    ]\n}\n\n");

    source.push_str("/// Solution-graph node positions (cell centers)\n");
    source.push_str("pub fn solution_graph_nodes() -> Vec<(f64, f64)> {\n    vec![\n");
    for node in graph.nodes() {
        let _ = writeln!(
            source,
            "        ({:.3}, {:.3}),",
            node.position.x, node.position.y
        );
    }
    source.push_str("    ]\n}\n\n");

    source.push_str("/// Solution-graph links as node index pairs\n");
    source.push_str("pub fn solution_graph_edges() -> Vec<(usize, usize)> {\n    vec![\n");
    for (from, to) in graph.neighbor_pairs() {
        let _ = writeln!(source, "        ({from}, {to}),");
    }
    source.push_str("    ]\n}\n");

    source
}

/// Write the generated data module to a Rust source file
///
/// # Errors
///
/// Returns [`crate::io::error::GeneratorError::FileSystem`] when the file
/// cannot be written.
pub fn export_source(polygons: &[Polygon], graph: &SolutionGraph, path: &Path) -> Result<()> {
    let rendered = render(polygons, graph);
    std::fs::write(path, rendered).map_err(|source| file_system_error(path, "write", source))
}
