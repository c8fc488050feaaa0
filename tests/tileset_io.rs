//! Validates tileset loading and output writers end to end

use trackmaze::algorithm::executor::{GeneratorConfig, TrackGenerator};
use trackmaze::io::codegen::export_source;
use trackmaze::io::svg::export_svg;
use trackmaze::io::tileset::load_tileset;
use trackmaze::spatial::tiles::TileCatalog;

const TILESET_JSON: &str = r#"[
    {"name": "straight",
     "walls": [[[0.0, 0.25], [1.0, 0.25]], [[0.0, 0.75], [1.0, 0.75]]],
     "edges": [["O", "X", "O", "X"], ["X", "O", "X", "O"]]},
    {"name": "curve_90",
     "walls": [[[0.5, 0.0], [1.0, 0.5]]],
     "edges": [["O", "O", "X", "X"], ["X", "O", "O", "X"],
               ["X", "X", "O", "O"], ["O", "X", "X", "O"]]},
    {"name": "t_junction",
     "walls": [[[0.0, 0.25], [1.0, 0.25]]],
     "edges": [["O", "O", "O", "X"], ["X", "O", "O", "O"],
               ["O", "X", "O", "O"], ["O", "O", "X", "O"]]},
    {"name": "cross",
     "walls": [],
     "edges": [["O", "O", "O", "O"]]},
    {"name": "endcap",
     "walls": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]],
     "edges": [["O", "X", "X", "X"], ["X", "O", "X", "X"],
               ["X", "X", "O", "X"], ["X", "X", "X", "O"]]},
    {"name": "block",
     "walls": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]],
     "edges": [["X", "X", "X", "X"]]}
]"#;

#[test]
fn tileset_file_drives_a_complete_generation() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir failed");
    };
    let tileset_path = dir.path().join("tiles.json");
    if std::fs::write(&tileset_path, TILESET_JSON).is_err() {
        unreachable!("could not stage tileset");
    }

    let Ok(definitions) = load_tileset(&tileset_path) else {
        unreachable!("tileset failed to load");
    };
    assert_eq!(definitions.len(), 6);

    let Ok(catalog) = TileCatalog::build(&definitions) else {
        unreachable!("catalog build failed");
    };
    // 2 + 4 + 4 + 1 + 4 + 1 orientations
    assert_eq!(catalog.len(), 16);
    assert_eq!(catalog.fallback_index(), Some(15));

    let config = GeneratorConfig {
        dim: 6,
        crossing_probability: 0.2,
        seed: Some(42),
    };
    let Ok(mut generator) = TrackGenerator::new(catalog, config) else {
        unreachable!("generator rejected a valid config");
    };
    let Ok(result) = generator.run() else {
        unreachable!("generation failed");
    };
    assert_eq!(result.report.fallback_cells, 0);
    assert!(!result.polygons.is_empty());

    let svg_path = dir.path().join("track.svg");
    assert!(export_svg(&result.polygons, &result.graph, 6, &svg_path).is_ok());
    let svg = std::fs::read_to_string(&svg_path).unwrap_or_default();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("<path"));

    let source_path = dir.path().join("track_data.rs");
    assert!(export_source(&result.polygons, &result.graph, &source_path).is_ok());
    let source = std::fs::read_to_string(&source_path).unwrap_or_default();
    assert!(source.contains("pub fn track_polygons()"));
    assert!(source.contains("pub fn solution_graph_edges()"));
}

#[test]
fn missing_tileset_files_report_the_path() {
    let err = load_tileset(std::path::Path::new("/nonexistent/tiles.json"));
    let Err(error) = err else {
        unreachable!("expected a file system error");
    };
    assert!(error.to_string().contains("/nonexistent/tiles.json"));
}
