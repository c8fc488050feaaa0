//! Tileset JSON loading
//!
//! The wire format is a JSON array of base tile records:
//!
//! ```json
//! [{"name": "straight",
//!   "walls": [[[0.0, 0.25], [1.0, 0.25]], [[0.0, 0.75], [1.0, 0.75]]],
//!   "edges": [["O", "X", "O", "X"], ["X", "O", "X", "O"]]}]
//! ```
//!
//! Edge symbols use the `"O"`/`"X"` tokens (the spelled-out `"OPEN"` and
//! `"CLOSED"` are accepted as aliases). A record may declare its shape
//! family explicitly; otherwise the family is inferred from the tile name,
//! which keeps existing tileset files working while the core stays free of
//! name matching.

use crate::io::error::{GeneratorError, Result, file_system_error};
use crate::spatial::geometry::{Point, Polygon};
use crate::spatial::tiles::{EdgeSignature, EdgeSymbol, TileDefinition, TileFamily};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawTile {
    name: String,
    #[serde(default)]
    walls: Vec<Vec<[f64; 2]>>,
    #[serde(default)]
    edges: Vec<[EdgeSymbol; 4]>,
    #[serde(default)]
    family: Option<TileFamily>,
}

fn infer_family(name: &str) -> TileFamily {
    if name.contains("curve") {
        TileFamily::Curve
    } else if name.contains("endcap") {
        TileFamily::Endcap
    } else if name.contains("block") {
        TileFamily::Block
    } else {
        TileFamily::Standard
    }
}

fn definition_from_raw(raw: RawTile) -> TileDefinition {
    let family = raw.family.unwrap_or_else(|| infer_family(&raw.name));
    let walls = raw
        .walls
        .into_iter()
        .map(|outline| {
            Polygon::new(
                outline
                    .into_iter()
                    .map(|[x, y]| Point::new(x, y))
                    .collect(),
            )
        })
        .collect();
    let orientations = raw.edges.into_iter().map(EdgeSignature::new).collect();
    TileDefinition {
        name: raw.name,
        walls,
        orientations,
        family,
    }
}

/// Parse tileset JSON text into base tile definitions
///
/// # Errors
///
/// Returns [`GeneratorError::TilesetLoad`] when the text is not a valid
/// tileset document (the path field carries a placeholder).
pub fn parse_tileset(json: &str) -> Result<Vec<TileDefinition>> {
    let raw: Vec<RawTile> = serde_json::from_str(json).map_err(|source| {
        GeneratorError::TilesetLoad {
            path: Path::new("<inline>").to_path_buf(),
            source,
        }
    })?;
    Ok(raw.into_iter().map(definition_from_raw).collect())
}

/// Load base tile definitions from a tileset JSON file
///
/// # Errors
///
/// Returns [`GeneratorError::FileSystem`] when the file cannot be read and
/// [`GeneratorError::TilesetLoad`] when its contents do not parse.
pub fn load_tileset(path: &Path) -> Result<Vec<TileDefinition>> {
    let json = std::fs::read_to_string(path)
        .map_err(|source| file_system_error(path, "read", source))?;
    let raw: Vec<RawTile> = serde_json::from_str(&json).map_err(|source| {
        GeneratorError::TilesetLoad {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(raw.into_iter().map(definition_from_raw).collect())
}
