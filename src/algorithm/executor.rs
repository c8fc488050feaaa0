//! Pipeline orchestration: carve, inject, match, assemble, graph build
//!
//! The whole generation is one sequential pass over state owned by the
//! run. A single seeded random stream is threaded through carving and
//! crossing injection, so runs with identical configuration and seed are
//! bitwise reproducible.

use crate::algorithm::assembler::assemble_geometry;
use crate::algorithm::carver::{EdgeList, carve};
use crate::algorithm::crossings::inject_crossings;
use crate::algorithm::graph::{SolutionGraph, build_solution_graph};
use crate::algorithm::matcher::assign_tiles;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::geometry::Polygon;
use crate::spatial::grid::WallGrid;
use crate::spatial::tiles::TileCatalog;
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generation parameters
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Grid cells per side
    pub dim: usize,
    /// Probability of converting an interior cell into a 4-way crossing
    pub crossing_probability: f64,
    /// Seed for reproducible runs; `None` draws OS entropy
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Validate the parameters
    ///
    /// # Errors
    ///
    /// Returns [`crate::io::error::GeneratorError::InvalidParameter`] when
    /// the dimension is zero or exceeds [`MAX_GRID_DIMENSION`], or when the
    /// crossing probability is not a finite value in [0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.dim == 0 {
            return Err(invalid_parameter(
                "dim",
                &self.dim,
                &"grid dimension must be at least 1",
            ));
        }
        if self.dim > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "dim",
                &self.dim,
                &format!("grid dimension must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if !self.crossing_probability.is_finite()
            || !(0.0..=1.0).contains(&self.crossing_probability)
        {
            return Err(invalid_parameter(
                "crossing_probability",
                &self.crossing_probability,
                &"probability must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Observable counters collected during one generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Tile definitions that received the substituted closed signature
    pub defaulted_signatures: usize,
    /// Cells assigned the block fallback because no variant matched
    pub fallback_cells: usize,
    /// Interior cells converted into 4-way crossings
    pub crossing_cells: usize,
    /// Final solution-edge count
    pub edge_count: usize,
}

/// Complete output of one generation run
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Assembled wall polygons in world coordinates
    pub polygons: Vec<Polygon>,
    /// Navigable solution graph
    pub graph: SolutionGraph,
    /// Catalog variant index per cell, row-major `[y, x]`
    pub assignments: Array2<usize>,
    /// Run counters
    pub report: GenerationReport,
}

/// One-shot track generator owning catalog, configuration, and randomness
pub struct TrackGenerator {
    catalog: TileCatalog,
    config: GeneratorConfig,
    rng: StdRng,
}

impl TrackGenerator {
    /// Create a generator after validating the configuration
    ///
    /// # Errors
    ///
    /// Returns a parameter error when the configuration is invalid; see
    /// [`GeneratorConfig::validate`].
    pub fn new(catalog: TileCatalog, config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            catalog,
            config,
            rng,
        })
    }

    /// The catalog this generator places from
    pub const fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// The validated configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Execute the full pipeline once
    ///
    /// Stages run strictly in sequence: spanning-tree carving, crossing
    /// injection, signature matching, geometry assembly, and solution-graph
    /// construction. Calling `run` again continues the same random stream
    /// and yields a fresh, different layout.
    ///
    /// # Errors
    ///
    /// Returns carving or matching errors; see
    /// [`crate::io::error::GeneratorError`] for the cases.
    pub fn run(&mut self) -> Result<GenerationResult> {
        let mut grid = WallGrid::new(self.config.dim);
        let mut edges = EdgeList::new();

        carve(&mut grid, &mut edges, &mut self.rng)?;
        let crossing_cells = inject_crossings(
            &mut grid,
            &mut edges,
            self.config.crossing_probability,
            &mut self.rng,
        );

        let outcome = assign_tiles(&grid, &self.catalog)?;
        let polygons = assemble_geometry(&outcome.assignments, &self.catalog);
        let graph = build_solution_graph(&edges, &grid);

        let report = GenerationReport {
            defaulted_signatures: self.catalog.defaulted_signatures(),
            fallback_cells: outcome.fallback_cells,
            crossing_cells,
            edge_count: edges.len(),
        };

        Ok(GenerationResult {
            polygons,
            graph,
            assignments: outcome.assignments,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{GeneratorConfig, TrackGenerator};
    use crate::spatial::tiles::{EdgeSignature, TileCatalog, TileDefinition, TileFamily};

    fn block_only_catalog() -> TileCatalog {
        let block = TileDefinition {
            name: "block".to_string(),
            walls: Vec::new(),
            orientations: vec![EdgeSignature::CLOSED],
            family: TileFamily::Block,
        };
        let Ok(catalog) = TileCatalog::build(&[block]) else {
            unreachable!("catalog build failed");
        };
        catalog
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let config = GeneratorConfig {
            dim: 0,
            crossing_probability: 0.0,
            seed: Some(1),
        };
        assert!(TrackGenerator::new(block_only_catalog(), config).is_err());
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let config = GeneratorConfig {
            dim: 3,
            crossing_probability: 1.5,
            seed: Some(1),
        };
        assert!(TrackGenerator::new(block_only_catalog(), config).is_err());
    }

    #[test]
    fn edge_count_lands_in_the_report() {
        let config = GeneratorConfig {
            dim: 3,
            crossing_probability: 0.0,
            seed: Some(42),
        };
        let Ok(mut generator) = TrackGenerator::new(block_only_catalog(), config) else {
            unreachable!("generator rejected a valid config");
        };
        let Ok(result) = generator.run() else {
            unreachable!("generation failed");
        };
        assert_eq!(result.report.edge_count, 8);
        assert_eq!(result.graph.len(), 8);
        assert_eq!(result.report.crossing_cells, 0);
    }
}
