//! Command-line interface for one-shot and batch track generation

use crate::algorithm::executor::{GeneratorConfig, TrackGenerator};
use crate::algorithm::propagation::DomainGrid;
use crate::io::codegen::export_source;
use crate::io::configuration::{
    DEFAULT_CROSSING_PROBABILITY, DEFAULT_GRID_DIM, SVG_OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::svg::export_svg;
use crate::io::tileset::load_tileset;
use crate::spatial::tiles::TileCatalog;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "trackmaze")]
#[command(
    author,
    version,
    about = "Generate closed-loop tile tracks with a solution graph"
)]
/// Command-line arguments for the track generation tool
pub struct Cli {
    /// Tileset JSON file describing the base tiles
    #[arg(value_name = "TILESET")]
    pub tileset: PathBuf,

    /// Grid dimension in cells per side
    #[arg(short, long, default_value_t = DEFAULT_GRID_DIM)]
    pub dim: usize,

    /// Probability of converting an interior cell into a 4-way crossing
    #[arg(short, long, default_value_t = DEFAULT_CROSSING_PROBABILITY)]
    pub probability: f64,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// SVG output path (derived from the tileset name when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit the generated data as a Rust source file at this path
    #[arg(short, long)]
    pub emit: Option<PathBuf>,

    /// Number of runs; consecutive seeds when a base seed is given
    #[arg(short, long, default_value_t = 1)]
    pub runs: usize,

    /// Report catalog domain narrowing before generating
    #[arg(short, long)]
    pub check: bool,

    /// Suppress summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.runs > 1
    }
}

/// Orchestrates tileset loading, generation runs, and output writing
pub struct TrackProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl TrackProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.runs));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run all requested generations
    ///
    /// # Errors
    ///
    /// Returns an error when the tileset cannot be loaded, the parameters
    /// are invalid, or an output file cannot be written.
    pub fn process(&mut self) -> Result<()> {
        let definitions = load_tileset(&self.cli.tileset)?;
        let catalog = TileCatalog::build(&definitions)?;

        // Allow print for user feedback on recovered tileset defects
        #[allow(clippy::print_stderr)]
        if catalog.defaulted_signatures() > 0 && !self.cli.quiet {
            eprintln!(
                "{} tile(s) declared no edge signature; substituted fully closed",
                catalog.defaulted_signatures()
            );
        }

        if self.cli.check {
            self.report_domains(&catalog);
        }

        for run_index in 0..self.cli.runs {
            self.run_once(&catalog, run_index)?;
            if let Some(ref pm) = self.progress_manager {
                pm.complete_run();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn run_once(&self, catalog: &TileCatalog, run_index: usize) -> Result<()> {
        let config = GeneratorConfig {
            dim: self.cli.dim,
            crossing_probability: self.cli.probability,
            seed: self.cli.seed.map(|seed| seed + run_index as u64),
        };
        let mut generator = TrackGenerator::new(catalog.clone(), config)?;
        let result = generator.run()?;

        let svg_path = self.output_path(run_index);
        export_svg(&result.polygons, &result.graph, self.cli.dim, &svg_path)?;

        if let Some(ref emit_path) = self.cli.emit {
            let path = Self::indexed_path(emit_path, run_index, self.cli.runs);
            export_source(&result.polygons, &result.graph, &path)?;
        }

        // Allow print for user feedback on generation results
        #[allow(clippy::print_stdout)]
        if !self.cli.quiet {
            println!(
                "{}: {} polygons, {} edges, {} crossings, {} fallback cells",
                svg_path.display(),
                result.polygons.len(),
                result.report.edge_count,
                result.report.crossing_cells,
                result.report.fallback_cells,
            );
        }

        Ok(())
    }

    // Allow print for user feedback on the consistency check
    #[allow(clippy::print_stdout)]
    fn report_domains(&self, catalog: &TileCatalog) {
        let mut domains = DomainGrid::full(catalog, self.cli.dim);
        let eliminated = domains.narrow(catalog);
        let contradictions = domains.contradictions();

        if !self.cli.quiet {
            println!(
                "Catalog check: {} variants, {eliminated} candidates eliminated, {} contradictions",
                catalog.len(),
                contradictions.len(),
            );
            for pos in contradictions {
                println!("  no placeable variant at ({}, {})", pos.x, pos.y);
            }
        }
    }

    fn output_path(&self, run_index: usize) -> PathBuf {
        match self.cli.output {
            Some(ref output) => Self::indexed_path(output, run_index, self.cli.runs),
            None => {
                let stem = self.cli.tileset.file_stem().unwrap_or_default();
                let name = if self.cli.runs > 1 {
                    format!(
                        "{}{}_{}.svg",
                        stem.to_string_lossy(),
                        SVG_OUTPUT_SUFFIX,
                        run_index
                    )
                } else {
                    format!("{}{}.svg", stem.to_string_lossy(), SVG_OUTPUT_SUFFIX)
                };
                match self.cli.tileset.parent() {
                    Some(parent) => parent.join(name),
                    None => PathBuf::from(name),
                }
            }
        }
    }

    fn indexed_path(path: &Path, run_index: usize, runs: usize) -> PathBuf {
        if runs <= 1 {
            return path.to_path_buf();
        }
        let stem = path.file_stem().unwrap_or_default();
        let extension = path.extension().unwrap_or_default();
        let name = if extension.is_empty() {
            format!("{}_{}", stem.to_string_lossy(), run_index)
        } else {
            format!(
                "{}_{}.{}",
                stem.to_string_lossy(),
                run_index,
                extension.to_string_lossy()
            )
        };
        match path.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }
}
