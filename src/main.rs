//! CLI entry point for tile-constrained track generation

use clap::Parser;
use trackmaze::io::cli::{Cli, TrackProcessor};

fn main() -> trackmaze::Result<()> {
    let cli = Cli::parse();
    let mut processor = TrackProcessor::new(cli);
    processor.process()
}
