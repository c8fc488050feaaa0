//! Input/output operations and error handling

/// Command-line interface
pub mod cli;
/// Generated-source emission
pub mod codegen;
/// Generation constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Batch progress display
pub mod progress;
/// SVG export
pub mod svg;
/// Tileset JSON loading
pub mod tileset;
