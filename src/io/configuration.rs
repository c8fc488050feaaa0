//! Generation constants and runtime configuration defaults

/// World-space edge length of one tile cell
pub const UNIT_TILE_SIZE: f64 = 1.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Default grid dimension (cells per side)
pub const DEFAULT_GRID_DIM: usize = 10;

/// Default probability of converting an interior cell into a crossing
pub const DEFAULT_CROSSING_PROBABILITY: f64 = 0.15;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to derived SVG output filenames
pub const SVG_OUTPUT_SUFFIX: &str = "_track";

/// Pixel size of the square SVG viewport
pub const SVG_VIEWPORT_SIZE: u32 = 1000;

/// Padding added around the polygon bounds in the SVG view box
pub const SVG_BOUNDS_PADDING: f64 = 0.1;
