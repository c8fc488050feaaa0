//! Error types for catalog loading and generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generator operations
#[derive(Debug)]
pub enum GeneratorError {
    /// Failed to parse a tileset JSON file
    TilesetLoad {
        /// Path to the tileset file
        path: PathBuf,
        /// Underlying JSON parse error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The tileset declared no tiles at all
    ///
    /// Distinct from a tile with zero orientation entries, which is
    /// recovered by substituting a fully closed signature.
    EmptyCatalog,

    /// A cell matched no variant and the catalog has no block tile
    MissingFallbackTile {
        /// Column of the unmatched cell
        x: usize,
        /// Row of the unmatched cell
        y: usize,
    },

    /// Carving failed to visit every cell
    ///
    /// Cannot occur for a validated configuration; raised only when the
    /// neighbor iteration itself is broken, i.e. a programming error.
    UnreachableGrid {
        /// Cells the walk reached
        visited: usize,
        /// Cells the grid holds
        expected: usize,
    },
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TilesetLoad { path, source } => {
                write!(f, "Failed to parse tileset '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyCatalog => {
                write!(f, "Tileset declares no tiles")
            }
            Self::MissingFallbackTile { x, y } => {
                write!(
                    f,
                    "No variant matches cell ({x},{y}) and the catalog has no block tile"
                )
            }
            Self::UnreachableGrid { visited, expected } => {
                write!(
                    f,
                    "Carving visited {visited} of {expected} cells; this is a bug"
                )
            }
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TilesetLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, GeneratorError>;

impl From<std::io::Error> for GeneratorError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GeneratorError {
    GeneratorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for a concrete path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GeneratorError {
    GeneratorError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::{GeneratorError, invalid_parameter};

    #[test]
    fn parameter_errors_carry_their_context() {
        let err = invalid_parameter("dim", &0usize, &"grid dimension must be at least 1");
        match err {
            GeneratorError::InvalidParameter {
                parameter, value, ..
            } => {
                assert_eq!(parameter, "dim");
                assert_eq!(value, "0");
            }
            _ => unreachable!("expected InvalidParameter"),
        }
    }

    #[test]
    fn unreachable_grid_names_both_counts() {
        let message = GeneratorError::UnreachableGrid {
            visited: 3,
            expected: 9,
        }
        .to_string();
        assert!(message.contains('3'));
        assert!(message.contains('9'));
    }
}
