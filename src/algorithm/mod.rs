/// Translation of matched tiles into world-space wall polygons
pub mod assembler;
/// Efficient bitset implementation for variant candidate sets
pub mod bitset;
/// Randomized spanning-tree carving
pub mod carver;
/// Probabilistic crossing injection
pub mod crossings;
/// Pipeline orchestration and run configuration
pub mod executor;
/// Solution-graph construction
pub mod graph;
/// Exact edge-signature tile matching
pub mod matcher;
/// Candidate-domain narrowing diagnostics
pub mod propagation;
