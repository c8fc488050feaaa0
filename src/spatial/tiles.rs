//! Tile catalog with rotation variants and edge-compatibility adjacency
//!
//! Base definitions declare wall geometry once plus one 4-symbol edge
//! signature per usable orientation. The catalog pre-bakes every orientation
//! into its own variant: geometry is rotated about the cell center while the
//! signature is taken from the declared entry verbatim. Signatures are never
//! re-derived by rotating symbols; downstream matching depends on the
//! declared arrays literally, so the asymmetry is intentional.

use crate::io::error::{GeneratorError, Result};
use crate::spatial::geometry::Polygon;
use crate::spatial::grid::Direction;
use serde::Deserialize;
use std::fmt;

/// Boundary symbol of one tile edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EdgeSymbol {
    /// Traversable edge (wire token `"O"`)
    #[serde(rename = "O", alias = "OPEN")]
    Open,
    /// Walled edge (wire token `"X"`)
    #[serde(rename = "X", alias = "CLOSED")]
    Closed,
}

impl EdgeSymbol {
    /// Edge-compatibility rule: only open-to-open and closed-to-closed join
    pub const fn is_compatible(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Open, Self::Open) | (Self::Closed, Self::Closed)
        )
    }
}

impl fmt::Display for EdgeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "O"),
            Self::Closed => write!(f, "X"),
        }
    }
}

/// 4-symbol boundary descriptor, one symbol per direction in index order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSignature {
    symbols: [EdgeSymbol; 4],
}

impl EdgeSignature {
    /// The fully closed signature substituted for missing declarations
    pub const CLOSED: Self = Self {
        symbols: [EdgeSymbol::Closed; 4],
    };

    /// Create a signature from symbols in edge-index order
    pub const fn new(symbols: [EdgeSymbol; 4]) -> Self {
        Self { symbols }
    }

    /// Symbol at a direction
    pub const fn symbol(self, direction: Direction) -> EdgeSymbol {
        match direction {
            Direction::East => self.symbols[0],
            Direction::South => self.symbols[1],
            Direction::West => self.symbols[2],
            Direction::North => self.symbols[3],
        }
    }

    /// Exact match against a cell's closed-wall array
    ///
    /// A closed wall requires `Closed` at that index and an open wall
    /// requires `Open`, for all four directions.
    pub fn matches_walls(self, closed: &[bool; 4]) -> bool {
        Direction::ALL
            .iter()
            .zip(closed.iter())
            .all(|(&direction, &wall_closed)| {
                let required = if wall_closed {
                    EdgeSymbol::Closed
                } else {
                    EdgeSymbol::Open
                };
                self.symbol(direction) == required
            })
    }
}

impl fmt::Display for EdgeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}{}{}{}]",
            self.symbols[0], self.symbols[1], self.symbols[2], self.symbols[3]
        )
    }
}

/// Tile shape family controlling the baked-in rotation offset
///
/// The base geometry of some families is authored a quarter turn (or two)
/// away from the orientation its first signature describes; the offset
/// compensates when variants are baked. Explicit metadata replaces name
/// matching in the core; only the tileset loader infers families from names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileFamily {
    /// No extra rotation
    Standard,
    /// Quarter-turn authoring offset (90° curve shapes)
    Curve,
    /// Half-turn authoring offset (dead-end cap shapes)
    Endcap,
    /// Fully closed filler; doubles as the no-match fallback
    Block,
}

impl TileFamily {
    /// Extra quarter turns applied on top of the orientation index
    pub const fn extra_rotation(self) -> usize {
        match self {
            Self::Standard | Self::Block => 0,
            Self::Curve => 1,
            Self::Endcap => 2,
        }
    }
}

/// Base tile definition as supplied by the tileset loader
#[derive(Debug, Clone)]
pub struct TileDefinition {
    /// Base tile name
    pub name: String,
    /// Wall outlines in unit-cell space
    pub walls: Vec<Polygon>,
    /// One edge signature per usable orientation
    pub orientations: Vec<EdgeSignature>,
    /// Shape family tag
    pub family: TileFamily,
}

/// One pre-baked rotated tile instance
///
/// Variants are created at catalog build and immutable afterwards. Catalog
/// order is the matching priority order.
#[derive(Debug, Clone)]
pub struct TileVariant {
    /// Derived name, `<base>_rot<degrees>`
    pub name: String,
    /// Wall outlines rotated into this orientation
    pub walls: Vec<Polygon>,
    /// Declared signature of this orientation, taken literally
    pub signature: EdgeSignature,
    /// Family inherited from the base definition
    pub family: TileFamily,
    compatible: [Vec<usize>; 4],
}

impl TileVariant {
    /// Catalog indices of variants that may sit adjacent in a direction
    ///
    /// A variant qualifies when its symbol at the opposite direction is
    /// compatible with this variant's symbol at `direction`.
    pub fn compatible_in(&self, direction: Direction) -> &[usize] {
        self.compatible
            .get(direction.index())
            .map_or(&[], Vec::as_slice)
    }
}

/// Ordered collection of tile variants with adjacency and fallback lookup
#[derive(Debug, Clone)]
pub struct TileCatalog {
    variants: Vec<TileVariant>,
    fallback: Option<usize>,
    defaulted_signatures: usize,
}

impl TileCatalog {
    /// Build the catalog from base definitions
    ///
    /// Expands every declared orientation into a variant whose geometry is
    /// rotated by `(orientation index + family offset) mod 4` quarter turns
    /// and whose signature is the declared entry. A definition with zero
    /// orientation entries is recovered by substituting a single fully
    /// closed signature; the substitution is counted, not fatal.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptyCatalog`] when no definitions are
    /// supplied at all.
    pub fn build(definitions: &[TileDefinition]) -> Result<Self> {
        if definitions.is_empty() {
            return Err(GeneratorError::EmptyCatalog);
        }

        let mut variants = Vec::new();
        let mut defaulted_signatures = 0;

        for definition in definitions {
            let orientations = if definition.orientations.is_empty() {
                defaulted_signatures += 1;
                vec![EdgeSignature::CLOSED]
            } else {
                definition.orientations.clone()
            };

            for (index, &signature) in orientations.iter().enumerate() {
                let quarter_turns = (index + definition.family.extra_rotation()) % 4;
                let walls = definition
                    .walls
                    .iter()
                    .map(|polygon| polygon.rotated_about_cell_center(quarter_turns))
                    .collect();
                variants.push(TileVariant {
                    name: format!("{}_rot{}", definition.name, index * 90),
                    walls,
                    signature,
                    family: definition.family,
                    compatible: [const { Vec::new() }; 4],
                });
            }
        }

        let signatures: Vec<EdgeSignature> =
            variants.iter().map(|variant| variant.signature).collect();
        for (index, variant) in variants.iter_mut().enumerate() {
            let own = signatures.get(index).copied().unwrap_or(EdgeSignature::CLOSED);
            for direction in Direction::ALL {
                let compatible: Vec<usize> = signatures
                    .iter()
                    .enumerate()
                    .filter(|(_, candidate)| {
                        candidate
                            .symbol(direction.opposite())
                            .is_compatible(own.symbol(direction))
                    })
                    .map(|(candidate_index, _)| candidate_index)
                    .collect();
                if let Some(slot) = variant.compatible.get_mut(direction.index()) {
                    *slot = compatible;
                }
            }
        }

        let fallback = variants
            .iter()
            .position(|variant| variant.family == TileFamily::Block);

        Ok(Self {
            variants,
            fallback,
            defaulted_signatures,
        })
    }

    /// All variants in priority order
    pub fn variants(&self) -> &[TileVariant] {
        &self.variants
    }

    /// Variant at a catalog index
    pub fn variant(&self, index: usize) -> Option<&TileVariant> {
        self.variants.get(index)
    }

    /// Number of variants
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Test whether the catalog holds no variants
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Index of the block fallback variant, if one was declared
    pub const fn fallback_index(&self) -> Option<usize> {
        self.fallback
    }

    /// Number of definitions that received the substituted closed signature
    pub const fn defaulted_signatures(&self) -> usize {
        self.defaulted_signatures
    }
}
