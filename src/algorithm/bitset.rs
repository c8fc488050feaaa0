use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Fixed-size bitset over catalog variant indices
///
/// Backs the candidate domains of the propagation utility. Indices are the
/// 0-based catalog positions; out-of-range operations are ignored rather
/// than widening the set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantBitset {
    bits: BitVec,
    variant_count: usize,
}

impl VariantBitset {
    /// Create a bitset with no variants present
    pub fn new(variant_count: usize) -> Self {
        Self {
            bits: bitvec![0; variant_count],
            variant_count,
        }
    }

    /// Create a bitset containing every variant
    pub fn all(variant_count: usize) -> Self {
        Self {
            bits: bitvec![1; variant_count],
            variant_count,
        }
    }

    /// Insert a variant index
    pub fn insert(&mut self, variant: usize) {
        if variant < self.variant_count {
            self.bits.set(variant, true);
        }
    }

    /// Test variant membership
    pub fn contains(&self, variant: usize) -> bool {
        self.bits.get(variant).as_deref() == Some(&true)
    }

    /// Intersect with another bitset in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Union another bitset into this one
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Test if no variants are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count variants in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all variant indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for VariantBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VariantBitset({} variants: {:?})",
            self.count(),
            self.to_vec()
        )
    }
}
