//! Benchmark inputs and builders for the dynarr container.
//!
//! - [`InputShape`]: named input orderings, including the sort's worst case
//! - [`filled_array`]: a default-configured array populated from a slice

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::DynArray;
use dynarr_test_utils::fixtures::{ascending_run, descending_run, shuffled, with_duplicates};

/// Ordering of a generated benchmark input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputShape {
    /// Seeded random permutation. Average case.
    Shuffled,
    /// Already sorted. Worst case for the last-element pivot.
    Ascending,
    /// Reverse sorted. Also quadratic.
    Descending,
    /// Eight distinct values, many repeats.
    FewDistinct,
}

impl InputShape {
    /// Every shape, in reporting order.
    pub const ALL: [InputShape; 4] = [
        InputShape::Shuffled,
        InputShape::Ascending,
        InputShape::Descending,
        InputShape::FewDistinct,
    ];

    /// Short label used as a benchmark parameter name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Shuffled => "shuffled",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::FewDistinct => "few_distinct",
        }
    }

    /// Generate `n` values of this shape. Deterministic for a given seed.
    pub fn generate(self, n: usize, seed: u64) -> Vec<u64> {
        match self {
            Self::Shuffled => shuffled(n, seed),
            Self::Ascending => ascending_run(n),
            Self::Descending => descending_run(n),
            Self::FewDistinct => with_duplicates(n, 8, seed),
        }
    }
}

/// Build a default-configured array holding `values` in order.
pub fn filled_array(values: &[u64]) -> DynArray<u64> {
    let mut arr = DynArray::new();
    for &v in values {
        arr.append(v);
    }
    arr
}
