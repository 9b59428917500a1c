//! Interchangeable combining strategies.
//!
//! The lane combiner is the default. The classic single-accumulator schemes
//! are kept behind the same trait so callers can compare distribution and
//! cost on their own data.

use crate::combine::combine_with;
use crate::seed::Seed;

/// Folds an ordered slice of hash codes into one code.
pub trait CombineStrategy {
    /// Short, stable name for reports.
    fn name(&self) -> &'static str;

    /// Combine `codes` in order.
    fn combine(&self, codes: &[i32]) -> i32;
}

// =============================================================================
// Lane combiner
// =============================================================================

/// The seeded xxHash32 lane combiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XxCombine {
    /// Seed for the lanes and the empty-state mix
    pub seed: Seed,
}

impl XxCombine {
    /// Lane combiner running under `seed`.
    pub const fn new(seed: Seed) -> Self {
        Self { seed }
    }
}

impl Default for XxCombine {
    fn default() -> Self {
        Self::new(Seed::global())
    }
}

impl CombineStrategy for XxCombine {
    fn name(&self) -> &'static str {
        "xxhash32"
    }

    fn combine(&self, codes: &[i32]) -> i32 {
        combine_with(self.seed, codes)
    }
}

// =============================================================================
// Single-accumulator schemes
// =============================================================================

/// FNV-1a over whole codes: `h = (h ^ code) * prime`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1a;

impl Fnv1a {
    /// 32-bit FNV offset basis (`0x811C9DC5`)
    pub const OFFSET_BASIS: i32 = -2_128_831_035;
    /// 32-bit FNV prime
    pub const PRIME: i32 = 16_777_619;
}

impl CombineStrategy for Fnv1a {
    fn name(&self) -> &'static str {
        "fnv1a"
    }

    fn combine(&self, codes: &[i32]) -> i32 {
        codes
            .iter()
            .fold(Self::OFFSET_BASIS, |h, &code| (h ^ code).wrapping_mul(Self::PRIME))
    }
}

/// Multiply-xor: starts from the first code, then `h = (h * 397) ^ code`.
///
/// An empty slice combines to `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReSharper;

impl ReSharper {
    /// Multiplier applied before each xor
    pub const PRIME: i32 = 397;
}

impl CombineStrategy for ReSharper {
    fn name(&self) -> &'static str {
        "resharper"
    }

    fn combine(&self, codes: &[i32]) -> i32 {
        match codes.split_first() {
            Some((&first, rest)) => rest
                .iter()
                .fold(first, |h, &code| h.wrapping_mul(Self::PRIME) ^ code),
            None => 0,
        }
    }
}

/// Multiply-add: `h = h * SECOND_PRIME + code`, starting at `FIRST_PRIME`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiplyAdd;

impl MultiplyAdd {
    /// Starting value
    pub const FIRST_PRIME: i32 = 1_322_837_333;
    /// Multiplier applied before each add
    pub const SECOND_PRIME: i32 = 1_597_334_677;
}

impl CombineStrategy for MultiplyAdd {
    fn name(&self) -> &'static str {
        "multiply-add"
    }

    fn combine(&self, codes: &[i32]) -> i32 {
        codes.iter().fold(Self::FIRST_PRIME, |h, &code| {
            h.wrapping_mul(Self::SECOND_PRIME).wrapping_add(code)
        })
    }
}
