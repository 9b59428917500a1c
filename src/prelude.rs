//! Prelude module for common imports.
//!
//! ```
//! use lanehash::prelude::*;
//!
//! let mut acc = HashAccumulator::with_seed(Seed::zero());
//! acc.add("Foo");
//! assert_eq!(acc.to_hash(), combine_with(Seed::zero(), &[hash_code_of("Foo")]));
//! ```

// Combining
pub use crate::accumulator::{HashAccumulator, LaneBuildHasher};
pub use crate::combine::{combine, combine_with};

// Seeds
pub use crate::seed::Seed;

// Values
pub use crate::value::{HashCodeFn, hash_code_of, hash_code_of_opt};

// Strategies
pub use crate::strategy::{CombineStrategy, Fnv1a, MultiplyAdd, ReSharper, XxCombine};

// Error
pub use crate::error::{HashError, HashResult};
