//! lanehash - Seeded xxHash32-style combiner for hash codes
//!
//! ## Core Concepts
//!
//! **Lanes and queue**: hash codes are folded four at a time into four
//! parallel lanes; up to three leftovers wait in a queue and are mixed in when
//! the final hash is taken. This is xxHash32 with every code treated as one
//! 4-byte word.
//!
//! **Seeds are configuration**: every combine runs under a [`Seed`]. Pass one
//! explicitly, or use the process-wide [`Seed::global`], which is fixed once
//! per process (random unless `LANEHASH_SEED` or [`Seed::init_global`] say
//! otherwise).
//!
//! ## Modules
//! - `combine`: one-shot [`combine`] / [`combine_with`] and the [`combine!`] macro
//! - `accumulator`: streaming [`HashAccumulator`] and [`LaneBuildHasher`]
//! - `seed`: [`Seed`] and the global seed
//! - `value`: per-value hash codes
//! - `strategy`: interchangeable combining strategies
//! - `mix`: the raw mixing primitives
//!
//! ## Usage
//!
//! ```
//! use lanehash::{HashAccumulator, Seed, combine_with, hash_code_of};
//!
//! let seed = Seed::from_raw(42);
//!
//! // Streaming
//! let mut acc = HashAccumulator::with_seed(seed);
//! acc.add("Foo");
//! acc.add(&7u64);
//! acc.add_opt::<str>(None);
//!
//! // One shot over the same codes, same result
//! let codes = [hash_code_of("Foo"), hash_code_of(&7u64), 0];
//! assert_eq!(acc.to_hash(), combine_with(seed, &codes));
//!
//! // Heterogeneous values in one call
//! let h = lanehash::combine!(seed = seed; "Foo", 7u64);
//! assert_eq!(h, combine_with(seed, &codes[..2]));
//! ```

// =============================================================================
// Modules
// =============================================================================

/// Streaming accumulator and `BuildHasher`
pub mod accumulator;

/// One-shot combining
pub mod combine;

/// Error types
pub mod error;

/// xxHash32 mixing primitives
pub mod mix;

/// Prelude for common imports
pub mod prelude;

/// Seeds and the process-wide seed
pub mod seed;

/// Alternative combining strategies
pub mod strategy;

/// Per-value hash codes
pub mod value;

// =============================================================================
// Re-exports
// =============================================================================

// Combining
pub use accumulator::{HashAccumulator, LaneBuildHasher};
#[cfg(feature = "parallel")]
pub use combine::combine_batch;
pub use combine::{combine, combine_with};

// Seeds
pub use seed::{SEED_ENV_VAR, Seed};

// Values
pub use value::{HashCodeFn, hash_code_of, hash_code_of_opt};

// Strategies
pub use strategy::{CombineStrategy, Fnv1a, MultiplyAdd, ReSharper, XxCombine};

// Error types
pub use error::{HashError, HashResult};
