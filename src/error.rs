//! Error types for lanehash.
//!
//! Hashing itself is total; only seed configuration can fail.

use thiserror::Error;

/// Errors that can occur while configuring seeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// A seed string was not decimal, `0x` hex, `random`, or `label:<text>`
    #[error("invalid seed {input:?}: expected decimal, 0x-prefixed hex, `random` or `label:<text>`")]
    InvalidSeed {
        /// The rejected input
        input: String,
    },

    /// The process-wide seed was already fixed to another value
    #[error("global seed already initialized to {current:#010x}")]
    SeedAlreadyInitialized {
        /// Seed currently in use
        current: u32,
    },
}

/// Result type alias for seed operations.
pub type HashResult<T> = Result<T, HashError>;

impl HashError {
    /// Create an invalid-seed error from the offending input.
    pub fn invalid_seed(input: impl Into<String>) -> Self {
        Self::InvalidSeed { input: input.into() }
    }
}
