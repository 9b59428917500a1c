//! Seeds for the lane combiner.
//!
//! A [`Seed`] is plain configuration: pass one explicitly with
//! [`HashAccumulator::with_seed`](crate::HashAccumulator::with_seed) and
//! [`combine_with`](crate::combine_with), or let the crate use the
//! process-wide [`Seed::global`].
//!
//! # Global seed
//!
//! The global seed is fixed exactly once, the first time something asks for
//! it. Unless pinned earlier with [`Seed::init_global`], it is read from the
//! `LANEHASH_SEED` environment variable, and falls back to a random value.
//!
//! A random global seed means hashes differ between runs. That is on purpose:
//! callers should not persist these values. Set `LANEHASH_SEED` (for example
//! `LANEHASH_SEED=0` or `LANEHASH_SEED=label:my-app`) when runs must agree.

use std::fmt;
use std::env::VarError;
use std::hash::{BuildHasher, RandomState};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{HashError, HashResult};

/// Environment variable consulted when the global seed is first needed.
pub const SEED_ENV_VAR: &str = "LANEHASH_SEED";

static GLOBAL_SEED: OnceLock<Seed> = OnceLock::new();

// =============================================================================
// Seed
// =============================================================================

/// Seed for the four accumulator lanes and the empty-state mix.
///
/// # Creation
///
/// ```
/// use lanehash::Seed;
///
/// let seed = Seed::from_label("my-app");
/// assert_eq!(seed, Seed::from_label("my-app"));
/// assert_eq!("0x2a".parse::<Seed>().unwrap(), Seed::from_raw(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Seed(pub u32);

impl Seed {
    /// Wrap a raw seed value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The zero seed. Makes the combiner plain xxHash32 over the codes.
    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw u32 value
    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// A fresh random seed.
    ///
    /// Drawn from the standard library's randomly keyed `RandomState`; each
    /// call yields a different value.
    pub fn random() -> Self {
        let wide = RandomState::new().hash_one(());
        Self((wide as u32) ^ ((wide >> 32) as u32))
    }

    /// Derive a seed from a label.
    ///
    /// Uses blake3, so the same label gives the same seed on every platform
    /// and in every run.
    pub fn from_label(label: &str) -> Self {
        let hash = blake3::hash(label.as_bytes());
        let bytes = hash.as_bytes();
        Self(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// The process-wide seed.
    ///
    /// Resolved on first call and immutable afterwards.
    pub fn global() -> Self {
        *GLOBAL_SEED.get_or_init(Self::from_env)
    }

    /// Pin the process-wide seed before anything has used it.
    ///
    /// Succeeds if the global seed is unset, or already equal to `seed`.
    pub fn init_global(seed: Seed) -> HashResult<Seed> {
        let current = *GLOBAL_SEED.get_or_init(|| {
            log::debug!("global seed pinned to {seed}");
            seed
        });
        if current == seed {
            Ok(current)
        } else {
            Err(HashError::SeedAlreadyInitialized { current: current.0 })
        }
    }

    fn from_env() -> Self {
        match Self::from_env_value(std::env::var(SEED_ENV_VAR)) {
            Ok(Some(seed)) => {
                log::debug!("global seed {seed} taken from {SEED_ENV_VAR}");
                seed
            }
            Ok(None) => {
                let seed = Self::random();
                log::debug!("global seed {seed} chosen at random");
                seed
            }
            Err(err) => {
                let seed = Self::random();
                log::warn!("ignoring {SEED_ENV_VAR}: {err}; using random seed {seed}");
                seed
            }
        }
    }

    /// Interpret the raw environment lookup. `Ok(None)` means unset.
    fn from_env_value(raw: Result<String, VarError>) -> HashResult<Option<Seed>> {
        match raw {
            Ok(value) => value.parse().map(Some),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(value)) => {
                Err(HashError::invalid_seed(value.to_string_lossy()))
            }
        }
    }
}

/// `s` without `prefix`, comparing ASCII case-insensitively.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&s[prefix.len()..]),
        _ => None,
    }
}

impl FromStr for Seed {
    type Err = HashError;

    /// Parse `12345`, `0x3039`, `random` or `label:<text>`.
    ///
    /// Surrounding whitespace is ignored. The keyword `random` and the
    /// `label:` and `0x` prefixes match ASCII case-insensitively; the label
    /// text after `label:` is used as written.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("random") {
            return Ok(Self::random());
        }
        if let Some(label) = strip_prefix_ignore_case(s, "label:") {
            return Ok(Self::from_label(label));
        }
        let parsed = match strip_prefix_ignore_case(s, "0x") {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => s.parse::<u32>(),
        };
        parsed.map(Self).map_err(|_| HashError::invalid_seed(s))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl From<u32> for Seed {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

// =============================================================================
// Tests
// =============================================================================
