//! One-shot combining of hash codes.
//!
//! [`combine_with`] runs the same schedule as [`HashAccumulator`] in a single
//! pass over a slice: full groups of four go through the lanes, the remaining
//! one to three codes through queue rounds.
//!
//! [`HashAccumulator`]: crate::HashAccumulator

use crate::mix;
use crate::seed::Seed;

/// Combine hash codes using the process-wide [`Seed::global`].
///
/// Deterministic within one process. See [`combine_with`] for a fixed seed.
#[inline]
pub fn combine(codes: &[i32]) -> i32 {
    combine_with(Seed::global(), codes)
}

/// Combine hash codes with an explicit seed.
///
/// Equal to feeding `codes` one by one into a
/// [`HashAccumulator::with_seed`](crate::HashAccumulator::with_seed) and
/// calling `to_hash`.
///
/// # Example
///
/// ```
/// use lanehash::{Seed, combine_with};
///
/// let seed = Seed::zero();
/// assert_eq!(combine_with(seed, &[1, 2]), combine_with(seed, &[1, 2]));
/// assert_ne!(combine_with(seed, &[1, 2]), combine_with(seed, &[2, 1]));
/// ```
pub fn combine_with(seed: Seed, codes: &[i32]) -> i32 {
    let mut groups = codes.chunks_exact(4);

    let mut hash = if codes.len() < 4 {
        mix::mix_empty_state(seed.0)
    } else {
        let mut lanes = mix::lanes(seed.0);
        for group in &mut groups {
            for (lane, &code) in lanes.iter_mut().zip(group) {
                *lane = mix::round(*lane, code as u32);
            }
        }
        mix::mix_state(lanes)
    };

    hash = hash.wrapping_add((codes.len() as u32).wrapping_mul(4));

    for &code in groups.remainder() {
        hash = mix::queue_round(hash, code as u32);
    }

    mix::mix_final(hash) as i32
}

/// Combine many independent rows in parallel, preserving order.
#[cfg(feature = "parallel")]
pub fn combine_batch<R>(seed: Seed, rows: &[R]) -> Vec<i32>
where
    R: AsRef<[i32]> + Sync,
{
    use rayon::prelude::*;

    log::trace!("combining {} rows in parallel", rows.len());
    rows.par_iter()
        .map(|row| combine_with(seed, row.as_ref()))
        .collect()
}

/// Combine heterogeneous values.
///
/// Each argument is hashed with [`hash_code_of`](crate::hash_code_of) and the
/// codes are combined under the global seed. A leading `seed = <expr>;`
/// selects a seed explicitly.
///
/// ```
/// use lanehash::{Seed, combine, combine_with, hash_code_of};
///
/// let a = combine!(seed = Seed::zero(); "Foo", 42u8, 'x');
/// let b = combine_with(
///     Seed::zero(),
///     &[hash_code_of("Foo"), hash_code_of(&42u8), hash_code_of(&'x')],
/// );
/// assert_eq!(a, b);
/// assert_eq!(combine!(1, 2), combine!(1, 2));
/// ```
#[macro_export]
macro_rules! combine {
    (seed = $seed:expr; $($value:expr),+ $(,)?) => {
        $crate::combine_with($seed, &[$($crate::hash_code_of(&$value)),+])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::combine(&[$($crate::hash_code_of(&$value)),+])
    };
}

// =============================================================================
// Tests
// =============================================================================
