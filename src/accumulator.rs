//! Incremental hash accumulator.
//!
//! [`HashAccumulator`] is the streaming form of [`combine_with`](crate::combine_with):
//! feeding it the same codes yields the same hash. Each code is one 4-byte
//! xxHash32 stripe:
//! - codes arrive into a three-slot queue
//! - every fourth code folds the queue plus itself into the four lanes
//! - [`to_hash`](HashAccumulator::to_hash) mixes lanes, length and the
//!   leftover queue without consuming anything
//!
//! The lanes are seeded lazily, right before the first fold, so short inputs
//! never touch them.

use std::hash::{BuildHasher, Hash, Hasher};

use crate::mix;
use crate::seed::Seed;
use crate::value::{HashCodeFn, hash_code_of, hash_code_of_opt};

// =============================================================================
// HashAccumulator
// =============================================================================

/// Streaming combiner over 32-bit hash codes.
///
/// Plain value type: copy it to fork a partially built hash. It has no
/// `PartialEq` or `Hash` of its own, since comparing or hashing the
/// intermediate state is almost always a mistake; compare
/// [`to_hash`](Self::to_hash) results instead.
///
/// # Example
///
/// ```
/// use lanehash::{HashAccumulator, Seed, combine_with, hash_code_of};
///
/// let seed = Seed::from_raw(7);
/// let mut acc = HashAccumulator::with_seed(seed);
/// acc.add("Foo");
/// acc.add("Bar");
///
/// let codes = [hash_code_of("Foo"), hash_code_of("Bar")];
/// assert_eq!(acc.to_hash(), combine_with(seed, &codes));
/// ```
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct HashAccumulator {
    seed: Seed,
    lanes: [u32; 4],
    queue: [u32; 3],
    length: u32,
}

impl HashAccumulator {
    /// Empty accumulator seeded with [`Seed::global`].
    #[inline]
    pub fn new() -> Self {
        Self::with_seed(Seed::global())
    }

    /// Empty accumulator with an explicit seed.
    #[inline]
    pub const fn with_seed(seed: Seed) -> Self {
        Self {
            seed,
            lanes: [0; 4],
            queue: [0; 3],
            length: 0,
        }
    }

    /// Accumulator pre-filled with `codes`.
    pub fn from_hash_codes(seed: Seed, codes: impl IntoIterator<Item = i32>) -> Self {
        let mut acc = Self::with_seed(seed);
        acc.extend(codes);
        acc
    }

    /// The seed this accumulator mixes with.
    #[inline]
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// Number of codes added so far.
    ///
    /// Counted in a `u32` that wraps after `u32::MAX` codes, the same way
    /// xxHash32 wraps the byte length it mixes in.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length as usize
    }

    /// Check if nothing has been added yet.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Add a value, hashed with [`hash_code_of`].
    #[inline]
    pub fn add<T: Hash + ?Sized>(&mut self, value: &T) {
        self.add_hash_code(hash_code_of(value));
    }

    /// Add an optional value; `None` contributes `0`.
    #[inline]
    pub fn add_opt<T: Hash + ?Sized>(&mut self, value: Option<&T>) {
        self.add_hash_code(hash_code_of_opt(value));
    }

    /// Add a value hashed by a custom function.
    #[inline]
    pub fn add_with<T, H>(&mut self, value: &T, hasher: &H)
    where
        T: ?Sized,
        H: HashCodeFn<T> + ?Sized,
    {
        self.add_hash_code(hasher.hash_code(value));
    }

    /// Add an already computed hash code.
    pub fn add_hash_code(&mut self, code: i32) {
        let code = code as u32;
        let previous = self.length;
        self.length = previous.wrapping_add(1);

        match previous % 4 {
            0 => self.queue[0] = code,
            1 => self.queue[1] = code,
            2 => self.queue[2] = code,
            _ => {
                if previous == 3 {
                    self.lanes = mix::lanes(self.seed.0);
                }
                let [q1, q2, q3] = self.queue;
                self.lanes = [
                    mix::round(self.lanes[0], q1),
                    mix::round(self.lanes[1], q2),
                    mix::round(self.lanes[2], q3),
                    mix::round(self.lanes[3], code),
                ];
            }
        }
    }

    /// Final 32-bit hash of everything added so far.
    ///
    /// Does not consume or reset the accumulator; calling it again without
    /// further adds returns the same value.
    #[must_use]
    pub fn to_hash(&self) -> i32 {
        let length = self.length;
        let pending = (length % 4) as usize;

        let mut hash = if length < 4 {
            mix::mix_empty_state(self.seed.0)
        } else {
            mix::mix_state(self.lanes)
        };

        // xxHash32 counts bytes, one code is four of them
        hash = hash.wrapping_add(length.wrapping_mul(4));

        for &queued in &self.queue[..pending] {
            hash = mix::queue_round(hash, queued);
        }

        mix::mix_final(hash) as i32
    }
}

impl Default for HashAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<i32> for HashAccumulator {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for code in iter {
            self.add_hash_code(code);
        }
    }
}

impl<'a> Extend<&'a i32> for HashAccumulator {
    fn extend<I: IntoIterator<Item = &'a i32>>(&mut self, iter: I) {
        for &code in iter {
            self.add_hash_code(code);
        }
    }
}

// =============================================================================
// std::hash integration
// =============================================================================

/// Lets the accumulator drive `Hash` impls and hash maps.
///
/// Integer writes of 32 bits or less add one code; everything else is split
/// into little-endian 4-byte words, the last one zero-padded. `finish` copies
/// the 32-bit hash into both halves of the `u64`, so hash tables that read
/// the top bits (hashbrown's control tags) still see the mixed value.
impl Hasher for HashAccumulator {
    fn write(&mut self, bytes: &[u8]) {
        let mut words = bytes.chunks_exact(4);
        for word in &mut words {
            self.add_hash_code(i32::from_le_bytes([word[0], word[1], word[2], word[3]]));
        }
        let tail = words.remainder();
        if !tail.is_empty() {
            let mut last = [0u8; 4];
            last[..tail.len()].copy_from_slice(tail);
            self.add_hash_code(i32::from_le_bytes(last));
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.add_hash_code(i32::from(i));
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.add_hash_code(i32::from(i));
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.add_hash_code(i as i32);
    }

    #[inline]
    fn write_i32(&mut self, i: i32) {
        self.add_hash_code(i);
    }

    #[inline]
    fn finish(&self) -> u64 {
        let hash = u64::from(self.to_hash() as u32);
        hash | (hash << 32)
    }
}

/// `BuildHasher` handing out seeded [`HashAccumulator`]s.
///
/// ```
/// use std::collections::HashMap;
/// use lanehash::{LaneBuildHasher, Seed};
///
/// let mut map = HashMap::with_hasher(LaneBuildHasher::new(Seed::zero()));
/// map.insert("key", 1);
/// assert_eq!(map["key"], 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneBuildHasher {
    seed: Seed,
}

impl LaneBuildHasher {
    /// Build hashers with `seed`.
    pub const fn new(seed: Seed) -> Self {
        Self { seed }
    }

    /// The seed handed to every accumulator.
    pub const fn seed(&self) -> Seed {
        self.seed
    }
}

impl Default for LaneBuildHasher {
    fn default() -> Self {
        Self::new(Seed::global())
    }
}

impl BuildHasher for LaneBuildHasher {
    type Hasher = HashAccumulator;

    #[inline]
    fn build_hasher(&self) -> HashAccumulator {
        HashAccumulator::with_seed(self.seed)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combine::combine_with;
    use proptest::prelude::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(HashAccumulator: Copy, Send, Sync, Hasher, Default);
    assert_not_impl_any!(HashAccumulator: PartialEq, Hash);

    const SEED: Seed = Seed::from_raw(0x5eed_1234);

    #[test]
    fn test_empty_is_mixed_empty_state() {
        let acc = HashAccumulator::with_seed(SEED);
        let expected = mix::mix_final(mix::mix_empty_state(SEED.0)) as i32;
        assert_eq!(acc.to_hash(), expected);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_empty_differs_from_single_zero() {
        let empty = HashAccumulator::with_seed(SEED);
        let mut one = HashAccumulator::with_seed(SEED);
        one.add_hash_code(0);
        assert_ne!(empty.to_hash(), one.to_hash());
    }

    #[test]
    fn test_to_hash_is_idempotent() {
        let mut acc = HashAccumulator::with_seed(SEED);
        for code in [3, 1, 4, 1, 5] {
            acc.add_hash_code(code);
            let first = acc.to_hash();
            assert_eq!(first, acc.to_hash());
            assert_eq!(first, acc.to_hash());
        }
        assert_eq!(acc.len(), 5);
    }

    #[test]
    fn test_matches_combine_for_every_length() {
        let codes: Vec<i32> = (0..20).map(|i| i * 0x0101_0101 - 7).collect();
        for n in 0..=codes.len() {
            let acc = HashAccumulator::from_hash_codes(SEED, codes[..n].iter().copied());
            assert_eq!(acc.to_hash(), combine_with(SEED, &codes[..n]), "length {n}");
        }
    }

    #[test]
    fn test_foo_bar() {
        let mut acc = HashAccumulator::with_seed(SEED);
        acc.add("Foo");
        acc.add("Bar");
        let codes = [hash_code_of("Foo"), hash_code_of("Bar")];
        assert_eq!(acc.to_hash(), combine_with(SEED, &codes));
    }

    #[test]
    fn test_lanes_untouched_below_four() {
        let mut acc = HashAccumulator::with_seed(SEED);
        acc.extend([1, 2, 3]);
        assert_eq!(acc.lanes, [0; 4]);
        acc.add_hash_code(4);
        assert_ne!(acc.lanes, [0; 4]);
    }

    #[test]
    fn test_order_matters() {
        let ab = HashAccumulator::from_hash_codes(SEED, [1, 2]);
        let ba = HashAccumulator::from_hash_codes(SEED, [2, 1]);
        assert_ne!(ab.to_hash(), ba.to_hash());
    }

    #[test]
    fn test_seed_matters() {
        let a = HashAccumulator::from_hash_codes(Seed::from_raw(1), [1, 2, 3, 4, 5]);
        let b = HashAccumulator::from_hash_codes(Seed::from_raw(2), [1, 2, 3, 4, 5]);
        assert_ne!(a.to_hash(), b.to_hash());
    }

    #[test]
    fn test_copy_forks_state() {
        let mut base = HashAccumulator::with_seed(SEED);
        base.extend([10, 20]);
        let mut fork = base;
        fork.add_hash_code(30);
        assert_eq!(base.len(), 2);
        assert_eq!(fork.len(), 3);
        assert_ne!(base.to_hash(), fork.to_hash());
    }

    #[test]
    fn test_none_adds_zero() {
        let mut a = HashAccumulator::with_seed(SEED);
        a.add_opt::<str>(None);
        let mut b = HashAccumulator::with_seed(SEED);
        b.add_hash_code(0);
        assert_eq!(a.to_hash(), b.to_hash());
    }

    #[test]
    fn test_custom_hash_fn() {
        let ci = |s: &str| hash_code_of(&s.to_ascii_lowercase());
        let mut a = HashAccumulator::with_seed(SEED);
        a.add_with("Foo", &ci);
        let mut b = HashAccumulator::with_seed(SEED);
        b.add_with("FOO", &ci);
        assert_eq!(a.to_hash(), b.to_hash());
    }

    #[test]
    fn test_hasher_write_packs_words() {
        let mut bytes = HashAccumulator::with_seed(SEED);
        bytes.write(&[1, 0, 0, 0, 2, 0, 0, 0, 3]);
        let codes = HashAccumulator::from_hash_codes(SEED, [1, 2, 3]);
        assert_eq!(bytes.finish(), codes.finish());
        assert_eq!(bytes.finish() as u32, codes.to_hash() as u32);
        assert_eq!((bytes.finish() >> 32) as u32, codes.to_hash() as u32);
    }

    #[test]
    fn test_finish_fills_top_bits() {
        let build = LaneBuildHasher::new(Seed::from_raw(0x5eed));
        let tags: std::collections::HashSet<u64> =
            (0..10_000u32).map(|i| build.hash_one(i) >> 57).collect();
        assert!(tags.len() > 1, "top 7 bits never vary: {tags:?}");
    }

    #[test]
    fn test_len_wraps_with_byte_count() {
        let mut acc = HashAccumulator::with_seed(SEED);
        acc.length = u32::MAX;
        acc.add_hash_code(1);
        assert_eq!(acc.len(), 0);
        assert_eq!(acc.to_hash(), acc.to_hash());
    }

    proptest! {
        #[test]
        fn prop_streaming_matches_one_shot(seed in any::<u32>(), codes in prop::collection::vec(any::<i32>(), 0..40)) {
            let seed = Seed::from_raw(seed);
            let mut acc = HashAccumulator::with_seed(seed);
            for &code in &codes {
                acc.add_hash_code(code);
            }
            prop_assert_eq!(acc.to_hash(), combine_with(seed, &codes));
            prop_assert_eq!(acc.to_hash(), acc.to_hash());
            prop_assert_eq!(acc.len(), codes.len());
        }

        #[test]
        fn prop_split_extend_matches(seed in any::<u32>(), codes in prop::collection::vec(any::<i32>(), 0..24), cut in 0usize..24) {
            let cut = cut.min(codes.len());
            let seed = Seed::from_raw(seed);
            let mut acc = HashAccumulator::from_hash_codes(seed, codes[..cut].iter().copied());
            acc.extend(&codes[cut..]);
            prop_assert_eq!(acc.to_hash(), combine_with(seed, &codes));
        }
    }

    #[test]
    fn test_build_hasher_uses_seed() {
        let build = LaneBuildHasher::new(SEED);
        assert_eq!(build.hash_one(7u32), build.hash_one(7u32));
        assert_ne!(build.hash_one(7u32), LaneBuildHasher::new(Seed::zero()).hash_one(7u32));
        assert_eq!(build.build_hasher().seed(), SEED);
    }
}
