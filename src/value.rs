//! Per-value hash codes.
//!
//! Values enter the combiner as 32-bit hash codes. Anything implementing
//! [`Hash`] is reduced with `FxHasher`, which is unseeded, so a value's code
//! only depends on the value itself. Seeding happens in the lanes.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// 32-bit hash code of a value.
#[inline]
pub fn hash_code_of<T: Hash + ?Sized>(value: &T) -> i32 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    let wide = hasher.finish();
    ((wide as u32) ^ ((wide >> 32) as u32)) as i32
}

/// Hash code of an optional value; `None` is `0`.
#[inline]
pub fn hash_code_of_opt<T: Hash + ?Sized>(value: Option<&T>) -> i32 {
    value.map_or(0, hash_code_of)
}

/// A custom hash function for values of type `T`.
///
/// Lets callers hash by a projection, or with case-insensitive or otherwise
/// relaxed equality, without wrapping the value in a newtype.
///
/// ```
/// use lanehash::{HashAccumulator, Seed};
///
/// let by_len = |s: &str| s.len() as i32;
/// let mut a = HashAccumulator::with_seed(Seed::zero());
/// let mut b = HashAccumulator::with_seed(Seed::zero());
/// a.add_with("abc", &by_len);
/// b.add_with("xyz", &by_len);
/// assert_eq!(a.to_hash(), b.to_hash());
/// ```
pub trait HashCodeFn<T: ?Sized> {
    /// Hash code for `value`.
    fn hash_code(&self, value: &T) -> i32;
}

impl<T: ?Sized, F> HashCodeFn<T> for F
where
    F: Fn(&T) -> i32,
{
    #[inline]
    fn hash_code(&self, value: &T) -> i32 {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(hash_code_of("Foo"), hash_code_of("Foo"));
        assert_eq!(hash_code_of(&42u64), hash_code_of(&42u64));
    }

    #[test]
    fn test_distinguishes_typical_values() {
        assert_ne!(hash_code_of("Foo"), hash_code_of("Bar"));
        assert_ne!(hash_code_of(&1i32), hash_code_of(&2i32));
    }

    #[test]
    fn test_none_is_zero() {
        assert_eq!(hash_code_of_opt::<str>(None), 0);
        assert_eq!(hash_code_of_opt(Some("Foo")), hash_code_of("Foo"));
    }

    #[test]
    fn test_closure_as_hash_fn() {
        let upper = |s: &str| hash_code_of(&s.to_ascii_uppercase());
        assert_eq!(upper.hash_code("foo"), upper.hash_code("FOO"));
    }
}
