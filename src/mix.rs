//! xxHash32 mixing primitives.
//!
//! The combiner treats every hash code as one 4-byte stripe of an xxHash32
//! input stream, so only the word-sized rounds are needed (no byte tail).

pub const PRIME1: u32 = 0x9E37_79B1;
pub const PRIME2: u32 = 0x85EB_CA77;
pub const PRIME3: u32 = 0xC2B2_AE3D;
pub const PRIME4: u32 = 0x27D4_EB2F;
pub const PRIME5: u32 = 0x1656_67B1;

/// Initial lane state for a seed.
#[inline]
pub const fn lanes(seed: u32) -> [u32; 4] {
    [
        seed.wrapping_add(PRIME1).wrapping_add(PRIME2),
        seed.wrapping_add(PRIME2),
        seed,
        seed.wrapping_sub(PRIME1),
    ]
}

/// Fold one input into a lane.
#[inline]
pub const fn round(lane: u32, input: u32) -> u32 {
    lane.wrapping_add(input.wrapping_mul(PRIME2))
        .rotate_left(13)
        .wrapping_mul(PRIME1)
}

/// Fold one leftover input into the running hash.
#[inline]
pub const fn queue_round(hash: u32, input: u32) -> u32 {
    hash.wrapping_add(input.wrapping_mul(PRIME3))
        .rotate_left(17)
        .wrapping_mul(PRIME4)
}

/// Collapse the four lanes into one word.
#[inline]
pub const fn mix_state(v: [u32; 4]) -> u32 {
    v[0].rotate_left(1)
        .wrapping_add(v[1].rotate_left(7))
        .wrapping_add(v[2].rotate_left(12))
        .wrapping_add(v[3].rotate_left(18))
}

/// Starting hash for inputs shorter than one full stripe group.
#[inline]
pub const fn mix_empty_state(seed: u32) -> u32 {
    seed.wrapping_add(PRIME5)
}

/// Final avalanche.
#[inline]
pub const fn mix_final(mut hash: u32) -> u32 {
    hash ^= hash >> 15;
    hash = hash.wrapping_mul(PRIME2);
    hash ^= hash >> 13;
    hash = hash.wrapping_mul(PRIME3);
    hash ^= hash >> 16;
    hash
}
