//! Deterministic PRNG - ARC4 stream cipher re-keyed from the seed on every draw
//!
//! Every output method:
//! 1. flattens the seed material into a string
//! 2. mixes it into the persistent key buffer
//! 3. key-schedules a fresh ARC4 instance from that key
//! 4. mixes the new permutation table into the entropy pool
//! 5. draws the output from the fresh instance
//!
//! The sequence is therefore a function of the seed and the call history,
//! not of a single advancing keystream.

mod arc4;
mod seed;
mod seed_random;

pub use arc4::Arc4;
pub use seed::{Seed, FLATTEN_DEPTH};
pub use seed_random::SeedRandom;

/// Number of slots in the cipher permutation and the mixing buffers
pub const WIDTH: usize = 256;

/// Index mask for wraparound over `WIDTH` slots
pub const MASK: usize = WIDTH - 1;

/// Rolling XOR-multiply-add mix of `input` into `key`, wrapping every 256 slots.
///
/// Missing slots read as zero and are appended as the mix reaches them.
pub fn mix_key<I>(input: I, key: &mut Vec<u8>)
where
    I: IntoIterator<Item = u16>,
{
    let mut smear: u32 = 0;
    for (j, unit) in input.into_iter().enumerate() {
        let slot = j & MASK;
        let current = key.get(slot).copied().unwrap_or(0);
        smear ^= u32::from(current) * 19;
        let mixed = (smear.wrapping_add(u32::from(unit)) & MASK as u32) as u8;
        if slot < key.len() {
            key[slot] = mixed;
        } else {
            key.push(mixed);
        }
    }
}
