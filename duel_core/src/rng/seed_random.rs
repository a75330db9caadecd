//! SeedRandom - reproducible generator re-derived from its seed on every call

use super::{mix_key, Arc4, Seed, FLATTEN_DEPTH};
use rand::RngCore;

/// Seeded generator holding the persistent key and entropy pool.
///
/// Each output method re-keys a fresh [`Arc4`] from the seed plus the key
/// accumulated by earlier calls, so two generators built from the same seed
/// agree on every call made in the same order.
#[derive(Debug, Clone)]
pub struct SeedRandom {
    seed: Seed,
    key: Vec<u8>,
    pool: Vec<u8>,
}

impl SeedRandom {
    /// Create a generator bound to `seed`
    pub fn new(seed: impl Into<Seed>) -> Self {
        SeedRandom {
            seed: seed.into(),
            key: Vec::new(),
            pool: Vec::new(),
        }
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Replace the seed material. Key and pool carry over.
    pub fn set_seed(&mut self, seed: impl Into<Seed>) {
        self.seed = seed.into();
    }

    /// Mixing key as of the last draw
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Entropy pool as of the last draw
    pub fn pool(&self) -> &[u8] {
        &self.pool
    }

    fn reseed(&mut self) -> Arc4 {
        let flat = self.seed.flatten(FLATTEN_DEPTH);
        mix_key(flat.encode_utf16(), &mut self.key);

        let arc4 = Arc4::new(&self.key);
        mix_key(arc4.state().iter().map(|&b| u16::from(b)), &mut self.pool);

        arc4
    }

    /// Float in [0, 1) with full mantissa precision
    pub fn next_float(&mut self) -> f64 {
        self.reseed().fraction()
    }

    /// Signed 32-bit integer over the full output range
    pub fn next_int32(&mut self) -> i32 {
        self.reseed().int32()
    }

    /// Float in [0, 1) with 32 bits of precision
    pub fn next_quick(&mut self) -> f64 {
        self.reseed().quick()
    }

    /// Float uniformly scaled into [lo, hi)
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_float() * (hi - lo)
    }

    /// Integer uniformly scaled into [lo, hi), floored
    pub fn range_int(&mut self, lo: i64, hi: i64) -> i64 {
        let span = hi as f64 - lo as f64;
        (lo as f64 + self.next_float() * span).floor() as i64
    }
}

impl RngCore for SeedRandom {
    fn next_u32(&mut self) -> u32 {
        self.next_int32() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_be_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
