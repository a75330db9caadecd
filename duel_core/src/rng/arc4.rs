//! ARC4 - the permutation-table keystream behind every draw

use super::{MASK, WIDTH};

/// Outputs gathered for the initial numerator of a float
const CHUNKS: u32 = 6;

/// 256^6, the denominator matching `CHUNKS` outputs
const START_DENOM: f64 = 281_474_976_710_656.0;

/// 2^52: below this the numerator still has unfilled mantissa bits
const SIGNIFICANCE: u64 = 1 << 52;

/// 2^53: at or above this the numerator would round
const OVERFLOW: u64 = 1 << 53;

/// 2^32
const INT32_SPAN: f64 = 4_294_967_296.0;

/// ARC4 cipher state: a 256-entry permutation and two cursors.
///
/// Construction runs the standard key schedule and then discards the first
/// 256 outputs (RC4-drop[256]).
#[derive(Debug, Clone)]
pub struct Arc4 {
    i: usize,
    j: usize,
    s: [u8; WIDTH],
}

impl Arc4 {
    /// Key-schedule a new cipher. An empty key is treated as `[0]`.
    pub fn new(key: &[u8]) -> Self {
        let key: &[u8] = if key.is_empty() { &[0] } else { key };

        let mut s = [0u8; WIDTH];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut j = 0usize;
        for i in 0..WIDTH {
            j = MASK & (j + usize::from(key[i % key.len()]) + usize::from(s[i]));
            s.swap(i, j);
        }

        let mut arc4 = Arc4 { i: 0, j: 0, s };
        arc4.draw(WIDTH as u32);
        arc4
    }

    /// The current permutation table
    pub fn state(&self) -> &[u8; WIDTH] {
        &self.s
    }

    /// Next single keystream byte
    pub fn next_byte(&mut self) -> u8 {
        self.i = MASK & (self.i + 1);
        let t = self.s[self.i];
        self.j = MASK & (self.j + usize::from(t));
        self.s[self.i] = self.s[self.j];
        self.s[self.j] = t;
        self.s[MASK & (usize::from(self.s[self.i]) + usize::from(t))]
    }

    /// Concatenate the next `count` outputs big-endian.
    ///
    /// Only the low 64 bits are kept, so callers needing the value use
    /// `count <= 8`.
    pub fn draw(&mut self, count: u32) -> u64 {
        let mut r: u64 = 0;
        for _ in 0..count {
            r = (r << 8) | u64::from(self.next_byte());
        }
        r
    }

    /// Float in [0, 1) with every mantissa bit drawn from the keystream
    pub fn fraction(&mut self) -> f64 {
        let mut n = self.draw(CHUNKS);
        let mut d = START_DENOM;
        let mut x: u64 = 0;

        while n < SIGNIFICANCE {
            n = (n + x) * WIDTH as u64;
            d *= WIDTH as f64;
            x = self.draw(1);
        }

        // shift down with integer math so the final add cannot round up
        while n >= OVERFLOW {
            n /= 2;
            d /= 2.0;
            x >>= 1;
        }

        (n + x) as f64 / d
    }

    /// Four outputs reinterpreted as a signed 32-bit value
    pub fn int32(&mut self) -> i32 {
        self.draw(4) as u32 as i32
    }

    /// Four outputs scaled into [0, 1)
    pub fn quick(&mut self) -> f64 {
        self.draw(4) as f64 / INT32_SPAN
    }
}
