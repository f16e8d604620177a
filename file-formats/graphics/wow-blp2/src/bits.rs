//! LSB-first bit cursor over packed index words
//!
//! Block formats store per-pixel indices as small integers packed from the
//! least significant bit upwards. All three decoders read them through
//! [`BitReader`] so the bit order lives in one place.

/// Cursor that yields `k`-bit fields from a 64-bit word, least significant
/// bits first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitReader {
    bits: u64,
    remaining: u32,
}

impl BitReader {
    /// Read from all 64 bits of `bits`
    pub fn new(bits: u64) -> Self {
        Self {
            bits,
            remaining: u64::BITS,
        }
    }

    /// Read from a 32-bit word
    pub fn from_u32(bits: u32) -> Self {
        Self {
            bits: u64::from(bits),
            remaining: u32::BITS,
        }
    }

    /// Discard the next `count` bits
    pub fn skip(&mut self, count: u32) {
        let count = count.min(self.remaining);
        self.bits = self.bits.checked_shr(count).unwrap_or(0);
        self.remaining -= count;
    }

    /// Read the next `count` bits (at most 32). Reading past the end of the
    /// word yields zero bits.
    pub fn read(&mut self, count: u32) -> u32 {
        debug_assert!(count <= 32);
        let mask = (1u64 << count) - 1;
        let value = (self.bits & mask) as u32;
        self.skip(count);
        value
    }

    /// Number of bits left to read
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}
