//! Word-width abstraction and the bit-mixing primitives.
//!
//! Both SHA-2 pipelines run the same algorithm; only the word type, the
//! rotation amounts and the buffer sizes differ. Everything that depends on
//! the width lives on [`Word`], and the mixing functions below are written
//! once against it.

use core::fmt;
use core::ops::{BitAnd, BitXor, Not};

use super::consts::{K32, K64, ROUNDS_32, ROUNDS_64};

mod sealed {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// A SHA-2 machine word (`u32` for SHA-224/256, `u64` for SHA-384/512).
///
/// Fixed-size buffers are associated array types so that the pipeline stays
/// allocation-free without const-generic arithmetic.
pub trait Word:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + fmt::Debug
    + fmt::LowerHex
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Width of one word in bytes.
    const BYTES: usize;
    /// Rounds per compression.
    const ROUNDS: usize;
    /// Message block length in bytes.
    const BLOCK_LEN: usize;
    /// Length of the trailing message-length field in bytes.
    const LENGTH_FIELD_LEN: usize;

    /// Rotation/shift amounts for little-sigma-0 (two rotations, one shift).
    const SMALL_SIGMA0: [u32; 3];
    /// Rotation/shift amounts for little-sigma-1 (two rotations, one shift).
    const SMALL_SIGMA1: [u32; 3];
    /// Rotation amounts for big-sigma-0.
    const BIG_SIGMA0: [u32; 3];
    /// Rotation amounts for big-sigma-1.
    const BIG_SIGMA1: [u32; 3];

    /// One message block.
    type Block: Copy + AsRef<[u8]> + AsMut<[u8]> + Send + Sync;
    /// Room for the final partial block plus padding (two blocks).
    type PaddedBlocks: Copy + AsRef<[u8]> + AsMut<[u8]>;
    /// One expanded message schedule (`ROUNDS` words).
    type Schedule: Copy + AsRef<[Self]> + AsMut<[Self]>;

    /// All-zero block.
    const EMPTY_BLOCK: Self::Block;
    /// All-zero double block.
    const EMPTY_PADDED: Self::PaddedBlocks;
    /// All-zero schedule.
    const EMPTY_SCHEDULE: Self::Schedule;
    /// Round constants, one per round.
    const ROUND_CONSTANTS: Self::Schedule;

    /// Addition modulo 2^W.
    #[must_use]
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Rotate right by `n` bits.
    #[must_use]
    fn rotr(self, n: u32) -> Self;
    /// Logical shift right by `n` bits.
    #[must_use]
    fn shr(self, n: u32) -> Self;
    /// Read one word from exactly `BYTES` big-endian bytes.
    fn read_be(bytes: &[u8]) -> Self;
    /// Write the word as `BYTES` big-endian bytes.
    fn write_be(self, out: &mut [u8]);
}

impl Word for u32 {
    const BYTES: usize = 4;
    const ROUNDS: usize = ROUNDS_32;
    const BLOCK_LEN: usize = 64;
    const LENGTH_FIELD_LEN: usize = 8;

    const SMALL_SIGMA0: [u32; 3] = [7, 18, 3];
    const SMALL_SIGMA1: [u32; 3] = [17, 19, 10];
    const BIG_SIGMA0: [u32; 3] = [2, 13, 22];
    const BIG_SIGMA1: [u32; 3] = [6, 11, 25];

    type Block = [u8; 64];
    type PaddedBlocks = [u8; 128];
    type Schedule = [u32; ROUNDS_32];

    const EMPTY_BLOCK: Self::Block = [0u8; 64];
    const EMPTY_PADDED: Self::PaddedBlocks = [0u8; 128];
    const EMPTY_SCHEDULE: Self::Schedule = [0u32; ROUNDS_32];
    const ROUND_CONSTANTS: Self::Schedule = K32;

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        self.rotate_right(n)
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        self >> n
    }

    #[inline(always)]
    fn read_be(bytes: &[u8]) -> Self {
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[inline(always)]
    fn write_be(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_be_bytes());
    }
}

impl Word for u64 {
    const BYTES: usize = 8;
    const ROUNDS: usize = ROUNDS_64;
    const BLOCK_LEN: usize = 128;
    const LENGTH_FIELD_LEN: usize = 16;

    const SMALL_SIGMA0: [u32; 3] = [1, 8, 7];
    const SMALL_SIGMA1: [u32; 3] = [19, 61, 6];
    const BIG_SIGMA0: [u32; 3] = [28, 34, 39];
    const BIG_SIGMA1: [u32; 3] = [14, 18, 41];

    type Block = [u8; 128];
    type PaddedBlocks = [u8; 256];
    type Schedule = [u64; ROUNDS_64];

    const EMPTY_BLOCK: Self::Block = [0u8; 128];
    const EMPTY_PADDED: Self::PaddedBlocks = [0u8; 256];
    const EMPTY_SCHEDULE: Self::Schedule = [0u64; ROUNDS_64];
    const ROUND_CONSTANTS: Self::Schedule = K64;

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        self.rotate_right(n)
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        self >> n
    }

    #[inline(always)]
    fn read_be(bytes: &[u8]) -> Self {
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[..8]);
        u64::from_be_bytes(word)
    }

    #[inline(always)]
    fn write_be(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_be_bytes());
    }
}

#[inline(always)]
pub fn small_sigma0<W: Word>(x: W) -> W {
    let [a, b, c] = W::SMALL_SIGMA0;
    x.rotr(a) ^ x.rotr(b) ^ x.shr(c)
}

#[inline(always)]
pub fn small_sigma1<W: Word>(x: W) -> W {
    let [a, b, c] = W::SMALL_SIGMA1;
    x.rotr(a) ^ x.rotr(b) ^ x.shr(c)
}

#[inline(always)]
pub fn big_sigma0<W: Word>(x: W) -> W {
    let [a, b, c] = W::BIG_SIGMA0;
    x.rotr(a) ^ x.rotr(b) ^ x.rotr(c)
}

#[inline(always)]
pub fn big_sigma1<W: Word>(x: W) -> W {
    let [a, b, c] = W::BIG_SIGMA1;
    x.rotr(a) ^ x.rotr(b) ^ x.rotr(c)
}

#[inline(always)]
pub fn choice<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (!x & z)
}

#[inline(always)]
pub fn majority<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_selects_bits_by_first_argument() {
        assert_eq!(choice(0xFFFF_0000u32, 0x1234_5678, 0x9ABC_DEF0), 0x1234_DEF0);
        assert_eq!(choice(0u64, u64::MAX, 0x0F0F), 0x0F0F);
    }

    #[test]
    fn majority_is_bitwise_vote() {
        assert_eq!(majority(0b1100u32, 0b1010, 0b1001), 0b1000);
        assert_eq!(majority(u64::MAX, 0, u64::MAX), u64::MAX);
    }

    #[test]
    fn small_sigma_uses_logical_shift() {
        // Top bit must not be smeared by the shift term.
        let x = 0x8000_0000u32;
        assert_eq!(small_sigma0(x), x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3));
        let y = 0x8000_0000_0000_0000u64;
        assert_eq!(small_sigma1(y), y.rotate_right(19) ^ y.rotate_right(61) ^ (y >> 6));
    }

    #[test]
    fn big_sigma_matches_reference_rotations() {
        let x = 0x6A09_E667u32;
        assert_eq!(
            big_sigma0(x),
            x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
        );
        let y = 0x510E_527F_ADE6_82D1u64;
        assert_eq!(
            big_sigma1(y),
            y.rotate_right(14) ^ y.rotate_right(18) ^ y.rotate_right(41)
        );
    }

    #[test]
    fn big_endian_io() {
        assert_eq!(u32::read_be(&[0x01, 0x02, 0x03, 0x04]), 0x0102_0304);
        let mut out = [0u8; 8];
        0x0102_0304_0506_0708u64.write_be(&mut out);
        assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
