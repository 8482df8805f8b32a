//! Per-algorithm configuration.

use core::fmt;
use core::hash::Hash;

use crate::engine::consts::{IV_224, IV_256, IV_384, IV_512};
use crate::engine::{STATE_WORDS, Word};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Sha256 {}
    impl Sealed for super::Sha224 {}
    impl Sealed for super::Sha512 {}
    impl Sealed for super::Sha384 {}
}

/// Compile-time description of one SHA-2 algorithm.
///
/// SHA-224 and SHA-384 reuse the SHA-256 and SHA-512 pipelines; they differ
/// only in [`Variant::IV`] and in how much of the final state is emitted.
pub trait Variant:
    sealed::Sealed + Copy + Default + fmt::Debug + Eq + Hash + Send + Sync + 'static
{
    /// Word type of the underlying pipeline.
    type Word: Word;
    /// Fixed-size digest storage.
    type Output: Copy + AsRef<[u8]> + AsMut<[u8]> + Eq + Hash + fmt::Debug + Send + Sync;

    /// Runtime tag for this variant.
    const ALGORITHM: Algorithm;
    /// Initial hash value.
    const IV: [Self::Word; STATE_WORDS];
    /// Digest length in bytes.
    const DIGEST_LEN: usize;
    /// All-zero digest storage.
    const EMPTY_OUTPUT: Self::Output;
}

/// SHA-256 marker type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha256;

/// SHA-224 marker type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha224;

/// SHA-512 marker type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha512;

/// SHA-384 marker type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha384;

impl Variant for Sha256 {
    type Word = u32;
    type Output = [u8; 32];
    const ALGORITHM: Algorithm = Algorithm::Sha256;
    const IV: [u32; STATE_WORDS] = IV_256;
    const DIGEST_LEN: usize = 32;
    const EMPTY_OUTPUT: Self::Output = [0u8; 32];
}

impl Variant for Sha224 {
    type Word = u32;
    type Output = [u8; 28];
    const ALGORITHM: Algorithm = Algorithm::Sha224;
    const IV: [u32; STATE_WORDS] = IV_224;
    const DIGEST_LEN: usize = 28;
    const EMPTY_OUTPUT: Self::Output = [0u8; 28];
}

impl Variant for Sha512 {
    type Word = u64;
    type Output = [u8; 64];
    const ALGORITHM: Algorithm = Algorithm::Sha512;
    const IV: [u64; STATE_WORDS] = IV_512;
    const DIGEST_LEN: usize = 64;
    const EMPTY_OUTPUT: Self::Output = [0u8; 64];
}

impl Variant for Sha384 {
    type Word = u64;
    type Output = [u8; 48];
    const ALGORITHM: Algorithm = Algorithm::Sha384;
    const IV: [u64; STATE_WORDS] = IV_384;
    const DIGEST_LEN: usize = 48;
    const EMPTY_OUTPUT: Self::Output = [0u8; 48];
}

/// Runtime selector for one of the four algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SHA-256
    Sha256,
    /// SHA-224
    Sha224,
    /// SHA-512
    Sha512,
    /// SHA-384
    Sha384,
}

impl Algorithm {
    /// All algorithms, in the order the `sha2sum` report lists them.
    pub const ALL: [Self; 4] = [Self::Sha256, Self::Sha224, Self::Sha512, Self::Sha384];

    /// Upper-case label used in reports, e.g. `SHA256`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA256",
            Self::Sha224 => "SHA224",
            Self::Sha512 => "SHA512",
            Self::Sha384 => "SHA384",
        }
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha256 => Sha256::DIGEST_LEN,
            Self::Sha224 => Sha224::DIGEST_LEN,
            Self::Sha512 => Sha512::DIGEST_LEN,
            Self::Sha384 => Sha384::DIGEST_LEN,
        }
    }

    /// Message block length in bytes.
    #[must_use]
    pub const fn block_len(self) -> usize {
        match self {
            Self::Sha256 | Self::Sha224 => <u32 as Word>::BLOCK_LEN,
            Self::Sha512 | Self::Sha384 => <u64 as Word>::BLOCK_LEN,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
