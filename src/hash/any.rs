//! Runtime-selected hashers.

use core::fmt;

use super::digest::Digest;
use super::hasher::Hasher;
use super::variant::{Algorithm, Sha224, Sha256, Sha384, Sha512};

/// A hasher whose algorithm is chosen at runtime.
#[derive(Clone, Debug)]
pub enum AnyHasher {
    /// SHA-256 context
    Sha256(Hasher<Sha256>),
    /// SHA-224 context
    Sha224(Hasher<Sha224>),
    /// SHA-512 context
    Sha512(Hasher<Sha512>),
    /// SHA-384 context
    Sha384(Hasher<Sha384>),
}

impl AnyHasher {
    /// Fresh context for `algorithm`.
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sha256 => Self::Sha256(Hasher::new()),
            Algorithm::Sha224 => Self::Sha224(Hasher::new()),
            Algorithm::Sha512 => Self::Sha512(Hasher::new()),
            Algorithm::Sha384 => Self::Sha384(Hasher::new()),
        }
    }

    /// Algorithm of this context.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Sha256(_) => Algorithm::Sha256,
            Self::Sha224(_) => Algorithm::Sha224,
            Self::Sha512(_) => Algorithm::Sha512,
            Self::Sha384(_) => Algorithm::Sha384,
        }
    }

    /// See [`Hasher::update`].
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Sha256(h) => h.update(data),
            Self::Sha224(h) => h.update(data),
            Self::Sha512(h) => h.update(data),
            Self::Sha384(h) => h.update(data),
        }
    }

    /// See [`Hasher::finalize`].
    #[must_use]
    pub fn finalize(self) -> AnyDigest {
        match self {
            Self::Sha256(h) => AnyDigest::Sha256(h.finalize()),
            Self::Sha224(h) => AnyDigest::Sha224(h.finalize()),
            Self::Sha512(h) => AnyDigest::Sha512(h.finalize()),
            Self::Sha384(h) => AnyDigest::Sha384(h.finalize()),
        }
    }
}

/// Digest produced by an [`AnyHasher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnyDigest {
    /// SHA-256 digest
    Sha256(Digest<Sha256>),
    /// SHA-224 digest
    Sha224(Digest<Sha224>),
    /// SHA-512 digest
    Sha512(Digest<Sha512>),
    /// SHA-384 digest
    Sha384(Digest<Sha384>),
}

impl AnyDigest {
    /// Algorithm that produced this digest.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Sha256(d) => d.algorithm(),
            Self::Sha224(d) => d.algorithm(),
            Self::Sha512(d) => d.algorithm(),
            Self::Sha384(d) => d.algorithm(),
        }
    }

    /// Borrow the raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Sha256(d) => d.as_bytes(),
            Self::Sha224(d) => d.as_bytes(),
            Self::Sha512(d) => d.as_bytes(),
            Self::Sha384(d) => d.as_bytes(),
        }
    }
}

impl AsRef<[u8]> for AnyDigest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::LowerHex for AnyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha256(d) => fmt::LowerHex::fmt(d, f),
            Self::Sha224(d) => fmt::LowerHex::fmt(d, f),
            Self::Sha512(d) => fmt::LowerHex::fmt(d, f),
            Self::Sha384(d) => fmt::LowerHex::fmt(d, f),
        }
    }
}

impl fmt::Display for AnyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}
