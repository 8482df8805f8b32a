//! Public hashing surface: variants, the incremental hasher and digests.

mod any;
mod digest;
mod error;
mod hasher;
mod variant;

pub use any::{AnyDigest, AnyHasher};
pub use digest::Digest;
pub use error::{Error, Result};
pub use hasher::Hasher;
pub use variant::{Algorithm, Sha224, Sha256, Sha384, Sha512, Variant};

/// SHA-256 incremental hasher.
pub type Sha256Hasher = Hasher<Sha256>;
/// SHA-224 incremental hasher.
pub type Sha224Hasher = Hasher<Sha224>;
/// SHA-512 incremental hasher.
pub type Sha512Hasher = Hasher<Sha512>;
/// SHA-384 incremental hasher.
pub type Sha384Hasher = Hasher<Sha384>;
