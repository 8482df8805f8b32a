//! Streaming SHA-2 message digests (SHA-224, SHA-256, SHA-384, SHA-512).
//!
//! The digests are bit-identical to FIPS 180-4. Input can be fed in chunks of
//! any size; the result never depends on where the chunk boundaries fall.
//!
//! # Quick Start
//!
//! ```rust
//! use shakit::{Sha256Hasher, Sha512Hasher};
//!
//! // One shot
//! let digest = Sha256Hasher::digest(b"abc");
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//!
//! // Streaming
//! let mut hasher = Sha512Hasher::new();
//! hasher.update(b"a");
//! hasher.update(b"bc");
//! let mut out = [0u8; 64];
//! hasher.finalize_into(&mut out)?;
//! # Ok::<(), shakit::Error>(())
//! ```
//!
//! # Layout
//!
//! - One generic compression pipeline, instantiated for 32-bit words
//!   (SHA-224/256) and 64-bit words (SHA-384/512)
//! - [`Hasher`] owns the per-stream state; [`Digest`] is the finished value
//! - [`AnyHasher`] picks the algorithm at runtime
//! - [`cli`] holds the `sha2sum` glue (mode selection, reading, reporting)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
mod engine;
pub mod hash;

pub use engine::{STATE_WORDS, Word};
pub use hash::{
    Algorithm, AnyDigest, AnyHasher, Digest, Error, Hasher, Result, Sha224, Sha224Hasher, Sha256,
    Sha256Hasher, Sha384, Sha384Hasher, Sha512, Sha512Hasher, Variant,
};
