//! SHA-2 compression engine.
//!
//! Generic over the word width; instantiated for `u32` (SHA-224/256) and
//! `u64` (SHA-384/512). Everything here is total arithmetic over fixed-size
//! buffers and never fails.

#[rustfmt::skip]
pub(crate) mod consts;
mod padding;
mod round;
mod schedule;
mod word;

pub(crate) use padding::pad;
pub(crate) use round::compress;
pub use word::Word;

/// Number of words in a hash state, for every variant.
pub const STATE_WORDS: usize = 8;
