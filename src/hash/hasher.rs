//! Incremental hasher.

use core::fmt;
use core::marker::PhantomData;
use std::io;

use bytes::Buf;
use tracing::trace;

use crate::engine::{self, STATE_WORDS, Word};

use super::digest::Digest;
use super::error::{Error, Result};
use super::variant::Variant;

/// Streaming SHA-2 context.
///
/// Feed bytes with [`update`](Self::update) in chunks of any size, then call
/// [`finalize`](Self::finalize). The digest does not depend on how the input
/// was chunked. Finalizing consumes the hasher, so a finished context can
/// never be updated or finalized again; [`Clone`] it first to keep going.
#[derive(Clone)]
pub struct Hasher<V: Variant> {
    state: [V::Word; STATE_WORDS],
    block: <V::Word as Word>::Block,
    /// Bytes buffered in `block`; always below the block length between calls.
    filled: usize,
    /// Total bytes ever passed to `update`, buffered ones included.
    length: u128,
    _variant: PhantomData<V>,
}

impl<V: Variant> Hasher<V> {
    /// Fresh context: initial hash value, nothing buffered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: V::IV,
            block: <V::Word as Word>::EMPTY_BLOCK,
            filled: 0,
            length: 0,
            _variant: PhantomData,
        }
    }

    /// Absorb `data`, compressing every block that fills up.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        let block_len = <V::Word as Word>::BLOCK_LEN;
        self.length = self.length.wrapping_add(data.len() as u128);

        let mut remaining = data;
        while !remaining.is_empty() {
            let space = block_len - self.filled;
            let take = space.min(remaining.len());
            let (head, tail) = remaining.split_at(take);
            self.block.as_mut()[self.filled..self.filled + take].copy_from_slice(head);
            self.filled += take;
            remaining = tail;

            if self.filled == block_len {
                engine::compress(&mut self.state, self.block.as_ref());
                self.filled = 0;
            }
        }
    }

    /// Absorb every remaining byte of `buf`, which may be non-contiguous.
    pub fn update_buf<B: Buf>(&mut self, mut buf: B) {
        while buf.has_remaining() {
            let chunk = buf.chunk();
            let len = chunk.len();
            self.update(chunk);
            buf.advance(len);
        }
    }

    /// Total number of bytes absorbed so far.
    #[must_use]
    pub fn len(&self) -> u128 {
        self.length
    }

    /// `true` until the first non-empty update.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Pad, compress the final block(s) and return the digest.
    #[must_use]
    pub fn finalize(self) -> Digest<V> {
        Digest::from_state(&self.final_state())
    }

    /// Write exactly `V::DIGEST_LEN` bytes to the front of `out`.
    ///
    /// Returns the number of bytes written, or [`Error::BufferTooSmall`] when
    /// `out` cannot hold the whole digest. Nothing is written on error.
    pub fn finalize_into(self, out: &mut [u8]) -> Result<usize> {
        if out.len() < V::DIGEST_LEN {
            return Err(Error::BufferTooSmall {
                needed: V::DIGEST_LEN,
                got: out.len(),
            });
        }

        let digest = self.finalize();
        out[..V::DIGEST_LEN].copy_from_slice(digest.as_bytes());
        Ok(V::DIGEST_LEN)
    }

    /// One-shot digest of `data`.
    #[must_use]
    pub fn digest(data: &[u8]) -> Digest<V> {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    fn final_state(self) -> [V::Word; STATE_WORDS] {
        let block_len = <V::Word as Word>::BLOCK_LEN;

        let mut padded = <V::Word as Word>::EMPTY_PADDED;
        let buffer = padded.as_mut();
        buffer[..self.filled].copy_from_slice(&self.block.as_ref()[..self.filled]);

        let padding_len = engine::pad::<V::Word>(&mut buffer[self.filled..], self.length);
        let padded_len = self.filled + padding_len;
        debug_assert!(padded_len == block_len || padded_len == 2 * block_len);

        trace!(
            algorithm = %V::ALGORITHM,
            bytes = %self.length,
            final_blocks = padded_len / block_len,
            "finalizing digest"
        );

        let mut state = self.state;
        for block in buffer[..padded_len].chunks_exact(block_len) {
            engine::compress(&mut state, block);
        }
        state
    }
}

impl<V: Variant> Default for Hasher<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> fmt::Debug for Hasher<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &V::ALGORITHM)
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl<V: Variant> io::Write for Hasher<V> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::variant::{Sha224, Sha256, Sha384, Sha512};

    fn split_matches_one_shot<V: Variant>(message: &[u8]) {
        for cut in [0, 1, message.len() / 2, message.len()] {
            let (head, tail) = message.split_at(cut);
            let mut hasher = Hasher::<V>::new();
            hasher.update(head);
            hasher.update(tail);
            assert_eq!(hasher.finalize(), Hasher::<V>::digest(message), "cut at {cut}");
        }
    }

    #[test]
    fn split_update_matches_one_shot_both_widths() {
        let message = [0xA5u8; 300];
        split_matches_one_shot::<Sha256>(&message);
        split_matches_one_shot::<Sha224>(&message);
        split_matches_one_shot::<Sha512>(&message);
        split_matches_one_shot::<Sha384>(&message);
    }

    #[test]
    fn truncated_variant_differs_from_its_parent() {
        let full = Hasher::<Sha512>::digest(b"abc");
        let short = Hasher::<Sha384>::digest(b"abc");
        assert_eq!(short.len(), 48);
        // Different IVs, so the shorter digest is not a prefix.
        assert_ne!(short.as_bytes(), &full.as_bytes()[..48]);
    }

    #[test]
    fn buffer_fill_tracks_length() {
        let mut hasher = Hasher::<Sha512>::new();
        for step in 1..=300usize {
            hasher.update(&[0x5A]);
            assert_eq!(hasher.len(), step as u128);
            assert_eq!(hasher.filled, step % 128);
        }
    }

    #[test]
    fn exact_block_is_compressed_during_update() {
        let mut hasher = Hasher::<Sha256>::new();
        hasher.update(&[0u8; 64]);
        assert_eq!(hasher.filled, 0);
        assert_ne!(hasher.state, Sha256::IV);
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut hasher = Hasher::<Sha384>::new();
        hasher.update(&[]);
        assert!(hasher.is_empty());
        assert_eq!(hasher.finalize(), Hasher::<Sha384>::digest(b""));
    }

    #[test]
    fn clone_forks_the_stream() {
        let mut prefix = Hasher::<Sha224>::new();
        prefix.update(b"shared prefix, ");
        let mut left = prefix.clone();
        let mut right = prefix;
        left.update(b"left");
        right.update(b"right");
        assert_eq!(left.finalize(), Hasher::<Sha224>::digest(b"shared prefix, left"));
        assert_eq!(right.finalize(), Hasher::<Sha224>::digest(b"shared prefix, right"));
    }

    #[test]
    fn finalize_into_rejects_short_buffer() {
        let mut out = [0u8; 27];
        let result = Hasher::<Sha224>::new().finalize_into(&mut out);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall { needed: 28, got: 27 })
        ));
        assert_eq!(out, [0u8; 27]);
    }

    #[test]
    fn finalize_into_writes_only_digest_len() {
        let mut out = [0xEEu8; 40];
        let written = Hasher::<Sha256>::new().finalize_into(&mut out).unwrap();
        assert_eq!(written, 32);
        assert_eq!(out[..32], *Hasher::<Sha256>::digest(b"").as_bytes());
        assert_eq!(out[32..], [0xEE; 8]);
    }

    #[test]
    fn update_buf_walks_chained_chunks() {
        let chained = (&b"split "[..]).chain(&b"across chunks"[..]);
        let mut hasher = Hasher::<Sha512>::new();
        hasher.update_buf(chained);
        assert_eq!(hasher.finalize(), Hasher::<Sha512>::digest(b"split across chunks"));
    }

    #[test]
    fn io_copy_into_hasher() {
        let data = vec![7u8; 10_000];
        let mut hasher = Hasher::<Sha256>::new();
        let copied = io::copy(&mut data.as_slice(), &mut hasher).unwrap();
        assert_eq!(copied, 10_000);
        assert_eq!(hasher.finalize(), Hasher::<Sha256>::digest(&data));
    }
}
