//! Message schedule expansion.

use super::word::{Word, small_sigma0, small_sigma1};

/// Expand one block into `W::ROUNDS` schedule words.
///
/// The first sixteen words are the block read big-endian; the rest follow
/// `w[i] = w[i-16] + σ0(w[i-15]) + w[i-7] + σ1(w[i-2])` modulo 2^W.
pub fn message_schedule<W: Word>(block: &[u8]) -> W::Schedule {
    debug_assert_eq!(block.len(), W::BLOCK_LEN);

    let mut schedule = W::EMPTY_SCHEDULE;
    let w = schedule.as_mut();
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(W::BYTES)) {
        *word = W::read_be(chunk);
    }

    let block_words = W::BLOCK_LEN / W::BYTES;
    for t in block_words..W::ROUNDS {
        let s0 = small_sigma0(w[t - 15]);
        let s1 = small_sigma1(w[t - 2]);
        w[t] = w[t - 16]
            .wrapping_add(s0)
            .wrapping_add(w[t - 7])
            .wrapping_add(s1);
    }

    schedule
}
