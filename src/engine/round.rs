//! Compression round and compression function.

use super::STATE_WORDS;
use super::schedule::message_schedule;
use super::word::{Word, big_sigma0, big_sigma1, choice, majority};

/// Apply one round to `state` with the given round constant and schedule word.
///
/// Every slot shifts one place towards the end; slot 4 additionally absorbs
/// `temp1` and slot 0 becomes `temp1 + temp2`.
#[inline(always)]
pub fn round<W: Word>(state: &mut [W; STATE_WORDS], round_constant: W, schedule_word: W) {
    let ch = choice(state[4], state[5], state[6]);
    let temp1 = state[7]
        .wrapping_add(big_sigma1(state[4]))
        .wrapping_add(ch)
        .wrapping_add(round_constant)
        .wrapping_add(schedule_word);
    let maj = majority(state[0], state[1], state[2]);
    let temp2 = big_sigma0(state[0]).wrapping_add(maj);

    state.rotate_right(1);
    state[4] = state[4].wrapping_add(temp1);
    state[0] = temp1.wrapping_add(temp2);
}

/// Run all rounds over one full block, then add the incoming state back in.
pub fn compress<W: Word>(state: &mut [W; STATE_WORDS], block: &[u8]) {
    let input_state = *state;
    let schedule = message_schedule::<W>(block);

    for (&k, &w) in W::ROUND_CONSTANTS
        .as_ref()
        .iter()
        .zip(schedule.as_ref().iter())
    {
        round(state, k, w);
    }

    for (word, input) in state.iter_mut().zip(input_state) {
        *word = word.wrapping_add(input);
    }
}
