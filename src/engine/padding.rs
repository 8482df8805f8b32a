//! Message padding.

use super::word::Word;

/// Write the padding trailer for a message of `message_len` bytes into
/// `output` and return its length.
///
/// The trailer is `0x80`, then zeros up to `W::LENGTH_FIELD_LEN` bytes before
/// the next block boundary, then the message length in bits as a big-endian
/// integer filling the length field. Together with the unflushed tail of the
/// message it always spans one or two whole blocks.
///
/// `output` must hold at least `W::BLOCK_LEN + W::LENGTH_FIELD_LEN` bytes.
#[allow(clippy::cast_possible_truncation)]
pub fn pad<W: Word>(output: &mut [u8], message_len: u128) -> usize {
    let block_len = W::BLOCK_LEN;
    let field_len = W::LENGTH_FIELD_LEN;

    let tail = (message_len % block_len as u128) as usize;
    let remainder = (tail + field_len) % block_len;
    let filler = block_len - remainder;

    output[0] = 0x80;
    output[1..filler].fill(0x00);

    // 32-bit variants keep the low 64 bits, 64-bit variants all 128.
    let bit_len = message_len.wrapping_mul(8).to_be_bytes();
    output[filler..filler + field_len].copy_from_slice(&bit_len[bit_len.len() - field_len..]);

    filler + field_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::cast_possible_truncation)]
    fn padded_total<W: Word>(message_len: u128) -> usize {
        let mut out = W::EMPTY_PADDED;
        let tail = (message_len % W::BLOCK_LEN as u128) as usize;
        tail + pad::<W>(out.as_mut(), message_len)
    }

    #[test]
    fn empty_message_fills_one_block() {
        let mut out = [0xAAu8; 128];
        let len = pad::<u32>(&mut out, 0);
        assert_eq!(len, 64);
        assert_eq!(out[0], 0x80);
        assert!(out[1..64].iter().all(|&b| b == 0));
    }

    #[test]
    fn length_field_is_big_endian_bits() {
        let mut out = [0u8; 128];
        let len = pad::<u32>(&mut out, 3);
        assert_eq!(len, 61);
        assert_eq!(out[53..61], [0, 0, 0, 0, 0, 0, 0, 0x18]);

        let mut out = [0u8; 256];
        let len = pad::<u64>(&mut out, 3);
        assert_eq!(len, 125);
        assert_eq!(out[109..124], [0u8; 15]);
        assert_eq!(out[124], 0x18);
    }

    #[test]
    fn spills_into_second_block_at_boundary() {
        // 55 bytes leave exactly room for 0x80 and the length; 56 do not.
        assert_eq!(padded_total::<u32>(55), 64);
        assert_eq!(padded_total::<u32>(56), 128);
        assert_eq!(padded_total::<u32>(64 - 9), 64);
        assert_eq!(padded_total::<u32>(64 - 8), 128);

        assert_eq!(padded_total::<u64>(111), 128);
        assert_eq!(padded_total::<u64>(112), 256);
        assert_eq!(padded_total::<u64>(128 - 17), 128);
        assert_eq!(padded_total::<u64>(128 - 16), 256);
    }

    #[test]
    fn full_block_pads_a_fresh_block() {
        assert_eq!(padded_total::<u32>(64), 64);
        assert_eq!(padded_total::<u64>(128), 128);
        assert_eq!(padded_total::<u32>(640), 64);
    }

    #[test]
    fn always_whole_blocks() {
        for len in 0..300u128 {
            assert_eq!(padded_total::<u32>(len) % 64, 0, "len {len}");
            assert_eq!(padded_total::<u64>(len) % 128, 0, "len {len}");
        }
    }

    #[test]
    fn narrow_length_field_wraps_modulo_2_64() {
        // 2^61 bytes is 2^64 bits, which wraps to zero in an 8-byte field.
        let mut out = [0u8; 128];
        let len = pad::<u32>(&mut out, 1u128 << 61);
        assert_eq!(out[len - 8..len], [0u8; 8]);

        let mut out = [0u8; 256];
        let len = pad::<u64>(&mut out, 1u128 << 61);
        assert_eq!(out[len - 9], 0x01);
        assert_eq!(out[len - 8..len], [0u8; 8]);
    }
}
