//! Finished digest values.

use core::fmt;
use core::marker::PhantomData;

use crate::engine::{STATE_WORDS, Word};

use super::variant::{Algorithm, Variant};

/// A finished SHA-2 digest: `V::DIGEST_LEN` bytes, big-endian serialization of
/// the leading words of the final hash state.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest<V: Variant> {
    bytes: V::Output,
    _variant: PhantomData<V>,
}

impl<V: Variant> Digest<V> {
    /// Serialize the leading state words; truncated variants simply drop the
    /// trailing ones.
    pub(crate) fn from_state(state: &[V::Word; STATE_WORDS]) -> Self {
        let mut bytes = V::EMPTY_OUTPUT;
        let width = <V::Word as Word>::BYTES;
        for (chunk, word) in bytes.as_mut().chunks_exact_mut(width).zip(state.iter()) {
            word.write_be(chunk);
        }
        Self {
            bytes,
            _variant: PhantomData,
        }
    }

    /// Algorithm that produced this digest.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        V::ALGORITHM
    }

    /// Borrow the raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    /// Consume into the fixed-size byte array.
    #[must_use]
    pub fn into_array(self) -> V::Output {
        self.bytes
    }

    /// Digest length in bytes (constant per variant).
    #[must_use]
    pub fn len(&self) -> usize {
        V::DIGEST_LEN
    }

    /// Always `false`; every variant has a non-empty digest.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Lower-case hexadecimal rendering.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }
}

impl<V: Variant> AsRef<[u8]> for Digest<V> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<V: Variant> fmt::LowerHex for Digest<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl<V: Variant> fmt::Display for Digest<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl<V: Variant> fmt::Debug for Digest<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>({self:x})", V::ALGORITHM)
    }
}

#[cfg(feature = "serde")]
impl<V: Variant> serde::Serialize for Digest<V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts the lower-case hex form produced by `Serialize`.
#[cfg(feature = "serde")]
impl<'de, V: Variant> serde::Deserialize<'de> for Digest<V> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor(PhantomData))
    }
}

#[cfg(feature = "serde")]
struct HexVisitor<V>(PhantomData<V>);

#[cfg(feature = "serde")]
impl<V: Variant> serde::de::Visitor<'_> for HexVisitor<V> {
    type Value = Digest<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a {}-character lower-case hex {} digest",
            V::DIGEST_LEN * 2,
            V::ALGORITHM
        )
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        if value.len() != V::DIGEST_LEN * 2 {
            return Err(E::invalid_length(value.len(), &self));
        }
        let mut bytes = V::EMPTY_OUTPUT;
        for (byte, pair) in bytes.as_mut().iter_mut().zip(value.as_bytes().chunks_exact(2)) {
            match (hex_nibble(pair[0]), hex_nibble(pair[1])) {
                (Some(high), Some(low)) => *byte = (high << 4) | low,
                _ => return Err(E::invalid_value(serde::de::Unexpected::Str(value), &self)),
            }
        }
        Ok(Digest {
            bytes,
            _variant: PhantomData,
        })
    }
}

#[cfg(feature = "serde")]
fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::variant::{Sha224, Sha256, Sha384};

    #[test]
    fn serializes_leading_words_big_endian() {
        let state = [
            0x0102_0304u32, 0x0506_0708, 0, 0, 0, 0, 0, 0xFFFF_FFFF,
        ];
        let digest = Digest::<Sha256>::from_state(&state);
        assert_eq!(digest.as_bytes()[..8], [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(digest.as_bytes()[28..], [0xFF; 4]);
    }

    #[test]
    fn truncation_drops_trailing_words() {
        let state = [1u32, 2, 3, 4, 5, 6, 7, 8];
        let digest = Digest::<Sha224>::from_state(&state);
        assert_eq!(digest.len(), 28);
        assert_eq!(digest.as_bytes()[24..], [0, 0, 0, 7]);

        let wide = [u64::MAX; 8];
        let digest = Digest::<Sha384>::from_state(&wide);
        assert_eq!(digest.as_bytes().len(), 48);
    }

    #[test]
    fn hex_rendering_is_lower_case_and_padded() {
        let state = [0x00AB_CDEFu32, 0, 0, 0, 0, 0, 0, 0];
        let digest = Digest::<Sha256>::from_state(&state);
        let hex = digest.to_hex();
        assert!(hex.starts_with("00abcdef0000"));
        assert_eq!(hex.len(), 64);
        assert_eq!(digest.to_string(), hex);
        assert!(format!("{digest:?}").starts_with("Digest<SHA256>(00abcdef"));
    }
}
