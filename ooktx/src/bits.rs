//! Bit strings as they go over the line.

use std::{
    fmt,
    str::FromStr,
};

/// A sequence of bits in transmission order.
///
/// Stored as ASCII `'0'`/`'1'`, validated on construction, so every other
/// part of the crate can iterate bits without re-checking. The empty string
/// is a valid, zero-length message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitString(String);

impl BitString {
    /// The 8 bits of `byte`, most significant first, leading zeros kept.
    pub fn from_byte(byte: u8) -> Self {
        Self(format!("{byte:08b}"))
    }

    pub(crate) fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        Self(
            bits.into_iter()
                .map(|bit| if bit { '1' } else { '0' })
                .collect(),
        )
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bits in the order they are transmitted.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|byte| byte == b'1')
    }
}

/// A character other than `'0'` or `'1'` in a would-be bit string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid bit {0:?}, expected '0' or '1'")]
pub struct InvalidBit(pub char);

impl FromStr for BitString {
    type Err = InvalidBit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().find(|c| *c != '0' && *c != '1') {
            Some(c) => Err(InvalidBit(c)),
            None => Ok(Self(s.to_owned())),
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
