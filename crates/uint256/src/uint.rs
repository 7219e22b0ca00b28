//! The 256-bit value type: layout, construction, comparison and encodings.

use std::cmp::Ordering;
use std::fmt;

use uint256_types::ArithError;
use zeroize::Zeroize;

/// Machine word of the representation.
pub type Word = u64;
/// Double-width type for carry and multiplication intermediates.
pub type DoubleWord = u128;

/// Bits per word.
pub const WORD_BITS: u32 = 64;
/// Number of words in a [`U256`].
pub const WORDS: usize = 4;

/// An unsigned integer modulo 2^256.
///
/// Stored as four little-endian words: `0[0]` holds the least significant 64 bits.
/// The value is a plain register-like `Copy` type; nothing is heap allocated, and every
/// arithmetic result is already reduced to 256 bits.
///
/// `zeroize()` wipes only the location it is called on. Being `Copy`, the value may
/// already have been duplicated into other stack slots or registers, and those copies
/// are untouched; treat it as an in-place reset, not as secret erasure.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct U256(pub(crate) [Word; WORDS]);

impl U256 {
    /// Width in bits.
    pub const BITS: u32 = 256;
    /// Width of the big-endian encoding in bytes.
    pub const BYTES: usize = 32;

    pub const ZERO: Self = Self([0; WORDS]);
    pub const ONE: Self = Self([1, 0, 0, 0]);
    pub const MAX: Self = Self([Word::MAX; WORDS]);

    /// Build a value from little-endian words.
    pub const fn from_words(words: [Word; WORDS]) -> Self {
        Self(words)
    }

    pub const fn from_u64(value: u64) -> Self {
        Self([value, 0, 0, 0])
    }

    pub const fn from_u128(value: u128) -> Self {
        Self([value as Word, (value >> WORD_BITS) as Word, 0, 0])
    }

    /// The little-endian words.
    pub const fn as_words(&self) -> &[Word; WORDS] {
        &self.0
    }

    pub const fn into_words(self) -> [Word; WORDS] {
        self.0
    }

    /// Return true if every word is zero.
    pub const fn is_zero(&self) -> bool {
        (self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0
    }

    /// Return true if the value fits in a single word.
    pub const fn is_u64(&self) -> bool {
        (self.0[1] | self.0[2] | self.0[3]) == 0
    }

    /// The least significant word, discarding the rest.
    pub const fn low_u64(&self) -> u64 {
        self.0[0]
    }

    /// Get bit `idx` (0 is the least significant). Out-of-range bits read as zero.
    pub const fn bit(&self, idx: u32) -> bool {
        if idx >= Self::BITS {
            return false;
        }
        (self.0[(idx / WORD_BITS) as usize] >> (idx % WORD_BITS)) & 1 == 1
    }

    pub fn leading_zeros(&self) -> u32 {
        for i in (0..WORDS).rev() {
            if self.0[i] != 0 {
                return (WORDS - 1 - i) as u32 * WORD_BITS + self.0[i].leading_zeros();
            }
        }
        Self::BITS
    }

    pub fn trailing_zeros(&self) -> u32 {
        for i in 0..WORDS {
            if self.0[i] != 0 {
                return i as u32 * WORD_BITS + self.0[i].trailing_zeros();
            }
        }
        Self::BITS
    }

    /// Number of significant bits; zero for the zero value.
    pub fn bit_len(&self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    /// Number of significant bytes; zero for the zero value.
    pub fn byte_len(&self) -> usize {
        self.bit_len().div_ceil(8) as usize
    }

    /// Number of significant words, 0..=4.
    pub(crate) fn significant_words(&self) -> usize {
        self.0.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
    }

    /// Decode 32 big-endian bytes.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut words = [0 as Word; WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.rchunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *word = Word::from_be_bytes(buf);
        }
        Self(words)
    }

    /// Encode as 32 big-endian bytes; zero encodes as all-zero bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (chunk, word) in out.rchunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut words = [0 as Word; WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *word = Word::from_le_bytes(buf);
        }
        Self(words)
    }

    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Decode up to 32 big-endian bytes, left-padding with zeros.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, ArithError> {
        if bytes.len() > Self::BYTES {
            return Err(ArithError::InvalidLength {
                max: Self::BYTES,
                got: bytes.len(),
            });
        }
        let mut buf = [0u8; 32];
        buf[Self::BYTES - bytes.len()..].copy_from_slice(bytes);
        Ok(Self::from_be_bytes(buf))
    }

    /// Write the big-endian encoding right-aligned into `out`, zero-filling the prefix.
    pub fn write_be_bytes(&self, out: &mut [u8]) -> Result<(), ArithError> {
        if out.len() < Self::BYTES {
            return Err(ArithError::BufferTooSmall {
                need: Self::BYTES,
                got: out.len(),
            });
        }
        let pad = out.len() - Self::BYTES;
        out[..pad].fill(0);
        out[pad..].copy_from_slice(&self.to_be_bytes());
        Ok(())
    }
}

/// A wrapped result together with the bit that wrapping discarded.
///
/// Returned wherever a carry, borrow or truncation would otherwise vanish, so the
/// caller has to look at `overflow` (or explicitly drop it) before using `value`.
#[must_use = "the overflow flag reports a discarded carry, borrow or truncation"]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overflowing<T> {
    pub value: T,
    pub overflow: bool,
}

impl<T> Overflowing<T> {
    pub const fn new(value: T, overflow: bool) -> Self {
        Self { value, overflow }
    }

    pub fn into_tuple(self) -> (T, bool) {
        (self.value, self.overflow)
    }

    /// `Some(value)` only when nothing was discarded.
    pub fn checked(self) -> Option<T> {
        if self.overflow {
            None
        } else {
            Some(self.value)
        }
    }

    pub fn into_result(self) -> Result<T, ArithError> {
        self.checked().ok_or(ArithError::Overflow)
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "U256(0x{:016x}{:016x}{:016x}{:016x})",
            self.0[3], self.0[2], self.0[1], self.0[0]
        )
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for U256 {
                fn from(value: $t) -> Self {
                    Self::from_u64(value as u64)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, bool);

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<[Word; WORDS]> for U256 {
    fn from(words: [Word; WORDS]) -> Self {
        Self(words)
    }
}

impl From<U256> for [Word; WORDS] {
    fn from(value: U256) -> Self {
        value.0
    }
}

impl TryFrom<U256> for u64 {
    type Error = ArithError;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.is_u64() {
            Ok(value.0[0])
        } else {
            Err(ArithError::Overflow)
        }
    }
}

impl TryFrom<U256> for u128 {
    type Error = ArithError;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if (value.0[2] | value.0[3]) == 0 {
            Ok(((value.0[1] as u128) << WORD_BITS) | value.0[0] as u128)
        } else {
            Err(ArithError::Overflow)
        }
    }
}
