//! Bitwise logic, logical and arithmetic shifts, byte extraction and sign extension.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::uint::{Word, U256, WORDS, WORD_BITS};

impl U256 {
    /// Logical shift left by `n` bits; `n >= 256` yields zero.
    pub fn shift_left(self, n: u32) -> Self {
        if n == 0 {
            return self;
        }
        if n >= Self::BITS {
            return Self::ZERO;
        }
        let words = (n / WORD_BITS) as usize;
        let bits = n % WORD_BITS;
        let mut out = [0 as Word; WORDS];
        for i in words..WORDS {
            out[i] = self.0[i - words] << bits;
            if bits != 0 && i > words {
                out[i] |= self.0[i - words - 1] >> (WORD_BITS - bits);
            }
        }
        U256(out)
    }

    /// Logical shift right by `n` bits; `n >= 256` yields zero.
    pub fn shift_right(self, n: u32) -> Self {
        if n == 0 {
            return self;
        }
        if n >= Self::BITS {
            return Self::ZERO;
        }
        let words = (n / WORD_BITS) as usize;
        let bits = n % WORD_BITS;
        let mut out = [0 as Word; WORDS];
        for i in 0..WORDS - words {
            out[i] = self.0[i + words] >> bits;
            if bits != 0 && i + words + 1 < WORDS {
                out[i] |= self.0[i + words + 1] << (WORD_BITS - bits);
            }
        }
        U256(out)
    }

    /// Arithmetic shift right: vacated high bits copy the sign bit.
    pub fn arithmetic_shift_right(self, n: u32) -> Self {
        if !self.is_negative() {
            return self.shift_right(n);
        }
        if n >= Self::BITS {
            return Self::MAX;
        }
        self.shift_right(n) | !Self::MAX.shift_right(n)
    }

    /// Byte `index` of the 32-byte big-endian encoding (0 is the most significant).
    pub fn byte(&self, index: u32) -> u8 {
        if index >= Self::BYTES as u32 {
            return 0;
        }
        let word = self.0[WORDS - 1 - (index / 8) as usize];
        (word >> (56 - 8 * (index % 8))) as u8
    }

    /// Sign-extend from byte `byte_index` (0 is the least significant byte).
    ///
    /// Bit `8 * byte_index + 7` is taken as the sign and copied into every higher bit.
    /// A `byte_index` of 31 or more leaves the value unchanged.
    pub fn sign_extend(self, byte_index: u32) -> Self {
        if byte_index >= Self::BYTES as u32 - 1 {
            return self;
        }
        let sign_bit = byte_index * 8 + 7;
        let mask = Self::MAX.shift_right(Self::BITS - 1 - sign_bit);
        if self.bit(sign_bit) {
            self | !mask
        } else {
            self & mask
        }
    }
}

macro_rules! impl_bitwise_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait for U256 {
            type Output = U256;

            #[inline]
            fn $method(self, rhs: U256) -> U256 {
                U256([
                    self.0[0] $op rhs.0[0],
                    self.0[1] $op rhs.0[1],
                    self.0[2] $op rhs.0[2],
                    self.0[3] $op rhs.0[3],
                ])
            }
        }

        impl $trait<&U256> for U256 {
            type Output = U256;

            #[inline]
            fn $method(self, rhs: &U256) -> U256 {
                self $op *rhs
            }
        }

        impl $assign_trait for U256 {
            #[inline]
            fn $assign_method(&mut self, rhs: U256) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_bitwise_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitwise_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bitwise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl Not for U256 {
    type Output = U256;

    #[inline]
    fn not(self) -> U256 {
        U256([!self.0[0], !self.0[1], !self.0[2], !self.0[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> U256 {
        U256::from_words([
            0x0807060504030201,
            0xffffffff_fbcdef09,
            0x0807060504030201,
            0xffffffff_fbcdef09,
        ])
    }

    #[test]
    fn test_bitwise() {
        let a = U256::from_words([0b1100, 0, u64::MAX, 1]);
        let b = U256::from_words([0b1010, 1, 0, 1]);
        assert_eq!(a & b, U256::from_words([0b1000, 0, 0, 1]));
        assert_eq!(a | b, U256::from_words([0b1110, 1, u64::MAX, 1]));
        assert_eq!(a ^ b, U256::from_words([0b0110, 1, u64::MAX, 0]));
        assert_eq!(!U256::ZERO, U256::MAX);

        let mut c = a;
        c ^= a;
        assert!(c.is_zero());
    }

    #[test]
    fn test_shift_zero_is_identity() {
        assert_eq!(sample().shift_left(0), sample());
        assert_eq!(sample().shift_right(0), sample());
    }

    #[test]
    fn test_shift_out_of_range() {
        for n in [256, 257, 1000, u32::MAX] {
            assert!(sample().shift_left(n).is_zero());
            assert!(sample().shift_right(n).is_zero());
        }
    }

    #[test]
    fn test_shift_word_boundaries() {
        let one = U256::ONE;
        assert_eq!(one.shift_left(64), U256::from_words([0, 1, 0, 0]));
        assert_eq!(one.shift_left(128), U256::from_words([0, 0, 1, 0]));
        assert_eq!(one.shift_left(192), U256::from_words([0, 0, 0, 1]));
        assert_eq!(one.shift_left(255), U256::from_words([0, 0, 0, 1 << 63]));
        for n in [64, 128, 192] {
            assert_eq!(sample().shift_left(n), sample().shift_left(n - 1).shift_left(1));
            assert_eq!(sample().shift_right(n), sample().shift_right(n - 1).shift_right(1));
        }
    }

    #[test]
    fn test_shift_spill_bits() {
        let v = U256::from_words([1 << 63, 0, 0, 0]);
        assert_eq!(v.shift_left(1), U256::from_words([0, 1, 0, 0]));
        assert_eq!(v.shift_left(65), U256::from_words([0, 0, 1, 0]));
        let top = U256::from_words([0, 0, 0, 1]);
        assert_eq!(top.shift_right(1), U256::from_words([0, 0, 1 << 63, 0]));
        assert_eq!(top.shift_right(129), U256::from_words([1 << 63, 0, 0, 0]));
        assert_eq!(top.shift_right(192), U256::ONE);
        assert_eq!(top.shift_right(193), U256::ZERO);
    }

    #[test]
    fn test_arithmetic_shift_right() {
        let neg_two = U256::from_u64(2).wrapping_neg();
        assert_eq!(neg_two.arithmetic_shift_right(1), U256::MAX);
        assert_eq!(neg_two.arithmetic_shift_right(300), U256::MAX);
        let min = U256::from_words([0, 0, 0, 1 << 63]);
        assert_eq!(
            min.arithmetic_shift_right(64),
            U256::from_words([0, 0, 1 << 63, u64::MAX])
        );
        assert_eq!(U256::from_u64(8).arithmetic_shift_right(2), U256::from_u64(2));
        assert_eq!(U256::from_u64(8).arithmetic_shift_right(256), U256::ZERO);
    }

    #[test]
    fn test_byte() {
        let v = sample();
        assert_eq!(v.byte(0), 0xff);
        assert_eq!(v.byte(4), 0xfb);
        assert_eq!(v.byte(31), 0x01);
        assert_eq!(v.byte(24), 0x08);
        assert_eq!(v.byte(16), 0xff);
        assert_eq!(v.byte(32), 0);
    }

    #[test]
    fn test_sign_extend() {
        let v = U256::from_u64(0xff);
        assert_eq!(v.sign_extend(0), U256::MAX);
        assert_eq!(v.sign_extend(1), v);
        let v = U256::from_u64(0x7f_ff7f);
        assert_eq!(v.sign_extend(0), U256::from_u64(0x7f));
        assert_eq!(v.sign_extend(31), v);
        assert_eq!(v.sign_extend(100), v);
        let v = U256::from_words([0, 0, 0, 0x80]);
        assert_eq!(v.sign_extend(24), U256::from_words([0, 0, 0, !0x7f]));
    }
}
