//! Addition, subtraction and negation modulo 2^256.

use crate::uint::{Overflowing, Word, U256, WORDS};
use crate::word::{adc, sbb};

impl U256 {
    /// Add, reporting the carry out of the top word.
    pub fn overflowing_add(self, rhs: Self) -> Overflowing<Self> {
        let mut out = [0 as Word; WORDS];
        let mut carry = 0;
        for (i, word) in out.iter_mut().enumerate() {
            (*word, carry) = adc(self.0[i], rhs.0[i], carry);
        }
        Overflowing::new(U256(out), carry != 0)
    }

    /// Add modulo 2^256.
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).value
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.overflowing_add(rhs).checked()
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        self.checked_add(rhs).unwrap_or(Self::MAX)
    }

    /// Subtract, reporting the borrow out of the top word (true when `rhs > self`).
    pub fn overflowing_sub(self, rhs: Self) -> Overflowing<Self> {
        let mut out = [0 as Word; WORDS];
        let mut borrow = 0;
        for (i, word) in out.iter_mut().enumerate() {
            (*word, borrow) = sbb(self.0[i], rhs.0[i], borrow);
        }
        Overflowing::new(U256(out), borrow != 0)
    }

    /// Subtract modulo 2^256 (two's-complement wraparound).
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).value
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.overflowing_sub(rhs).checked()
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs).unwrap_or(Self::ZERO)
    }

    /// Two's-complement negation: `2^256 - self`, with zero mapping to zero.
    pub fn wrapping_neg(self) -> Self {
        Self::ZERO.wrapping_sub(self)
    }
}
