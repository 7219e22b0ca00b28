//! Modular arithmetic over an arbitrary 256-bit modulus, and exponentiation.
//!
//! A zero modulus yields zero from every wrapping entry point; the `checked_*`
//! forms return [`ArithError::DivisionByZero`].

use uint256_types::ArithError;

use crate::div::{div_rem_words, reject_zero, MAX_DIVIDEND_WORDS};
use crate::uint::{Overflowing, Word, U256, WORDS};

impl U256 {
    /// `(self + rhs) mod m`, exact even when the sum needs a 257th bit.
    pub fn add_mod(self, rhs: Self, m: Self) -> Self {
        if m.is_zero() {
            return Self::ZERO;
        }
        let Overflowing { value: sum, overflow } = self.overflowing_add(rhs);

        // Both operands already reduced: the sum is below 2m, one subtraction suffices.
        if self < m && rhs < m {
            return if overflow || sum >= m {
                sum.wrapping_sub(m)
            } else {
                sum
            };
        }

        if !overflow {
            return sum.wrapping_rem(m);
        }
        let wide = [sum.0[0], sum.0[1], sum.0[2], sum.0[3], 1];
        div_rem_words(&wide, &m, None)
    }

    /// `(self * rhs) mod m`, reducing the full 512-bit product.
    pub fn mul_mod(self, rhs: Self, m: Self) -> Self {
        if m.is_zero() {
            return Self::ZERO;
        }
        let wide = self.widening_mul(rhs);
        div_rem_words(&wide, &m, None)
    }

    pub fn checked_add_mod(self, rhs: Self, m: Self) -> Result<Self, ArithError> {
        reject_zero(&m)?;
        Ok(self.add_mod(rhs, m))
    }

    pub fn checked_mul_mod(self, rhs: Self, m: Self) -> Result<Self, ArithError> {
        reject_zero(&m)?;
        Ok(self.mul_mod(rhs, m))
    }

    /// `self^exp mod 2^256` by left-to-right square-and-multiply.
    ///
    /// `x^0 == 1` for every `x`, including zero.
    pub fn wrapping_pow(self, exp: Self) -> Self {
        let mut result = Self::ONE;
        for i in (0..exp.bit_len()).rev() {
            result = result.square();
            if exp.bit(i) {
                result = result.wrapping_mul(self);
            }
        }
        result
    }

    /// `self^exp mod m`. A zero modulus yields zero; `exp == 0` yields `1 mod m`.
    pub fn pow_mod(self, exp: Self, m: Self) -> Self {
        if m.is_zero() {
            return Self::ZERO;
        }
        let base = self.wrapping_rem(m);
        let mut result = Self::ONE.wrapping_rem(m);
        for i in (0..exp.bit_len()).rev() {
            result = result.mul_mod(result, m);
            if exp.bit(i) {
                result = result.mul_mod(base, m);
            }
        }
        result
    }

    pub fn checked_pow_mod(self, exp: Self, m: Self) -> Result<Self, ArithError> {
        reject_zero(&m)?;
        Ok(self.pow_mod(exp, m))
    }

    /// `floor(self * rhs / d)` through a 512-bit intermediate.
    ///
    /// `overflow` is set when the quotient does not fit in 256 bits; `value` then holds
    /// its low 256 bits. A zero `d` yields zero without overflow.
    pub fn mul_div(self, rhs: Self, d: Self) -> Overflowing<Self> {
        if d.is_zero() {
            return Overflowing::new(Self::ZERO, false);
        }
        let wide = self.widening_mul(rhs);
        let mut quot = [0 as Word; MAX_DIVIDEND_WORDS];
        div_rem_words(&wide, &d, Some(&mut quot));
        let overflow = quot[WORDS..].iter().any(|&w| w != 0);
        Overflowing::new(U256([quot[0], quot[1], quot[2], quot[3]]), overflow)
    }

    /// Floor of the square root.
    pub fn isqrt(self) -> Self {
        if self <= Self::ONE {
            return self;
        }
        // Start from a power of two no smaller than the root; Newton steps then decrease.
        let mut x = Self::ONE.shift_left((self.bit_len() + 1) / 2);
        loop {
            let y = x.wrapping_add(self.wrapping_div(x)).shift_right(1);
            if y >= x {
                return x;
            }
            x = y;
        }
    }
}
