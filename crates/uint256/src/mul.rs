//! Multiplication and squaring.

use crate::uint::{Overflowing, Word, U256, WORDS};
use crate::word::{adc, mac};

impl U256 {
    /// Multiply modulo 2^256.
    ///
    /// Only the partial products that land in the low four words are formed; the
    /// result equals the low half of [`U256::widening_mul`].
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        let (x, y) = (&self.0, &rhs.0);
        let mut out = [0 as Word; WORDS];
        for i in 0..WORDS {
            let mut carry = 0;
            for j in 0..WORDS - i {
                (out[i + j], carry) = mac(out[i + j], x[i], y[j], carry);
            }
        }
        U256(out)
    }

    /// Full 512-bit product as eight little-endian words.
    pub fn widening_mul(self, rhs: Self) -> [Word; 2 * WORDS] {
        let (x, y) = (&self.0, &rhs.0);
        let mut out = [0 as Word; 2 * WORDS];
        for i in 0..WORDS {
            let mut carry = 0;
            for j in 0..WORDS {
                (out[i + j], carry) = mac(out[i + j], x[i], y[j], carry);
            }
            out[i + WORDS] = carry;
        }
        out
    }

    /// Multiply, flagging a product that does not fit in 256 bits.
    pub fn overflowing_mul(self, rhs: Self) -> Overflowing<Self> {
        let wide = self.widening_mul(rhs);
        let overflow = wide[WORDS..].iter().any(|&w| w != 0);
        Overflowing::new(U256([wide[0], wide[1], wide[2], wide[3]]), overflow)
    }

    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.overflowing_mul(rhs).checked()
    }

    pub fn saturating_mul(self, rhs: Self) -> Self {
        self.checked_mul(rhs).unwrap_or(Self::MAX)
    }

    /// `self * self` modulo 2^256.
    ///
    /// Cross terms `a[i] * a[j]` with `i < j` are formed once and doubled, so this needs
    /// six word multiplies where `wrapping_mul(self, self)` needs ten.
    pub fn square(self) -> Self {
        let a = &self.0;
        let mut r = [0 as Word; WORDS];

        // Cross terms whose position i + j stays below four words.
        let (lo, carry) = mac(0, a[0], a[1], 0);
        r[1] = lo;
        let (lo, carry) = mac(0, a[0], a[2], carry);
        r[2] = lo;
        let (lo, _) = mac(0, a[0], a[3], carry);
        let (lo, _) = mac(lo, a[1], a[2], 0);
        r[3] = lo;

        r[3] = (r[3] << 1) | (r[2] >> 63);
        r[2] = (r[2] << 1) | (r[1] >> 63);
        r[1] <<= 1;

        // Diagonal: a[0]^2 at word 0, a[1]^2 at word 2.
        let (lo, hi) = mac(0, a[0], a[0], 0);
        r[0] = lo;
        let (sum, carry) = adc(r[1], hi, 0);
        r[1] = sum;
        let (lo, hi) = mac(0, a[1], a[1], 0);
        let (sum, carry) = adc(r[2], lo, carry);
        r[2] = sum;
        let (sum, _) = adc(r[3], hi, carry);
        r[3] = sum;

        U256(r)
    }
}
