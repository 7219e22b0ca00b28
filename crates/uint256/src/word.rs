//! Word-level primitives shared by the additive, multiplicative and division paths.

use crate::uint::{DoubleWord, Word, WORD_BITS};

/// Add with carry: returns `(a + b + carry) mod 2^64` and the carry out (0 or 1).
#[inline(always)]
pub(crate) const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let t = a as DoubleWord + b as DoubleWord + carry as DoubleWord;
    (t as Word, (t >> WORD_BITS) as Word)
}

/// Subtract with borrow: returns `(a - b - borrow) mod 2^64` and the borrow out (0 or 1).
#[inline(always)]
pub(crate) const fn sbb(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let t = (a as DoubleWord).wrapping_sub(b as DoubleWord + borrow as DoubleWord);
    (t as Word, (t >> (2 * WORD_BITS - 1)) as Word)
}

/// Multiply-accumulate: `acc + a * b + carry`, split into (low, high). Cannot overflow.
#[inline(always)]
pub(crate) const fn mac(acc: Word, a: Word, b: Word, carry: Word) -> (Word, Word) {
    let t = acc as DoubleWord + a as DoubleWord * b as DoubleWord + carry as DoubleWord;
    (t as Word, (t >> WORD_BITS) as Word)
}

/// Reciprocal of a normalized divisor: `floor((2^128 - 1) / d) - 2^64`.
#[inline]
pub(crate) const fn reciprocal(d: Word) -> Word {
    debug_assert!(d >> (WORD_BITS - 1) == 1);
    (DoubleWord::MAX / d as DoubleWord) as Word
}

/// Divide the two-word value `uh:ul` by a normalized `d` using its reciprocal `v`.
///
/// Requires `uh < d`. Returns `(quotient, remainder)`.
/// Möller & Granlund, "Improved division by invariant integers", Algorithm 4.
#[inline]
pub(crate) const fn div_2by1(uh: Word, ul: Word, d: Word, v: Word) -> (Word, Word) {
    debug_assert!(uh < d);
    let q = (v as DoubleWord * uh as DoubleWord)
        .wrapping_add(((uh as DoubleWord) << WORD_BITS) | ul as DoubleWord);
    let q0 = q as Word;
    let mut q1 = ((q >> WORD_BITS) as Word).wrapping_add(1);
    let mut r = ul.wrapping_sub(q1.wrapping_mul(d));
    if r > q0 {
        q1 = q1.wrapping_sub(1);
        r = r.wrapping_add(d);
    }
    if r >= d {
        q1 = q1.wrapping_add(1);
        r -= d;
    }
    (q1, r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adc_carry() {
        assert_eq!(adc(u64::MAX, 1, 0), (0, 1));
        assert_eq!(adc(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
        assert_eq!(adc(1, 2, 1), (4, 0));
    }

    #[test]
    fn test_sbb_borrow() {
        assert_eq!(sbb(0, 1, 0), (u64::MAX, 1));
        assert_eq!(sbb(0, u64::MAX, 1), (0, 1));
        assert_eq!(sbb(5, 3, 1), (1, 0));
    }

    #[test]
    fn test_mac_max() {
        // (2^64-1)^2 + 2*(2^64-1) = 2^128 - 1
        assert_eq!(mac(u64::MAX, u64::MAX, u64::MAX, u64::MAX), (u64::MAX, u64::MAX));
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(reciprocal(1 << 63), u64::MAX);
        assert_eq!(reciprocal(u64::MAX), 1);
    }

    #[test]
    fn test_div_2by1_matches_u128() {
        let divisors = [1u64 << 63, u64::MAX, 0x8000_0000_0000_0001, 0xC3A5_C85C_97CB_3127];
        let lows = [0u64, 1, u64::MAX, 0x1234_5678_9ABC_DEF0];
        for &d in &divisors {
            let v = reciprocal(d);
            for uh in [0u64, 1, d / 2, d - 1] {
                for &ul in &lows {
                    let n = ((uh as u128) << 64) | ul as u128;
                    let (q, r) = div_2by1(uh, ul, d, v);
                    assert_eq!(q as u128, n / d as u128, "q for {uh:x}:{ul:x} / {d:x}");
                    assert_eq!(r as u128, n % d as u128, "r for {uh:x}:{ul:x} / {d:x}");
                }
            }
        }
    }
}
