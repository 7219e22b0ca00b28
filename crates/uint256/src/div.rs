//! Unsigned long division.
//!
//! Divisors of a single word take a short-division pass driven by a precomputed
//! reciprocal. Wider divisors use Knuth's Algorithm D (TAOCP vol. 2, 4.3.1). The
//! dividend may be up to eight words, so the same core reduces the 257-bit sums of
//! `add_mod` and the 512-bit products of `mul_mod`.
//!
//! Division by zero is total: quotient and remainder are both zero. The `checked_*`
//! variants report it as [`ArithError::DivisionByZero`] instead.

use uint256_types::ArithError;

use crate::uint::{DoubleWord, Word, U256, WORDS, WORD_BITS};
use crate::word::{adc, div_2by1, mac, reciprocal, sbb};

/// Widest dividend accepted by [`div_rem_words`].
pub(crate) const MAX_DIVIDEND_WORDS: usize = 2 * WORDS;

/// Divide the little-endian words `u` by `d` and return the remainder.
///
/// If `quot` is given it receives the quotient words; it must be zeroed and at least
/// `u.len()` long. `d` must be nonzero.
pub(crate) fn div_rem_words(u: &[Word], d: &U256, quot: Option<&mut [Word]>) -> U256 {
    debug_assert!(!d.is_zero());
    debug_assert!(u.len() <= MAX_DIVIDEND_WORDS);

    let d_len = d.significant_words();
    let u_len = u.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
    if u_len < d_len {
        let mut rem = [0 as Word; WORDS];
        rem[..u_len].copy_from_slice(&u[..u_len]);
        return U256(rem);
    }

    // D1: normalize so the divisor's top word has its high bit set.
    let shift = d.0[d_len - 1].leading_zeros();
    let dn = d.shift_left(shift);
    let mut un = [0 as Word; MAX_DIVIDEND_WORDS + 1];
    if shift == 0 {
        un[..u_len].copy_from_slice(&u[..u_len]);
    } else {
        un[u_len] = u[u_len - 1] >> (WORD_BITS - shift);
        for i in (1..u_len).rev() {
            un[i] = (u[i] << shift) | (u[i - 1] >> (WORD_BITS - shift));
        }
        un[0] = u[0] << shift;
    }

    if d_len == 1 {
        let rem = div_rem_by_word(&un[..=u_len], dn.0[0], quot);
        return U256::from_u64(rem >> shift);
    }

    div_rem_knuth(&mut un[..=u_len], &dn.0[..d_len], quot);

    // D8: the remainder sits in the low d_len words, still normalized.
    let mut rem = [0 as Word; WORDS];
    rem[..d_len].copy_from_slice(&un[..d_len]);
    U256(rem).shift_right(shift)
}

/// Short division of the normalized `un` by the normalized single word `d`.
fn div_rem_by_word(un: &[Word], d: Word, mut quot: Option<&mut [Word]>) -> Word {
    let v = reciprocal(d);
    let top = un.len() - 1;
    let mut rem = un[top];
    for j in (0..top).rev() {
        let (q, r) = div_2by1(rem, un[j], d, v);
        if let Some(q_out) = quot.as_deref_mut() {
            q_out[j] = q;
        }
        rem = r;
    }
    rem
}

/// Algorithm D proper: `un` is the normalized dividend with its extra top word,
/// `dn` the normalized divisor of at least two words. Leaves the remainder in `un`.
fn div_rem_knuth(un: &mut [Word], dn: &[Word], mut quot: Option<&mut [Word]>) {
    let n = dn.len();
    let dh = dn[n - 1];
    let dl = dn[n - 2];
    let v = reciprocal(dh);

    for j in (0..un.len() - n).rev() {
        let u2 = un[j + n];
        let u1 = un[j + n - 1];
        let u0 = un[j + n - 2];

        // D3: estimate from the top two words, then correct with the next divisor word.
        let (mut qhat, mut rhat, mut rhat_overflow) = if u2 >= dh {
            let (r, c) = u1.overflowing_add(dh);
            (Word::MAX, r, c)
        } else {
            let (q, r) = div_2by1(u2, u1, dh, v);
            (q, r, false)
        };
        while !rhat_overflow
            && qhat as DoubleWord * dl as DoubleWord
                > ((rhat as DoubleWord) << WORD_BITS) | u0 as DoubleWord
        {
            qhat -= 1;
            (rhat, rhat_overflow) = rhat.overflowing_add(dh);
        }

        // D4-D6: multiply and subtract; add back once if the estimate was one too big.
        let segment = &mut un[j..=j + n];
        if sub_mul(segment, dn, qhat) != 0 {
            qhat -= 1;
            add_back(segment, dn);
        }

        if let Some(q_out) = quot.as_deref_mut() {
            q_out[j] = qhat;
        }
    }
}

/// `x -= m * y` where `x` is one word longer than `y`. Returns the final borrow.
fn sub_mul(x: &mut [Word], y: &[Word], m: Word) -> Word {
    let mut carry = 0;
    let mut borrow = 0;
    for (xi, &yi) in x.iter_mut().zip(y) {
        let (lo, hi) = mac(0, yi, m, carry);
        carry = hi;
        (*xi, borrow) = sbb(*xi, lo, borrow);
    }
    let top = y.len();
    (x[top], borrow) = sbb(x[top], carry, borrow);
    borrow
}

/// `x += y` where `x` is one word longer than `y`; the final carry is dropped.
fn add_back(x: &mut [Word], y: &[Word]) {
    let mut carry = 0;
    for (xi, &yi) in x.iter_mut().zip(y) {
        (*xi, carry) = adc(*xi, yi, carry);
    }
    let top = y.len();
    x[top] = x[top].wrapping_add(carry);
}

impl U256 {
    /// Quotient and remainder. A zero divisor yields `(0, 0)`.
    pub fn div_rem(self, divisor: Self) -> (Self, Self) {
        if divisor.is_zero() {
            return (Self::ZERO, Self::ZERO);
        }
        if self < divisor {
            return (Self::ZERO, self);
        }
        if self.is_u64() {
            let (a, b) = (self.0[0], divisor.0[0]);
            return (Self::from_u64(a / b), Self::from_u64(a % b));
        }
        let mut quot = [0 as Word; WORDS];
        let rem = div_rem_words(&self.0, &divisor, Some(&mut quot));
        (U256(quot), rem)
    }

    /// Quotient only. A zero divisor yields zero.
    pub fn wrapping_div(self, divisor: Self) -> Self {
        self.div_rem(divisor).0
    }

    /// Remainder only, without storing quotient words. A zero divisor yields zero.
    pub fn wrapping_rem(self, divisor: Self) -> Self {
        if divisor.is_zero() {
            return Self::ZERO;
        }
        if self < divisor {
            return self;
        }
        if self.is_u64() {
            return Self::from_u64(self.0[0] % divisor.0[0]);
        }
        div_rem_words(&self.0, &divisor, None)
    }

    pub fn checked_div_rem(self, divisor: Self) -> Result<(Self, Self), ArithError> {
        reject_zero(&divisor)?;
        Ok(self.div_rem(divisor))
    }

    pub fn checked_div(self, divisor: Self) -> Result<Self, ArithError> {
        reject_zero(&divisor)?;
        Ok(self.wrapping_div(divisor))
    }

    pub fn checked_rem(self, divisor: Self) -> Result<Self, ArithError> {
        reject_zero(&divisor)?;
        Ok(self.wrapping_rem(divisor))
    }
}

/// Shared guard for the `checked_*` division family.
pub(crate) fn reject_zero(divisor: &U256) -> Result<(), ArithError> {
    if divisor.is_zero() {
        log::debug!("uint256: rejected division by zero");
        return Err(ArithError::DivisionByZero);
    }
    Ok(())
}
