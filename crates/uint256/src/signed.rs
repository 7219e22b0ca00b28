//! Two's-complement interpretation: sign queries, signed comparison, Sdiv and Smod.
//!
//! Division truncates toward zero. The quotient is negative iff the operand signs
//! differ; the remainder takes the dividend's sign. `SIGNED_MIN` has no positive
//! counterpart, so its magnitude is itself read as unsigned 2^255, which keeps
//! `SIGNED_MIN / -1 == SIGNED_MIN` without a separate overflow case.

use std::cmp::Ordering;

use subtle::{Choice, ConditionallySelectable};
use uint256_types::ArithError;

use crate::div::reject_zero;
use crate::uint::{Word, U256};

impl U256 {
    /// Most negative signed value, -2^255.
    pub const SIGNED_MIN: Self = Self([0, 0, 0, 1 << 63]);
    /// Most positive signed value, 2^255 - 1.
    pub const SIGNED_MAX: Self = Self([Word::MAX, Word::MAX, Word::MAX, Word::MAX >> 1]);

    /// Return true if the sign bit (bit 255) is set.
    pub const fn is_negative(&self) -> bool {
        self.0[3] >> 63 == 1
    }

    /// Magnitude as unsigned; `abs(SIGNED_MIN) == SIGNED_MIN`.
    pub fn abs(self) -> Self {
        Self::conditional_select(
            &self,
            &self.wrapping_neg(),
            Choice::from(self.is_negative() as u8),
        )
    }

    /// -1, 0 or 1 under the signed reading.
    pub fn signum(&self) -> i32 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Compare as two's-complement signed values.
    pub fn signed_cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.cmp(other),
        }
    }

    pub fn slt(&self, other: &Self) -> bool {
        self.signed_cmp(other) == Ordering::Less
    }

    pub fn sgt(&self, other: &Self) -> bool {
        self.signed_cmp(other) == Ordering::Greater
    }

    /// Signed truncating division. A zero divisor yields zero.
    pub fn sdiv(self, divisor: Self) -> Self {
        if divisor.is_zero() {
            return Self::ZERO;
        }
        let q = self.abs().wrapping_div(divisor.abs());
        if self.is_negative() != divisor.is_negative() {
            q.wrapping_neg()
        } else {
            q
        }
    }

    /// Signed remainder with the dividend's sign. A zero divisor yields zero.
    pub fn smod(self, divisor: Self) -> Self {
        if divisor.is_zero() {
            return Self::ZERO;
        }
        let r = self.abs().wrapping_rem(divisor.abs());
        if self.is_negative() {
            r.wrapping_neg()
        } else {
            r
        }
    }

    pub fn checked_sdiv(self, divisor: Self) -> Result<Self, ArithError> {
        reject_zero(&divisor)?;
        Ok(self.sdiv(divisor))
    }

    pub fn checked_smod(self, divisor: Self) -> Result<Self, ArithError> {
        reject_zero(&divisor)?;
        Ok(self.smod(divisor))
    }
}
