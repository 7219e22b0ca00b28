//! Interop with `num-bigint` and `num-traits`.
//!
//! Export is exact. Import comes in two flavours: `from_big_*_wrapping` reduces modulo
//! 2^256 and flags the truncation, `TryFrom` rejects anything out of range.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Bounded, CheckedDiv, CheckedRem, One, WrappingAdd, WrappingMul, WrappingSub, Zero};
use uint256_types::ArithError;

use crate::uint::{Overflowing, Word, U256, WORDS};

impl U256 {
    /// Low 256 bits of `value`; `overflow` is set if any higher bit was dropped.
    pub fn from_big_uint_wrapping(value: &BigUint) -> Overflowing<Self> {
        let mut words = [0 as Word; WORDS];
        let mut overflow = false;
        for (i, digit) in value.iter_u64_digits().enumerate() {
            if i < WORDS {
                words[i] = digit;
            } else if digit != 0 {
                overflow = true;
            }
        }
        if overflow {
            log::debug!(
                "uint256: truncated {}-bit integer to 256 bits",
                value.bits()
            );
        }
        Overflowing::new(U256(words), overflow)
    }

    /// Two's-complement image of `value` modulo 2^256.
    ///
    /// `overflow` is set for negative inputs and for magnitudes of 2^256 or more.
    pub fn from_big_int_wrapping(value: &BigInt) -> Overflowing<Self> {
        let Overflowing {
            value: magnitude,
            overflow,
        } = Self::from_big_uint_wrapping(value.magnitude());
        if value.sign() == Sign::Minus {
            log::debug!("uint256: wrapped negative integer to two's complement");
            Overflowing::new(magnitude.wrapping_neg(), true)
        } else {
            Overflowing::new(magnitude, overflow)
        }
    }

    /// Read the value as a two's-complement signed integer.
    pub fn to_signed_big_int(self) -> BigInt {
        if self.is_negative() {
            -BigInt::from(self.abs())
        } else {
            BigInt::from(self)
        }
    }
}

impl From<U256> for BigUint {
    fn from(value: U256) -> Self {
        BigUint::from_bytes_be(&value.to_be_bytes())
    }
}

impl From<&U256> for BigUint {
    fn from(value: &U256) -> Self {
        BigUint::from(*value)
    }
}

impl From<U256> for BigInt {
    fn from(value: U256) -> Self {
        BigInt::from_biguint(Sign::Plus, BigUint::from(value))
    }
}

impl TryFrom<&BigUint> for U256 {
    type Error = ArithError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        if value.bits() > u64::from(U256::BITS) {
            return Err(ArithError::Overflow);
        }
        Ok(U256::from_big_uint_wrapping(value).value)
    }
}

impl TryFrom<BigUint> for U256 {
    type Error = ArithError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        U256::try_from(&value)
    }
}

impl TryFrom<&BigInt> for U256 {
    type Error = ArithError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        if value.sign() == Sign::Minus {
            return Err(ArithError::NegativeValue);
        }
        U256::try_from(value.magnitude())
    }
}

impl TryFrom<BigInt> for U256 {
    type Error = ArithError;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        U256::try_from(&value)
    }
}

impl Zero for U256 {
    fn zero() -> Self {
        U256::ZERO
    }

    fn is_zero(&self) -> bool {
        U256::is_zero(self)
    }
}

impl One for U256 {
    fn one() -> Self {
        U256::ONE
    }
}

impl Bounded for U256 {
    fn min_value() -> Self {
        U256::ZERO
    }

    fn max_value() -> Self {
        U256::MAX
    }
}

impl WrappingAdd for U256 {
    fn wrapping_add(&self, v: &Self) -> Self {
        U256::wrapping_add(*self, *v)
    }
}

impl WrappingSub for U256 {
    fn wrapping_sub(&self, v: &Self) -> Self {
        U256::wrapping_sub(*self, *v)
    }
}

impl WrappingMul for U256 {
    fn wrapping_mul(&self, v: &Self) -> Self {
        U256::wrapping_mul(*self, *v)
    }
}

impl CheckedDiv for U256 {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        U256::checked_div(*self, *v).ok()
    }
}

impl CheckedRem for U256 {
    fn checked_rem(&self, v: &Self) -> Option<Self> {
        U256::checked_rem(*self, *v).ok()
    }
}
