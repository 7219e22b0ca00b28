//! Operator overloads.
//!
//! Every operator wraps modulo 2^256 and never panics: `/` and `%` by zero give zero,
//! and shifts of 256 or more give zero.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use crate::uint::U256;

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $inherent:ident) => {
        impl $trait for U256 {
            type Output = U256;

            #[inline]
            fn $method(self, rhs: U256) -> U256 {
                self.$inherent(rhs)
            }
        }

        impl $trait<&U256> for U256 {
            type Output = U256;

            #[inline]
            fn $method(self, rhs: &U256) -> U256 {
                self.$inherent(*rhs)
            }
        }

        impl $assign_trait for U256 {
            #[inline]
            fn $assign_method(&mut self, rhs: U256) {
                *self = self.$inherent(rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, wrapping_add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, wrapping_sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, wrapping_mul);
impl_binary_op!(Div, div, DivAssign, div_assign, wrapping_div);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, wrapping_rem);

impl Neg for U256 {
    type Output = U256;

    #[inline]
    fn neg(self) -> U256 {
        self.wrapping_neg()
    }
}

impl Shl<u32> for U256 {
    type Output = U256;

    #[inline]
    fn shl(self, n: u32) -> U256 {
        self.shift_left(n)
    }
}

impl Shr<u32> for U256 {
    type Output = U256;

    #[inline]
    fn shr(self, n: u32) -> U256 {
        self.shift_right(n)
    }
}

impl ShlAssign<u32> for U256 {
    #[inline]
    fn shl_assign(&mut self, n: u32) {
        *self = self.shift_left(n);
    }
}

impl ShrAssign<u32> for U256 {
    #[inline]
    fn shr_assign(&mut self, n: u32) {
        *self = self.shift_right(n);
    }
}

impl std::iter::Sum for U256 {
    fn sum<I: Iterator<Item = U256>>(iter: I) -> U256 {
        iter.fold(U256::ZERO, U256::wrapping_add)
    }
}

impl std::iter::Product for U256 {
    fn product<I: Iterator<Item = U256>>(iter: I) -> U256 {
        iter.fold(U256::ONE, U256::wrapping_mul)
    }
}
