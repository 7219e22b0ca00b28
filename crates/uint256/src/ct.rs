//! `subtle` trait implementations.
//!
//! These let a `U256` flow through code built on `subtle::Choice`. The arithmetic in
//! this crate branches on operand values and makes no timing promises of its own.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::uint::{Word, U256, WORDS};

impl ConstantTimeEq for U256 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl ConditionallySelectable for U256 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0 as Word; WORDS];
        for (i, word) in out.iter_mut().enumerate() {
            *word = Word::conditional_select(&a.0[i], &b.0[i], choice);
        }
        U256(out)
    }
}
