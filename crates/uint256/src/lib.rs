#![forbid(unsafe_code)]
#![doc = "Fixed-width 256-bit unsigned integer arithmetic over four 64-bit words."]

mod add;
mod bits;
mod ct;
mod div;
mod modular;
mod mul;
#[cfg(feature = "num-bigint")]
mod num;
mod ops;
mod signed;
mod uint;
mod word;

pub use uint::{DoubleWord, Overflowing, Word, U256, WORDS, WORD_BITS};
pub use uint256_types::ArithError;
