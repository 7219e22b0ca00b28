#![forbid(unsafe_code)]
#![doc = "Common error types for the uint256 arithmetic engine."]

pub mod error;

pub use error::*;
