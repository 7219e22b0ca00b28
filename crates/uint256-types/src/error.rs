/// Errors reported by the checked and converting parts of the 256-bit engine.
///
/// The wrapping arithmetic itself never fails; these variants only surface from
/// `checked_*` operations and from conversions between widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    #[error("uint256: division by zero")]
    DivisionByZero,
    #[error("uint256: value does not fit in the target width")]
    Overflow,
    #[error("uint256: negative value")]
    NegativeValue,
    #[error("uint256: input length invalid: at most {max} bytes, got {got}")]
    InvalidLength { max: usize, got: usize },
    #[error("uint256: buffer length not enough: need {need}, got {got}")]
    BufferTooSmall { need: usize, got: usize },
}
