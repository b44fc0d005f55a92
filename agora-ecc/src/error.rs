use num_bigint::{BigInt, BigUint};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("num {num} not in field range 0 to {prime} (exclusive)")]
    OutOfRange { num: BigInt, prime: BigUint },
    #[error("field modulus must be at least 2, got {0}")]
    InvalidModulus(BigInt),
    #[error("operands belong to different fields")]
    IncompatibleFields,
    #[error("points are not on the same curve")]
    IncompatibleCurves,
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("attempted to divide by zero")]
    DivisionByZero,
    #[error("invalid hex input: {0}")]
    InvalidHex(String),
}
