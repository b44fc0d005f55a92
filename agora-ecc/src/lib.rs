#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod arithmetic;
pub mod batch;
pub mod curve;
mod error;
pub mod secp256k1;
mod utils;

pub use bigint::U256;
pub use curve::{Curve, Secp256k1};
pub use error::ArithmeticError;
pub use num_bigint::{BigInt, BigUint};
