//! Batch operations over secp256k1 points.
//!
//! With the `parallel` feature enabled the work is spread over the rayon thread pool.
//! Results keep the order of the inputs either way.

use crate::error::ArithmeticError;
use crate::secp256k1::{S256Point, G};
use crate::U256;

use num_bigint::BigUint;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Validates every coordinate pair, returning one result per input.
pub fn validate_points(
    coordinates: &[(U256, U256)],
) -> Vec<Result<S256Point, ArithmeticError>> {
    #[cfg(feature = "parallel")]
    let iter = coordinates.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = coordinates.iter();

    iter.map(|(x, y)| S256Point::from_u256(*x, *y)).collect()
}

/// Computes `k * G` for every coefficient, failing on the first error.
pub fn multiply_generator(coefficients: &[BigUint]) -> Result<Vec<S256Point>, ArithmeticError> {
    #[cfg(feature = "parallel")]
    let iter = coefficients.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = coefficients.iter();

    iter.map(|coefficient| G.scalar_mul(coefficient)).collect()
}
