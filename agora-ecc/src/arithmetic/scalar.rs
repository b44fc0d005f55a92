use crate::curve::Curve;
use crate::utils::{biguint_to_u256, u256_to_biguint};

use bigint::{Encoding, U256};
use num_bigint::BigUint;

use std::fmt;
use std::marker::PhantomData;

/// An integer modulo the order of the curve's generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar<C: Curve>(U256, PhantomData<C>);

impl<C: Curve> Scalar<C> {
    /// Reduces an integer of arbitrary size modulo the curve order.
    pub fn reduce(number: &BigUint) -> Self {
        let reduced = number % u256_to_biguint(&C::ORDER);
        // NOTE unwrap is fine because the remainder is below the 256 bit order
        Self(biguint_to_u256(&reduced).unwrap(), PhantomData)
    }

    pub fn to_biguint(self) -> BigUint {
        u256_to_biguint(&self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == U256::ZERO
    }
}

impl<C: Curve> fmt::Display for Scalar<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0.to_be_bytes()))
    }
}
