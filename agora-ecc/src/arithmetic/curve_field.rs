use super::field::FieldElement;
use super::modular::Modular;
use crate::curve::Curve;
use crate::error::ArithmeticError;
use crate::utils::{biguint_to_u256, parse_hex_u256, u256_to_biguint};

use bigint::{Encoding, U256};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;

use std::fmt;
use std::marker::PhantomData;

/// An element of the base field of curve `C`.
///
/// The prime is part of the type, so mixing elements of different fields is a compile
/// error instead of a runtime one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveField<C: Curve>(pub(crate) U256, pub(crate) PhantomData<C>);

impl<C: Curve> CurveField<C> {
    pub const ONE: Self = Self(U256::ONE, PhantomData);
    pub const ZERO: Self = Self(U256::ZERO, PhantomData);

    pub fn new(number: U256) -> Result<Self, ArithmeticError> {
        if number < C::PRIME_MODULUS {
            Ok(Self(number, PhantomData))
        } else {
            Err(ArithmeticError::OutOfRange {
                num: u256_to_biguint(&number).into(),
                prime: Self::prime(),
            })
        }
    }

    pub fn from_u64(number: u64) -> Result<Self, ArithmeticError> {
        Self::new(U256::from_u64(number))
    }

    pub fn from_be_hex(input: &str) -> Result<Self, ArithmeticError> {
        Self::new(parse_hex_u256(input)?)
    }

    pub fn prime() -> BigUint {
        u256_to_biguint(&C::PRIME_MODULUS)
    }

    pub fn to_biguint(self) -> BigUint {
        u256_to_biguint(&self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == U256::ZERO
    }

    /// Computes `self^exponent` with the exponent reduced modulo `p - 1`.
    pub fn pow(&self, exponent: &BigInt) -> Self {
        let order = BigInt::from(Self::prime() - 1u32);
        let reduced = exponent.mod_floor(&order);
        // NOTE unwrap is fine because the reduced exponent is smaller than the modulus
        let reduced = biguint_to_u256(reduced.magnitude()).unwrap();
        self.pow_u256(&reduced)
    }

    pub fn inverse(&self) -> Result<Self, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.pow_u256(&C::PRIME_MODULUS.wrapping_sub(&U256::from_u8(2))))
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        Ok(Modular::mul(self, &rhs.inverse()?))
    }
}

impl<C: Curve> Modular for CurveField<C> {
    const MODULUS: U256 = C::PRIME_MODULUS;

    fn from_reduced(number: U256) -> Self {
        Self(number, PhantomData)
    }

    fn inner(&self) -> &U256 {
        &self.0
    }
}

impl<C: Curve> TryFrom<FieldElement> for CurveField<C> {
    type Error = ArithmeticError;

    fn try_from(element: FieldElement) -> Result<Self, Self::Error> {
        if element.prime() != &Self::prime() {
            return Err(ArithmeticError::IncompatibleFields);
        }
        let number = biguint_to_u256(element.num()).ok_or(ArithmeticError::IncompatibleFields)?;
        Ok(Self(number, PhantomData))
    }
}

impl<C: Curve> From<CurveField<C>> for FieldElement {
    fn from(element: CurveField<C>) -> Self {
        FieldElement::from_parts_unchecked(element.to_biguint(), CurveField::<C>::prime())
    }
}

impl<C: Curve> fmt::Display for CurveField<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0.to_be_bytes()))
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b CurveField<C>> for &'a CurveField<C> {
    type Output = CurveField<C>;
    fn add(self, rhs: &'b CurveField<C>) -> Self::Output {
        Modular::add(self, rhs)
    }
}

impl<C: Curve> std::ops::Add for CurveField<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Modular::add(&self, &rhs)
    }
}

impl<C: Curve> std::ops::AddAssign for CurveField<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<C: Curve> std::ops::AddAssign<&CurveField<C>> for CurveField<C> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = &*self + rhs;
    }
}

impl<C: Curve> std::ops::Sub for CurveField<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Modular::sub(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b CurveField<C>> for &'a CurveField<C> {
    type Output = CurveField<C>;
    fn sub(self, rhs: &'b CurveField<C>) -> Self::Output {
        Modular::sub(self, rhs)
    }
}

impl<C: Curve> std::ops::SubAssign for CurveField<C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<C: Curve> std::ops::Neg for CurveField<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Modular::neg(&self)
    }
}

impl<C: Curve> std::ops::Mul for CurveField<C> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Modular::mul(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Mul<&'b CurveField<C>> for &'a CurveField<C> {
    type Output = CurveField<C>;
    fn mul(self, rhs: &'b CurveField<C>) -> Self::Output {
        Modular::mul(self, rhs)
    }
}

impl<C: Curve> std::ops::MulAssign for CurveField<C> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<C: Curve> std::ops::MulAssign<&CurveField<C>> for CurveField<C> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = &*self * rhs;
    }
}
