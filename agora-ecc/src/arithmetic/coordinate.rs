use super::curve_field::CurveField;
use super::field::FieldElement;
use super::modular::Modular;
use crate::curve::Curve;
use crate::error::ArithmeticError;

use num_bigint::BigInt;

use std::fmt::Debug;

/// Field-like arithmetic required from the coordinates of a [`Point`](super::Point).
pub trait Coordinate: Clone + PartialEq + Debug {
    /// Whether this is the additive identity of its field.
    fn is_zero(&self) -> bool;
    fn try_add(&self, rhs: &Self) -> Result<Self, ArithmeticError>;
    fn try_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError>;
    fn try_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError>;
    fn try_div(&self, rhs: &Self) -> Result<Self, ArithmeticError>;
    fn pow(&self, exponent: &BigInt) -> Self;
}

impl Coordinate for FieldElement {
    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.checked_add(rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.checked_sub(rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.checked_mul(rhs)
    }

    fn try_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.checked_div(rhs)
    }

    fn pow(&self, exponent: &BigInt) -> Self {
        FieldElement::pow(self, exponent.clone())
    }
}

impl<C: Curve> Coordinate for CurveField<C> {
    fn is_zero(&self) -> bool {
        CurveField::is_zero(self)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        Ok(Modular::add(self, rhs))
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        Ok(Modular::sub(self, rhs))
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        Ok(Modular::mul(self, rhs))
    }

    fn try_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.checked_div(rhs)
    }

    fn pow(&self, exponent: &BigInt) -> Self {
        CurveField::pow(self, exponent)
    }
}
