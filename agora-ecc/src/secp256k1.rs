//! The secp256k1 curve `y^2 = x^3 + 7` over `F_p` with `p = 2^256 - 2^32 - 977`.

use crate::arithmetic::{CurveField, Point, Scalar};
use crate::curve::{Curve, Secp256k1};
use crate::error::ArithmeticError;
use crate::U256;

use num_bigint::BigUint;

use std::fmt;
use std::marker::PhantomData;

pub type S256Field = CurveField<Secp256k1>;

pub const P: U256 = Secp256k1::PRIME_MODULUS;
pub const A: U256 = Secp256k1::COEFF_A;
pub const B: U256 = Secp256k1::COEFF_B;
pub const N: U256 = Secp256k1::ORDER;
pub const GX: U256 = Secp256k1::GENERATOR_X;
pub const GY: U256 = Secp256k1::GENERATOR_Y;

const COEFF_A: S256Field = CurveField(A, PhantomData);
const COEFF_B: S256Field = CurveField(B, PhantomData);

/// The base point of secp256k1.
pub const G: S256Point = S256Point::GENERATOR;

/// A point on secp256k1. The curve coefficients are fixed to `a = 0` and `b = 7`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct S256Point(Point<S256Field>);

impl S256Point {
    pub const GENERATOR: Self = Self(Point::from_parts_unchecked(
        Some(CurveField(GX, PhantomData)),
        Some(CurveField(GY, PhantomData)),
        COEFF_A,
        COEFF_B,
    ));

    pub const IDENTITY: Self = Self(Point::from_parts_unchecked(None, None, COEFF_A, COEFF_B));

    pub fn new(x: S256Field, y: S256Field) -> Result<Self, ArithmeticError> {
        Point::from_coordinates(x, y, COEFF_A, COEFF_B).map(Self)
    }

    /// Wraps raw integer coordinates into field elements before the curve check.
    pub fn from_u256(x: U256, y: U256) -> Result<Self, ArithmeticError> {
        Self::new(S256Field::new(x)?, S256Field::new(y)?)
    }

    pub fn from_be_hex(x: &str, y: &str) -> Result<Self, ArithmeticError> {
        Self::new(S256Field::from_be_hex(x)?, S256Field::from_be_hex(y)?)
    }

    pub fn infinity() -> Self {
        Self::IDENTITY
    }

    pub fn is_infinity(&self) -> bool {
        self.0.is_infinity()
    }

    pub fn x(&self) -> Option<&S256Field> {
        self.0.x()
    }

    pub fn y(&self) -> Option<&S256Field> {
        self.0.y()
    }

    pub fn checked_add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.0.checked_add(&rhs.0).map(Self)
    }

    pub fn double(&self) -> Result<Self, ArithmeticError> {
        self.0.double().map(Self)
    }

    /// Multiplies by `coefficient` after reducing it modulo the group order `N`.
    pub fn scalar_mul(&self, coefficient: &BigUint) -> Result<Self, ArithmeticError> {
        self.mul_scalar(&Scalar::reduce(coefficient))
    }

    pub fn mul_scalar(&self, scalar: &Scalar<Secp256k1>) -> Result<Self, ArithmeticError> {
        if scalar.is_zero() {
            return Ok(Self::IDENTITY);
        }
        log::trace!("multiplying {} by reduced scalar {}", self, scalar);
        self.0.scalar_mul(&scalar.to_biguint()).map(Self)
    }
}

impl TryFrom<Point<S256Field>> for S256Point {
    type Error = ArithmeticError;

    fn try_from(point: Point<S256Field>) -> Result<Self, Self::Error> {
        if point.a() != &COEFF_A || point.b() != &COEFF_B {
            return Err(ArithmeticError::IncompatibleCurves);
        }
        Ok(Self(point))
    }
}

impl From<S256Point> for Point<S256Field> {
    fn from(point: S256Point) -> Self {
        point.0
    }
}

impl fmt::Display for S256Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
