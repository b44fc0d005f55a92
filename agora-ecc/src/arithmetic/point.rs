use super::coordinate::Coordinate;
use crate::error::ArithmeticError;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use std::fmt;

/// A point on the short Weierstrass curve `y^2 = x^3 + a*x + b`.
///
/// The curve coefficients travel with every point, so compatibility of two points is
/// decided locally. The point at infinity has both coordinates set to `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point<T> {
    x: Option<T>,
    y: Option<T>,
    a: T,
    b: T,
}

impl<T> Point<T> {
    pub(crate) const fn from_parts_unchecked(x: Option<T>, y: Option<T>, a: T, b: T) -> Self {
        Self { x, y, a, b }
    }
}

impl<T: Coordinate> Point<T> {
    /// Creates a point and checks that it lies on the curve.
    ///
    /// Passing `None` for both coordinates yields the point at infinity, which skips the
    /// check. Passing `None` for only one of them is rejected.
    pub fn new(x: Option<T>, y: Option<T>, a: T, b: T) -> Result<Self, ArithmeticError> {
        if let (Some(x_val), Some(y_val)) = (&x, &y) {
            if !satisfies_equation(x_val, y_val, &a, &b)? {
                log::debug!(
                    "rejected point ({:?}, {:?}) for curve a = {:?}, b = {:?}",
                    x_val,
                    y_val,
                    a,
                    b
                );
                return Err(ArithmeticError::NotOnCurve);
            }
        } else if x.is_some() || y.is_some() {
            return Err(ArithmeticError::NotOnCurve);
        }
        Ok(Self { x, y, a, b })
    }

    pub fn from_coordinates(x: T, y: T, a: T, b: T) -> Result<Self, ArithmeticError> {
        Self::new(Some(x), Some(y), a, b)
    }

    pub fn infinity(a: T, b: T) -> Self {
        Self::from_parts_unchecked(None, None, a, b)
    }

    pub fn is_infinity(&self) -> bool {
        self.x.is_none()
    }

    pub fn x(&self) -> Option<&T> {
        self.x.as_ref()
    }

    pub fn y(&self) -> Option<&T> {
        self.y.as_ref()
    }

    pub fn a(&self) -> &T {
        &self.a
    }

    pub fn b(&self) -> &T {
        &self.b
    }

    fn coordinates(&self) -> Option<(&T, &T)> {
        match (&self.x, &self.y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }

    fn identity(&self) -> Self {
        Self::infinity(self.a.clone(), self.b.clone())
    }

    pub fn checked_add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if self.a != rhs.a || self.b != rhs.b {
            return Err(ArithmeticError::IncompatibleCurves);
        }

        let (x1, y1) = match self.coordinates() {
            Some(coords) => coords,
            None => return Ok(rhs.clone()),
        };
        let (x2, y2) = match rhs.coordinates() {
            Some(coords) => coords,
            None => return Ok(self.clone()),
        };

        if x1 != x2 {
            let slope = y2.try_sub(y1)?.try_div(&x2.try_sub(x1)?)?;
            return self.reflected_intersection(&slope, (x1, y1), x2);
        }

        // same x, different y: the points are each other's negation
        if y1 != y2 {
            return Ok(self.identity());
        }

        // vertical tangent
        if y1.is_zero() {
            return Ok(self.identity());
        }

        let x_squared = x1.try_mul(x1)?;
        let numerator = x_squared
            .try_add(&x_squared)?
            .try_add(&x_squared)?
            .try_add(&self.a)?;
        let slope = numerator.try_div(&y1.try_add(y1)?)?;
        self.reflected_intersection(&slope, (x1, y1), x1)
    }

    /// Third intersection of the line with the given slope, reflected over the x axis.
    fn reflected_intersection(
        &self,
        slope: &T,
        (x1, y1): (&T, &T),
        x2: &T,
    ) -> Result<Self, ArithmeticError> {
        let x3 = slope.try_mul(slope)?.try_sub(x1)?.try_sub(x2)?;
        let y3 = slope.try_mul(&x1.try_sub(&x3)?)?.try_sub(y1)?;
        Ok(Self::from_parts_unchecked(
            Some(x3),
            Some(y3),
            self.a.clone(),
            self.b.clone(),
        ))
    }

    pub fn double(&self) -> Result<Self, ArithmeticError> {
        self.checked_add(self)
    }

    /// Double-and-add over the bits of `coefficient`, least significant first.
    pub fn scalar_mul(&self, coefficient: &BigUint) -> Result<Self, ArithmeticError> {
        let mut coef = coefficient.clone();
        let mut current = self.clone();
        let mut result = self.identity();
        while !coef.is_zero() {
            if coef.is_odd() {
                result = result.checked_add(&current)?;
            }
            current = current.double()?;
            coef >>= 1usize;
        }
        Ok(result)
    }
}

fn satisfies_equation<T: Coordinate>(
    x: &T,
    y: &T,
    a: &T,
    b: &T,
) -> Result<bool, ArithmeticError> {
    let lhs = y.try_mul(y)?;
    let rhs = x
        .try_mul(x)?
        .try_mul(x)?
        .try_add(&a.try_mul(x)?)?
        .try_add(b)?;
    Ok(lhs == rhs)
}

impl<T: Coordinate + fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.coordinates() {
            Some((x, y)) => write!(f, "Point({}, {})", x, y),
            None => write!(f, "Point(infinity)"),
        }
    }
}
